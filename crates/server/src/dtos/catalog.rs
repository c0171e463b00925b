use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDetailResponse {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub working_hours: String,
    pub details: Vec<ServiceDetailResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NationalityResponse {
    pub id: String,
    pub name: String,
    pub code: String,
}
