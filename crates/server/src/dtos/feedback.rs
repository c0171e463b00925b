use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// One of: booking_inquiry, sports_club, complaint, suggestion, other
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub room_slug: String,
    /// Optionally ties the review to a stay
    pub booking_number: Option<String>,
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewSubmitResponse {
    pub id: String,
    /// Reviews stay hidden until staff approve them
    pub is_approved: bool,
}
