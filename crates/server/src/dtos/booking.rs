use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Step 1: the room and the stay
#[derive(Debug, Deserialize, ToSchema)]
pub struct Step1Request {
    pub room_slug: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(default = "default_adults")]
    pub number_of_adults: u32,
    #[serde(default)]
    pub number_of_children: u32,
    pub special_requests: Option<String>,
}

fn default_adults() -> u32 {
    1
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DraftResponse {
    /// Opaque key the caller carries through the remaining steps
    pub draft_id: Uuid,
}

/// Step 2: who is booking
#[derive(Debug, Deserialize, ToSchema)]
pub struct Step2Request {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality_id: Option<Uuid>,
}

/// Step 3 GET: the computed total shown for confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct Step3ReviewResponse {
    pub room_name: String,
    pub room_slug: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub nights: i64,
    pub price_per_night: Decimal,
    pub total_price: Decimal,
}

/// Step 3 POST: the chosen payment method triggers the commit
#[derive(Debug, Deserialize, ToSchema)]
pub struct Step3Request {
    /// One of: cash, credit_card, bank_transfer, online
    pub payment_method: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommitResponse {
    pub booking_number: String,
    pub total_price: Decimal,
    /// Best-effort only; a false value never voids the booking
    pub notification_sent: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentSummary {
    pub amount: Decimal,
    pub method: String,
    pub status: String,
}

/// The confirmation page payload, addressed by booking number
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfirmationResponse {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub nights: i64,
    pub status: String,
    pub payment: Option<PaymentSummary>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub service_fee: Decimal,
    pub grand_total: Decimal,
}
