use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

// ---- reference data ----

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomUpsertRequest {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub total_rooms: i32,
    pub capacity: i32,
    pub bed_type: String,
    pub size: String,
    /// One of: available, not_available, vip, most_requested
    pub flag: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomsFlagRequest {
    pub ids: Vec<Uuid>,
    /// One of: available, not_available, vip, most_requested
    pub flag: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AvailabilityUpsertRequest {
    pub date: NaiveDate,
    pub available_count: i32,
    pub price_override: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceUpsertRequest {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub working_hours: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceDetailRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NationalityRequest {
    pub name: String,
    #[serde(default)]
    pub code: String,
}

// ---- bookings and payments ----

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct BookingQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingsStatusRequest {
    pub ids: Vec<Uuid>,
    /// "confirmed" or "cancelled"
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachServiceRequest {
    pub service_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub scheduled_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: String,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PaymentQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// One of: pending, completed, failed, refunded
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentStatusRequest {
    /// One of: pending, completed, failed, refunded
    pub status: String,
    pub transaction_id: Option<String>,
}

// ---- moderation ----

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewsApprovalRequest {
    pub ids: Vec<Uuid>,
    pub approved: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactReplyRequest {
    pub reply_message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotificationsResetRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkActionResponse {
    pub affected: u64,
}

// ---- listings ----

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminBookingResponse {
    pub id: String,
    pub booking_number: String,
    pub room_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub nights: i64,
    pub number_of_adults: i32,
    pub number_of_children: i32,
    pub status: String,
    pub total_price: Decimal,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedBookingsResponse {
    pub bookings: Vec<AdminBookingResponse>,
    pub pagination: super::room::PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminPaymentResponse {
    pub id: String,
    pub booking_id: String,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub transaction_id: String,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedPaymentsResponse {
    pub payments: Vec<AdminPaymentResponse>,
    pub pagination: super::room::PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminReviewResponse {
    pub id: String,
    pub room_id: String,
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_replied: bool,
    pub replied_at: Option<NaiveDateTime>,
    pub reply_message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminNotificationResponse {
    pub id: String,
    pub booking_id: Option<String>,
    pub recipient_email: String,
    pub subject: String,
    pub is_sent: bool,
    pub sent_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminServiceBookingResponse {
    pub id: String,
    pub booking_id: String,
    pub service_id: String,
    pub quantity: i32,
    pub price_at_booking: Decimal,
    pub scheduled_date: Option<NaiveDateTime>,
}

// ---- dashboard ----

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_rooms: u64,
    pub active_bookings: u64,
    pub today_arrivals: u64,
    pub today_departures: u64,
    pub month_revenue: Decimal,
    pub pending_contacts: u64,
    pub latest_unapproved_reviews: Vec<AdminReviewResponse>,
    /// Confirmed bookings covering today over the active capacity pool
    pub occupancy_rate: f64,
}
