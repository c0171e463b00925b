use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RoomQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// One of: available, not_available, vip, most_requested
    pub flag: Option<String>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomSummaryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub capacity: i32,
    pub bed_type: String,
    pub size: String,
    pub flag: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedRoomsResponse {
    pub rooms: Vec<RoomSummaryResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomImageResponse {
    pub image: String,
    pub is_primary: bool,
    pub order: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomAmenityResponse {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomReviewResponse {
    pub name: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDetailResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub total_rooms: i32,
    pub capacity: i32,
    pub bed_type: String,
    pub size: String,
    pub flag: String,
    pub is_active: bool,
    /// Read-time projection, recomputed on every access
    pub available_rooms_count: i64,
    pub images: Vec<RoomImageResponse>,
    pub amenities: Vec<RoomAmenityResponse>,
    pub reviews: Vec<RoomReviewResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityOverrideResponse {
    pub date: NaiveDate,
    pub available_count: i32,
    pub price_override: Option<Decimal>,
}
