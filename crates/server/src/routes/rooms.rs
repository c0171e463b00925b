use crate::dtos::room::{
    PaginatedRoomsResponse, PaginationMeta, RoomAmenityResponse, RoomDetailResponse,
    RoomImageResponse, RoomQueryParams, RoomReviewResponse, RoomSummaryResponse,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use database::services::room::RoomService;
use models::flags::RoomFlag;

/// Get paginated list of rooms
#[utoipa::path(
    get,
    path = "/rooms",
    params(RoomQueryParams),
    responses(
        (status = 200, description = "List of rooms retrieved successfully", body = PaginatedRoomsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomQueryParams>,
) -> Result<Json<PaginatedRoomsResponse>, ApiError> {
    let flag = params
        .flag
        .map(|f| f.parse::<RoomFlag>())
        .transpose()
        .map_err(ApiError::Validation)?;

    let (rooms, total_items) = RoomService::get_rooms_paginated(
        &state.db,
        params.page,
        params.per_page,
        flag,
        params.active.unwrap_or(false),
        params.search,
    )
    .await?;

    let room_responses = rooms
        .into_iter()
        .map(|room| RoomSummaryResponse {
            id: room.id.to_string(),
            name: room.name,
            slug: room.slug,
            description: room.description,
            price: room.price,
            image: room.image,
            capacity: room.capacity,
            bed_type: room.bed_type,
            size: room.size,
            flag: room.flag.to_string(),
            is_active: room.is_active,
        })
        .collect();

    let total_pages = total_items.div_ceil(params.per_page);
    let pagination = PaginationMeta {
        page: params.page,
        per_page: params.per_page,
        total_pages,
        total_items,
        has_next: params.page < total_pages,
        has_prev: params.page > 1,
    };

    Ok(Json(PaginatedRoomsResponse {
        rooms: room_responses,
        pagination,
    }))
}

/// Get a specific room by slug, with gallery, amenities, approved reviews
/// and the current availability projection
#[utoipa::path(
    get,
    path = "/rooms/{slug}",
    params(
        ("slug" = String, Path, description = "Room slug")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomDetailResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RoomDetailResponse>, ApiError> {
    let Some((room, images, amenities, reviews)) =
        RoomService::get_room_by_slug(&state.db, &slug).await?
    else {
        return Err(ApiError::NotFound("Room not found".to_string()));
    };

    let today = Utc::now().date_naive();
    let available_rooms_count = RoomService::available_rooms_count(&state.db, &room, today).await?;

    let image_responses = images
        .into_iter()
        .map(|image| RoomImageResponse {
            image: image.image,
            is_primary: image.is_primary,
            order: image.order,
        })
        .collect();

    let amenity_responses = amenities
        .into_iter()
        .map(|amenity| RoomAmenityResponse {
            name: amenity.name,
            icon: amenity.icon,
        })
        .collect();

    let review_responses = reviews
        .into_iter()
        .map(|review| RoomReviewResponse {
            name: review.name,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        })
        .collect();

    Ok(Json(RoomDetailResponse {
        id: room.id.to_string(),
        name: room.name,
        slug: room.slug,
        description: room.description,
        price: room.price,
        image: room.image,
        total_rooms: room.total_rooms,
        capacity: room.capacity,
        bed_type: room.bed_type,
        size: room.size,
        flag: room.flag.to_string(),
        is_active: room.is_active,
        available_rooms_count,
        images: image_responses,
        amenities: amenity_responses,
        reviews: review_responses,
    }))
}
