use crate::dtos::feedback::{ReviewRequest, ReviewSubmitResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use database::entities::room;
use database::services::feedback::FeedbackService;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Persists a guest review; it stays hidden until staff approve it
#[utoipa::path(
    post,
    path = "/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review stored for moderation", body = ReviewSubmitResponse),
        (status = 404, description = "Room or booking not found"),
        (status = 422, description = "Rating out of range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<ReviewSubmitResponse>), ApiError> {
    let room = room::Entity::find()
        .filter(room::Column::Slug.eq(request.room_slug.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    let review = FeedbackService::submit_review(
        &state.db,
        room.id,
        request.booking_number,
        request.name,
        request.email,
        request.rating,
        request.comment,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewSubmitResponse {
            id: review.id.to_string(),
            is_approved: review.is_approved,
        }),
    ))
}
