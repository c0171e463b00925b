use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::services::booking::BookingError;
use database::services::feedback::FeedbackError;
use log::error;
use models::draft::DraftError;
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can surface to the caller. Database details never leak;
/// they are logged and reported as a generic failure.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Conflict(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Conflict(message) => (StatusCode::CONFLICT, message),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<DbErr> for ApiError {
    fn from(e: DbErr) -> Self {
        error!("database error: {e}");
        Self::Internal
    }
}

impl From<DraftError> for ApiError {
    fn from(e: DraftError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::Dates(inner) => Self::Validation(inner.to_string()),
            BookingError::RoomNotFound => Self::NotFound(e.to_string()),
            BookingError::NoAvailability => Self::Conflict(e.to_string()),
            BookingError::Db(inner) => inner.into(),
        }
    }
}

impl From<FeedbackError> for ApiError {
    fn from(e: FeedbackError) -> Self {
        match e {
            FeedbackError::RatingOutOfRange(_) => Self::Validation(e.to_string()),
            FeedbackError::BookingNotFound => Self::NotFound(e.to_string()),
            FeedbackError::Db(inner) => inner.into(),
        }
    }
}

/// An absent or expired wizard draft sends the caller back to step 1
pub fn draft_reset() -> ApiError {
    ApiError::NotFound("Booking draft not found or expired, start over from step 1".to_string())
}
