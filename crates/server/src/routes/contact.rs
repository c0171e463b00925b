use crate::dtos::feedback::{ContactRequest, ContactResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use database::services::feedback::FeedbackService;
use models::flags::SubjectFlag;

/// Persists an inbound contact message for staff to answer
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = ContactResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let subject = request
        .subject
        .parse::<SubjectFlag>()
        .map_err(ApiError::Validation)?;

    let contact = FeedbackService::submit_contact(
        &state.db,
        request.name,
        request.email,
        request.phone,
        subject,
        request.message,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            id: contact.id.to_string(),
        }),
    ))
}
