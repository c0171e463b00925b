use crate::dtos::booking::{
    CommitResponse, ConfirmationResponse, DraftResponse, PaymentSummary, Step1Request,
    Step2Request, Step3Request, Step3ReviewResponse,
};
use crate::error::{ApiError, draft_reset};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use database::entities::room;
use database::services::booking::BookingService;
use database::services::notifier::NotificationService;
use log::warn;
use models::draft::{BookingDraft, ContactFields, StayFields};
use models::flags::PaymentMethod;
use models::{pricing, stay};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Step 1 of the wizard: dates and guests. Only presence is checked here;
/// date rules are enforced when the booking is committed.
#[utoipa::path(
    post,
    path = "/bookings/step1",
    request_body = Step1Request,
    responses(
        (status = 200, description = "Draft created", body = DraftResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Booking wizard"
)]
pub async fn step1(
    State(state): State<AppState>,
    Json(request): Json<Step1Request>,
) -> Result<Json<DraftResponse>, ApiError> {
    let draft = BookingDraft::begin(StayFields {
        room_slug: request.room_slug,
        arrival_date: request.arrival_date,
        departure_date: request.departure_date,
        number_of_adults: request.number_of_adults,
        number_of_children: request.number_of_children,
        special_requests: request.special_requests,
    });

    let draft_id = state.drafts.insert(draft);

    Ok(Json(DraftResponse { draft_id }))
}

/// Step 2 of the wizard: contact details, merged into the existing draft
#[utoipa::path(
    post,
    path = "/bookings/{draft_id}/step2",
    params(
        ("draft_id" = Uuid, Path, description = "Draft key issued by step 1")
    ),
    request_body = Step2Request,
    responses(
        (status = 200, description = "Draft updated", body = DraftResponse),
        (status = 404, description = "Draft not found or expired, restart from step 1"),
        (status = 422, description = "Missing required field"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Booking wizard"
)]
pub async fn step2(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
    Json(request): Json<Step2Request>,
) -> Result<Json<DraftResponse>, ApiError> {
    let draft = state.drafts.get(draft_id).ok_or_else(draft_reset)?;

    let draft = draft.with_contact(ContactFields {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        nationality_id: request.nationality_id,
    })?;

    if !state.drafts.update(draft_id, draft) {
        return Err(draft_reset());
    }

    Ok(Json(DraftResponse { draft_id }))
}

/// Step 3 display: re-computes the total for confirmation before payment
#[utoipa::path(
    get,
    path = "/bookings/{draft_id}/step3",
    params(
        ("draft_id" = Uuid, Path, description = "Draft key issued by step 1")
    ),
    responses(
        (status = 200, description = "Computed total for the drafted stay", body = Step3ReviewResponse),
        (status = 404, description = "Draft or room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Booking wizard"
)]
pub async fn step3_review(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<Step3ReviewResponse>, ApiError> {
    let draft = state.drafts.get(draft_id).ok_or_else(draft_reset)?;

    let room = room::Entity::find()
        .filter(room::Column::Slug.eq(draft.stay.room_slug.as_str()))
        .filter(room::Column::IsActive.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    let nights = stay::nights(draft.stay.arrival_date, draft.stay.departure_date);
    let total_price = pricing::stay_total(room.price, nights);

    Ok(Json(Step3ReviewResponse {
        room_name: room.name,
        room_slug: room.slug,
        arrival_date: draft.stay.arrival_date,
        departure_date: draft.stay.departure_date,
        nights,
        price_per_night: room.price,
        total_price,
    }))
}

/// Step 3 submit: commits the booking. On success the draft is cleared; on
/// failure it is retained so the caller does not re-enter earlier steps.
#[utoipa::path(
    post,
    path = "/bookings/{draft_id}/step3",
    params(
        ("draft_id" = Uuid, Path, description = "Draft key issued by step 1")
    ),
    request_body = Step3Request,
    responses(
        (status = 201, description = "Booking committed", body = CommitResponse),
        (status = 404, description = "Draft or room not found"),
        (status = 409, description = "No rooms available for the requested dates"),
        (status = 422, description = "Invalid dates or incomplete draft"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Booking wizard"
)]
pub async fn step3_commit(
    State(state): State<AppState>,
    Path(draft_id): Path<Uuid>,
    Json(request): Json<Step3Request>,
) -> Result<(StatusCode, Json<CommitResponse>), ApiError> {
    let draft = state.drafts.get(draft_id).ok_or_else(draft_reset)?;

    let payment_method = request
        .payment_method
        .parse::<PaymentMethod>()
        .map_err(ApiError::Validation)?;
    let completed = draft.finalize(payment_method)?;

    let today = Utc::now().date_naive();
    let committed = BookingService::commit(&state.db, &completed, today).await?;

    // The draft only goes away once the commit has succeeded
    state.drafts.remove(draft_id);

    // Best-effort: a failed confirmation mail never voids the booking
    let notification_sent = match NotificationService::send_booking_confirmation(
        &state.db,
        &committed.booking,
        state.mailer.as_ref(),
    )
    .await
    {
        Ok(notification) => notification.is_sent,
        Err(e) => {
            warn!(
                "could not record confirmation for {}: {e}",
                committed.booking.booking_number
            );
            false
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(CommitResponse {
            booking_number: committed.booking.booking_number,
            total_price: committed.booking.total_price,
            notification_sent,
        }),
    ))
}

/// Confirmation page: the booking plus its tax, service fee and grand total
#[utoipa::path(
    get,
    path = "/bookings/{booking_number}",
    params(
        ("booking_number" = String, Path, description = "Human-facing booking number")
    ),
    responses(
        (status = 200, description = "Booking found", body = ConfirmationResponse),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Booking wizard"
)]
pub async fn confirmation(
    State(state): State<AppState>,
    Path(booking_number): Path<String>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let Some((booking, payment)) =
        BookingService::find_by_number(&state.db, &booking_number).await?
    else {
        return Err(ApiError::NotFound("Booking not found".to_string()));
    };

    let quote = pricing::Quote::for_subtotal(booking.total_price);
    let nights = stay::nights(booking.arrival_date, booking.departure_date);

    Ok(Json(ConfirmationResponse {
        booking_number: booking.booking_number,
        first_name: booking.first_name,
        last_name: booking.last_name,
        arrival_date: booking.arrival_date,
        departure_date: booking.departure_date,
        nights,
        status: booking.status,
        payment: payment.map(|payment| PaymentSummary {
            amount: payment.amount,
            method: payment.method.to_string(),
            status: payment.status.to_string(),
        }),
        subtotal: quote.subtotal,
        tax: quote.tax,
        service_fee: quote.service_fee,
        grand_total: quote.grand_total,
    }))
}
