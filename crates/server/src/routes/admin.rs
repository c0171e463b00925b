use crate::dtos::admin::{
    AdminBookingResponse, AdminContactResponse, AdminNotificationResponse, AdminPaymentResponse,
    AdminReviewResponse, AdminServiceBookingResponse, AttachServiceRequest,
    AvailabilityUpsertRequest, BookingQueryParams, BookingsStatusRequest, BulkActionResponse,
    ContactReplyRequest, DashboardResponse, NationalityRequest, NotificationsResetRequest,
    PaymentQueryParams, PaymentStatusRequest, ReviewsApprovalRequest, RoomUpsertRequest,
    RoomsFlagRequest, ServiceDetailRequest, ServiceUpsertRequest,
};
use crate::dtos::catalog::NationalityResponse;
use crate::dtos::room::{AvailabilityOverrideResponse, PaginationMeta, RoomSummaryResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use database::entities::{booking, contact, notification, payment, review};
use database::services::admin::AdminService;
use database::services::catalog::{CatalogService, ServiceInput};
use database::services::dashboard::DashboardService;
use database::services::room::{RoomInput, RoomService};
use models::flags::{PaymentStatus, RoomFlag};
use models::stay;
use rust_decimal::Decimal;
use uuid::Uuid;

fn room_input(request: RoomUpsertRequest) -> Result<RoomInput, ApiError> {
    if request.total_rooms < 1 {
        return Err(ApiError::Validation(
            "total_rooms must be at least 1".to_string(),
        ));
    }
    if request.price < Decimal::ZERO {
        return Err(ApiError::Validation("price must not be negative".to_string()));
    }

    let flag = request
        .flag
        .parse::<RoomFlag>()
        .map_err(ApiError::Validation)?;

    Ok(RoomInput {
        name: request.name,
        slug: request.slug,
        description: request.description,
        price: request.price,
        image: request.image,
        total_rooms: request.total_rooms,
        capacity: request.capacity,
        bed_type: request.bed_type,
        size: request.size,
        flag,
        is_active: request.is_active,
    })
}

fn service_input(request: ServiceUpsertRequest) -> Result<ServiceInput, ApiError> {
    if request.price < Decimal::ZERO {
        return Err(ApiError::Validation("price must not be negative".to_string()));
    }

    Ok(ServiceInput {
        name: request.name,
        description: request.description,
        image: request.image,
        price: request.price,
        working_hours: request.working_hours,
        is_active: request.is_active,
    })
}

fn room_summary(room: database::entities::room::Model) -> RoomSummaryResponse {
    RoomSummaryResponse {
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
    }
}

fn booking_summary(b: booking::Model) -> AdminBookingResponse {
    let nights = stay::nights(b.arrival_date, b.departure_date);

    AdminBookingResponse {
        id: b.id.to_string(),
        booking_number: b.booking_number,
        room_id: b.room_id.to_string(),
        first_name: b.first_name,
        last_name: b.last_name,
        email: b.email,
        phone: b.phone,
        arrival_date: b.arrival_date,
        departure_date: b.departure_date,
        nights,
        number_of_adults: b.number_of_adults,
        number_of_children: b.number_of_children,
        status: b.status,
        total_price: b.total_price,
        created_at: b.created_at,
    }
}

fn payment_summary(p: payment::Model) -> AdminPaymentResponse {
    AdminPaymentResponse {
        id: p.id.to_string(),
        booking_id: p.booking_id.to_string(),
        amount: p.amount,
        method: p.method.to_string(),
        status: p.status.to_string(),
        transaction_id: p.transaction_id,
        paid_at: p.paid_at,
        created_at: p.created_at,
    }
}

fn review_summary(r: review::Model) -> AdminReviewResponse {
    AdminReviewResponse {
        id: r.id.to_string(),
        room_id: r.room_id.to_string(),
        name: r.name,
        email: r.email,
        rating: r.rating,
        comment: r.comment,
        is_approved: r.is_approved,
        created_at: r.created_at,
    }
}

fn contact_summary(c: contact::Model) -> AdminContactResponse {
    AdminContactResponse {
        id: c.id.to_string(),
        name: c.name,
        email: c.email,
        phone: c.phone,
        subject: c.subject.to_string(),
        message: c.message,
        is_replied: c.is_replied,
        replied_at: c.replied_at,
        reply_message: c.reply_message,
        created_at: c.created_at,
    }
}

fn notification_summary(n: notification::Model) -> AdminNotificationResponse {
    AdminNotificationResponse {
        id: n.id.to_string(),
        booking_id: n.booking_id.map(|id| id.to_string()),
        recipient_email: n.recipient_email,
        subject: n.subject,
        is_sent: n.is_sent,
        sent_at: n.sent_at,
        created_at: n.created_at,
    }
}

fn pagination(page: u64, per_page: u64, total_items: u64) -> PaginationMeta {
    let total_pages = total_items.div_ceil(per_page);

    PaginationMeta {
        page,
        per_page,
        total_pages,
        total_items,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

/// Aggregate dashboard figures, recomputed on every call
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard snapshot", body = DashboardResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let snapshot = DashboardService::snapshot(&state.db, today).await?;

    Ok(Json(DashboardResponse {
        total_rooms: snapshot.total_rooms,
        active_bookings: snapshot.active_bookings,
        today_arrivals: snapshot.today_arrivals,
        today_departures: snapshot.today_departures,
        month_revenue: snapshot.month_revenue,
        pending_contacts: snapshot.pending_contacts,
        latest_unapproved_reviews: snapshot
            .latest_unapproved_reviews
            .into_iter()
            .map(review_summary)
            .collect(),
        occupancy_rate: snapshot.occupancy_rate,
    }))
}

// ---- rooms ----

#[utoipa::path(
    post,
    path = "/admin/rooms",
    request_body = RoomUpsertRequest,
    responses(
        (status = 201, description = "Room created", body = RoomSummaryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid room fields")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomUpsertRequest>,
) -> Result<(StatusCode, Json<RoomSummaryResponse>), ApiError> {
    let room = RoomService::create(&state.db, room_input(request)?).await?;
    Ok((StatusCode::CREATED, Json(room_summary(room))))
}

#[utoipa::path(
    put,
    path = "/admin/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = RoomUpsertRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomSummaryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Room not found"),
        (status = 422, description = "Invalid room fields")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RoomUpsertRequest>,
) -> Result<Json<RoomSummaryResponse>, ApiError> {
    let room = RoomService::update(&state.db, id, room_input(request)?)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(room_summary(room)))
}

#[utoipa::path(
    delete,
    path = "/admin/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Room not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if RoomService::delete(&state.db, id).await? == 0 {
        return Err(ApiError::NotFound("Room not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/rooms/flag",
    request_body = RoomsFlagRequest,
    responses(
        (status = 200, description = "Flags updated", body = BulkActionResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn set_rooms_flag(
    State(state): State<AppState>,
    Json(request): Json<RoomsFlagRequest>,
) -> Result<Json<BulkActionResponse>, ApiError> {
    let flag = request
        .flag
        .parse::<RoomFlag>()
        .map_err(ApiError::Validation)?;

    let affected = RoomService::set_flag(&state.db, request.ids, flag).await?;
    Ok(Json(BulkActionResponse { affected }))
}

#[utoipa::path(
    put,
    path = "/admin/rooms/{id}/availability",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = AvailabilityUpsertRequest,
    responses(
        (status = 200, description = "Availability override stored", body = AvailabilityOverrideResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn upsert_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AvailabilityUpsertRequest>,
) -> Result<Json<AvailabilityOverrideResponse>, ApiError> {
    let row = RoomService::upsert_availability(
        &state.db,
        id,
        request.date,
        request.available_count,
        request.price_override,
    )
    .await?;

    Ok(Json(AvailabilityOverrideResponse {
        date: row.date,
        available_count: row.available_count,
        price_override: row.price_override,
    }))
}

// ---- services and nationalities ----

#[utoipa::path(
    post,
    path = "/admin/services",
    request_body = ServiceUpsertRequest,
    responses(
        (status = 201, description = "Service created"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid service fields")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<ServiceUpsertRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::create_service(&state.db, service_input(request)?).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = ServiceUpsertRequest,
    responses(
        (status = 200, description = "Service updated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ServiceUpsertRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::update_service(&state.db, id, service_input(request)?)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if CatalogService::delete_service(&state.db, id).await? == 0 {
        return Err(ApiError::NotFound("Service not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/services/{id}/details",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = ServiceDetailRequest,
    responses(
        (status = 201, description = "Detail added"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn add_service_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ServiceDetailRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::add_service_detail(&state.db, id, request.name, request.description).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    post,
    path = "/admin/nationalities",
    request_body = NationalityRequest,
    responses(
        (status = 201, description = "Nationality created", body = NationalityResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn create_nationality(
    State(state): State<AppState>,
    Json(request): Json<NationalityRequest>,
) -> Result<(StatusCode, Json<NationalityResponse>), ApiError> {
    let nationality =
        CatalogService::create_nationality(&state.db, request.name, request.code).await?;

    Ok((
        StatusCode::CREATED,
        Json(NationalityResponse {
            id: nationality.id.to_string(),
            name: nationality.name,
            code: nationality.code,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/admin/nationalities/{id}",
    params(("id" = Uuid, Path, description = "Nationality ID")),
    responses(
        (status = 204, description = "Nationality deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Nationality not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn delete_nationality(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if CatalogService::delete_nationality(&state.db, id).await? == 0 {
        return Err(ApiError::NotFound("Nationality not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---- bookings ----

#[utoipa::path(
    get,
    path = "/admin/bookings",
    params(BookingQueryParams),
    responses(
        (status = 200, description = "Paginated bookings"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingQueryParams>,
) -> Result<Json<crate::dtos::admin::PaginatedBookingsResponse>, ApiError> {
    let (bookings, total_items) =
        AdminService::list_bookings_paginated(&state.db, params.page, params.per_page, params.status)
            .await?;

    Ok(Json(crate::dtos::admin::PaginatedBookingsResponse {
        bookings: bookings.into_iter().map(booking_summary).collect(),
        pagination: pagination(params.page, params.per_page, total_items),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/bookings/status",
    request_body = BookingsStatusRequest,
    responses(
        (status = 200, description = "Statuses updated", body = BulkActionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unknown status")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn set_bookings_status(
    State(state): State<AppState>,
    Json(request): Json<BookingsStatusRequest>,
) -> Result<Json<BulkActionResponse>, ApiError> {
    if request.status != booking::STATUS_CONFIRMED && request.status != booking::STATUS_CANCELLED {
        return Err(ApiError::Validation(format!(
            "Unknown booking status: {}",
            request.status
        )));
    }

    let affected =
        AdminService::set_bookings_status(&state.db, request.ids, &request.status).await?;

    Ok(Json(BulkActionResponse { affected }))
}

#[utoipa::path(
    post,
    path = "/admin/bookings/{id}/services",
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = AttachServiceRequest,
    responses(
        (status = 201, description = "Service attached", body = AdminServiceBookingResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found"),
        (status = 422, description = "Invalid quantity")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn attach_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachServiceRequest>,
) -> Result<(StatusCode, Json<AdminServiceBookingResponse>), ApiError> {
    if request.quantity < 1 {
        return Err(ApiError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }

    let row = AdminService::attach_service(
        &state.db,
        id,
        request.service_id,
        request.quantity,
        request.scheduled_date,
        request.notes,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AdminServiceBookingResponse {
            id: row.id.to_string(),
            booking_id: row.booking_id.to_string(),
            service_id: row.service_id.to_string(),
            quantity: row.quantity,
            price_at_booking: row.price_at_booking,
            scheduled_date: row.scheduled_date,
        }),
    ))
}

// ---- payments ----

#[utoipa::path(
    get,
    path = "/admin/payments",
    params(PaymentQueryParams),
    responses(
        (status = 200, description = "Paginated payments"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<PaymentQueryParams>,
) -> Result<Json<crate::dtos::admin::PaginatedPaymentsResponse>, ApiError> {
    let status = params
        .status
        .map(|s| s.parse::<PaymentStatus>())
        .transpose()
        .map_err(ApiError::Validation)?;

    let (payments, total_items) =
        AdminService::list_payments_paginated(&state.db, params.page, params.per_page, status)
            .await?;

    Ok(Json(crate::dtos::admin::PaginatedPaymentsResponse {
        payments: payments.into_iter().map(payment_summary).collect(),
        pagination: pagination(params.page, params.per_page, total_items),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/payments/{id}/status",
    params(("id" = Uuid, Path, description = "Payment ID")),
    request_body = PaymentStatusRequest,
    responses(
        (status = 200, description = "Payment updated", body = AdminPaymentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Payment not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn set_payment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PaymentStatusRequest>,
) -> Result<Json<AdminPaymentResponse>, ApiError> {
    let status = request
        .status
        .parse::<PaymentStatus>()
        .map_err(ApiError::Validation)?;

    let payment =
        AdminService::set_payment_status(&state.db, id, status, request.transaction_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment_summary(payment)))
}

// ---- moderation ----

#[utoipa::path(
    get,
    path = "/admin/reviews",
    params(
        ("approved" = Option<bool>, Query, description = "Filter by approval state")
    ),
    responses(
        (status = 200, description = "Reviews", body = [AdminReviewResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<Json<Vec<AdminReviewResponse>>, ApiError> {
    let approved = params.get("approved").and_then(|v| v.parse().ok());
    let reviews = AdminService::list_reviews(&state.db, approved).await?;

    Ok(Json(reviews.into_iter().map(review_summary).collect()))
}

#[utoipa::path(
    post,
    path = "/admin/reviews/approval",
    request_body = ReviewsApprovalRequest,
    responses(
        (status = 200, description = "Approval flags updated", body = BulkActionResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn set_reviews_approval(
    State(state): State<AppState>,
    Json(request): Json<ReviewsApprovalRequest>,
) -> Result<Json<BulkActionResponse>, ApiError> {
    let affected =
        AdminService::set_reviews_approval(&state.db, request.ids, request.approved).await?;

    Ok(Json(BulkActionResponse { affected }))
}

#[utoipa::path(
    get,
    path = "/admin/contacts",
    params(
        ("pending" = Option<bool>, Query, description = "Only messages awaiting a reply")
    ),
    responses(
        (status = 200, description = "Contact messages", body = [AdminContactResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<Json<Vec<AdminContactResponse>>, ApiError> {
    let pending_only = params
        .get("pending")
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    let contacts = AdminService::list_contacts(&state.db, pending_only).await?;

    Ok(Json(contacts.into_iter().map(contact_summary).collect()))
}

#[utoipa::path(
    post,
    path = "/admin/contacts/{id}/reply",
    params(("id" = Uuid, Path, description = "Contact ID")),
    request_body = ContactReplyRequest,
    responses(
        (status = 200, description = "Reply recorded", body = AdminContactResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contact not found")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn reply_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ContactReplyRequest>,
) -> Result<Json<AdminContactResponse>, ApiError> {
    let contact = AdminService::reply_contact(&state.db, id, request.reply_message)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

    Ok(Json(contact_summary(contact)))
}

#[utoipa::path(
    get,
    path = "/admin/notifications",
    responses(
        (status = 200, description = "Notifications", body = [AdminNotificationResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminNotificationResponse>>, ApiError> {
    let notifications = AdminService::list_notifications(&state.db).await?;

    Ok(Json(
        notifications
            .into_iter()
            .map(notification_summary)
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/admin/notifications/reset",
    request_body = NotificationsResetRequest,
    responses(
        (status = 200, description = "Notifications queued for resend", body = BulkActionResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "Admin"
)]
pub async fn reset_notifications(
    State(state): State<AppState>,
    Json(request): Json<NotificationsResetRequest>,
) -> Result<Json<BulkActionResponse>, ApiError> {
    let affected = AdminService::reset_notifications(&state.db, request.ids).await?;
    Ok(Json(BulkActionResponse { affected }))
}
