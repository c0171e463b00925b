use crate::routes::{admin, booking, contact, health, reviews, rooms, root, services};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        rooms::get_rooms,
        rooms::get_room_by_slug,
        services::get_services,
        services::get_nationalities,
        booking::step1,
        booking::step2,
        booking::step3_review,
        booking::step3_commit,
        booking::confirmation,
        contact::submit_contact,
        reviews::submit_review,
        admin::dashboard,
        admin::create_room,
        admin::update_room,
        admin::delete_room,
        admin::set_rooms_flag,
        admin::upsert_availability,
        admin::create_service,
        admin::update_service,
        admin::delete_service,
        admin::add_service_detail,
        admin::create_nationality,
        admin::delete_nationality,
        admin::list_bookings,
        admin::set_bookings_status,
        admin::attach_service,
        admin::list_payments,
        admin::set_payment_status,
        admin::list_reviews,
        admin::set_reviews_approval,
        admin::list_contacts,
        admin::reply_contact,
        admin::list_notifications,
        admin::reset_notifications
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Rooms", description = "Room catalog endpoints"),
        (name = "Services", description = "Service catalog endpoints"),
        (name = "Booking wizard", description = "Three-step booking flow and confirmation"),
        (name = "Contact", description = "Inbound contact messages"),
        (name = "Reviews", description = "Guest reviews"),
        (name = "Admin", description = "Staff back-office endpoints"),
    ),
    info(
        title = "Hotel Booking API",
        version = "1.0.0",
        description = "Room catalog, booking wizard and back-office API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
