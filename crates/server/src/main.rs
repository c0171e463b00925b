use axum::Router;
use axum::routing::{delete, get, post, put};
use database::db::create_connection;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod drafts;
mod dtos;
mod error;
mod mailer;
mod routes;
mod state;
mod utils;

use crate::doc::ApiDoc;
use crate::drafts::DraftStore;
use crate::mailer::LogMailer;
use crate::state::AppState;
use crate::utils::shutdown::shutdown_signal;

/// Wizard drafts are dropped after half an hour of inactivity
const DRAFT_TTL: Duration = Duration::from_secs(30 * 60);

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/rooms", get(routes::rooms::get_rooms))
        .route("/rooms/{slug}", get(routes::rooms::get_room_by_slug))
        .route("/services", get(routes::services::get_services))
        .route("/nationalities", get(routes::services::get_nationalities))
        .route("/bookings/step1", post(routes::booking::step1))
        .route("/bookings/{draft_id}/step2", post(routes::booking::step2))
        .route(
            "/bookings/{draft_id}/step3",
            get(routes::booking::step3_review).post(routes::booking::step3_commit),
        )
        .route(
            "/bookings/{booking_number}",
            get(routes::booking::confirmation),
        )
        .route("/contact", post(routes::contact::submit_contact))
        .route("/reviews", post(routes::reviews::submit_review))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(routes::admin::dashboard))
        .route("/rooms", post(routes::admin::create_room))
        .route(
            "/rooms/{id}",
            put(routes::admin::update_room).delete(routes::admin::delete_room),
        )
        .route("/rooms/flag", post(routes::admin::set_rooms_flag))
        .route(
            "/rooms/{id}/availability",
            put(routes::admin::upsert_availability),
        )
        .route("/services", post(routes::admin::create_service))
        .route(
            "/services/{id}",
            put(routes::admin::update_service).delete(routes::admin::delete_service),
        )
        .route(
            "/services/{id}/details",
            post(routes::admin::add_service_detail),
        )
        .route("/nationalities", post(routes::admin::create_nationality))
        .route(
            "/nationalities/{id}",
            delete(routes::admin::delete_nationality),
        )
        .route("/bookings", get(routes::admin::list_bookings))
        .route("/bookings/status", post(routes::admin::set_bookings_status))
        .route(
            "/bookings/{id}/services",
            post(routes::admin::attach_service),
        )
        .route("/payments", get(routes::admin::list_payments))
        .route(
            "/payments/{id}/status",
            post(routes::admin::set_payment_status),
        )
        .route("/reviews", get(routes::admin::list_reviews))
        .route(
            "/reviews/approval",
            post(routes::admin::set_reviews_approval),
        )
        .route("/contacts", get(routes::admin::list_contacts))
        .route("/contacts/{id}/reply", post(routes::admin::reply_contact))
        .route("/notifications", get(routes::admin::list_notifications))
        .route(
            "/notifications/reset",
            post(routes::admin::reset_notifications),
        )
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");

    let state = AppState {
        db,
        drafts: Arc::new(DraftStore::new(DRAFT_TTL)),
        mailer: Arc::new(LogMailer),
    };

    let issuer_url =
        std::env::var("OIDC_ISSUER_URL").expect("OIDC_ISSUER_URL is not set");

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(issuer_url)
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    // Staff surface sits behind the OAuth2 resource-server layer; the
    // public site and the wizard stay open
    let app = Router::new()
        .merge(public_routes())
        .nest(
            "/admin",
            admin_routes()
                .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer())),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
