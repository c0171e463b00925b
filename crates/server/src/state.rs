use crate::drafts::DraftStore;
use database::services::notifier::MailTransport;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub drafts: Arc<DraftStore>,
    pub mailer: Arc<dyn MailTransport>,
}
