use crate::entities::{booking, notification};
use chrono::Utc;
use log::warn;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// Delivery failures, distinguished so each kind can be handled on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The recipient address is malformed
    InvalidRecipient(String),
    /// The relay refused or dropped the message
    Transport(String),
    /// Anything else the transport surfaces
    Other(String),
}

impl Display for MailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidRecipient(detail) => write!(f, "Invalid recipient: {detail}"),
            Self::Transport(detail) => write!(f, "Transport failure: {detail}"),
            Self::Other(detail) => write!(f, "Mail error: {detail}"),
        }
    }
}

/// Contract of the external mail relay. Implementations deliver a composed
/// message or report one of the three failure kinds; they must not block on
/// retries.
pub trait MailTransport: Send + Sync {
    fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Subject and body of the confirmation message for a committed booking
pub fn confirmation_message(booking: &booking::Model) -> (String, String) {
    let subject = format!("Booking confirmation - {}", booking.booking_number);
    let body = format!(
        "Dear {} {},\n\nYour booking {} has been confirmed.\n\
         Arrival: {}\nDeparture: {}\nTotal: {}\n\nWe look forward to welcoming you.",
        booking.first_name,
        booking.last_name,
        booking.booking_number,
        booking.arrival_date,
        booking.departure_date,
        booking.total_price,
    );

    (subject, body)
}

pub struct NotificationService;

impl NotificationService {
    /// Best-effort confirmation dispatch. The outcome of the delivery
    /// attempt is recorded on the persisted Notification row; a failed
    /// delivery is logged and reported through `is_sent = false`, never as
    /// an error. Runs strictly after the booking transaction has committed.
    pub async fn send_booking_confirmation(
        db: &DatabaseConnection,
        booking: &booking::Model,
        transport: &dyn MailTransport,
    ) -> Result<notification::Model, DbErr> {
        let (subject, body) = confirmation_message(booking);

        let sent = match transport.send(&booking.email, &subject, &body) {
            Ok(()) => true,
            Err(MailError::InvalidRecipient(detail)) => {
                warn!(
                    "confirmation for {} not sent, bad recipient {}: {detail}",
                    booking.booking_number, booking.email
                );
                false
            }
            Err(MailError::Transport(detail)) => {
                warn!(
                    "confirmation for {} not sent, transport failure: {detail}",
                    booking.booking_number
                );
                false
            }
            Err(MailError::Other(detail)) => {
                warn!(
                    "confirmation for {} not sent: {detail}",
                    booking.booking_number
                );
                false
            }
        };

        let now = Utc::now().naive_utc();

        notification::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(Some(booking.id)),
            recipient_email: Set(booking.email.clone()),
            subject: Set(subject),
            message: Set(body),
            is_sent: Set(sent),
            sent_at: Set(sent.then_some(now)),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    struct RejectingTransport(MailError);

    impl MailTransport for RejectingTransport {
        fn send(&self, _recipient: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
            Err(self.0.clone())
        }
    }

    struct AcceptingTransport;

    impl MailTransport for AcceptingTransport {
        fn send(&self, _recipient: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
            Ok(())
        }
    }

    fn confirmed_booking() -> booking::Model {
        booking::Model {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            booking_number: "BK2506123456".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            number_of_adults: 2,
            number_of_children: 0,
            special_requests: None,
            first_name: "Lina".to_string(),
            last_name: "Haddad".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+96170000000".to_string(),
            nationality_id: None,
            status: booking::STATUS_CONFIRMED.to_string(),
            total_price: Decimal::from(200),
            created_at: NaiveDate::from_ymd_opt(2025, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2025, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn notification_row(booking: &booking::Model, sent: bool) -> notification::Model {
        let (subject, message) = confirmation_message(booking);
        notification::Model {
            id: Uuid::new_v4(),
            booking_id: Some(booking.id),
            recipient_email: booking.email.clone(),
            subject,
            message,
            is_sent: sent,
            sent_at: None,
            created_at: booking.created_at,
        }
    }

    #[test]
    fn test_confirmation_message_names_the_booking() {
        let booking = confirmed_booking();
        let (subject, body) = confirmation_message(&booking);

        assert!(subject.contains("BK2506123456"));
        assert!(body.contains("Lina Haddad"));
        assert!(body.contains("2025-06-01"));
        assert!(body.contains("200"));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_not_an_error() {
        let booking = confirmed_booking();

        for error in [
            MailError::InvalidRecipient("no @".to_string()),
            MailError::Transport("connection refused".to_string()),
            MailError::Other("boom".to_string()),
        ] {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![notification_row(&booking, false)]])
                .into_connection();

            let result = NotificationService::send_booking_confirmation(
                &db,
                &booking,
                &RejectingTransport(error),
            )
            .await;

            // The row is persisted and the failure only shows as is_sent = false
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn test_successful_delivery_is_recorded() {
        let booking = confirmed_booking();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![notification_row(&booking, true)]])
            .into_connection();

        let result =
            NotificationService::send_booking_confirmation(&db, &booking, &AcceptingTransport)
                .await;

        assert!(result.is_ok());
    }
}
