use crate::entities::{booking, contact, review};
use chrono::Utc;
use models::flags::SubjectFlag;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// Why a guest submission was refused
#[derive(Debug)]
pub enum FeedbackError {
    /// Ratings run from 1 to 5
    RatingOutOfRange(i16),
    /// The referenced booking number does not exist
    BookingNotFound,
    Db(DbErr),
}

impl Display for FeedbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::RatingOutOfRange(rating) => {
                write!(f, "Rating must be between 1 and 5, got {rating}")
            }
            Self::BookingNotFound => write!(f, "Booking not found"),
            Self::Db(e) => write!(f, "{e}"),
        }
    }
}

impl From<DbErr> for FeedbackError {
    fn from(e: DbErr) -> Self {
        Self::Db(e)
    }
}

pub struct FeedbackService;

impl FeedbackService {
    /// Persists an inbound contact message; staff reply through the admin
    /// surface later
    pub async fn submit_contact(
        db: &DatabaseConnection,
        name: String,
        email: String,
        phone: String,
        subject: SubjectFlag,
        message: String,
    ) -> Result<contact::Model, DbErr> {
        contact::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            phone: Set(phone),
            subject: Set(subject),
            message: Set(message),
            is_replied: Set(false),
            replied_at: Set(None),
            reply_message: Set(String::new()),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await
    }

    /// Persists a guest review, unapproved until staff moderate it. The
    /// optional booking number ties the review to a stay.
    pub async fn submit_review(
        db: &DatabaseConnection,
        room_id: Uuid,
        booking_number: Option<String>,
        name: String,
        email: String,
        rating: i16,
        comment: String,
    ) -> Result<review::Model, FeedbackError> {
        if !(1..=5).contains(&rating) {
            return Err(FeedbackError::RatingOutOfRange(rating));
        }

        let booking_id = match booking_number {
            Some(number) => {
                let booking = booking::Entity::find()
                    .filter(booking::Column::BookingNumber.eq(number))
                    .one(db)
                    .await?
                    .ok_or(FeedbackError::BookingNotFound)?;
                Some(booking.id)
            }
            None => None,
        };

        let review = review::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_id: Set(room_id),
            booking_id: Set(booking_id),
            name: Set(name),
            email: Set(email),
            rating: Set(rating),
            comment: Set(comment),
            is_approved: Set(false),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?;

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_out_of_range_ratings_are_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for rating in [0, 6, -1] {
            let result = FeedbackService::submit_review(
                &db,
                Uuid::new_v4(),
                None,
                "Lina".to_string(),
                "lina@example.com".to_string(),
                rating,
                "Lovely stay".to_string(),
            )
            .await;

            assert!(matches!(result, Err(FeedbackError::RatingOutOfRange(r)) if r == rating));
        }

        assert!(db.into_transaction_log().is_empty());
    }
}
