use crate::entities::{booking, contact, notification, payment, review, service, service_booking};
use chrono::{NaiveDateTime, Utc};
use models::flags::PaymentStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

/// `paid_at` is stamped exactly once, when a payment first reaches the
/// completed state; later transitions never clear or move it
fn paid_at_after_transition(
    current: &payment::Model,
    new_status: PaymentStatus,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    if new_status == PaymentStatus::Completed {
        current.paid_at.or(Some(now))
    } else {
        current.paid_at
    }
}

pub struct AdminService;

impl AdminService {
    pub async fn list_bookings_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        status: Option<String>,
    ) -> Result<(Vec<booking::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(status) = status {
            condition = condition.add(booking::Column::Status.eq(status));
        }

        let query = booking::Entity::find()
            .filter(condition)
            .order_by_desc(booking::Column::CreatedAt);

        let total_items = query.clone().count(db).await?;
        let bookings = query.paginate(db, per_page).fetch_page(page - 1).await?;

        Ok((bookings, total_items))
    }

    /// Bulk status change over a staff selection (confirm / cancel)
    pub async fn set_bookings_status(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
        status: &str,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(status))
            .col_expr(booking::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(booking::Column::Id.is_in(ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list_payments_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        status: Option<PaymentStatus>,
    ) -> Result<(Vec<payment::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(status) = status {
            condition = condition.add(payment::Column::Status.eq(status));
        }

        let query = payment::Entity::find()
            .filter(condition)
            .order_by_desc(payment::Column::CreatedAt);

        let total_items = query.clone().count(db).await?;
        let payments = query.paginate(db, per_page).fetch_page(page - 1).await?;

        Ok((payments, total_items))
    }

    pub async fn set_payment_status(
        db: &DatabaseConnection,
        id: Uuid,
        status: PaymentStatus,
        transaction_id: Option<String>,
    ) -> Result<Option<payment::Model>, DbErr> {
        let Some(existing) = payment::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let paid_at = paid_at_after_transition(&existing, status, Utc::now().naive_utc());

        let mut active: payment::ActiveModel = existing.into();
        active.status = Set(status);
        active.paid_at = Set(paid_at);
        if let Some(transaction_id) = transaction_id {
            active.transaction_id = Set(transaction_id);
        }

        active.update(db).await.map(Some)
    }

    pub async fn list_reviews(
        db: &DatabaseConnection,
        approved: Option<bool>,
    ) -> Result<Vec<review::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(approved) = approved {
            condition = condition.add(review::Column::IsApproved.eq(approved));
        }

        review::Entity::find()
            .filter(condition)
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
    }

    /// Bulk approval change over a staff selection
    pub async fn set_reviews_approval(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
        approved: bool,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = review::Entity::update_many()
            .col_expr(review::Column::IsApproved, Expr::value(approved))
            .filter(review::Column::Id.is_in(ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list_contacts(
        db: &DatabaseConnection,
        pending_only: bool,
    ) -> Result<Vec<contact::Model>, DbErr> {
        let mut condition = Condition::all();

        if pending_only {
            condition = condition.add(contact::Column::IsReplied.eq(false));
        }

        contact::Entity::find()
            .filter(condition)
            .order_by_desc(contact::Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn reply_contact(
        db: &DatabaseConnection,
        id: Uuid,
        reply_message: String,
    ) -> Result<Option<contact::Model>, DbErr> {
        let Some(existing) = contact::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: contact::ActiveModel = existing.into();
        active.is_replied = Set(true);
        active.replied_at = Set(Some(Utc::now().naive_utc()));
        active.reply_message = Set(reply_message);

        active.update(db).await.map(Some)
    }

    pub async fn list_notifications(
        db: &DatabaseConnection,
    ) -> Result<Vec<notification::Model>, DbErr> {
        notification::Entity::find()
            .order_by_desc(notification::Column::CreatedAt)
            .all(db)
            .await
    }

    /// Marks a staff selection of notifications as unsent so the next
    /// dispatch run picks them up again
    pub async fn reset_notifications(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = notification::Entity::update_many()
            .col_expr(notification::Column::IsSent, Expr::value(false))
            .col_expr(
                notification::Column::SentAt,
                Expr::value(sea_orm::Value::ChronoDateTime(None)),
            )
            .filter(notification::Column::Id.is_in(ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Attaches a service add-on to an existing booking, freezing the price
    /// at attach time
    pub async fn attach_service(
        db: &DatabaseConnection,
        booking_id: Uuid,
        service_id: Uuid,
        quantity: i32,
        scheduled_date: Option<NaiveDateTime>,
        notes: String,
    ) -> Result<Option<service_booking::Model>, DbErr> {
        let Some(service) = service::Entity::find_by_id(service_id).one(db).await? else {
            return Ok(None);
        };

        let price_at_booking = service.price * Decimal::from(quantity);

        service_booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(booking_id),
            service_id: Set(service_id),
            quantity: Set(quantity),
            booking_date: Set(Utc::now().naive_utc()),
            scheduled_date: Set(scheduled_date),
            notes: Set(notes),
            price_at_booking: Set(price_at_booking),
        }
        .insert(db)
        .await
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::flags::PaymentMethod;

    fn pending_payment(paid_at: Option<NaiveDateTime>) -> payment::Model {
        payment::Model {
            id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount: Decimal::from(200),
            method: PaymentMethod::Cash,
            status: PaymentStatus::Pending,
            transaction_id: String::new(),
            paid_at,
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_completing_a_payment_stamps_paid_at() {
        let payment = pending_payment(None);
        assert_eq!(
            paid_at_after_transition(&payment, PaymentStatus::Completed, now()),
            Some(now())
        );
    }

    #[test]
    fn test_existing_paid_at_is_never_moved() {
        let earlier = chrono::NaiveDate::from_ymd_opt(2025, 5, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let payment = pending_payment(Some(earlier));
        assert_eq!(
            paid_at_after_transition(&payment, PaymentStatus::Completed, now()),
            Some(earlier)
        );
    }

    #[test]
    fn test_non_completed_transitions_leave_paid_at_alone() {
        let payment = pending_payment(None);
        assert_eq!(
            paid_at_after_transition(&payment, PaymentStatus::Failed, now()),
            None
        );
        assert_eq!(
            paid_at_after_transition(&payment, PaymentStatus::Refunded, now()),
            None
        );
    }
}
