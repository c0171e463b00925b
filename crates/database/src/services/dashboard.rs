use crate::entities::{booking, contact, payment, review, room};
use chrono::{Datelike, NaiveDate};
use models::flags::PaymentStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;

/// Occupancy as a percentage of the active capacity pool
fn occupancy_rate(occupied: u64, total_capacity: i64) -> f64 {
    if total_capacity <= 0 {
        return 0.0;
    }

    occupied as f64 / total_capacity as f64 * 100.0
}

/// The aggregate figures shown on the staff dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub total_rooms: u64,
    pub active_bookings: u64,
    pub today_arrivals: u64,
    pub today_departures: u64,
    pub month_revenue: Decimal,
    pub pending_contacts: u64,
    pub latest_unapproved_reviews: Vec<review::Model>,
    pub occupancy_rate: f64,
}

pub struct DashboardService;

impl DashboardService {
    /// Recomputes every figure from current storage state; nothing here is
    /// cached or maintained incrementally
    pub async fn snapshot(
        db: &DatabaseConnection,
        today: NaiveDate,
    ) -> Result<DashboardSnapshot, DbErr> {
        let (total_rooms, active_bookings, today_arrivals, today_departures) = futures::try_join!(
            room::Entity::find().count(db),
            booking::Entity::find()
                .filter(booking::Column::DepartureDate.gte(today))
                .filter(booking::Column::Status.eq(booking::STATUS_CONFIRMED))
                .count(db),
            booking::Entity::find()
                .filter(booking::Column::ArrivalDate.eq(today))
                .count(db),
            booking::Entity::find()
                .filter(booking::Column::DepartureDate.eq(today))
                .count(db),
        )?;

        let first_of_month = today.with_day(1).unwrap_or(today);
        let month_revenue: Option<Decimal> = payment::Entity::find()
            .select_only()
            .column_as(payment::Column::Amount.sum(), "revenue")
            .filter(payment::Column::Status.eq(PaymentStatus::Completed))
            .filter(payment::Column::PaidAt.gte(first_of_month.and_time(chrono::NaiveTime::MIN)))
            .into_tuple::<Option<Decimal>>()
            .one(db)
            .await?
            .flatten();

        let pending_contacts = contact::Entity::find()
            .filter(contact::Column::IsReplied.eq(false))
            .count(db)
            .await?;

        let latest_unapproved_reviews = review::Entity::find()
            .filter(review::Column::IsApproved.eq(false))
            .order_by_desc(review::Column::CreatedAt)
            .limit(5)
            .all(db)
            .await?;

        // Σ total_rooms over active room types
        let total_capacity: Option<i64> = room::Entity::find()
            .select_only()
            .column_as(room::Column::TotalRooms.sum(), "capacity")
            .filter(room::Column::IsActive.eq(true))
            .into_tuple::<Option<i64>>()
            .one(db)
            .await?
            .flatten();

        // Confirmed bookings covering the current date
        let occupied = booking::Entity::find()
            .filter(booking::Column::ArrivalDate.lte(today))
            .filter(booking::Column::DepartureDate.gt(today))
            .filter(booking::Column::Status.eq(booking::STATUS_CONFIRMED))
            .count(db)
            .await?;

        Ok(DashboardSnapshot {
            total_rooms,
            active_bookings,
            today_arrivals,
            today_departures,
            month_revenue: month_revenue.unwrap_or(Decimal::ZERO),
            pending_contacts,
            latest_unapproved_reviews,
            occupancy_rate: occupancy_rate(occupied, total_capacity.unwrap_or(0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_rate() {
        assert_eq!(occupancy_rate(5, 10), 50.0);
        assert_eq!(occupancy_rate(10, 10), 100.0);
        assert_eq!(occupancy_rate(0, 10), 0.0);
    }

    #[test]
    fn test_occupancy_rate_with_no_active_capacity() {
        assert_eq!(occupancy_rate(3, 0), 0.0);
        assert_eq!(occupancy_rate(3, -1), 0.0);
    }
}
