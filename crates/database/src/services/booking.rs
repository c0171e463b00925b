use crate::entities::{booking, payment, room};
use chrono::{NaiveDate, Utc};
use models::{
    booking_number,
    draft::CompletedDraft,
    flags::PaymentStatus,
    pricing,
    stay::{self, StayDatesError},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// Why a booking commit was refused
#[derive(Debug)]
pub enum BookingError {
    /// Bad date pair, rejected before anything touches storage
    Dates(StayDatesError),
    /// The room slug does not exist or the room is inactive
    RoomNotFound,
    /// The room's capacity pool is exhausted for the requested date range
    NoAvailability,
    Db(DbErr),
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Dates(e) => write!(f, "{e}"),
            Self::RoomNotFound => write!(f, "Room not found"),
            Self::NoAvailability => write!(f, "No rooms available for the requested dates"),
            Self::Db(e) => write!(f, "{e}"),
        }
    }
}

impl From<StayDatesError> for BookingError {
    fn from(e: StayDatesError) -> Self {
        Self::Dates(e)
    }
}

impl From<DbErr> for BookingError {
    fn from(e: DbErr) -> Self {
        Self::Db(e)
    }
}

/// Result of a successful commit: the two rows written by the transaction
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedBooking {
    pub booking: booking::Model,
    pub payment: payment::Model,
}

pub struct BookingService;

impl BookingService {
    /// Atomically materializes a Booking + Payment pair from a completed
    /// wizard draft. The capacity check and both inserts run inside one
    /// transaction; any failure rolls the whole commit back. `today` is
    /// passed in so callers (and tests) control the clock.
    ///
    /// The overlap check is advisory under concurrent commits: it runs in
    /// the same transaction but takes no row lock, so two simultaneous
    /// commits for the last unit can both pass it.
    pub async fn commit(
        db: &DatabaseConnection,
        draft: &CompletedDraft,
        today: NaiveDate,
    ) -> Result<CommittedBooking, BookingError> {
        let arrival = draft.stay.arrival_date;
        let departure = draft.stay.departure_date;

        stay::validate_stay(arrival, departure, today)?;

        let txn = db.begin().await?;

        let room = room::Entity::find()
            .filter(room::Column::Slug.eq(draft.stay.room_slug.as_str()))
            .filter(room::Column::IsActive.eq(true))
            .one(&txn)
            .await?
            .ok_or(BookingError::RoomNotFound)?;

        let overlapping = Self::overlapping_confirmed_count(&txn, room.id, arrival, departure).await?;
        if overlapping >= room.total_rooms as u64 {
            return Err(BookingError::NoAvailability);
        }

        let nights = stay::nights(arrival, departure);
        let total_price = pricing::stay_total(room.price, nights);
        let now = Utc::now().naive_utc();

        let booking = booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_id: Set(room.id),
            booking_number: Set(booking_number::generate(today)),
            arrival_date: Set(arrival),
            departure_date: Set(departure),
            number_of_adults: Set(draft.stay.number_of_adults as i32),
            number_of_children: Set(draft.stay.number_of_children as i32),
            special_requests: Set(draft.stay.special_requests.clone()),
            first_name: Set(draft.contact.first_name.clone()),
            last_name: Set(draft.contact.last_name.clone()),
            email: Set(draft.contact.email.clone()),
            phone: Set(draft.contact.phone.clone()),
            nationality_id: Set(draft.contact.nationality_id),
            status: Set(booking::STATUS_CONFIRMED.to_string()),
            total_price: Set(total_price),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let payment = payment::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(booking.id),
            amount: Set(total_price),
            method: Set(draft.payment_method),
            status: Set(PaymentStatus::Pending),
            transaction_id: Set(String::new()),
            paid_at: Set(None),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(CommittedBooking { booking, payment })
    }

    /// Counts confirmed bookings for the room whose half-open stay interval
    /// overlaps `[arrival, departure)`
    pub async fn overlapping_confirmed_count<C: ConnectionTrait>(
        conn: &C,
        room_id: Uuid,
        arrival: NaiveDate,
        departure: NaiveDate,
    ) -> Result<u64, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::RoomId.eq(room_id))
            .filter(booking::Column::Status.eq(booking::STATUS_CONFIRMED))
            .filter(booking::Column::ArrivalDate.lt(departure))
            .filter(booking::Column::DepartureDate.gt(arrival))
            .count(conn)
            .await
    }

    /// Looks up a booking and its payment by the human-facing booking number
    pub async fn find_by_number(
        db: &DatabaseConnection,
        number: &str,
    ) -> Result<Option<(booking::Model, Option<payment::Model>)>, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::BookingNumber.eq(number))
            .find_also_related(payment::Entity)
            .one(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use models::draft::{BookingDraft, ContactFields, StayFields};
    use models::flags::PaymentMethod;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn sea_view_room(id: Uuid, total_rooms: i32) -> room::Model {
        room::Model {
            id,
            name: "Sea View Double".to_string(),
            slug: "sea-view-double".to_string(),
            description: "Double room facing the sea".to_string(),
            price: Decimal::from(100),
            image: None,
            total_rooms,
            capacity: 2,
            bed_type: "Double".to_string(),
            size: "30 m²".to_string(),
            flag: models::flags::RoomFlag::Available,
            is_active: true,
            created_at: datetime(2025, 1, 1),
            updated_at: datetime(2025, 1, 1),
        }
    }

    fn completed_draft() -> CompletedDraft {
        BookingDraft::begin(StayFields {
            room_slug: "sea-view-double".to_string(),
            arrival_date: date(2025, 6, 1),
            departure_date: date(2025, 6, 3),
            number_of_adults: 2,
            number_of_children: 0,
            special_requests: None,
        })
        .with_contact(ContactFields {
            first_name: "Lina".to_string(),
            last_name: "Haddad".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+96170000000".to_string(),
            nationality_id: None,
        })
        .unwrap()
        .finalize(PaymentMethod::CreditCard)
        .unwrap()
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(n))])
    }

    fn committed_rows(
        room_id: Uuid,
        booking_id: Uuid,
        total: Decimal,
    ) -> (booking::Model, payment::Model) {
        let booking = booking::Model {
            id: booking_id,
            room_id,
            booking_number: "BK2506123456".to_string(),
            arrival_date: date(2025, 6, 1),
            departure_date: date(2025, 6, 3),
            number_of_adults: 2,
            number_of_children: 0,
            special_requests: None,
            first_name: "Lina".to_string(),
            last_name: "Haddad".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+96170000000".to_string(),
            nationality_id: None,
            status: booking::STATUS_CONFIRMED.to_string(),
            total_price: total,
            created_at: datetime(2025, 5, 1),
            updated_at: datetime(2025, 5, 1),
        };
        let payment = payment::Model {
            id: Uuid::new_v4(),
            booking_id,
            amount: total,
            method: PaymentMethod::CreditCard,
            status: PaymentStatus::Pending,
            transaction_id: String::new(),
            paid_at: None,
            created_at: datetime(2025, 5, 1),
        };
        (booking, payment)
    }

    #[tokio::test]
    async fn test_commit_creates_booking_and_pending_payment() {
        let room_id = Uuid::new_v4();
        let booking_id = Uuid::new_v4();
        let (booking_row, payment_row) =
            committed_rows(room_id, booking_id, Decimal::from(200));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sea_view_room(room_id, 1)]])
            .append_query_results([vec![count_row(0)]])
            .append_query_results([vec![booking_row]])
            .append_query_results([vec![payment_row]])
            .into_connection();

        let committed = BookingService::commit(&db, &completed_draft(), date(2025, 5, 1))
            .await
            .unwrap();

        // nights = 2, price = 100/night
        assert_eq!(committed.payment.amount, Decimal::from(200));
        assert_eq!(committed.payment.status, PaymentStatus::Pending);
        assert_eq!(committed.payment.booking_id, committed.booking.id);
        assert_eq!(committed.booking.status, booking::STATUS_CONFIRMED);
    }

    #[tokio::test]
    async fn test_commit_rejects_exhausted_capacity() {
        let room_id = Uuid::new_v4();

        // total_rooms = 1 and one overlapping confirmed booking already exists
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sea_view_room(room_id, 1)]])
            .append_query_results([vec![count_row(1)]])
            .into_connection();

        let result = BookingService::commit(&db, &completed_draft(), date(2025, 5, 1)).await;
        assert!(matches!(result, Err(BookingError::NoAvailability)));
    }

    #[tokio::test]
    async fn test_commit_allows_last_remaining_unit() {
        let room_id = Uuid::new_v4();
        let booking_id = Uuid::new_v4();
        let (booking_row, payment_row) =
            committed_rows(room_id, booking_id, Decimal::from(200));

        // 2 overlapping confirmed bookings against a pool of 3
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sea_view_room(room_id, 3)]])
            .append_query_results([vec![count_row(2)]])
            .append_query_results([vec![booking_row]])
            .append_query_results([vec![payment_row]])
            .into_connection();

        assert!(
            BookingService::commit(&db, &completed_draft(), date(2025, 5, 1))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_commit_rejects_bad_dates_before_persistence() {
        let mut draft = completed_draft();
        draft.stay.departure_date = draft.stay.arrival_date;

        // No mock results appended: the commit must fail before any query runs
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = BookingService::commit(&db, &draft, date(2025, 5, 1)).await;
        assert!(matches!(
            result,
            Err(BookingError::Dates(StayDatesError::DepartureNotAfterArrival))
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_commit_rejects_past_arrival_before_persistence() {
        let draft = completed_draft();

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        // Clock set after the requested arrival date
        let result = BookingService::commit(&db, &draft, date(2025, 7, 1)).await;
        assert!(matches!(
            result,
            Err(BookingError::Dates(StayDatesError::ArrivalInPast))
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    // The capacity check is advisory: without row locking, two commits that
    // both read the count before either insert lands will both pass it. This
    // documents the gap; it does not assert the race cannot happen.
    #[tokio::test]
    async fn test_overlap_check_is_advisory_under_concurrent_commits() {
        let room_id = Uuid::new_v4();
        let (first_booking, first_payment) =
            committed_rows(room_id, Uuid::new_v4(), Decimal::from(200));
        let (second_booking, second_payment) =
            committed_rows(room_id, Uuid::new_v4(), Decimal::from(200));

        // Both commits for the last unit observe a pre-insert count of 0
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sea_view_room(room_id, 1)]])
            .append_query_results([vec![count_row(0)]])
            .append_query_results([vec![first_booking]])
            .append_query_results([vec![first_payment]])
            .append_query_results([vec![sea_view_room(room_id, 1)]])
            .append_query_results([vec![count_row(0)]])
            .append_query_results([vec![second_booking]])
            .append_query_results([vec![second_payment]])
            .into_connection();

        let today = date(2025, 5, 1);
        assert!(BookingService::commit(&db, &completed_draft(), today).await.is_ok());
        assert!(BookingService::commit(&db, &completed_draft(), today).await.is_ok());
    }

    #[tokio::test]
    async fn test_commit_rejects_unknown_room() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<room::Model>::new()])
            .into_connection();

        let result = BookingService::commit(&db, &completed_draft(), date(2025, 5, 1)).await;
        assert!(matches!(result, Err(BookingError::RoomNotFound)));
    }
}
