use crate::entities::{booking, payment, review, room, room_amenity, room_availability, room_image};
use chrono::{NaiveDate, Utc};
use models::flags::{PaymentStatus, RoomFlag};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    sea_query::Expr,
};
use uuid::Uuid;

/// A room together with its gallery, amenities and approved guest reviews
pub type RoomDetail = (
    room::Model,
    Vec<room_image::Model>,
    Vec<room_amenity::Model>,
    Vec<review::Model>,
);

/// Staff-supplied fields for creating or updating a room
#[derive(Debug, Clone)]
pub struct RoomInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub total_rooms: i32,
    pub capacity: i32,
    pub bed_type: String,
    pub size: String,
    pub flag: RoomFlag,
    pub is_active: bool,
}

pub struct RoomService;

impl RoomService {
    /// Query rooms with pagination and filtering
    pub async fn get_rooms_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        flag: Option<RoomFlag>,
        active_only: bool,
        search: Option<String>,
    ) -> Result<(Vec<room::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(flag) = flag {
            condition = condition.add(room::Column::Flag.eq(flag));
        }

        if active_only {
            condition = condition.add(room::Column::IsActive.eq(true));
        }

        if let Some(search) = search {
            let search_condition = Condition::any()
                .add(room::Column::Name.like(format!("%{search}%")))
                .add(room::Column::Description.like(format!("%{search}%")));
            condition = condition.add(search_condition);
        }

        let query = room::Entity::find()
            .filter(condition)
            .order_by_desc(room::Column::CreatedAt);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let rooms = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((rooms, total_items))
    }

    /// Get a single room with its gallery, amenities and approved reviews
    pub async fn get_room_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<RoomDetail>, DbErr> {
        let room = match room::Entity::find()
            .filter(room::Column::Slug.eq(slug))
            .one(db)
            .await?
        {
            Some(room) => room,
            None => return Ok(None),
        };

        let images = room_image::Entity::find()
            .filter(room_image::Column::RoomId.eq(room.id))
            .order_by_asc(room_image::Column::Order)
            .all(db)
            .await?;

        let amenities = room_amenity::Entity::find()
            .filter(room_amenity::Column::RoomId.eq(room.id))
            .all(db)
            .await?;

        let reviews = review::Entity::find()
            .filter(review::Column::RoomId.eq(room.id))
            .filter(review::Column::IsApproved.eq(true))
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await?;

        Ok(Some((room, images, amenities, reviews)))
    }

    /// Read-time availability projection: the capacity pool minus bookings
    /// that have not yet departed and carry a completed payment. Recomputed
    /// on every access, never cached.
    pub async fn available_rooms_count(
        db: &DatabaseConnection,
        room: &room::Model,
        today: NaiveDate,
    ) -> Result<i64, DbErr> {
        let booked = booking::Entity::find()
            .filter(booking::Column::RoomId.eq(room.id))
            .filter(booking::Column::DepartureDate.gte(today))
            .join(JoinType::InnerJoin, booking::Relation::Payment.def())
            .filter(payment::Column::Status.eq(PaymentStatus::Completed))
            .count(db)
            .await?;

        Ok((room.total_rooms as i64 - booked as i64).max(0))
    }

    pub async fn create(db: &DatabaseConnection, input: RoomInput) -> Result<room::Model, DbErr> {
        let now = Utc::now().naive_utc();

        room::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(input.slug),
            description: Set(input.description),
            price: Set(input.price),
            image: Set(input.image),
            total_rooms: Set(input.total_rooms),
            capacity: Set(input.capacity),
            bed_type: Set(input.bed_type),
            size: Set(input.size),
            flag: Set(input.flag),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: RoomInput,
    ) -> Result<Option<room::Model>, DbErr> {
        let Some(existing) = room::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: room::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.slug = Set(input.slug);
        active.description = Set(input.description);
        active.price = Set(input.price);
        active.image = Set(input.image);
        active.total_rooms = Set(input.total_rooms);
        active.capacity = Set(input.capacity);
        active.bed_type = Set(input.bed_type);
        active.size = Set(input.size);
        active.flag = Set(input.flag);
        active.is_active = Set(input.is_active);
        active.updated_at = Set(Utc::now().naive_utc());

        active.update(db).await.map(Some)
    }

    /// Related images, amenities, availability rows and bookings go with the
    /// room through FK cascade
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<u64, DbErr> {
        let result = room::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Bulk flag change over a staff selection
    pub async fn set_flag(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
        flag: RoomFlag,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = room::Entity::update_many()
            .col_expr(room::Column::Flag, Expr::value(flag.as_code()))
            .col_expr(room::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(room::Column::Id.is_in(ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Per-date capacity/rate override; replaces an existing row for the
    /// same (room, date) pair
    pub async fn upsert_availability(
        db: &DatabaseConnection,
        room_id: Uuid,
        date: NaiveDate,
        available_count: i32,
        price_override: Option<Decimal>,
    ) -> Result<room_availability::Model, DbErr> {
        let existing = room_availability::Entity::find()
            .filter(room_availability::Column::RoomId.eq(room_id))
            .filter(room_availability::Column::Date.eq(date))
            .one(db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: room_availability::ActiveModel = row.into();
                active.available_count = Set(available_count);
                active.price_override = Set(price_override);
                active.update(db).await
            }
            None => {
                room_availability::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    room_id: Set(room_id),
                    date: Set(date),
                    available_count: Set(available_count),
                    price_override: Set(price_override),
                }
                .insert(db)
                .await
            }
        }
    }
}
