use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Well-known values of the free-form `status` column
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub room_id: Uuid,
    /// Human-facing identifier, distinct from the row id
    #[sea_orm(unique)]
    pub booking_number: String,
    pub arrival_date: Date,
    pub departure_date: Date,
    pub number_of_adults: i32,
    pub number_of_children: i32,
    pub special_requests: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality_id: Option<Uuid>,
    pub status: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_price: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::nationality::Entity",
        from = "Column::NationalityId",
        to = "super::nationality::Column::Id",
        on_delete = "SetNull"
    )]
    Nationality,
    #[sea_orm(has_one = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::service_booking::Entity")]
    ServiceBookings,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
    #[sea_orm(has_one = "super::review::Entity")]
    Review,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::nationality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nationality.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::service_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceBookings.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
