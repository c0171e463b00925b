use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on rooms for common filters
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_flag")
                    .table(Rooms::Table)
                    .col(Rooms::Flag)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_price")
                    .table(Rooms::Table)
                    .col(Rooms::Price)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_is_active")
                    .table(Rooms::Table)
                    .col(Rooms::IsActive)
                    .to_owned(),
            )
            .await?;

        // The overlap check filters bookings by room and date range
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_room_id")
                    .table(Bookings::Table)
                    .col(Bookings::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_dates")
                    .table(Bookings::Table)
                    .col(Bookings::ArrivalDate)
                    .col(Bookings::DepartureDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_email")
                    .table(Bookings::Table)
                    .col(Bookings::Email)
                    .to_owned(),
            )
            .await?;

        // One availability override per room per date
        manager
            .create_index(
                Index::create()
                    .name("ux_room_availability_room_date")
                    .table(RoomAvailability::Table)
                    .col(RoomAvailability::RoomId)
                    .col(RoomAvailability::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Amenity names are unique per room
        manager
            .create_index(
                Index::create()
                    .name("ux_room_amenities_room_name")
                    .table(RoomAmenities::Table)
                    .col(RoomAmenities::RoomId)
                    .col(RoomAmenities::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Detail names are unique per service
        manager
            .create_index(
                Index::create()
                    .name("ux_service_details_service_name")
                    .table(ServiceDetails::Table)
                    .col(ServiceDetails::ServiceId)
                    .col(ServiceDetails::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("ux_service_details_service_name")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_room_amenities_room_name")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_room_availability_room_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_email").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_dates").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_room_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_is_active").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_price").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_flag").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Flag,
    Price,
    IsActive,
}

#[derive(Iden)]
enum Bookings {
    Table,
    RoomId,
    ArrivalDate,
    DepartureDate,
    Email,
}

#[derive(Iden)]
enum RoomAvailability {
    Table,
    RoomId,
    Date,
}

#[derive(Iden)]
enum RoomAmenities {
    Table,
    RoomId,
    Name,
}

#[derive(Iden)]
enum ServiceDetails {
    Table,
    ServiceId,
    Name,
}
