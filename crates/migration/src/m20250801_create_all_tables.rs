use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Rooms::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Description).text().not_null())
                    .col(ColumnDef::new(Rooms::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Rooms::Image).string())
                    .col(
                        ColumnDef::new(Rooms::TotalRooms)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Rooms::Capacity)
                            .integer()
                            .not_null()
                            .default(2),
                    )
                    .col(ColumnDef::new(Rooms::BedType).string().not_null())
                    .col(ColumnDef::new(Rooms::Size).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::Flag)
                            .string()
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(Rooms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Rooms::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create room_images table
        manager
            .create_table(
                Table::create()
                    .table(RoomImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomImages::RoomId).uuid().not_null())
                    .col(ColumnDef::new(RoomImages::Image).string().not_null())
                    .col(
                        ColumnDef::new(RoomImages::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RoomImages::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_images-room_id")
                            .from(RoomImages::Table, RoomImages::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create room_amenities table
        manager
            .create_table(
                Table::create()
                    .table(RoomAmenities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAmenities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomAmenities::RoomId).uuid().not_null())
                    .col(ColumnDef::new(RoomAmenities::Name).string().not_null())
                    .col(
                        ColumnDef::new(RoomAmenities::Icon)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_amenities-room_id")
                            .from(RoomAmenities::Table, RoomAmenities::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create services table
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Services::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Image).string())
                    .col(
                        ColumnDef::new(Services::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Services::WorkingHours).string().not_null())
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Services::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create service_details table
        manager
            .create_table(
                Table::create()
                    .table(ServiceDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceDetails::ServiceId).uuid().not_null())
                    .col(ColumnDef::new(ServiceDetails::Name).string().not_null())
                    .col(
                        ColumnDef::new(ServiceDetails::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-service_details-service_id")
                            .from(ServiceDetails::Table, ServiceDetails::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create nationalities table
        manager
            .create_table(
                Table::create()
                    .table(Nationalities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Nationalities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Nationalities::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Nationalities::Code)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::RoomId).uuid().not_null())
                    .col(
                        ColumnDef::new(Bookings::BookingNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Bookings::ArrivalDate).date().not_null())
                    .col(ColumnDef::new(Bookings::DepartureDate).date().not_null())
                    .col(
                        ColumnDef::new(Bookings::NumberOfAdults)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Bookings::NumberOfChildren)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Bookings::SpecialRequests).text())
                    .col(ColumnDef::new(Bookings::FirstName).string().not_null())
                    .col(ColumnDef::new(Bookings::LastName).string().not_null())
                    .col(ColumnDef::new(Bookings::Email).string().not_null())
                    .col(ColumnDef::new(Bookings::Phone).string().not_null())
                    .col(ColumnDef::new(Bookings::NationalityId).uuid())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        ColumnDef::new(Bookings::TotalPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Bookings::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-room_id")
                            .from(Bookings::Table, Bookings::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-nationality_id")
                            .from(Bookings::Table, Bookings::NationalityId)
                            .to(Nationalities::Table, Nationalities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create payments table (one-to-one with bookings)
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::BookingId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(
                        ColumnDef::new(Payments::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Payments::TransactionId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Payments::PaidAt).timestamp())
                    .col(ColumnDef::new(Payments::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-booking_id")
                            .from(Payments::Table, Payments::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create service_bookings table
        manager
            .create_table(
                Table::create()
                    .table(ServiceBookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceBookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceBookings::BookingId).uuid().not_null())
                    .col(ColumnDef::new(ServiceBookings::ServiceId).uuid().not_null())
                    .col(
                        ColumnDef::new(ServiceBookings::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ServiceBookings::BookingDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceBookings::ScheduledDate).timestamp())
                    .col(ColumnDef::new(ServiceBookings::Notes).text().not_null())
                    .col(
                        ColumnDef::new(ServiceBookings::PriceAtBooking)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-service_bookings-booking_id")
                            .from(ServiceBookings::Table, ServiceBookings::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-service_bookings-service_id")
                            .from(ServiceBookings::Table, ServiceBookings::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create room_availability table
        manager
            .create_table(
                Table::create()
                    .table(RoomAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAvailability::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomAvailability::RoomId).uuid().not_null())
                    .col(ColumnDef::new(RoomAvailability::Date).date().not_null())
                    .col(
                        ColumnDef::new(RoomAvailability::AvailableCount)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomAvailability::PriceOverride).decimal_len(10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_availability-room_id")
                            .from(RoomAvailability::Table, RoomAvailability::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reviews table
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::BookingId).uuid().unique_key())
                    .col(ColumnDef::new(Reviews::Name).string().not_null())
                    .col(ColumnDef::new(Reviews::Email).string().not_null())
                    .col(
                        ColumnDef::new(Reviews::Rating)
                            .small_integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(Reviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reviews::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-room_id")
                            .from(Reviews::Table, Reviews::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-booking_id")
                            .from(Reviews::Table, Reviews::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create contacts table
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Phone).string().not_null())
                    .col(ColumnDef::new(Contacts::Subject).string().not_null())
                    .col(ColumnDef::new(Contacts::Message).text().not_null())
                    .col(
                        ColumnDef::new(Contacts::IsReplied)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Contacts::RepliedAt).timestamp())
                    .col(
                        ColumnDef::new(Contacts::ReplyMessage)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contacts::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create notifications table
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::BookingId).uuid())
                    .col(
                        ColumnDef::new(Notifications::RecipientEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Subject).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsSent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notifications::SentAt).timestamp())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notifications-booking_id")
                            .from(Notifications::Table, Notifications::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse dependency order
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomAvailability::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceBookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Nationalities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomAmenities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Price,
    Image,
    TotalRooms,
    Capacity,
    BedType,
    Size,
    Flag,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum RoomImages {
    Table,
    Id,
    RoomId,
    Image,
    IsPrimary,
    Order,
}

#[derive(Iden)]
enum RoomAmenities {
    Table,
    Id,
    RoomId,
    Name,
    Icon,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    Name,
    Description,
    Image,
    Price,
    WorkingHours,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum ServiceDetails {
    Table,
    Id,
    ServiceId,
    Name,
    Description,
}

#[derive(Iden)]
enum Nationalities {
    Table,
    Id,
    Name,
    Code,
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    RoomId,
    BookingNumber,
    ArrivalDate,
    DepartureDate,
    NumberOfAdults,
    NumberOfChildren,
    SpecialRequests,
    FirstName,
    LastName,
    Email,
    Phone,
    NationalityId,
    Status,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    BookingId,
    Amount,
    Method,
    Status,
    TransactionId,
    PaidAt,
    CreatedAt,
}

#[derive(Iden)]
enum ServiceBookings {
    Table,
    Id,
    BookingId,
    ServiceId,
    Quantity,
    BookingDate,
    ScheduledDate,
    Notes,
    PriceAtBooking,
}

#[derive(Iden)]
enum RoomAvailability {
    Table,
    Id,
    RoomId,
    Date,
    AvailableCount,
    PriceOverride,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    RoomId,
    BookingId,
    Name,
    Email,
    Rating,
    Comment,
    IsApproved,
    CreatedAt,
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    IsReplied,
    RepliedAt,
    ReplyMessage,
    CreatedAt,
}

#[derive(Iden)]
enum Notifications {
    Table,
    Id,
    BookingId,
    RecipientEmail,
    Subject,
    Message,
    IsSent,
    SentAt,
    CreatedAt,
}
