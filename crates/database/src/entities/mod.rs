pub mod booking;
pub mod contact;
pub mod nationality;
pub mod notification;
pub mod payment;
pub mod review;
pub mod room;
pub mod room_amenity;
pub mod room_availability;
pub mod room_image;
pub mod service;
pub mod service_booking;
pub mod service_detail;
