pub mod admin;
pub mod booking;
pub mod contact;
pub mod health;
pub mod reviews;
pub mod rooms;
pub mod root;
pub mod services;
