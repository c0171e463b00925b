pub mod admin;
pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod feedback;
pub mod notifier;
pub mod room;
