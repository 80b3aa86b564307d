//! HTTP handlers for customers, restaurants and reservations.

pub mod customer;
pub mod reservation;
pub mod restaurant;
pub use customer::*;
pub use reservation::*;
pub use restaurant::*;
