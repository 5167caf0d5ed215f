//! Reservation bookkeeping for Innkeep.
//!
//! A fixed set of rooms, their availability, and the bookings bound to
//! them. This crate performs no I/O; presentation layers read state
//! through [`RoomManager`] and change it only by reserving or checking out.
//!
//! # Key types
//!
//! - [`RoomManager`] — owns the rooms, answers availability queries,
//!   performs reservations and checkouts
//! - [`Room`] — one bookable unit with its current [`Reservation`]
//! - [`InventoryConfig`] — which rooms exist (defaults to the nine-room seed)
//! - [`RoomError`] — why a reservation or inventory was rejected

mod config;
mod error;
mod manager;
mod room;
pub mod stay;

pub use config::{InventoryConfig, RoomSpec};
pub use error::RoomError;
pub use manager::RoomManager;
pub use room::{Reservation, Room, RoomNumber, RoomType};
