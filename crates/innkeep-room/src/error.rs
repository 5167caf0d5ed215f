//! Error types for the reservation core.

use crate::RoomNumber;

/// Errors that can occur during inventory setup or reservation bookkeeping.
///
/// Every variant is recoverable: the caller reports it and the room
/// collection is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoomError {
    /// No room with this number is managed.
    #[error("room {0} not found")]
    NotFound(RoomNumber),

    /// The room already holds a reservation.
    #[error("room {0} is not available")]
    NotAvailable(RoomNumber),

    /// Checkout was requested for a room that has no reservation.
    #[error("room {0} has no reservation to check out")]
    NotBooked(RoomNumber),

    /// Check-out is not strictly after check-in.
    ///
    /// Carries the computed whole-day duration (zero or negative).
    #[error("stay must last at least one day (got {0} days)")]
    InvalidStay(i64),

    /// A reservation needs at least one guest.
    #[error("guest count must be positive")]
    InvalidGuestCount,

    /// Two rooms in the inventory share a number.
    #[error("duplicate room number {0} in inventory")]
    DuplicateRoom(RoomNumber),

    /// A room was configured with a negative or non-finite price.
    #[error("room {0} has an invalid price per day")]
    InvalidPrice(RoomNumber),

    /// The inventory contains no rooms at all.
    #[error("inventory must contain at least one room")]
    EmptyInventory,

    /// A room type label did not match any known category.
    #[error("unknown room type: {0}")]
    UnknownRoomType(String),
}
