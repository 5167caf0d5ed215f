//! Room manager: owns the room collection and performs every reservation.

use chrono::NaiveDate;

use crate::stay::stay_duration_days;
use crate::{InventoryConfig, Reservation, Room, RoomError, RoomNumber, RoomType};

/// Owner and sole mutator of a fixed room collection.
///
/// Rooms are created once from an [`InventoryConfig`] and never added or
/// removed. Callers get read-only views; reservation state changes only
/// through [`reserve_room`](Self::reserve_room) and
/// [`check_out`](Self::check_out).
#[derive(Debug, Clone)]
pub struct RoomManager {
    /// All rooms, in creation order.
    rooms: Vec<Room>,
}

impl RoomManager {
    /// Creates a manager with the default nine-room inventory.
    pub fn new() -> Self {
        Self {
            rooms: InventoryConfig::default()
                .rooms
                .iter()
                .map(|spec| spec.build())
                .collect(),
        }
    }

    /// Creates a manager from a custom inventory.
    pub fn from_config(config: &InventoryConfig) -> Result<Self, RoomError> {
        config.validate()?;
        let rooms: Vec<Room> = config.rooms.iter().map(|spec| spec.build()).collect();
        tracing::info!(rooms = rooms.len(), "inventory loaded");
        Ok(Self { rooms })
    }

    /// All rooms, in creation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms without a reservation, in creation order.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.is_available()).collect()
    }

    /// The type of every available room. One entry per room, so types
    /// repeat when several rooms of a type are free.
    pub fn available_room_types(&self) -> Vec<RoomType> {
        self.rooms
            .iter()
            .filter(|r| r.is_available())
            .map(Room::room_type)
            .collect()
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// Looks a room up by its full identity.
    pub fn find(&self, room_type: RoomType, number: RoomNumber) -> Option<&Room> {
        self.room(number).filter(|r| r.room_type() == room_type)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_available()).count()
    }

    /// Books an available room.
    ///
    /// The duration is the whole-day count between the two dates and the
    /// total price is `price_per_day × duration × guest_count`. All checks
    /// run before anything is written, so a rejected call leaves the room
    /// untouched.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] if no room has this number.
    /// - [`RoomError::NotAvailable`] if the room is already booked. An
    ///   existing reservation is never overwritten; check out first.
    /// - [`RoomError::InvalidStay`] if check-out is not after check-in.
    /// - [`RoomError::InvalidGuestCount`] if `guest_count` is zero.
    pub fn reserve_room(
        &mut self,
        number: RoomNumber,
        customer_name: &str,
        contact_number: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guest_count: u32,
    ) -> Result<&Room, RoomError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(RoomError::NotFound(number))?;

        if !room.is_available() {
            tracing::warn!(room = %number, "reservation rejected: room already booked");
            return Err(RoomError::NotAvailable(number));
        }

        let duration_days = stay_duration_days(check_in, check_out);
        if duration_days <= 0 {
            tracing::warn!(room = %number, duration_days, "reservation rejected: empty stay");
            return Err(RoomError::InvalidStay(duration_days));
        }
        if guest_count == 0 {
            tracing::warn!(room = %number, "reservation rejected: no guests");
            return Err(RoomError::InvalidGuestCount);
        }

        let total_price = room.calculate_total_price(duration_days, guest_count);
        room.book(Reservation {
            customer_name: customer_name.to_string(),
            contact_number: contact_number.to_string(),
            check_in,
            check_out,
            guest_count,
            duration_days,
            total_price,
        });

        tracing::info!(
            room = %number,
            room_type = %room.room_type(),
            customer = customer_name,
            duration_days,
            guest_count,
            total_price,
            "room reserved"
        );
        Ok(&*room)
    }

    /// Ends the reservation on a room and makes it available again.
    ///
    /// Returns the reservation that was removed.
    pub fn check_out(&mut self, number: RoomNumber) -> Result<Reservation, RoomError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(RoomError::NotFound(number))?;

        let reservation = room.release().ok_or(RoomError::NotBooked(number))?;
        tracing::info!(
            room = %number,
            customer = %reservation.customer_name,
            "room checked out"
        );
        Ok(reservation)
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::new()
    }
}
