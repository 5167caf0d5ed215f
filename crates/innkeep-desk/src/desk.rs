//! The front desk: validated bookings against a shared room manager.
//!
//! `FrontDesk` is cheap to clone. Every clone talks to the same
//! [`RoomManager`] behind one async mutex, so a booking and the listing
//! that follows it are never interleaved with another writer.

use std::sync::Arc;

use innkeep_room::{InventoryConfig, Reservation, RoomError, RoomManager, RoomNumber};
use tokio::sync::Mutex;

use crate::view::{availability_table, confirmation_message, selection_options};
use crate::{AvailabilityRow, BookingForm, DeskError, InventorySnapshot};

/// A completed booking as reported back to the guest.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub number: RoomNumber,
    pub total_price: f64,
    /// Multi-line text ready to display.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FrontDesk {
    rooms: Arc<Mutex<RoomManager>>,
}

impl FrontDesk {
    /// A desk over the default nine-room inventory.
    pub fn new() -> Self {
        Self::with_manager(RoomManager::new())
    }

    pub fn from_config(config: &InventoryConfig) -> Result<Self, DeskError> {
        Ok(Self::with_manager(RoomManager::from_config(config)?))
    }

    pub fn with_manager(manager: RoomManager) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(manager)),
        }
    }

    /// Validates the form, then reserves the chosen room.
    ///
    /// The selected type must match the room's type; a label naming a
    /// room that does not exist, or exists with another type, is reported
    /// the same way as a room that is already taken.
    pub async fn book(&self, form: &BookingForm) -> Result<Confirmation, DeskError> {
        let request = form.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "booking form rejected");
        })?;

        let mut rooms = self.rooms.lock().await;
        let selection = request.room;
        if rooms.find(selection.room_type, selection.number).is_none() {
            return Err(RoomError::NotFound(selection.number).into());
        }

        let room = rooms.reserve_room(
            selection.number,
            &request.customer_name,
            &request.contact_number,
            request.check_in,
            request.check_out,
            request.guest_count,
        )?;

        let total_price = room.total_price().unwrap_or_default();
        let message = confirmation_message(room).unwrap_or_default();
        Ok(Confirmation {
            number: room.number(),
            total_price,
            message,
        })
    }

    pub async fn check_out(&self, number: RoomNumber) -> Result<Reservation, DeskError> {
        Ok(self.rooms.lock().await.check_out(number)?)
    }

    pub async fn availability(&self) -> Vec<AvailabilityRow> {
        availability_table(&*self.rooms.lock().await)
    }

    /// Selection labels for every room still free.
    pub async fn options(&self) -> Vec<String> {
        selection_options(&*self.rooms.lock().await)
    }

    pub async fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::capture(&*self.rooms.lock().await)
    }

    /// Runs `f` with read access to the manager while holding the lock.
    pub async fn with_rooms<R>(&self, f: impl FnOnce(&RoomManager) -> R) -> R {
        f(&*self.rooms.lock().await)
    }
}

impl Default for FrontDesk {
    fn default() -> Self {
        Self::new()
    }
}
