//! # Innkeep front desk
//!
//! Everything between a guest typing into a form and the reservation
//! core changing state.
//!
//! - [`BookingForm`] → [`BookingRequest`]: strict input validation
//! - [`FrontDesk`]: a shared, mutex-guarded [`RoomManager`](innkeep_room::RoomManager)
//! - [`view`]: availability table rows, selection labels, confirmation text
//! - [`InventorySnapshot`] / [`load_inventory`]: JSON export and inventory files
//!
//! ```text
//! Terminal / UI (above)  ← collects text, shows views
//!     ↕
//! Desk (this crate)      ← validates, formats, serializes access
//!     ↕
//! Room core (below)      ← owns rooms and reservations
//! ```

mod desk;
mod error;
mod form;
mod snapshot;
pub mod view;

pub use desk::{Confirmation, FrontDesk};
pub use error::{DeskError, FormError};
pub use form::{BookingForm, BookingRequest, RoomSelection, CONTACT_DIGITS, SELECT_PLACEHOLDER};
pub use snapshot::{load_inventory, InventorySnapshot};
pub use view::AvailabilityRow;

/// Re-exports of the reservation core.
pub mod prelude {
    pub use crate::{BookingForm, DeskError, FormError, FrontDesk};
    pub use innkeep_room::{Reservation, Room, RoomError, RoomManager, RoomNumber, RoomType};
}
