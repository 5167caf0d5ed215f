//! Error types for the front-desk layer.

use innkeep_room::RoomError;

/// Why a booking form was rejected.
///
/// The messages are the ones shown to the guest; every one of them asks
/// for a correction and nothing is booked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No room was picked from the list.
    #[error("Please select a room type.")]
    NoRoomSelected,

    /// The selection label could not be read back as a room.
    #[error("Invalid room selection.")]
    InvalidRoomSelection,

    /// The selection label names a room number that is not a number.
    #[error("Invalid room number.")]
    InvalidRoomNumber,

    /// A required field was left blank.
    #[error("Please fill in all fields.")]
    MissingInput,

    /// Contact number is not exactly 11 digits.
    #[error("Contact number must be exactly 11 digits.")]
    InvalidContactNumber,

    /// Guests or duration is non-numeric, zero, or negative.
    #[error("Invalid number of guests or duration.")]
    InvalidCount,

    /// Check-in is not a real calendar date in `yyyy-MM-dd` form.
    #[error("Invalid date format. Please use yyyy-MM-dd.")]
    InvalidDate,
}

/// Top-level error for front-desk operations.
///
/// Wraps the core and form errors so callers handle a single type. The
/// `#[from]` attributes let `?` convert automatically.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// The form failed validation.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The reservation core refused the operation.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// An inventory file could not be read.
    #[error("inventory file error: {0}")]
    Io(#[from] std::io::Error),

    /// An inventory file or snapshot could not be (de)serialized.
    #[error("inventory format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeskError {
    /// The message to show the guest.
    ///
    /// A room that is already booked gets the wording the form uses when
    /// the selected room is gone.
    pub fn user_message(&self) -> String {
        match self {
            Self::Room(RoomError::NotAvailable(_) | RoomError::NotFound(_)) => {
                "Sorry, no rooms available for the selected date range or type.".to_string()
            }
            other => other.to_string(),
        }
    }
}
