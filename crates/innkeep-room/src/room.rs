//! Rooms: static attributes plus the current reservation, if any.
//!
//! A room is in one of two logical states:
//!
//! ```text
//! Available ──(reserve)──→ Booked ──(check out)──→ Available
//! ```
//!
//! The state is not stored as a flag. It follows from whether the room
//! holds a [`Reservation`], so booked-only fields (customer, dates,
//! guests, total) can never exist on an available room.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RoomError;

/// Display format for check-in and check-out dates.
const DATE_FORMAT: &str = "%Y/%m/%d";

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// The number painted on the door. Unique within a [`RoomManager`](crate::RoomManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// Room category.
///
/// Labels are `Single`, `Double` and `VIP`. Parsing ignores case so
/// `"vip"` and `"VIP"` are the same category. Serde goes through the same
/// label parsing in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoomType {
    Single,
    Double,
    Vip,
}

impl RoomType {
    /// The label shown to guests.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Vip => "VIP",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for RoomType {
    type Error = RoomError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.label().to_string()
    }
}

impl FromStr for RoomType {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "vip" => Ok(Self::Vip),
            _ => Err(RoomError::UnknownRoomType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Reservation
// ---------------------------------------------------------------------------

/// Everything bound to a room by a successful booking.
///
/// Built in one piece by the manager, so the fields always describe the
/// same booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer_name: String,
    pub contact_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    /// Whole days between check-in and check-out. Always positive.
    pub duration_days: i64,
    /// `price_per_day × duration_days × guest_count` at booking time.
    pub total_price: f64,
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A single bookable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    room_type: RoomType,
    number: RoomNumber,
    price_per_day: f64,
    reservation: Option<Reservation>,
}

impl Room {
    /// Creates an available room.
    pub fn new(room_type: RoomType, price_per_day: f64, number: RoomNumber) -> Self {
        Self {
            room_type,
            number,
            price_per_day,
            reservation: None,
        }
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn set_room_type(&mut self, room_type: RoomType) {
        self.room_type = room_type;
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn price_per_day(&self) -> f64 {
        self.price_per_day
    }

    /// Changes the nightly rate. Does not touch an existing reservation's total.
    pub fn set_price_per_day(&mut self, price_per_day: f64) {
        self.price_per_day = price_per_day;
    }

    /// `true` while the room holds no reservation.
    pub fn is_available(&self) -> bool {
        self.reservation.is_none()
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.reservation.as_ref().map(|r| r.customer_name.as_str())
    }

    pub fn contact_number(&self) -> Option<&str> {
        self.reservation.as_ref().map(|r| r.contact_number.as_str())
    }

    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.reservation.as_ref().map(|r| r.check_in)
    }

    pub fn check_out_date(&self) -> Option<NaiveDate> {
        self.reservation.as_ref().map(|r| r.check_out)
    }

    pub fn guest_count(&self) -> Option<u32> {
        self.reservation.as_ref().map(|r| r.guest_count)
    }

    pub fn duration_days(&self) -> Option<i64> {
        self.reservation.as_ref().map(|r| r.duration_days)
    }

    pub fn total_price(&self) -> Option<f64> {
        self.reservation.as_ref().map(|r| r.total_price)
    }

    /// Price of a stay in this room. Pure: the stored total is not updated.
    pub fn calculate_total_price(&self, duration_days: i64, guest_count: u32) -> f64 {
        self.price_per_day * duration_days as f64 * f64::from(guest_count)
    }

    /// Check-in date as `YYYY/MM/DD`, or an empty string when unbooked.
    pub fn check_in_date_formatted(&self) -> String {
        format_date(self.check_in_date())
    }

    /// Check-out date as `YYYY/MM/DD`, or an empty string when unbooked.
    pub fn check_out_date_formatted(&self) -> String {
        format_date(self.check_out_date())
    }

    pub(crate) fn book(&mut self, reservation: Reservation) {
        self.reservation = Some(reservation);
    }

    pub(crate) fn release(&mut self) -> Option<Reservation> {
        self.reservation.take()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} room {} ({:.2}/day)",
            self.room_type, self.number, self.price_per_day
        )?;
        match &self.reservation {
            None => write!(f, ", available"),
            Some(r) => write!(
                f,
                ", booked by {} ({}) {} to {}, {} guest(s), total {:.2}",
                r.customer_name,
                r.contact_number,
                r.check_in.format(DATE_FORMAT),
                r.check_out.format(DATE_FORMAT),
                r.guest_count,
                r.total_price
            ),
        }
    }
}
