//! Booking form: raw text as typed at the desk, and its validation.
//!
//! The reservation core trusts its inputs only as far as its own
//! invariants go (availability, positive stay, at least one guest).
//! Everything about the *shape* of user input is checked here, before the
//! core is touched, so a rejected form never causes a partial booking.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use innkeep_room::stay::check_out_for;
use innkeep_room::{RoomNumber, RoomType};

use crate::FormError;

/// Shown as the first entry of the room list; selecting it means "nothing".
pub const SELECT_PLACEHOLDER: &str = "Select a room type";

/// Required length of a contact number.
pub const CONTACT_DIGITS: usize = 11;

/// Input format for the check-in date.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// RoomSelection
// ---------------------------------------------------------------------------

/// A room picked from the list, written as `"<Type> - Room <N>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSelection {
    pub room_type: RoomType,
    pub number: RoomNumber,
}

impl fmt::Display for RoomSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Room {}", self.room_type, self.number)
    }
}

impl FromStr for RoomSelection {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_label, rest) = s
            .split_once(" - ")
            .ok_or(FormError::InvalidRoomSelection)?;
        let room_type = type_label
            .parse::<RoomType>()
            .map_err(|_| FormError::InvalidRoomSelection)?;
        let number = rest
            .trim()
            .strip_prefix("Room ")
            .ok_or(FormError::InvalidRoomSelection)?
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidRoomNumber)?;
        Ok(Self {
            room_type,
            number: RoomNumber(number),
        })
    }
}

// ---------------------------------------------------------------------------
// BookingForm
// ---------------------------------------------------------------------------

/// The booking form exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// A selection label, the placeholder, or empty.
    pub room: String,
    pub customer_name: String,
    pub contact_number: String,
    /// Check-in date, `yyyy-MM-dd`.
    pub check_in: String,
    /// Length of stay in days.
    pub duration: String,
    pub guests: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room: RoomSelection,
    pub customer_name: String,
    pub contact_number: String,
    pub check_in: NaiveDate,
    /// Check-in plus the requested duration.
    pub check_out: NaiveDate,
    pub duration_days: u32,
    pub guest_count: u32,
}

impl BookingForm {
    /// Validates every field, stopping at the first problem.
    ///
    /// Checks run in the order the desk reports them: room selection,
    /// blank fields, contact number, counts, then the date.
    pub fn validate(&self) -> Result<BookingRequest, FormError> {
        let room = parse_selection(&self.room)?;

        let customer_name = self.customer_name.trim();
        let contact_number = self.contact_number.trim();
        let required = [
            customer_name,
            contact_number,
            self.check_in.as_str(),
            self.duration.as_str(),
            self.guests.as_str(),
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingInput);
        }

        if !is_contact_number(contact_number) {
            return Err(FormError::InvalidContactNumber);
        }

        let guest_count = parse_positive(&self.guests)?;
        let duration_days = parse_positive(&self.duration)?;

        let check_in = parse_date(&self.check_in)?;
        let check_out =
            check_out_for(check_in, duration_days).ok_or(FormError::InvalidDate)?;

        Ok(BookingRequest {
            room,
            customer_name: customer_name.to_string(),
            contact_number: contact_number.to_string(),
            check_in,
            check_out,
            duration_days,
            guest_count,
        })
    }
}

fn parse_selection(label: &str) -> Result<RoomSelection, FormError> {
    let label = label.trim();
    if label.is_empty() || label == SELECT_PLACEHOLDER {
        return Err(FormError::NoRoomSelected);
    }
    label.parse()
}

fn is_contact_number(s: &str) -> bool {
    s.len() == CONTACT_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_positive(s: &str) -> Result<u32, FormError> {
    match s.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).map_err(|_| FormError::InvalidCount),
        _ => Err(FormError::InvalidCount),
    }
}

/// Strict `yyyy-MM-dd`: four-digit year, two-digit month and day, and a
/// date that exists on the calendar.
fn parse_date(s: &str) -> Result<NaiveDate, FormError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(FormError::InvalidDate);
    }
    NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).map_err(|_| FormError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingForm {
        BookingForm {
            room: "Single - Room 1".into(),
            customer_name: "Jane Doe".into(),
            contact_number: "09171234567".into(),
            check_in: "2024-06-01".into(),
            duration: "3".into(),
            guests: "2".into(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_form_produces_request() {
        let req = valid_form().validate().unwrap();
        assert_eq!(req.room.room_type, RoomType::Single);
        assert_eq!(req.room.number, RoomNumber(1));
        assert_eq!(req.check_in, date(2024, 6, 1));
        assert_eq!(req.check_out, date(2024, 6, 4));
        assert_eq!(req.duration_days, 3);
        assert_eq!(req.guest_count, 2);
    }

    #[test]
    fn test_selection_label_round_trip() {
        let sel = RoomSelection {
            room_type: RoomType::Vip,
            number: RoomNumber(10),
        };
        assert_eq!(sel.to_string(), "VIP - Room 10");
        assert_eq!("VIP - Room 10".parse::<RoomSelection>().unwrap(), sel);
    }

    #[test]
    fn test_malformed_selection_labels() {
        for label in ["Single", "Single - 1", "Suite - Room 1"] {
            assert_eq!(
                label.parse::<RoomSelection>(),
                Err(FormError::InvalidRoomSelection),
                "{label}"
            );
        }
    }

    #[test]
    fn test_unreadable_room_number_in_label() {
        for label in ["Single - Room x", "Double - Room 1.5", "VIP - Room -4"] {
            assert_eq!(
                label.parse::<RoomSelection>(),
                Err(FormError::InvalidRoomNumber),
                "{label}"
            );
        }
        let form = BookingForm {
            room: "Single - Room one".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidRoomNumber));
        assert_eq!(FormError::InvalidRoomNumber.to_string(), "Invalid room number.");
    }

    #[test]
    fn test_placeholder_means_no_room() {
        for room in ["", SELECT_PLACEHOLDER] {
            let form = BookingForm {
                room: room.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(FormError::NoRoomSelected));
        }
    }

    #[test]
    fn test_blank_fields_are_missing_input() {
        let blanks = [
            BookingForm {
                customer_name: "  ".into(),
                ..valid_form()
            },
            BookingForm {
                contact_number: "".into(),
                ..valid_form()
            },
            BookingForm {
                check_in: "".into(),
                ..valid_form()
            },
            BookingForm {
                duration: "".into(),
                ..valid_form()
            },
            BookingForm {
                guests: "".into(),
                ..valid_form()
            },
        ];
        for form in blanks {
            assert_eq!(form.validate(), Err(FormError::MissingInput));
        }
    }

    #[test]
    fn test_contact_number_must_be_eleven_digits() {
        for contact in ["0917123456", "091712345678", "0917-123456", "0917123456a"] {
            let form = BookingForm {
                contact_number: contact.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(FormError::InvalidContactNumber), "{contact}");
        }
    }

    #[test]
    fn test_contact_number_is_trimmed() {
        let form = BookingForm {
            contact_number: " 09171234567 ".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().contact_number, "09171234567");
    }

    #[test]
    fn test_counts_must_be_positive_integers() {
        for bad in ["0", "-2", "two", "1.5", "99999999999"] {
            let guests = BookingForm {
                guests: bad.into(),
                ..valid_form()
            };
            assert_eq!(guests.validate(), Err(FormError::InvalidCount), "guests {bad}");
            let duration = BookingForm {
                duration: bad.into(),
                ..valid_form()
            };
            assert_eq!(duration.validate(), Err(FormError::InvalidCount), "duration {bad}");
        }
    }

    #[test]
    fn test_date_parsing_is_strict() {
        let bad_dates = [
            "2024/06/01",
            "2024-6-1",
            "2024-13-01",
            "2023-02-29",
            "24-06-01",
            "2024-06-01x",
        ];
        for bad in bad_dates {
            let form = BookingForm {
                check_in: bad.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(FormError::InvalidDate), "{bad}");
        }
    }

    #[test]
    fn test_leap_day_is_accepted() {
        let form = BookingForm {
            check_in: "2024-02-29".into(),
            duration: "1".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().check_out, date(2024, 3, 1));
    }

    #[test]
    fn test_selection_checked_before_blank_fields() {
        let form = BookingForm {
            room: SELECT_PLACEHOLDER.into(),
            ..BookingForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::NoRoomSelected));
    }
}
