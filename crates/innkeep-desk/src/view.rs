//! Read-only renderings of room state: table rows, list labels, messages.

use innkeep_room::{Room, RoomManager};
use serde::Serialize;

use crate::RoomSelection;

/// Column headings of the availability table, in row order.
pub const AVAILABILITY_COLUMNS: [&str; 11] = [
    "Room Type",
    "Room Number",
    "Availability",
    "Price per day",
    "Customer Name",
    "Contact #",
    "Check-in Date",
    "Check-out Date",
    "Duration (days)",
    "Guest Count",
    "Total Price",
];

/// Formats an amount in pesos with two decimals: `Php 1525.00`.
pub fn format_php(amount: f64) -> String {
    format!("Php {amount:.2}")
}

/// One line of the availability table.
///
/// Booking columns are empty strings while the room is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRow {
    pub room_type: String,
    pub number: String,
    pub availability: String,
    pub price_per_day: String,
    pub customer_name: String,
    pub contact_number: String,
    pub check_in: String,
    pub check_out: String,
    pub duration_days: String,
    pub guest_count: String,
    pub total_price: String,
}

impl AvailabilityRow {
    pub fn from_room(room: &Room) -> Self {
        let availability = if room.is_available() {
            "Available"
        } else {
            "Not Available"
        };
        Self {
            room_type: room.room_type().to_string(),
            number: room.number().to_string(),
            availability: availability.to_string(),
            price_per_day: format_php(room.price_per_day()),
            customer_name: room.customer_name().unwrap_or_default().to_string(),
            contact_number: room.contact_number().unwrap_or_default().to_string(),
            check_in: room.check_in_date_formatted(),
            check_out: room.check_out_date_formatted(),
            duration_days: room
                .duration_days()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            guest_count: room
                .guest_count()
                .map(|g| g.to_string())
                .unwrap_or_default(),
            total_price: room.total_price().map(format_php).unwrap_or_default(),
        }
    }

    /// The cells in [`AVAILABILITY_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 11] {
        [
            self.room_type.as_str(),
            self.number.as_str(),
            self.availability.as_str(),
            self.price_per_day.as_str(),
            self.customer_name.as_str(),
            self.contact_number.as_str(),
            self.check_in.as_str(),
            self.check_out.as_str(),
            self.duration_days.as_str(),
            self.guest_count.as_str(),
            self.total_price.as_str(),
        ]
    }
}

/// Rows for every room, in creation order.
pub fn availability_table(manager: &RoomManager) -> Vec<AvailabilityRow> {
    manager.rooms().iter().map(AvailabilityRow::from_room).collect()
}

/// Selection labels for the rooms that can still be booked.
pub fn selection_options(manager: &RoomManager) -> Vec<String> {
    manager
        .available_rooms()
        .into_iter()
        .map(|room| {
            RoomSelection {
                room_type: room.room_type(),
                number: room.number(),
            }
            .to_string()
        })
        .collect()
}

/// Nightly rate shown next to the selected room.
pub fn price_label(room: &Room) -> String {
    format!("{} per day", format_php(room.price_per_day()))
}

/// Success message for a booked room. `None` if the room is available.
pub fn confirmation_message(room: &Room) -> Option<String> {
    let r = room.reservation()?;
    Some(format!(
        "Reservation made successfully for {}.\n\
         Room: {} - {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Duration of Stay: {} day(s)\n\
         Number of Guests: {}\n\
         Total Price: {}",
        r.customer_name,
        room.room_type(),
        room.number(),
        room.check_in_date_formatted(),
        room.check_out_date_formatted(),
        r.duration_days,
        r.guest_count,
        format_php(r.total_price)
    ))
}

/// Renders rows as a plain-text table with aligned columns.
pub fn render_table(rows: &[AvailabilityRow]) -> String {
    let mut widths = AVAILABILITY_COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_line = |cells: [&str; 11]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = render_line(AVAILABILITY_COLUMNS);
    out.push('\n');
    out.push_str(&"-".repeat(out.len() - 1));
    for row in rows {
        out.push('\n');
        out.push_str(&render_line(row.cells()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use innkeep_room::RoomNumber;

    fn booked_manager() -> RoomManager {
        let mut mgr = RoomManager::new();
        mgr.reserve_room(
            RoomNumber(1),
            "Jane Doe",
            "09171234567",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            2,
        )
        .unwrap();
        mgr
    }

    #[test]
    fn test_format_php_two_decimals() {
        assert_eq!(format_php(1525.0), "Php 1525.00");
        assert_eq!(format_php(0.5), "Php 0.50");
    }

    #[test]
    fn test_available_row_has_empty_booking_columns() {
        let mgr = RoomManager::new();
        let row = AvailabilityRow::from_room(&mgr.rooms()[0]);
        assert_eq!(row.availability, "Available");
        assert_eq!(row.price_per_day, "Php 1525.00");
        assert_eq!(row.customer_name, "");
        assert_eq!(row.check_in, "");
        assert_eq!(row.total_price, "");
    }

    #[test]
    fn test_booked_row_shows_reservation() {
        let mgr = booked_manager();
        let row = &availability_table(&mgr)[0];
        assert_eq!(row.availability, "Not Available");
        assert_eq!(row.customer_name, "Jane Doe");
        assert_eq!(row.check_in, "2024/06/01");
        assert_eq!(row.check_out, "2024/06/04");
        assert_eq!(row.duration_days, "3");
        assert_eq!(row.guest_count, "2");
        assert_eq!(row.total_price, "Php 9150.00");
    }

    #[test]
    fn test_selection_options_skip_booked_rooms() {
        let mgr = booked_manager();
        let options = selection_options(&mgr);
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], "Single - Room 3");
        assert_eq!(options[7], "VIP - Room 10");
    }

    #[test]
    fn test_price_label() {
        let mgr = RoomManager::new();
        assert_eq!(price_label(&mgr.rooms()[6]), "Php 4500.00 per day");
    }

    #[test]
    fn test_confirmation_message() {
        let mgr = booked_manager();
        let msg = confirmation_message(&mgr.rooms()[0]).unwrap();
        assert!(msg.starts_with("Reservation made successfully for Jane Doe."));
        assert!(msg.contains("Room: Single - 1"));
        assert!(msg.contains("Check-out: 2024/06/04"));
        assert!(msg.contains("Duration of Stay: 3 day(s)"));
        assert!(msg.ends_with("Total Price: Php 9150.00"));
        assert_eq!(confirmation_message(&mgr.rooms()[1]), None);
    }

    #[test]
    fn test_render_table_has_header_and_one_line_per_room() {
        let mgr = booked_manager();
        let table = render_table(&availability_table(&mgr));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 9);
        assert!(lines[0].starts_with("Room Type"));
        assert!(lines[2].contains("Jane Doe"));
    }
}
