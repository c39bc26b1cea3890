//! Booking output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use filoxenia_core::models::{Booking, BookingStatus};

use super::helpers::{format_amount, format_date, truncate_str};

/// JSON output structure for the booking list.
#[derive(Serialize)]
struct ListOutput<'a> {
    total: usize,
    bookings: &'a [&'a Booking],
}

/// Formats bookings as pretty-printed JSON.
pub fn format_bookings_json(bookings: &[&Booking]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListOutput {
        total: bookings.len(),
        bookings,
    })
}

/// Formats bookings as an aligned table.
pub fn format_bookings_table(bookings: &[&Booking], use_colors: bool) -> String {
    if bookings.is_empty() {
        return "Δεν βρέθηκαν κρατήσεις.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<10} {:<22} {:<20} {:<12} {:<12} {:<14} {}",
        "Κωδικός", "Επισκέπτης", "Ακίνητο", "Άφιξη", "Αναχώρηση", "Κατάσταση", "Σύνολο"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for booking in bookings {
        let line = format!(
            "{:<10} {:<22} {:<20} {:<12} {:<12} {:<14} {}",
            truncate_str(&booking.id, 10),
            truncate_str(&booking.guest_name, 22),
            truncate_str(&booking.property_name, 20),
            format_date(&booking.check_in),
            format_date(&booking.check_out),
            format_status(booking.status, use_colors),
            format_amount(booking.total_amount, &booking.currency),
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a booking status with its console color.
fn format_status(status: BookingStatus, use_colors: bool) -> String {
    let label = status.label();
    if !use_colors {
        return label.to_string();
    }
    match status {
        BookingStatus::Confirmed => label.green().to_string(),
        BookingStatus::Pending => label.yellow().to_string(),
        BookingStatus::Completed => label.dimmed().to_string(),
        BookingStatus::Cancelled => label.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_booking(id: &str, guest: &str) -> Booking {
        Booking {
            id: id.to_string(),
            property_id: "pr-1".to_string(),
            property_name: "Θέα Θάλασσα".to_string(),
            guest_name: guest.to_string(),
            guest_email: None,
            guest_phone: None,
            check_in: "2026-08-01".to_string(),
            check_out: "2026-08-05".to_string(),
            guests: 2,
            status: BookingStatus::Confirmed,
            channel: None,
            total_amount: 480.0,
            paid_amount: 0.0,
            currency: "EUR".to_string(),
            created_at: "2026-06-20".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_bookings_table(&[], false), "Δεν βρέθηκαν κρατήσεις.\n");
    }

    #[test]
    fn test_table_contains_row_data() {
        let booking = make_booking("bk-1001", "Μαρία Παπαδοπούλου");
        let table = format_bookings_table(&[&booking], false);

        assert!(table.contains("bk-1001"));
        assert!(table.contains("Μαρία Παπαδοπούλου"));
        assert!(table.contains("01/08/2026"));
        assert!(table.contains("480.00 EUR"));
        assert!(table.contains("Επιβεβαιωμένη"));
    }

    #[test]
    fn test_json_output_shape() {
        let booking = make_booking("bk-1001", "Μαρία");
        let json = format_bookings_json(&[&booking]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["bookings"][0]["id"], "bk-1001");
        assert_eq!(value["bookings"][0]["status"], "confirmed");
    }
}
