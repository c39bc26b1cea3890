//! Fixed export column schemas per entity type.
//!
//! Column order and display names are part of the export contract: the
//! back-office spreadsheets that receive these documents key on them.

use crate::dates::parse_iso_date;
use crate::models::{Booking, Payment, Property};

use super::column::{Cell, Column};

/// The booking export schema (17 columns).
pub fn booking_columns() -> Vec<Column<Booking>> {
    vec![
        Column::new("Κωδικός", |b: &Booking| Cell::Text(b.id.clone())),
        Column::new("Ακίνητο", |b: &Booking| Cell::Text(b.property_name.clone())),
        Column::new("Κωδικός ακινήτου", |b: &Booking| {
            Cell::Text(b.property_id.clone())
        }),
        Column::new("Όνομα επισκέπτη", |b: &Booking| {
            Cell::Text(b.guest_name.clone())
        }),
        Column::new("Email", |b: &Booking| Cell::opt_text(b.guest_email.as_deref())),
        Column::new("Τηλέφωνο", |b: &Booking| {
            Cell::opt_text(b.guest_phone.as_deref())
        }),
        Column::new("Άφιξη", |b: &Booking| Cell::Date(b.check_in.clone())),
        Column::new("Αναχώρηση", |b: &Booking| Cell::Date(b.check_out.clone())),
        Column::new("Διανυκτερεύσεις", booking_nights_cell),
        Column::new("Επισκέπτες", |b: &Booking| Cell::Integer(b.guests)),
        Column::new("Κατάσταση", |b: &Booking| {
            Cell::Text(b.status.label().to_string())
        }),
        Column::new("Κανάλι", |b: &Booking| Cell::opt_text(b.channel.as_deref())),
        Column::new("Σύνολο", |b: &Booking| Cell::Money(b.total_amount)),
        Column::new("Πληρωμένο", |b: &Booking| Cell::Money(b.paid_amount)),
        Column::new("Υπόλοιπο", |b: &Booking| Cell::Money(b.balance())),
        Column::new("Δημιουργήθηκε", |b: &Booking| Cell::Date(b.created_at.clone())),
        Column::new("Σημειώσεις", |b: &Booking| Cell::opt_text(b.notes.as_deref())),
    ]
}

/// Nights are derived from the stay dates; if either date is unusable the
/// cell stays empty instead of guessing.
fn booking_nights_cell(booking: &Booking) -> Cell {
    let (Some(check_in), Some(check_out)) = (
        parse_iso_date(&booking.check_in),
        parse_iso_date(&booking.check_out),
    ) else {
        return Cell::Empty;
    };

    let nights = (check_out - check_in).num_days();
    if nights < 0 {
        return Cell::Empty;
    }
    Cell::Integer(nights)
}

/// The property export schema (10 columns).
pub fn property_columns() -> Vec<Column<Property>> {
    vec![
        Column::new("Κωδικός", |p: &Property| Cell::Text(p.id.clone())),
        Column::new("Όνομα", |p: &Property| Cell::Text(p.name.clone())),
        Column::new("Περιοχή", |p: &Property| Cell::Text(p.area.clone())),
        Column::new("Πόλη", |p: &Property| Cell::Text(p.city.clone())),
        Column::new("Τύπος", |p: &Property| {
            Cell::Text(p.property_type.label().to_string())
        }),
        Column::new("Κατάσταση", |p: &Property| {
            Cell::Text(p.status.label().to_string())
        }),
        Column::new("Υπνοδωμάτια", |p: &Property| Cell::Integer(p.bedrooms)),
        Column::new("Τιμή/βράδυ", |p: &Property| Cell::Money(p.price_per_night)),
        Column::new("Περιγραφή", |p: &Property| {
            Cell::opt_text(p.description.as_deref())
        }),
        Column::new("Καταχωρήθηκε", |p: &Property| Cell::Date(p.created_at.clone())),
    ]
}

/// The payment export schema (9 columns).
pub fn payment_columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("Κωδικός", |p: &Payment| Cell::Text(p.id.clone())),
        Column::new("Κράτηση", |p: &Payment| Cell::Text(p.booking_id.clone())),
        Column::new("Πληρωτής", |p: &Payment| Cell::Text(p.payer_name.clone())),
        Column::new("Μέθοδος", |p: &Payment| {
            Cell::Text(p.method.label().to_string())
        }),
        Column::new("Κατάσταση", |p: &Payment| {
            Cell::Text(p.status.label().to_string())
        }),
        Column::new("Ποσό", |p: &Payment| Cell::Money(p.amount)),
        Column::new("Νόμισμα", |p: &Payment| Cell::Text(p.currency.clone())),
        Column::new("Αναφορά", |p: &Payment| Cell::opt_text(p.reference.as_deref())),
        Column::new("Ημερομηνία", |p: &Payment| Cell::Date(p.paid_at.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::to_csv;
    use crate::models::BookingStatus;

    fn make_booking() -> Booking {
        Booking {
            id: "bk-1001".to_string(),
            property_id: "pr-7".to_string(),
            property_name: "Θέα Θάλασσα".to_string(),
            guest_name: "Μαρία Παπαδοπούλου".to_string(),
            guest_email: Some("maria@example.com".to_string()),
            guest_phone: None,
            check_in: "2026-08-01".to_string(),
            check_out: "2026-08-05".to_string(),
            guests: 2,
            status: BookingStatus::Confirmed,
            channel: Some("direct".to_string()),
            total_amount: 480.0,
            paid_amount: 200.0,
            currency: "EUR".to_string(),
            created_at: "2026-06-20T09:15:00Z".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_booking_schema_has_17_columns() {
        assert_eq!(booking_columns().len(), 17);
    }

    #[test]
    fn test_booking_row_rendering() {
        let booking = make_booking();
        let bookings = vec![booking];

        let doc = to_csv(bookings.iter(), &booking_columns()).unwrap();
        let lines: Vec<&str> = doc.trim_start_matches('\u{feff}').split('\n').collect();
        assert_eq!(lines.len(), 2);

        let row = lines[1];
        assert!(row.contains("\"01/08/2026\""));
        assert!(row.contains("\"05/08/2026\""));
        assert!(row.contains("\"4\"")); // nights
        assert!(row.contains("\"480.00\""));
        assert!(row.contains("\"280.00\"")); // balance
        assert!(row.contains("\"Επιβεβαιωμένη\""));
        assert!(row.contains("\"\"")); // absent phone renders empty
    }

    #[test]
    fn test_nights_empty_for_corrupt_dates() {
        let mut booking = make_booking();
        booking.check_out = "tba".to_string();

        assert_eq!(booking_nights_cell(&booking), Cell::Empty);
    }
}
