//! Booking model.
//!
//! Bookings are the central entity of the console: every reservation made
//! for a property, whatever channel it arrived through.

use serde::{Deserialize, Serialize};

use crate::filter::FieldAccessor;

/// A reservation for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The unique identifier for the booking.
    pub id: String,

    /// The ID of the booked property.
    pub property_id: String,

    /// The display name of the booked property.
    pub property_name: String,

    /// Full name of the lead guest.
    pub guest_name: String,

    /// Contact email of the lead guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,

    /// Contact phone of the lead guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,

    /// Check-in date as sent by the data service (ISO 8601).
    pub check_in: String,

    /// Check-out date as sent by the data service (ISO 8601).
    pub check_out: String,

    /// Number of guests on the reservation.
    #[serde(default = "default_guests")]
    pub guests: i64,

    /// Current lifecycle status.
    pub status: BookingStatus,

    /// Booking channel (e.g. "direct", "booking.com", "airbnb").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Total price of the stay.
    pub total_amount: f64,

    /// Amount already paid.
    #[serde(default)]
    pub paid_amount: f64,

    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// When the booking was created (ISO 8601).
    pub created_at: String,

    /// Free-form operator notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_guests() -> i64 {
    1
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Booking {
    /// The fields the bookings screen searches over.
    pub fn search_fields() -> Vec<FieldAccessor<Booking>> {
        vec![
            |b: &Booking| Some(b.guest_name.clone()),
            |b: &Booking| b.guest_email.clone(),
            |b: &Booking| b.guest_phone.clone(),
            |b: &Booking| Some(b.property_name.clone()),
            |b: &Booking| Some(b.id.clone()),
        ]
    }

    /// Outstanding balance for the stay.
    pub fn balance(&self) -> f64 {
        self.total_amount - self.paid_amount
    }
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed and upcoming.
    Confirmed,
    /// Stay completed.
    Completed,
    /// Cancelled before the stay.
    Cancelled,
}

impl BookingStatus {
    /// The wire token for this status, as used in filters and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// The Greek display label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Σε αναμονή",
            BookingStatus::Confirmed => "Επιβεβαιωμένη",
            BookingStatus::Completed => "Ολοκληρωμένη",
            BookingStatus::Cancelled => "Ακυρωμένη",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_booking() {
        let json = r#"{
            "id": "bk-1001",
            "property_id": "pr-7",
            "property_name": "Θέα Θάλασσα",
            "guest_name": "Μαρία Παπαδοπούλου",
            "check_in": "2026-08-01",
            "check_out": "2026-08-05",
            "status": "confirmed",
            "total_amount": 480.0,
            "created_at": "2026-06-20T09:15:00Z"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.guests, 1);
        assert_eq!(booking.currency, "EUR");
        assert_eq!(booking.paid_amount, 0.0);
        assert_eq!(booking.balance(), 480.0);
    }

    #[test]
    fn test_status_tokens_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            let token = serde_json::to_string(&status).unwrap();
            assert_eq!(token, format!("\"{}\"", status.as_str()));
        }
    }
}
