//! Typed entity models for the console's list screens.
//!
//! The shapes mirror the payloads of the remote data service. Date fields
//! stay as the raw ISO-8601 strings the service sends; they are parsed
//! lazily by the date-range predicates and export formatters so that one
//! record with a corrupt date degrades at that point instead of failing
//! deserialization of the whole collection.

mod booking;
mod payment;
mod property;

pub use booking::{Booking, BookingStatus};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use property::{Property, PropertyStatus, PropertyType};
