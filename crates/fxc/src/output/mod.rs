//! Output formatting utilities for the fxc CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`bookings`] - Booking list output
//! - [`properties`] - Property list output
//! - [`payments`] - Payment list output
//! - [`stats`] - Dashboard card output
//! - [`helpers`] - Common formatting utilities (truncation, dates, amounts)

mod bookings;
pub mod helpers;
mod payments;
mod properties;
mod stats;

pub use bookings::{format_bookings_json, format_bookings_table};
pub use payments::{format_payments_json, format_payments_table};
pub use properties::{format_properties_json, format_properties_table};
pub use stats::{format_stats_json, format_stats_table};
