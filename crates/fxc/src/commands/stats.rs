//! Stats command implementation.
//!
//! Builds the dashboard cards: booking count, revenue, and nights sold for
//! the requested period, each with a trend against the immediately
//! preceding period of equal length.

use std::path::PathBuf;

use chrono::{Days, NaiveDate};

use filoxenia_core::dates::parse_iso_date;
use filoxenia_core::metrics::Metric;
use filoxenia_core::models::{Booking, BookingStatus};

use super::{load_entities, resolve_input, CommandContext, Result};
use crate::cli::Kind;
use crate::output;

/// Options for the stats command.
#[derive(Debug)]
pub struct StatsOptions {
    /// Bookings snapshot file override.
    pub input: Option<PathBuf>,
    /// Period start, inclusive.
    pub from: NaiveDate,
    /// Period end, inclusive.
    pub to: NaiveDate,
}

/// Totals accumulated over one period.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct PeriodTotals {
    bookings: f64,
    revenue: f64,
    nights: f64,
}

/// Executes the stats command.
pub fn execute(ctx: &CommandContext, opts: &StatsOptions) -> Result<()> {
    let path = resolve_input(opts.input.as_deref(), Kind::Bookings)?;
    let bookings: Vec<Booking> = load_entities(&path)?;

    let metrics = compute_metrics(&bookings, opts.from, opts.to);

    if ctx.json_output {
        println!("{}", output::format_stats_json(&metrics)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            output::format_stats_table(&metrics, opts.from, opts.to, ctx.use_colors)
        );
    }
    Ok(())
}

/// Computes the dashboard metrics for a period against the preceding period
/// of equal length.
fn compute_metrics(bookings: &[Booking], from: NaiveDate, to: NaiveDate) -> Vec<Metric> {
    let length_days = (to - from).num_days().max(0) as u64 + 1;
    let previous_to = from - Days::new(1);
    let previous_from = from - Days::new(length_days);

    let current = accumulate(bookings, from, to);
    let previous = accumulate(bookings, previous_from, previous_to);

    vec![
        Metric::new("Κρατήσεις", current.bookings, previous.bookings),
        Metric::new("Έσοδα", current.revenue, previous.revenue),
        Metric::new("Διανυκτερεύσεις", current.nights, previous.nights),
    ]
}

/// Sums one period. A booking counts if its check-in date parses and falls
/// inside the period; cancelled bookings and records with corrupt dates are
/// skipped.
fn accumulate(bookings: &[Booking], from: NaiveDate, to: NaiveDate) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for booking in bookings {
        if booking.status == BookingStatus::Cancelled {
            continue;
        }
        let Some(check_in) = parse_iso_date(&booking.check_in) else {
            continue;
        };
        if check_in < from || check_in > to {
            continue;
        }

        totals.bookings += 1.0;
        totals.revenue += booking.total_amount;
        if let Some(check_out) = parse_iso_date(&booking.check_out) {
            let nights = (check_out - check_in).num_days();
            if nights > 0 {
                totals.nights += nights as f64;
            }
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use filoxenia_core::metrics::TrendDirection;

    fn make_booking(check_in: &str, check_out: &str, total: f64, status: BookingStatus) -> Booking {
        Booking {
            id: "bk-1".to_string(),
            property_id: "pr-1".to_string(),
            property_name: "Θέα Θάλασσα".to_string(),
            guest_name: "Μαρία".to_string(),
            guest_email: None,
            guest_phone: None,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests: 2,
            status,
            channel: None,
            total_amount: total,
            paid_amount: 0.0,
            currency: "EUR".to_string(),
            created_at: "2026-01-01".to_string(),
            notes: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_periods_are_adjacent_and_equal_length() {
        let bookings = vec![
            // Current period: 1-7 August.
            make_booking("2026-08-02", "2026-08-04", 200.0, BookingStatus::Confirmed),
            make_booking("2026-08-07", "2026-08-08", 100.0, BookingStatus::Completed),
            // Previous period: 25-31 July.
            make_booking("2026-07-26", "2026-07-27", 100.0, BookingStatus::Completed),
            // Outside both.
            make_booking("2026-07-20", "2026-07-21", 999.0, BookingStatus::Confirmed),
        ];

        let metrics = compute_metrics(&bookings, date(2026, 8, 1), date(2026, 8, 7));

        let counts = &metrics[0];
        assert_eq!(counts.current, 2.0);
        assert_eq!(counts.previous, 1.0);
        assert_eq!(counts.trend().delta_percent, 100.0);
        assert_eq!(counts.trend().direction, TrendDirection::Up);

        let revenue = &metrics[1];
        assert_eq!(revenue.current, 300.0);
        assert_eq!(revenue.previous, 100.0);
    }

    #[test]
    fn test_cancelled_and_corrupt_records_are_skipped() {
        let bookings = vec![
            make_booking("2026-08-02", "2026-08-04", 200.0, BookingStatus::Cancelled),
            make_booking("someday", "2026-08-04", 150.0, BookingStatus::Confirmed),
            make_booking("2026-08-03", "gibberish", 80.0, BookingStatus::Confirmed),
        ];

        let totals = accumulate(&bookings, date(2026, 8, 1), date(2026, 8, 7));

        // Only the third booking counts, and its nights stay at zero.
        assert_eq!(totals.bookings, 1.0);
        assert_eq!(totals.revenue, 80.0);
        assert_eq!(totals.nights, 0.0);
    }

    #[test]
    fn test_empty_periods_yield_flat_up_trends() {
        let metrics = compute_metrics(&[], date(2026, 8, 1), date(2026, 8, 7));
        for metric in &metrics {
            let trend = metric.trend();
            assert_eq!(trend.delta_percent, 0.0);
            assert_eq!(trend.direction, TrendDirection::Up);
        }
    }
}
