//! List command implementation.
//!
//! Lists entities from a snapshot file, filtered by the shared search,
//! status, and date-range flags.

use std::path::PathBuf;

use filoxenia_core::models::{Booking, Payment, Property};

use super::{
    booking_criteria, load_entities, payment_criteria, property_criteria, resolve_input,
    CommandContext, FilterOptions, Result,
};
use crate::cli::Kind;
use crate::output;

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Entity kind to list.
    pub kind: Kind,
    /// Snapshot file override.
    pub input: Option<PathBuf>,
    /// Shared filter flags.
    pub filter: FilterOptions,
    /// Limit results.
    pub limit: u32,
    /// Show all results (no limit).
    pub all: bool,
}

/// Executes the list command.
pub fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let path = resolve_input(opts.input.as_deref(), opts.kind)?;
    if ctx.verbose {
        eprintln!("Reading {}", path.display());
    }

    match opts.kind {
        Kind::Bookings => {
            let bookings: Vec<Booking> = load_entities(&path)?;
            let criteria = booking_criteria(&opts.filter);
            let filtered = apply_limit(criteria.filter_collection(&bookings), opts);
            if ctx.json_output {
                println!("{}", output::format_bookings_json(&filtered)?);
            } else if !ctx.quiet {
                print!("{}", output::format_bookings_table(&filtered, ctx.use_colors));
            }
        }
        Kind::Properties => {
            let properties: Vec<Property> = load_entities(&path)?;
            let criteria = property_criteria(&opts.filter);
            let filtered = apply_limit(criteria.filter_collection(&properties), opts);
            if ctx.json_output {
                println!("{}", output::format_properties_json(&filtered)?);
            } else if !ctx.quiet {
                print!(
                    "{}",
                    output::format_properties_table(&filtered, ctx.use_colors)
                );
            }
        }
        Kind::Payments => {
            let payments: Vec<Payment> = load_entities(&path)?;
            let criteria = payment_criteria(&opts.filter);
            let filtered = apply_limit(criteria.filter_collection(&payments), opts);
            if ctx.json_output {
                println!("{}", output::format_payments_json(&filtered)?);
            } else if !ctx.quiet {
                print!("{}", output::format_payments_table(&filtered, ctx.use_colors));
            }
        }
    }

    Ok(())
}

/// Truncates the result set unless `--all` was given.
fn apply_limit<T>(mut entities: Vec<T>, opts: &ListOptions) -> Vec<T> {
    if !opts.all {
        entities.truncate(opts.limit as usize);
    }
    entities
}
