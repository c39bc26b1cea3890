//! Export command implementation.
//!
//! Exports the filtered collection as a CSV document with the fixed column
//! schema for the entity kind, to stdout or a file.

use std::fs;
use std::path::{Path, PathBuf};

use filoxenia_core::export::{schemas, to_csv};
use filoxenia_core::models::{Booking, Payment, Property};

use super::{
    booking_criteria, load_entities, payment_criteria, property_criteria, resolve_input,
    CommandContext, FilterOptions, Result,
};
use crate::cli::Kind;

/// Options for the export command.
#[derive(Debug)]
pub struct ExportOptions {
    /// Entity kind to export.
    pub kind: Kind,
    /// Snapshot file override.
    pub input: Option<PathBuf>,
    /// Shared filter flags.
    pub filter: FilterOptions,
    /// Destination file; stdout when unset.
    pub output: Option<PathBuf>,
}

/// Executes the export command.
pub fn execute(ctx: &CommandContext, opts: &ExportOptions) -> Result<()> {
    let path = resolve_input(opts.input.as_deref(), opts.kind)?;

    let (document, row_count) = match opts.kind {
        Kind::Bookings => {
            let bookings: Vec<Booking> = load_entities(&path)?;
            let filtered = booking_criteria(&opts.filter).filter_collection(&bookings);
            let doc = to_csv(filtered.iter().copied(), &schemas::booking_columns())?;
            (doc, filtered.len())
        }
        Kind::Properties => {
            let properties: Vec<Property> = load_entities(&path)?;
            let filtered = property_criteria(&opts.filter).filter_collection(&properties);
            let doc = to_csv(filtered.iter().copied(), &schemas::property_columns())?;
            (doc, filtered.len())
        }
        Kind::Payments => {
            let payments: Vec<Payment> = load_entities(&path)?;
            let filtered = payment_criteria(&opts.filter).filter_collection(&payments);
            let doc = to_csv(filtered.iter().copied(), &schemas::payment_columns())?;
            (doc, filtered.len())
        }
    };

    deliver(ctx, &document, row_count, opts.output.as_deref())
}

/// Writes the document to the chosen destination.
fn deliver(
    ctx: &CommandContext,
    document: &str,
    row_count: usize,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, document)?;
            if !ctx.quiet {
                eprintln!("Wrote {row_count} rows to {}", path.display());
            }
        }
        None => println!("{document}"),
    }
    Ok(())
}
