//! Property output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use filoxenia_core::models::{Property, PropertyStatus};

use super::helpers::{format_amount, truncate_str};

/// JSON output structure for the property list.
#[derive(Serialize)]
struct ListOutput<'a> {
    total: usize,
    properties: &'a [&'a Property],
}

/// Formats properties as pretty-printed JSON.
pub fn format_properties_json(properties: &[&Property]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListOutput {
        total: properties.len(),
        properties,
    })
}

/// Formats properties as an aligned table.
pub fn format_properties_table(properties: &[&Property], use_colors: bool) -> String {
    if properties.is_empty() {
        return "Δεν βρέθηκαν ακίνητα.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<10} {:<24} {:<16} {:<14} {:<14} {:<12} {}",
        "Κωδικός", "Όνομα", "Περιοχή", "Τύπος", "Κατάσταση", "Υπνοδωμ.", "Τιμή/βράδυ"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for property in properties {
        let line = format!(
            "{:<10} {:<24} {:<16} {:<14} {:<14} {:<12} {}",
            truncate_str(&property.id, 10),
            truncate_str(&property.name, 24),
            truncate_str(&property.area, 16),
            property.property_type.label(),
            format_status(property.status, use_colors),
            property.bedrooms,
            format_amount(property.price_per_night, "EUR"),
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a property status with its console color.
fn format_status(status: PropertyStatus, use_colors: bool) -> String {
    let label = status.label();
    if !use_colors {
        return label.to_string();
    }
    match status {
        PropertyStatus::Active => label.green().to_string(),
        PropertyStatus::Inactive => label.dimmed().to_string(),
        PropertyStatus::Maintenance => label.yellow().to_string(),
    }
}
