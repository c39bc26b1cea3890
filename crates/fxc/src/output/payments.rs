//! Payment output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use filoxenia_core::models::{Payment, PaymentStatus};

use super::helpers::{format_amount, format_date, truncate_str};

/// JSON output structure for the payment list.
#[derive(Serialize)]
struct ListOutput<'a> {
    total: usize,
    payments: &'a [&'a Payment],
}

/// Formats payments as pretty-printed JSON.
pub fn format_payments_json(payments: &[&Payment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListOutput {
        total: payments.len(),
        payments,
    })
}

/// Formats payments as an aligned table.
pub fn format_payments_table(payments: &[&Payment], use_colors: bool) -> String {
    if payments.is_empty() {
        return "Δεν βρέθηκαν πληρωμές.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<10} {:<10} {:<22} {:<18} {:<14} {:<12} {}",
        "Κωδικός", "Κράτηση", "Πληρωτής", "Μέθοδος", "Κατάσταση", "Ημ/νία", "Ποσό"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for payment in payments {
        let line = format!(
            "{:<10} {:<10} {:<22} {:<18} {:<14} {:<12} {}",
            truncate_str(&payment.id, 10),
            truncate_str(&payment.booking_id, 10),
            truncate_str(&payment.payer_name, 22),
            payment.method.label(),
            format_status(payment.status, use_colors),
            format_date(&payment.paid_at),
            format_amount(payment.amount, &payment.currency),
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a payment status with its console color.
fn format_status(status: PaymentStatus, use_colors: bool) -> String {
    let label = status.label();
    if !use_colors {
        return label.to_string();
    }
    match status {
        PaymentStatus::Completed => label.green().to_string(),
        PaymentStatus::Pending => label.yellow().to_string(),
        PaymentStatus::Failed => label.red().to_string(),
        PaymentStatus::Refunded => label.dimmed().to_string(),
    }
}
