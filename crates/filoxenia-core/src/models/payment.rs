//! Payment model.

use serde::{Deserialize, Serialize};

use crate::filter::FieldAccessor;

/// A payment received against a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The unique identifier for the payment.
    pub id: String,

    /// The ID of the booking the payment settles.
    pub booking_id: String,

    /// Name of the payer.
    pub payer_name: String,

    /// How the payment was made.
    pub method: PaymentMethod,

    /// Processing status.
    pub status: PaymentStatus,

    /// Paid amount.
    pub amount: f64,

    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Processor or bank reference, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// When the payment was made (ISO 8601).
    pub paid_at: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Payment {
    /// The fields the payments screen searches over.
    pub fn search_fields() -> Vec<FieldAccessor<Payment>> {
        vec![
            |p: &Payment| Some(p.payer_name.clone()),
            |p: &Payment| p.reference.clone(),
            |p: &Payment| Some(p.booking_id.clone()),
            |p: &Payment| Some(p.id.clone()),
        ]
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    /// The wire token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    /// The Greek display label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Κάρτα",
            PaymentMethod::Cash => "Μετρητά",
            PaymentMethod::BankTransfer => "Τραπεζικό έμβασμα",
        }
    }
}

/// Processing status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Initiated but not settled.
    Pending,
    /// Settled.
    Completed,
    /// Rejected by the processor.
    Failed,
    /// Returned to the payer.
    Refunded,
}

impl PaymentStatus {
    /// The wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    /// The Greek display label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Σε αναμονή",
            PaymentStatus::Completed => "Ολοκληρωμένη",
            PaymentStatus::Failed => "Αποτυχημένη",
            PaymentStatus::Refunded => "Επιστράφηκε",
        }
    }
}
