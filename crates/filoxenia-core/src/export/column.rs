//! Export columns and cell formatting.

use crate::dates::parse_iso_date;

/// One column of an export schema: a display header plus the rule that
/// extracts and types a cell from an entity.
#[derive(Debug, Clone)]
pub struct Column<T> {
    /// Display name emitted in the header row.
    pub header: &'static str,
    /// Extracts the typed cell value from one entity.
    pub cell: fn(&T) -> Cell,
}

impl<T> Column<T> {
    /// Creates a column.
    pub fn new(header: &'static str, cell: fn(&T) -> Cell) -> Self {
        Self { header, cell }
    }
}

/// A typed cell value, rendered per the console's Greek display
/// conventions.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Plain text, rendered as-is.
    Text(String),
    /// Raw ISO date, rendered as a Greek short date (dd/mm/yyyy). An
    /// unparseable value renders as the raw string rather than erroring.
    Date(String),
    /// Whole number, rendered with Greek thousands grouping (1.234).
    Integer(i64),
    /// Monetary amount, rendered as a plain decimal string with two places.
    Money(f64),
    /// Missing value, rendered as the empty string.
    Empty,
}

impl Cell {
    /// Text cell from an optional value; `None` becomes [`Cell::Empty`].
    pub fn opt_text(value: Option<&str>) -> Cell {
        match value {
            Some(text) => Cell::Text(text.to_string()),
            None => Cell::Empty,
        }
    }

    /// Renders the cell to its display string. Total: absent and malformed
    /// values degrade to empty or raw text, never an error.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Date(raw) => match parse_iso_date(raw) {
                Some(date) => date.format("%d/%m/%Y").to_string(),
                None => raw.clone(),
            },
            Cell::Integer(value) => group_thousands(*value),
            Cell::Money(value) => format!("{value:.2}"),
            Cell::Empty => String::new(),
        }
    }
}

/// Greek-locale digit grouping: a `.` every three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
