//! CSV document assembly.

use thiserror::Error;

use super::column::Column;

/// Leading byte-order mark so spreadsheet applications decode Greek text
/// correctly.
const UTF8_BOM: char = '\u{feff}';

/// Errors that can occur while assembling an export document.
///
/// With the in-memory writer these are not expected in practice, but they
/// are propagated rather than swallowed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying CSV writer failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The assembled document was not valid UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a collection to a CSV document under the given column schema.
///
/// The document has a header row of column display names, one row per
/// entity in iteration order, every field double-quoted (embedded quotes
/// doubled), LF-only record separators, a leading byte-order mark, and no
/// trailing newline.
pub fn to_csv<'a, T, I>(rows: I, columns: &[Column<T>]) -> Result<String, ExportError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|column| column.header))?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| (column.cell)(row).render()))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    let body = String::from_utf8(bytes)?;
    Ok(format!("{UTF8_BOM}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Cell;

    struct Row {
        name: String,
        note: Option<String>,
        amount: f64,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("Όνομα", |r: &Row| Cell::Text(r.name.clone())),
            Column::new("Σημείωση", |r: &Row| Cell::opt_text(r.note.as_deref())),
            Column::new("Ποσό", |r: &Row| Cell::Money(r.amount)),
        ]
    }

    fn make_row(name: &str, note: Option<&str>, amount: f64) -> Row {
        Row {
            name: name.to_string(),
            note: note.map(str::to_string),
            amount,
        }
    }

    #[test]
    fn test_document_shape() {
        let rows = vec![
            make_row("Πάρος", Some("ok"), 120.0),
            make_row("Athens", None, 80.5),
        ];

        let doc = to_csv(rows.iter(), &columns()).unwrap();

        assert!(doc.starts_with('\u{feff}'));
        assert!(!doc.ends_with('\n'));
        assert!(!doc.contains('\r'));

        let lines: Vec<&str> = doc.trim_start_matches('\u{feff}').split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "\"Όνομα\",\"Σημείωση\",\"Ποσό\"",
                "\"Πάρος\",\"ok\",\"120.00\"",
                "\"Athens\",\"\",\"80.50\"",
            ]
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![make_row(r#"He said "hi", then left"#, None, 0.0)];

        let doc = to_csv(rows.iter(), &columns()).unwrap();

        assert!(doc.contains(r#""He said ""hi"", then left""#));
    }

    #[test]
    fn test_empty_collection_emits_header_only() {
        let rows: Vec<Row> = vec![];

        let doc = to_csv(rows.iter(), &columns()).unwrap();

        assert_eq!(doc, "\u{feff}\"Όνομα\",\"Σημείωση\",\"Ποσό\"");
    }
}
