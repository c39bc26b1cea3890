//! CSV export of filtered entity collections.
//!
//! Every list screen offers "export what you see": the filtered collection
//! is serialized to a UTF-8 CSV document with a fixed, documented column
//! schema per entity type. The document carries a leading byte-order mark
//! (spreadsheet applications need it to pick up Greek text), LF-only line
//! endings, a header row, and every field double-quoted.
//!
//! Delivery of the document (file save, clipboard) is the caller's concern;
//! this module only produces the text.

mod column;
pub mod schemas;
mod writer;

pub use column::{Cell, Column};
pub use writer::{to_csv, ExportError};
