//! CSV export of the conversion history.
//!
//! The row format is the app's one bit-exact surface: two decimal places
//! for the input value, four for the result.

use std::path::Path;

use crate::shared::error::AppResult;
use crate::shared::types::ConversionRecord;

pub const CSV_HEADER: &str = "Conversion";
pub const DEFAULT_EXPORT_FILE: &str = "conversion_history.csv";

/// `"<value:2dp> <from_unit> → <result:4dp> <to_unit> (<category>)"`
pub fn format_record(record: &ConversionRecord) -> String {
    format!(
        "{:.2} {} → {:.4} {} ({})",
        record.value, record.from_unit, record.result, record.to_unit, record.category
    )
}

/// Single-column CSV: header row, then one formatted row per record in the
/// order given (callers pass newest-first to match the display).
pub fn history_csv(records: &[ConversionRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    for record in records {
        out.push('\n');
        out.push_str(&format_record(record));
    }
    out.push('\n');
    out
}

/// Write the history CSV to `path`, returning the number of data rows.
pub fn write_history_csv(path: &Path, records: &[ConversionRecord]) -> AppResult<usize> {
    std::fs::write(path, history_csv(records))?;
    Ok(records.len())
}
