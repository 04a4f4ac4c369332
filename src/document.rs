use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::record::NormalizedEntry;

/// YNAB import columns, in file order
pub const COLUMNS: [&str; 6] = ["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"];

const FILENAME_PREFIX: &str = "sydbank_csv_";
const FILENAME_TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H.%M.%S";
const FILENAME_EXTENSION: &str = "csv";

/// A rendered YNAB import file, not yet written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub text: String,
    pub filename: String,
}

/// Renders entries as comma-separated text with a header row.
///
/// Documents rendered within the same second get the same filename.
pub fn serialize(entries: &[NormalizedEntry], now: NaiveDateTime) -> Result<OutputDocument> {
    if entries.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(OutputDocument {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        filename: output_filename(now),
    })
}

pub fn output_filename(now: NaiveDateTime) -> String {
    format!(
        "{FILENAME_PREFIX}{}.{FILENAME_EXTENSION}",
        now.format(FILENAME_TIMESTAMP_FORMAT)
    )
}
