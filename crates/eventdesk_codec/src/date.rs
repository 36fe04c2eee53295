//! Calendar date text format.

use crate::error::{CodecError, CodecResult};
use chrono::NaiveDate;

/// `strftime` pattern for stored and exported dates (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// `strftime` pattern for backup file suffixes (`yyyyMMdd`).
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d";

/// Formats a date as `dd/MM/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `dd/MM/yyyy` date. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CodecError::InvalidDate`] if the text is not a real calendar
/// date in that form.
pub fn parse_date(input: &str) -> CodecResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| CodecError::invalid_date(input))
}

/// Formats a date as the `yyyyMMdd` stamp used in backup file names.
#[must_use]
pub fn backup_stamp(date: NaiveDate) -> String {
    date.format(BACKUP_STAMP_FORMAT).to_string()
}
