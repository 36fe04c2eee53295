//! # EventDesk Codec
//!
//! Flat-file encoding/decoding for EventDesk.
//!
//! Data files are line oriented, one record per line:
//!
//! ```text
//! events.txt   id|name|dd/MM/yyyy|venue|organizer|participant1,participant2,...
//! users.txt    username|password
//! ```
//!
//! ## Rules
//!
//! - Encoding always produces the complete file; there is no append mode
//! - Decoding is per line and never aborts: blank lines are ignored and
//!   malformed lines are reported in [`Decoded::skipped`]
//! - Dates are `dd/MM/yyyy`
//! - The stored event id is informational; readers reassign ids
//!
//! The crate also encodes the CSV export (see [`encode_csv`]).
//!
//! ## Usage
//!
//! ```
//! use eventdesk_codec::{decode_lines, encode_lines, UserRecord};
//!
//! let users = vec![UserRecord::new("admin", "admin123")];
//! let text = encode_lines(&users);
//! assert_eq!(text, "admin|admin123\n");
//!
//! let decoded = decode_lines::<UserRecord>(&text);
//! assert_eq!(decoded.records, users);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod csv;
mod date;
mod decoder;
mod encoder;
mod error;
mod record;

pub use csv::{encode_csv, encode_csv_row, escape_field, CSV_HEADER};
pub use date::{backup_stamp, format_date, parse_date, BACKUP_STAMP_FORMAT, DATE_FORMAT};
pub use decoder::{decode_lines, Decoded, SkippedLine};
pub use encoder::encode_lines;
pub use error::{CodecError, CodecResult};
pub use record::{EventRecord, LineRecord, UserRecord, FIELD_SEPARATOR, PARTICIPANT_SEPARATOR};
