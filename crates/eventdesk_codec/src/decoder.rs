//! Fault-tolerant flat-file decoder.

use crate::error::CodecError;
use crate::record::LineRecord;

/// A line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// The raw line text.
    pub content: String,
    /// Why the line was rejected.
    pub error: CodecError,
}

/// Outcome of decoding a whole file.
///
/// Decoding never fails as a whole: every line either becomes a record or
/// ends up in `skipped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// Records decoded successfully, in file order.
    pub records: Vec<T>,
    /// Lines that were rejected, in file order.
    pub skipped: Vec<SkippedLine>,
}

impl<T> Decoded<T> {
    /// Returns true if no line was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl<T> Default for Decoded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Decodes every line of `text`.
///
/// Blank (whitespace-only) lines are ignored. Lines that fail to decode are
/// collected in [`Decoded::skipped`] and decoding carries on.
pub fn decode_lines<T: LineRecord>(text: &str) -> Decoded<T> {
    let mut decoded = Decoded::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match T::decode_line(line) {
            Ok(record) => decoded.records.push(record),
            Err(error) => decoded.skipped.push(SkippedLine {
                line_number: index + 1,
                content: line.to_string(),
                error,
            }),
        }
    }

    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EventRecord, UserRecord};

    #[test]
    fn skips_blank_lines() {
        let text = "\n1|Talk|01/02/2025|Hall|Ann|\n   \n\n";
        let decoded: Decoded<EventRecord> = decode_lines(text);
        assert_eq!(decoded.records.len(), 1);
        assert!(decoded.is_clean());
    }

    #[test]
    fn malformed_line_does_not_abort() {
        let text = "1|AI Workshop|15/12/2024|Room 101|Dr. Smith|John Doe - Student\n\
                    2|Broken|15/12/2024\n";
        let decoded: Decoded<EventRecord> = decode_lines(text);

        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].name, "AI Workshop");
        assert_eq!(decoded.skipped.len(), 1);
        assert_eq!(decoded.skipped[0].line_number, 2);
        assert_eq!(decoded.skipped[0].content, "2|Broken|15/12/2024");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let text = "admin|admin123\r\ngroupfive|BIT1201\r\n";
        let decoded: Decoded<UserRecord> = decode_lines(text);
        assert_eq!(decoded.records[1].password, "BIT1201");
    }

    #[test]
    fn bad_user_lines_are_reported() {
        let text = "admin|admin123\nnot-a-user\nx|y|z\n";
        let decoded: Decoded<UserRecord> = decode_lines(text);
        assert_eq!(decoded.records.len(), 1);
        let numbers: Vec<_> = decoded.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn empty_text_decodes_to_nothing() {
        let decoded: Decoded<UserRecord> = decode_lines("");
        assert!(decoded.records.is_empty());
        assert!(decoded.is_clean());
    }
}
