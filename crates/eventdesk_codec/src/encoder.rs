//! Flat-file encoder.

use crate::record::LineRecord;

/// Encodes a complete collection, one line per record.
///
/// Every line, including the last, ends with `\n`. An empty collection
/// encodes to an empty string.
pub fn encode_lines<T: LineRecord>(records: &[T]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.encode_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_lines;
    use crate::record::UserRecord;

    #[test]
    fn encode_terminates_every_line() {
        let users = vec![
            UserRecord::new("admin", "admin123"),
            UserRecord::new("groupfive", "BIT1201"),
        ];
        assert_eq!(encode_lines(&users), "admin|admin123\ngroupfive|BIT1201\n");
    }

    #[test]
    fn encode_empty_collection() {
        let users: Vec<UserRecord> = Vec::new();
        assert_eq!(encode_lines(&users), "");
    }

    #[test]
    fn encoded_users_decode_back() {
        let users = vec![UserRecord::new("a", "1"), UserRecord::new("b", "2")];
        let decoded = decode_lines::<UserRecord>(&encode_lines(&users));
        assert_eq!(decoded.records, users);
    }
}
