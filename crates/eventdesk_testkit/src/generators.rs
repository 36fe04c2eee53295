//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data that stays within
//! what the line format can carry.

use chrono::NaiveDate;
use eventdesk_codec::{EventRecord, UserRecord};
use eventdesk_core::{EventDraft, ParticipantKind};
use proptest::prelude::*;

/// Strategy for event text fields: non-blank, trimmed, no `|` or line
/// breaks. Commas and quotes are allowed.
pub fn text_field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 .,'\"-]{0,30}[A-Za-z0-9]")
        .expect("Invalid regex")
}

/// Strategy for participant names: like text fields but without commas.
pub fn participant_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z .'-]{0,20}[A-Za-z]").expect("Invalid regex")
}

/// Strategy for dates between 2000 and 2099.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day 1..=28 is always valid"))
}

/// Strategy for participant kinds.
pub fn participant_kind_strategy() -> impl Strategy<Value = ParticipantKind> {
    prop_oneof![Just(ParticipantKind::Student), Just(ParticipantKind::Staff)]
}

/// Strategy for validated event drafts.
pub fn event_draft_strategy() -> impl Strategy<Value = EventDraft> {
    (
        text_field_strategy(),
        date_strategy(),
        text_field_strategy(),
        text_field_strategy(),
    )
        .prop_map(|(name, date, venue, organizer)| {
            EventDraft::new(&name, date, &venue, &organizer).expect("generated draft is valid")
        })
}

/// Strategy for event records as they appear in the events file.
pub fn event_record_strategy() -> impl Strategy<Value = EventRecord> {
    (
        1u64..10_000,
        text_field_strategy(),
        date_strategy(),
        text_field_strategy(),
        text_field_strategy(),
        prop::collection::vec(
            (participant_name_strategy(), participant_kind_strategy())
                .prop_map(|(name, kind)| format!("{name} - {kind}")),
            0..5,
        ),
    )
        .prop_map(|(id, name, date, venue, organizer, participants)| EventRecord {
            id,
            name,
            date,
            venue,
            organizer,
            participants,
        })
}

/// Strategy for accounts.
pub fn user_record_strategy() -> impl Strategy<Value = UserRecord> {
    (
        prop::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("Invalid regex"),
        prop::string::string_regex("[A-Za-z0-9!@#$%^&*]{1,20}").expect("Invalid regex"),
    )
        .prop_map(|(username, password)| UserRecord::new(username, password))
}

/// A store mutation, for model-based tests.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// Add an event.
    Add(EventDraft),
    /// Remove the event at this position of the current list, if any.
    Remove(usize),
}

/// Strategy for sequences of store mutations.
pub fn store_ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => event_draft_strategy().prop_map(StoreOp::Add),
            1 => (0usize..20).prop_map(StoreOp::Remove),
        ],
        0..max_len,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_codec::{decode_lines, encode_lines};
    use proptest::test_runner::TestRunner;

    #[test]
    fn generated_records_survive_the_file_format() {
        let mut runner = TestRunner::default();
        runner
            .run(&prop::collection::vec(event_record_strategy(), 0..10), |records| {
                let decoded = decode_lines::<EventRecord>(&encode_lines(&records));
                prop_assert!(decoded.is_clean());
                prop_assert_eq!(decoded.records, records);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn generated_users_decode() {
        let mut runner = TestRunner::default();
        runner
            .run(&user_record_strategy(), |user| {
                let decoded = decode_lines::<UserRecord>(&encode_lines(&[user.clone()]));
                prop_assert_eq!(decoded.records, vec![user]);
                Ok(())
            })
            .unwrap();
    }
}
