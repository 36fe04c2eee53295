//! Cross-crate integration test helpers.
//!
//! [`StoreHarness`] drives a [`RecordStore`] while keeping a plain model of
//! what it should contain, and checks both the store and its events file
//! against that model.

use crate::fixtures::TestStore;
use crate::generators::StoreOp;
use eventdesk_codec::{decode_lines, EventRecord};
use eventdesk_core::{EventDraft, EventId};

/// A test harness for model-based testing.
pub struct StoreHarness {
    /// The store under test.
    pub store: TestStore,
    expected: Vec<(EventId, EventDraft)>,
    issued: Vec<EventId>,
}

impl StoreHarness {
    /// Creates a harness over an empty memory-backed store.
    pub fn new() -> Self {
        Self {
            store: TestStore::empty(),
            expected: Vec::new(),
            issued: Vec::new(),
        }
    }

    /// Adds an event and tracks it.
    pub fn add(&mut self, draft: EventDraft) -> EventId {
        let id = self.store.add_event(draft.clone());
        self.expected.push((id, draft));
        self.issued.push(id);
        id
    }

    /// Removes the event at `position` in the current list, if there is one.
    pub fn remove_at(&mut self, position: usize) -> Option<EventId> {
        if position >= self.expected.len() {
            return None;
        }
        let (id, _) = self.expected.remove(position);
        assert!(self.store.remove_event(id), "store lost event {id}");
        Some(id)
    }

    /// Applies one generated operation.
    pub fn apply(&mut self, op: StoreOp) {
        match op {
            StoreOp::Add(draft) => {
                self.add(draft);
            }
            StoreOp::Remove(position) => {
                self.remove_at(position);
            }
        }
    }

    /// Ids handed out so far, in order.
    pub fn issued_ids(&self) -> &[EventId] {
        &self.issued
    }

    /// Checks the store and its events file against the model.
    pub fn verify(&self) {
        let events = self.store.get_all_events();
        assert_eq!(events.len(), self.expected.len(), "event count mismatch");

        for (event, (id, draft)) in events.iter().zip(&self.expected) {
            assert_eq!(event.id(), *id);
            assert_eq!(event.name(), draft.name());
            assert_eq!(event.date(), draft.date());
            assert_eq!(event.venue(), draft.venue());
            assert_eq!(event.organizer(), draft.organizer());
        }

        assert!(
            self.issued.windows(2).all(|pair| pair[0] < pair[1]),
            "ids not strictly increasing: {:?}",
            self.issued
        );

        let on_disk = decode_lines::<EventRecord>(&self.store.events_text());
        assert!(on_disk.is_clean(), "events file has bad lines: {:?}", on_disk.skipped);
        let disk_ids: Vec<u64> = on_disk.records.iter().map(|r| r.id).collect();
        let model_ids: Vec<u64> = self.expected.iter().map(|(id, _)| id.as_u64()).collect();
        assert_eq!(disk_ids, model_ids, "events file out of sync");
    }
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}
