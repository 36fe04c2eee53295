//! Benchmark utilities.

use chrono::{Duration, NaiveDate};
use eventdesk_codec::EventRecord;
use eventdesk_core::EventDraft;
use rand::seq::SliceRandom;
use rand::Rng;

const VENUES: [&str; 6] = [
    "Room 101",
    "Main Hall",
    "Lab 3",
    "Library Annex",
    "Sports Centre",
    "Lecture Theatre B",
];

const ORGANIZERS: [&str; 4] = ["Dr. Smith", "Prof. Johnson", "CS Society", "Careers Office"];

fn random_word(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn random_date(rng: &mut impl Rng) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    base + Duration::days(rng.gen_range(0..730))
}

/// Generate event records with up to `max_participants` participants each.
pub fn generate_records(count: usize, max_participants: usize) -> Vec<EventRecord> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let participants = (0..rng.gen_range(0..=max_participants))
                .map(|_| {
                    let role = if rng.gen_bool(0.8) { "Student" } else { "Staff" };
                    format!("{} - {role}", random_word(&mut rng, 8))
                })
                .collect();
            EventRecord {
                id: i as u64 + 1,
                name: format!("Event {}", random_word(&mut rng, 6)),
                date: random_date(&mut rng),
                venue: VENUES.choose(&mut rng).copied().unwrap_or("Room 101").to_string(),
                organizer: ORGANIZERS
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("Dr. Smith")
                    .to_string(),
                participants,
            }
        })
        .collect()
}

/// Generate valid drafts.
pub fn generate_drafts(count: usize) -> Vec<EventDraft> {
    generate_records(count, 0)
        .into_iter()
        .filter_map(|r| EventDraft::new(&r.name, r.date, &r.venue, &r.organizer).ok())
        .collect()
}
