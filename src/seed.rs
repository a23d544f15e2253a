//! Seed dataset used to bootstrap an empty store
//!
//! When the snapshot file is absent or empty the store starts from these
//! events and persists them immediately, so a configured store is never
//! empty after initialization.

use chrono::NaiveDate;

use crate::types::TimelineEvent;

/// Title, description, date triples for the default timeline
const SEED_ROWS: &[(&str, &str, &str)] = &[
    (
        "First powered flight",
        "The Wright brothers fly at Kitty Hawk, North Carolina.",
        "1903-12-17",
    ),
    (
        "Transistor invented",
        "Bardeen, Brattain and Shockley demonstrate the point-contact transistor at Bell Labs.",
        "1947-12-23",
    ),
    (
        "Sputnik 1 launch",
        "The Soviet Union launches the first artificial satellite into orbit.",
        "1957-10-04",
    ),
    (
        "Moon landing",
        "Apollo 11 lands and Armstrong walks on the lunar surface.",
        "1969-07-20",
    ),
    (
        "ARPANET first message",
        "The first host-to-host message is sent between UCLA and Stanford.",
        "1969-10-29",
    ),
    (
        "World Wide Web proposal",
        "Tim Berners-Lee circulates 'Information Management: A Proposal' at CERN.",
        "1989-03-12",
    ),
    (
        "Human genome draft",
        "A working draft of the human genome sequence is announced.",
        "2000-06-26",
    ),
    (
        "Voyager 1 enters interstellar space",
        "Voyager 1 becomes the first spacecraft to cross the heliopause.",
        "2012-08-25",
    ),
];

/// Build the seed events with ids assigned in date order
pub fn default_events() -> Vec<TimelineEvent> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(i, (title, description, date))| {
            // Seed dates are compile-time constants in YYYY-MM-DD form
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap_or_else(|_| panic!("invalid seed date: {}", date));
            TimelineEvent::new(i as u64 + 1, *title, *description, date)
        })
        .collect()
}
