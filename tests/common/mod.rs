//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use minutes_md::{CostSnapshot, Meeting, TopicItem};

/// Build a wall-clock time on 2025-03-14
pub fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// A meeting with every field populated
pub fn full_meeting() -> Meeting {
    Meeting {
        project: Some("Apollo".to_string()),
        title: Some("Weekly sync".to_string()),
        held_at: Some(at(14, 30)),
        place: Some("Room 4B".to_string()),
        minute_taker: Some("Dana".to_string()),
        attendees: vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()],
        description: Some("Quarterly planning.\nBring numbers.\n\nAgenda attached.".to_string()),
        topics: vec![
            TopicItem::new("Budget")
                .with_owner("Alice")
                .with_due("2025-04-01")
                .with_note("line one\nline two\n\nline four"),
            TopicItem::new("Hiring").with_kind("decision").with_note("Open two roles"),
            TopicItem::new("Office move").with_kind("info"),
        ],
        cost: Some(CostSnapshot {
            attendees: 3,
            hourly_rate: 120.0,
            elapsed_secs: 1830,
            total_cents: 18_300,
        }),
    }
}
