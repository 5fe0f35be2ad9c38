//! Meeting minutes domain models
//!
//! This module contains the document model and the collaborators that feed it.
//! It is split into submodules:
//! - `meeting`: `Meeting` and `TopicItem`, the data the Markdown engine reads and writes
//! - `cost`: live cost ticker and attendee counting
//! - `form`: form state and the minutes table controller

mod cost;
mod form;
mod meeting;

// Re-export all public types
pub use cost::{
    CostSnapshot, CostTicker, DEFAULT_ATTENDEES, DEFAULT_HOURLY_RATE, WORKING_HOURS_PER_YEAR,
    cost_for, count_attendees, to_cents,
};
pub use form::{MinutesForm, MinutesTable};
pub use meeting::{Meeting, TopicItem, TopicType, UNTITLED_TOPIC, non_empty, text};
