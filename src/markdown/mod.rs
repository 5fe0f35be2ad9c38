//! Markdown dialect for meeting minutes
//!
//! This module turns a [`Meeting`](crate::minutes::Meeting) into Markdown and
//! back. It is split into:
//! - `serializer`: fixed-order rendering, empty sections omitted
//! - `parser`: line-oriented section state machine with note continuation
//!
//! The heading and bullet markers below are the wire format shared by both
//! halves; changing one side without the other breaks round-trips.

mod parser;
mod serializer;

pub use parser::{Parser, parse};
pub use serializer::{Serializer, serialize};

pub(crate) const PROJECT_PREFIX: &str = "# ";
pub(crate) const TITLE_PREFIX: &str = "## ";
pub(crate) const TOPIC_PREFIX: &str = "### ";

pub(crate) const DETAILS_HEADING: &str = "### Meeting Details";
pub(crate) const ATTENDEES_HEADING: &str = "## Attendees";
pub(crate) const DESCRIPTION_HEADING: &str = "### Description";
pub(crate) const LEGACY_DESCRIPTION_HEADING: &str = "## Description";
pub(crate) const COST_HEADING: &str = "### Meeting Cost";
pub(crate) const MINUTES_HEADING: &str = "## Minutes";
pub(crate) const TOPIC_SEPARATOR: &str = "---";

pub(crate) const DATE_BULLET: &str = "- Date/Time:";
pub(crate) const LOCATION_BULLET: &str = "- Location:";
pub(crate) const MINUTE_TAKER_BULLET: &str = "- Minute Taker:";

pub(crate) const OWNER_BULLET: &str = "- Owner:";
pub(crate) const DUE_BULLET: &str = "- Due:";
pub(crate) const TYPE_BULLET: &str = "- Type:";
pub(crate) const NOTES_BULLET: &str = "- Notes:";

pub(crate) const COST_ATTENDEES_BULLET: &str = "- Attendees:";
pub(crate) const COST_RATE_BULLET: &str = "- Hourly Rate:";
pub(crate) const COST_DURATION_BULLET: &str = "- Duration:";
pub(crate) const COST_TOTAL_BULLET: &str = "- **Total Cost:";

pub(crate) const LIST_ITEM_PREFIX: &str = "- ";

/// Marks a note line that continues on the next line
pub(crate) const LINE_CONTINUATION: char = '\\';

/// Normalize line endings in a string to LF (\n)
///
/// Text pasted from other tools may carry `\r\n` or bare `\r`; the parser
/// only splits on `\n`.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
