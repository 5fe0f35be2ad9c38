//! Editor state behind the minutes form
//!
//! `MinutesForm` holds what the user typed, as strings, and converts it to a
//! [`Meeting`] for export or replaces it wholesale from an imported one.
//! `MinutesTable` is the row controller the UI layer calls to add or remove
//! rows; there is no global hook.

use chrono::NaiveDateTime;

use super::cost::{CostTicker, count_attendees};
use super::meeting::{Meeting, TopicItem, non_empty};
use crate::datetime::{DateStyle, default_meeting_time, format_datetime_local, parse_datetime_local};
use crate::markdown::{Parser, Serializer};

/// Rows of the minutes table
///
/// Always holds at least one row once created through [`MinutesTable::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct MinutesTable {
    rows: Vec<TopicItem>,
}

impl Default for MinutesTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MinutesTable {
    /// A table with one blank row
    pub fn new() -> Self {
        Self {
            rows: vec![TopicItem::default()],
        }
    }

    pub fn rows(&self) -> &[TopicItem] {
        &self.rows
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut TopicItem> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a blank row and return its index
    pub fn add_row(&mut self) -> usize {
        self.rows.push(TopicItem::default());
        self.rows.len() - 1
    }

    /// Remove a row; the last remaining row is never removed
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Append a blank row if the last row has content
    ///
    /// Returns the index of the new row when one was added.
    pub fn ensure_trailing_blank_row(&mut self) -> Option<usize> {
        match self.rows.last() {
            Some(last) if last.is_blank() => None,
            _ => Some(self.add_row()),
        }
    }

    /// Discard every row, load `topics` in order, then add one blank row
    pub fn replace_rows(&mut self, topics: Vec<TopicItem>) {
        self.rows = topics;
        self.add_row();
    }

    /// Keep a single blank row
    pub fn clear(&mut self) {
        self.rows.truncate(1);
        match self.rows.first_mut() {
            Some(first) => *first = TopicItem::default(),
            None => self.rows.push(TopicItem::default()),
        }
    }
}

/// Field values of the minutes form
#[derive(Debug, Clone, PartialEq)]
pub struct MinutesForm {
    pub project: String,
    pub title: String,
    /// `datetime-local` value, `YYYY-MM-DDTHH:MM`
    pub held_at: String,
    pub place: String,
    pub minute_taker: String,
    /// One attendee per line
    pub attendees: String,
    pub description: String,
    pub table: MinutesTable,
    pub ticker: CostTicker,
    /// Whether the cost tracker panel is open
    pub ticker_visible: bool,
    /// Attendee count used when the attendees field is empty
    pub fallback_attendees: u32,
}

impl MinutesForm {
    /// A fresh form with the held-at time defaulted from `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self::with_ticker(CostTicker::default(), now)
    }

    pub fn with_ticker(ticker: CostTicker, now: NaiveDateTime) -> Self {
        let mut form = Self {
            project: String::new(),
            title: String::new(),
            held_at: String::new(),
            place: String::new(),
            minute_taker: String::new(),
            attendees: String::new(),
            description: String::new(),
            fallback_attendees: ticker.attendees().max(1),
            table: MinutesTable::new(),
            ticker,
            ticker_visible: false,
        };
        form.reset_to_defaults(now);
        form
    }

    /// Empty every field and leave one blank row
    ///
    /// The ticker keeps its rate; it is stopped and zeroed.
    pub fn clear(&mut self) {
        self.project.clear();
        self.title.clear();
        self.held_at.clear();
        self.place.clear();
        self.minute_taker.clear();
        self.attendees.clear();
        self.description.clear();
        self.table.clear();
        self.ticker.reset();
    }

    /// Clear, then default the held-at time to `now` rounded down to 15 minutes
    pub fn reset_to_defaults(&mut self, now: NaiveDateTime) {
        self.clear();
        self.held_at = default_meeting_time(now);
    }

    /// Recount attendees and push the count into the ticker
    pub fn attendee_count(&mut self) -> u32 {
        let count = count_attendees(&self.attendees, self.fallback_attendees);
        self.ticker.set_attendees(count);
        count
    }

    /// Open or close the cost tracker panel
    ///
    /// Opening recounts attendees and starts the ticker when a meeting time
    /// is set and the inputs are valid; failure to start is not an error here.
    pub fn toggle_ticker(&mut self, now: NaiveDateTime) -> bool {
        self.ticker_visible = !self.ticker_visible;
        if self.ticker_visible {
            self.attendee_count();
            if let Some(held_at) = parse_datetime_local(&self.held_at)
                && !self.ticker.is_running()
                && let Err(err) = self.ticker.start(Some(held_at), now)
            {
                tracing::debug!(%err, "cost ticker not auto-started");
            }
        }
        self.ticker_visible
    }

    /// Snapshot the form as a [`Meeting`]
    ///
    /// Empty strings become absent fields. The cost snapshot is attached
    /// only while the tracker panel is visible.
    pub fn snapshot(&self, now: NaiveDateTime) -> Meeting {
        Meeting {
            project: non_empty(self.project.trim()),
            title: non_empty(self.title.trim()),
            held_at: parse_datetime_local(&self.held_at),
            place: non_empty(self.place.trim()),
            minute_taker: non_empty(self.minute_taker.trim()),
            attendees: self
                .attendees
                .lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            description: non_empty(self.description.as_str()),
            topics: self.table.rows().to_vec(),
            cost: self.ticker_visible.then(|| self.ticker.snapshot(now)),
        }
    }

    /// Replace the whole form with `meeting`
    ///
    /// Existing rows are discarded and one blank row is appended after the
    /// imported topics.
    pub fn load(&mut self, meeting: Meeting) {
        self.clear();
        self.project = meeting.project.unwrap_or_default();
        self.title = meeting.title.unwrap_or_default();
        self.held_at = meeting
            .held_at
            .map(|held_at| format_datetime_local(&held_at))
            .unwrap_or_default();
        self.place = meeting.place.unwrap_or_default();
        self.minute_taker = meeting.minute_taker.unwrap_or_default();
        self.attendees = meeting.attendees.join("\n");
        self.description = meeting.description.unwrap_or_default();
        if let Some(cost) = &meeting.cost {
            self.ticker.set_attendees(cost.attendees);
            self.ticker.set_hourly_rate(cost.hourly_rate);
        }

        tracing::info!(topics = meeting.topics.len(), "imported minutes");
        self.table.replace_rows(meeting.topics);
    }

    /// Render the current form as Markdown
    pub fn export_markdown(&self, style: &DateStyle, now: NaiveDateTime) -> String {
        Serializer::with_style(style.clone()).serialize(&self.snapshot(now))
    }

    /// Replace the form from Markdown text
    ///
    /// Blank input leaves the form untouched and returns false.
    pub fn import_markdown(&mut self, markdown: &str, style: &DateStyle) -> bool {
        let markdown = markdown.trim();
        if markdown.is_empty() {
            return false;
        }
        let meeting = Parser::with_style(style.clone()).parse(markdown);
        self.load(meeting);
        true
    }
}

impl Default for MinutesForm {
    fn default() -> Self {
        Self::new(crate::datetime::local_now())
    }
}
