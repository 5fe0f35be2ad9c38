use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::cost::CostSnapshot;

/// Heading rendered for a topic whose text is empty
pub const UNTITLED_TOPIC: &str = "Untitled";

/// Kind of a minutes row (the "type" select in the table)
///
/// The select is free-form: values outside the known set are kept verbatim
/// in `Other` so they survive an import/export cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TopicType {
    /// Action item (the default, never rendered)
    #[default]
    Todo,
    /// Informational note
    Info,
    /// Decision taken during the meeting
    Decision,
    /// Any other select value
    Other(String),
}

impl TopicType {
    /// The string form used in Markdown and TOML
    pub fn as_str(&self) -> &str {
        match self {
            TopicType::Todo => "todo",
            TopicType::Info => "info",
            TopicType::Decision => "decision",
            TopicType::Other(value) => value,
        }
    }

    /// Check if this is the default type (`todo`)
    pub fn is_default(&self) -> bool {
        *self == TopicType::Todo
    }
}

impl From<&str> for TopicType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" | "todo" => TopicType::Todo,
            "info" => TopicType::Info,
            "decision" => TopicType::Decision,
            other => TopicType::Other(other.to_string()),
        }
    }
}

impl From<String> for TopicType {
    fn from(s: String) -> Self {
        TopicType::from(s.as_str())
    }
}

impl From<TopicType> for String {
    fn from(kind: TopicType) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for TopicType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TopicType::from(s))
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discussion topic / action item row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicItem {
    /// Heading text; may be empty (rendered as "Untitled")
    pub topic: String,
    /// Row type, `todo` unless changed
    #[serde(rename = "type")]
    pub kind: TopicType,
    /// Free text, may span several lines
    pub note: Option<String>,
    pub owner: Option<String>,
    /// Due date kept as the user typed it
    pub due_at: Option<String>,
}

impl TopicItem {
    /// Create a topic with only a heading
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<TopicType>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = non_empty(note.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = non_empty(owner.into());
        self
    }

    pub fn with_due(mut self, due_at: impl Into<String>) -> Self {
        self.due_at = non_empty(due_at.into());
        self
    }

    /// Check if topic, note, owner and due date are all empty
    ///
    /// The type does not count: a fresh row already carries `todo`.
    pub fn is_blank(&self) -> bool {
        self.topic.trim().is_empty()
            && text(&self.note).is_none()
            && text(&self.owner).is_none()
            && text(&self.due_at).is_none()
    }

    /// Heading to render, falling back to "Untitled"
    pub fn heading(&self) -> &str {
        if self.topic.trim().is_empty() {
            UNTITLED_TOPIC
        } else {
            &self.topic
        }
    }
}

/// A complete set of meeting minutes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meeting {
    pub project: Option<String>,
    pub title: Option<String>,
    /// Meeting start, minute precision once it has been through Markdown
    pub held_at: Option<NaiveDateTime>,
    pub place: Option<String>,
    pub minute_taker: Option<String>,
    /// Attendee names in the order they were entered
    pub attendees: Vec<String>,
    /// Free text, line breaks preserved
    pub description: Option<String>,
    /// Rows in table order
    pub topics: Vec<TopicItem>,
    /// Present only when the cost tracker was in use
    pub cost: Option<CostSnapshot>,
}

impl Meeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attendees that are not blank, trimmed
    pub fn named_attendees(&self) -> impl Iterator<Item = &str> {
        self.attendees
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Topics that would be rendered
    pub fn filled_topics(&self) -> impl Iterator<Item = &TopicItem> {
        self.topics.iter().filter(|topic| !topic.is_blank())
    }
}

/// Treat an empty string as absent
pub fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

/// Borrow optional text, treating `Some("")` the same as `None`
pub fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_type_known_values() {
        assert_eq!(TopicType::from("todo"), TopicType::Todo);
        assert_eq!(TopicType::from("info"), TopicType::Info);
        assert_eq!(TopicType::from("decision"), TopicType::Decision);
        assert_eq!(TopicType::from(""), TopicType::Todo);
    }

    #[test]
    fn test_topic_type_free_form_value_is_kept() {
        let kind: TopicType = "question".parse().unwrap();
        assert_eq!(kind, TopicType::Other("question".to_string()));
        assert_eq!(kind.to_string(), "question");
        assert!(!kind.is_default());
    }

    #[test]
    fn test_blank_topic_ignores_type() {
        let topic = TopicItem::default().with_kind("decision");
        assert!(topic.is_blank());

        let topic = TopicItem::default().with_owner("Alice");
        assert!(!topic.is_blank());
    }

    #[test]
    fn test_heading_falls_back_to_untitled() {
        assert_eq!(TopicItem::default().with_note("x").heading(), "Untitled");
        assert_eq!(TopicItem::new("Budget").heading(), "Budget");
        assert_eq!(TopicItem::new("  ").with_owner("Ann").heading(), "Untitled");
    }

    #[test]
    fn test_whitespace_topic_without_content_is_blank() {
        assert!(TopicItem::new("   ").is_blank());
        assert!(!TopicItem::new("   ").with_note("keep me").is_blank());
    }

    #[test]
    fn test_builders_store_empty_as_absent() {
        let topic = TopicItem::new("A").with_note("").with_owner("").with_due("");
        assert_eq!(topic.note, None);
        assert_eq!(topic.owner, None);
        assert_eq!(topic.due_at, None);
    }

    #[test]
    fn test_named_attendees_skips_blank_entries() {
        let meeting = Meeting {
            attendees: vec!["Alice".into(), "   ".into(), " Bob ".into()],
            ..Meeting::default()
        };
        let names: Vec<&str> = meeting.named_attendees().collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_meeting_toml_round_trip() {
        let meeting = Meeting {
            project: Some("Apollo".into()),
            topics: vec![TopicItem::new("Launch").with_kind("decision")],
            ..Meeting::default()
        };
        let text = toml::to_string_pretty(&meeting).unwrap();
        assert!(text.contains("type = \"decision\""));
        let back: Meeting = toml::from_str(&text).unwrap();
        assert_eq!(back, meeting);
    }
}
