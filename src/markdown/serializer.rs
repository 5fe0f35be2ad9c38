use super::*;
use crate::datetime::DateStyle;
use crate::formatting::{format_cents, format_duration};
use crate::minutes::{CostSnapshot, Meeting, TopicItem, text};

/// Render minutes with the default date style
pub fn serialize(meeting: &Meeting) -> String {
    Serializer::default().serialize(meeting)
}

/// Markdown renderer for [`Meeting`]
///
/// Output order is fixed: project, title, details, attendees, description,
/// cost, minutes. Sections whose data is empty are left out, except the
/// details heading which is always written.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    style: DateStyle,
}

impl Serializer {
    pub fn with_style(style: DateStyle) -> Self {
        Self { style }
    }

    pub fn serialize(&self, meeting: &Meeting) -> String {
        let mut out = String::new();

        if let Some(project) = text(&meeting.project) {
            out.push_str(&format!("{PROJECT_PREFIX}{project}\n\n"));
        }
        if let Some(title) = text(&meeting.title) {
            out.push_str(&format!("{TITLE_PREFIX}{title}\n\n"));
        }

        self.write_details(&mut out, meeting);
        write_attendees(&mut out, meeting);

        if let Some(description) = text(&meeting.description) {
            out.push_str(&format!("{DESCRIPTION_HEADING}\n\n{description}\n\n"));
        }
        if let Some(cost) = meeting.cost.as_ref().filter(|c| c.is_used()) {
            write_cost(&mut out, cost);
        }

        write_minutes(&mut out, &meeting.topics);

        tracing::debug!(
            bytes = out.len(),
            topics = meeting.filled_topics().count(),
            "serialized minutes"
        );
        out
    }

    fn write_details(&self, out: &mut String, meeting: &Meeting) {
        out.push_str(&format!("{DETAILS_HEADING}\n\n"));
        if let Some(held_at) = &meeting.held_at {
            out.push_str(&format!("{DATE_BULLET} {}\n", self.style.render(held_at)));
        }
        if let Some(place) = text(&meeting.place) {
            out.push_str(&format!("{LOCATION_BULLET} {place}\n"));
        }
        if let Some(taker) = text(&meeting.minute_taker) {
            out.push_str(&format!("{MINUTE_TAKER_BULLET} {taker}\n"));
        }
        out.push('\n');
    }
}

fn write_attendees(out: &mut String, meeting: &Meeting) {
    let mut names = meeting.named_attendees().peekable();
    if names.peek().is_none() {
        return;
    }
    out.push_str(&format!("{ATTENDEES_HEADING}\n\n"));
    for name in names {
        out.push_str(&format!("{LIST_ITEM_PREFIX}{name}\n"));
    }
    out.push('\n');
}

fn write_cost(out: &mut String, cost: &CostSnapshot) {
    out.push_str(&format!("{COST_HEADING}\n\n"));
    out.push_str(&format!("{COST_ATTENDEES_BULLET} {}\n", cost.attendees));
    out.push_str(&format!("{COST_RATE_BULLET} ${}/hour per person\n", cost.hourly_rate));
    out.push_str(&format!("{COST_DURATION_BULLET} {}\n", format_duration(cost.elapsed_secs)));
    out.push_str(&format!(
        "{COST_TOTAL_BULLET} {}**\n\n",
        format_cents(cost.total_cents)
    ));
}

fn write_minutes(out: &mut String, topics: &[TopicItem]) {
    let mut filled = topics.iter().filter(|topic| !topic.is_blank()).peekable();
    if filled.peek().is_none() {
        return;
    }

    out.push_str(&format!("{MINUTES_HEADING}\n\n"));
    for topic in filled {
        write_topic(out, topic);
    }
}

fn write_topic(out: &mut String, topic: &TopicItem) {
    out.push_str(&format!("{TOPIC_PREFIX}{}\n\n", topic.heading()));

    if let Some(owner) = text(&topic.owner) {
        out.push_str(&format!("{OWNER_BULLET} {owner}\n"));
    }
    if let Some(due) = text(&topic.due_at) {
        out.push_str(&format!("{DUE_BULLET} {due}\n"));
    }
    if !topic.kind.is_default() {
        out.push_str(&format!("{TYPE_BULLET} {}\n", topic.kind));
    }
    if let Some(note) = text(&topic.note) {
        write_note(out, note);
    }

    out.push_str(&format!("\n{TOPIC_SEPARATOR}\n\n"));
}

/// One logical bullet; every embedded newline becomes `\` + newline
fn write_note(out: &mut String, note: &str) {
    let mut lines = note.split('\n');
    let first = lines.next().unwrap_or_default();
    out.push_str(&format!("{NOTES_BULLET} {first}"));
    for line in lines {
        out.push(LINE_CONTINUATION);
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
}
