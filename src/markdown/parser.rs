use super::*;
use crate::datetime::DateStyle;
use crate::formatting::{parse_currency, parse_duration};
use crate::minutes::{CostSnapshot, Meeting, TopicItem, TopicType, non_empty};

/// Parse minutes with the default date style
pub fn parse(markdown: &str) -> Meeting {
    Parser::default().parse(markdown)
}

/// Best-effort reader for the minutes dialect
///
/// Parsing never fails: unknown lines are skipped, a bad `Date/Time` leaves
/// `held_at` unset and missing sections leave their fields empty.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    style: DateStyle,
}

impl Parser {
    pub fn with_style(style: DateStyle) -> Self {
        Self { style }
    }

    pub fn parse(&self, markdown: &str) -> Meeting {
        let normalized = normalize_line_endings(markdown);
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut scan = Scan::new(&self.style);
        let mut cursor = 0;
        while cursor < lines.len() {
            cursor = scan.step(&lines, cursor);
        }
        let meeting = scan.finish();

        tracing::debug!(
            topics = meeting.topics.len(),
            attendees = meeting.attendees.len(),
            "parsed minutes"
        );
        meeting
    }
}

/// Section the cursor is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Details,
    Description,
    Attendees,
    Cost,
    Minutes,
}

/// Cost lines seen so far; becomes a snapshot if any of them parsed
#[derive(Debug, Default)]
struct CostLines {
    attendees: Option<u32>,
    hourly_rate: Option<f64>,
    elapsed_secs: Option<u64>,
    total_cents: Option<u64>,
}

impl CostLines {
    fn read(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix(COST_ATTENDEES_BULLET) {
            self.attendees = rest.trim().parse().ok().or(self.attendees);
        } else if let Some(rest) = line.strip_prefix(COST_RATE_BULLET) {
            let rate = rest.trim();
            let rate = rate.strip_prefix('$').unwrap_or(rate);
            let rate = rate.split('/').next().unwrap_or_default();
            self.hourly_rate = rate.trim().parse().ok().or(self.hourly_rate);
        } else if let Some(rest) = line.strip_prefix(COST_DURATION_BULLET) {
            self.elapsed_secs = parse_duration(rest).or(self.elapsed_secs);
        } else if let Some(rest) = line.strip_prefix(COST_TOTAL_BULLET) {
            let total = rest.trim().trim_end_matches('*');
            self.total_cents = parse_currency(total).or(self.total_cents);
        }
    }

    fn into_snapshot(self) -> Option<CostSnapshot> {
        if self.attendees.is_none()
            && self.hourly_rate.is_none()
            && self.elapsed_secs.is_none()
            && self.total_cents.is_none()
        {
            return None;
        }
        Some(CostSnapshot {
            attendees: self.attendees.unwrap_or_default(),
            hourly_rate: self.hourly_rate.unwrap_or_default(),
            elapsed_secs: self.elapsed_secs.unwrap_or_default(),
            total_cents: self.total_cents.unwrap_or_default(),
        })
    }
}

/// Mutable state of one parse
struct Scan<'a> {
    style: &'a DateStyle,
    meeting: Meeting,
    section: Section,
    /// Open topic; only ever set inside `## Minutes`
    topic: Option<TopicItem>,
    description: Vec<&'a str>,
    attendees: Vec<String>,
    cost: CostLines,
}

impl<'a> Scan<'a> {
    fn new(style: &'a DateStyle) -> Self {
        Self {
            style,
            meeting: Meeting::default(),
            section: Section::None,
            topic: None,
            description: Vec::new(),
            attendees: Vec::new(),
            cost: CostLines::default(),
        }
    }

    /// Classify `lines[cursor]` and return the cursor of the next unread line
    ///
    /// Rules are checked in order and the first match wins.
    fn step(&mut self, lines: &[&'a str], cursor: usize) -> usize {
        let raw = lines[cursor];
        let line = raw.trim();
        let in_minutes = self.section == Section::Minutes;

        if let Some(project) = line.strip_prefix(PROJECT_PREFIX) {
            self.meeting.project = non_empty(project.trim());
        } else if line.starts_with(TITLE_PREFIX)
            && !line.contains("Minutes")
            && !line.contains("Attendees")
            && !line.contains("Description")
        {
            self.meeting.title = non_empty(line[TITLE_PREFIX.len()..].trim());
        } else if line.starts_with(DETAILS_HEADING) {
            self.enter(Section::Details);
        } else if line.starts_with(LEGACY_DESCRIPTION_HEADING)
            || (line.starts_with(DESCRIPTION_HEADING) && !in_minutes)
        {
            self.enter(Section::Description);
            self.description.clear();
        } else if line.starts_with(ATTENDEES_HEADING) {
            self.enter(Section::Attendees);
            self.attendees.clear();
        } else if line.starts_with(MINUTES_HEADING) {
            self.enter(Section::Minutes);
        } else if line.starts_with(COST_HEADING) && !in_minutes {
            self.enter(Section::Cost);
        } else if let Some(heading) = line.strip_prefix(TOPIC_PREFIX)
            && in_minutes
        {
            self.close_topic();
            self.topic = Some(TopicItem::new(heading.trim()));
        } else if let Some(rest) = line.strip_prefix(DATE_BULLET) {
            match self.style.parse(rest) {
                Some(held_at) => self.meeting.held_at = Some(held_at),
                None => tracing::debug!(value = rest.trim(), "unrecognized Date/Time, left unset"),
            }
        } else if let Some(rest) = line.strip_prefix(LOCATION_BULLET) {
            self.meeting.place = non_empty(rest.trim());
        } else if let Some(rest) = line.strip_prefix(MINUTE_TAKER_BULLET) {
            self.meeting.minute_taker = non_empty(rest.trim());
        } else if let Some(topic) = self.topic.as_mut()
            && let Some(field) = TopicField::match_line(line)
        {
            match field {
                TopicField::Type(rest) => topic.kind = TopicType::from(rest),
                TopicField::Owner(rest) => topic.owner = non_empty(rest.trim()),
                TopicField::Due(rest) => topic.due_at = non_empty(rest.trim()),
                TopicField::Notes(rest) => {
                    let (note, next) = read_note(lines, cursor, rest);
                    topic.note = non_empty(note);
                    return next;
                }
            }
        } else if self.section == Section::Cost && line.starts_with(LIST_ITEM_PREFIX) {
            self.cost.read(line);
        } else if let Some(name) = line.strip_prefix(LIST_ITEM_PREFIX)
            && self.section == Section::Attendees
        {
            self.attendees.push(name.trim().to_string());
        } else if line == TOPIC_SEPARATOR && in_minutes {
            self.close_topic();
        } else if self.section == Section::Description && !line.starts_with('#') {
            // blank lines are kept so paragraphs survive; edges are trimmed on flush
            self.description.push(raw);
        } else {
            tracing::trace!(line, "skipped line");
        }

        cursor + 1
    }

    fn enter(&mut self, section: Section) {
        if self.section == Section::Description {
            self.flush_description();
        }
        self.section = section;
    }

    fn close_topic(&mut self) {
        if let Some(topic) = self.topic.take() {
            self.meeting.topics.push(topic);
        }
    }

    fn flush_description(&mut self) {
        let lines = std::mem::take(&mut self.description);
        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());
        if let (Some(start), Some(end)) = (start, end) {
            self.meeting.description = non_empty(lines[start..=end].join("\n"));
        }
    }

    fn finish(mut self) -> Meeting {
        if self.section == Section::Description {
            self.flush_description();
        }
        self.close_topic();
        if !self.attendees.is_empty() {
            self.meeting.attendees = std::mem::take(&mut self.attendees);
        }
        self.meeting.cost = self.cost.into_snapshot();
        self.meeting
    }
}

/// Topic bullet recognized on a trimmed line, with the text after the marker
enum TopicField<'l> {
    Type(&'l str),
    Owner(&'l str),
    Due(&'l str),
    Notes(&'l str),
}

impl<'l> TopicField<'l> {
    fn match_line(line: &'l str) -> Option<Self> {
        if let Some(rest) = line.strip_prefix(TYPE_BULLET) {
            Some(TopicField::Type(rest))
        } else if let Some(rest) = line.strip_prefix(OWNER_BULLET) {
            Some(TopicField::Owner(rest))
        } else if let Some(rest) = line.strip_prefix(DUE_BULLET) {
            Some(TopicField::Due(rest))
        } else {
            line.strip_prefix(NOTES_BULLET).map(TopicField::Notes)
        }
    }
}

/// Read a note starting on `lines[cursor]` plus its continuation lines
///
/// `first` is the text after the `- Notes:` marker. A raw line ending in a
/// backslash pulls in the following raw line. Returns the note and the
/// cursor of the first line after it.
///
/// A note whose last line really ends in `\` also absorbs the line after it;
/// the dialect has no escape for a literal trailing backslash.
fn read_note(lines: &[&str], cursor: usize, first: &str) -> (String, usize) {
    let mut parts = vec![strip_continuation(first.trim_start())];
    let mut next = cursor + 1;
    while next < lines.len() && lines[next - 1].ends_with(LINE_CONTINUATION) {
        parts.push(strip_continuation(lines[next]));
        next += 1;
    }
    (parts.join("\n"), next)
}

fn strip_continuation(line: &str) -> &str {
    line.strip_suffix(LINE_CONTINUATION).unwrap_or(line)
}
