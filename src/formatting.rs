//! Formatting helper functions for minutes output
//!
//! This module contains the display rules for money and durations used by
//! the cost section, and the plain-text summary printed by the CLI.

use crate::minutes::{Meeting, text};

/// Format whole cents as dollars with two decimals
///
/// # Examples
/// ```
/// # use minutes_md::formatting::format_cents;
/// assert_eq!(format_cents(1025), "$10.25");
/// ```
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Parse a `$12.35` style amount into cents
///
/// Thousands separators are accepted; anything else yields `None`.
pub fn parse_currency(value: &str) -> Option<u64> {
    let value = value.trim();
    let value = value.strip_prefix('$').unwrap_or(value).replace(',', "");
    let amount: f64 = value.parse().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as u64)
}

/// Format elapsed seconds as `1h 2m 3s`, `2m 3s` or `3s`
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Parse the output of [`format_duration`] back into seconds
pub fn parse_duration(value: &str) -> Option<u64> {
    let mut total = 0u64;
    let mut seen = false;
    for part in value.split_whitespace() {
        let unit = part.chars().last()?;
        let amount: u64 = part[..part.len() - unit.len_utf8()].parse().ok()?;
        let factor = match unit {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total = total.checked_add(amount.checked_mul(factor)?)?;
        seen = true;
    }
    seen.then_some(total)
}

/// Format a yearly figure for an hourly rate, e.g. `~$416,000/year`
pub fn format_annual_rate(annual: f64) -> String {
    let whole = annual.max(0.0).round() as u64;
    format!("~${}/year", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Summarize a meeting for terminal output
///
/// # Arguments
/// * `meeting` - Meeting to describe
///
/// # Returns
/// Multi-line text listing metadata and one line per rendered topic
pub fn format_summary(meeting: &Meeting) -> String {
    let mut result = String::new();

    if let Some(project) = text(&meeting.project) {
        result.push_str(&format!("Project: {}\n", project));
    }
    if let Some(title) = text(&meeting.title) {
        result.push_str(&format!("Title: {}\n", title));
    }
    if let Some(held_at) = meeting.held_at {
        result.push_str(&format!("Held at: {}\n", held_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(place) = text(&meeting.place) {
        result.push_str(&format!("Location: {}\n", place));
    }
    if let Some(taker) = text(&meeting.minute_taker) {
        result.push_str(&format!("Minute taker: {}\n", taker));
    }

    let attendees: Vec<&str> = meeting.named_attendees().collect();
    if !attendees.is_empty() {
        result.push_str(&format!(
            "Attendees ({}): {}\n",
            attendees.len(),
            attendees.join(", ")
        ));
    }
    if let Some(cost) = &meeting.cost {
        result.push_str(&format!(
            "Cost: {} over {}\n",
            format_cents(cost.total_cents),
            format_duration(cost.elapsed_secs)
        ));
    }

    let topics: Vec<_> = meeting.filled_topics().collect();
    if topics.is_empty() {
        result.push_str("No topics found\n");
        return result;
    }

    result.push_str(&format!("Found {} topic(s):\n", topics.len()));
    for topic in topics {
        result.push_str(&format!("- [{}] {}", topic.kind, topic.heading()));
        if let Some(owner) = text(&topic.owner) {
            result.push_str(&format!(" (owner: {})", owner));
        }
        if let Some(due) = text(&topic.due_at) {
            result.push_str(&format!(" (due: {})", due));
        }
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutes::TopicItem;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(7), "$0.07");
        assert_eq!(format_cents(123_405), "$1234.05");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$10.25"), Some(1025));
        assert_eq!(parse_currency("$1,234.05"), Some(123_405));
        assert_eq!(parse_currency("7"), Some(700));
        assert_eq!(parse_currency("$abc"), None);
        assert_eq!(parse_currency("-$1"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(61), "1m 1s");
        assert_eq!(format_duration(3600), "1h 0m 0s");
        assert_eq!(format_duration(3723), "1h 2m 3s");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1h 2m 3s"), Some(3723));
        assert_eq!(parse_duration("45s"), Some(45));
        assert_eq!(parse_duration("0s"), Some(0));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("2 weeks"), None);
    }

    #[test]
    fn test_format_annual_rate() {
        assert_eq!(format_annual_rate(416_000.0), "~$416,000/year");
        assert_eq!(format_annual_rate(999.4), "~$999/year");
        assert_eq!(format_annual_rate(1_000_000.0), "~$1,000,000/year");
    }

    #[test]
    fn test_format_summary_lists_topics() {
        let meeting = Meeting {
            project: Some("Apollo".into()),
            attendees: vec!["Alice".into(), "Bob".into()],
            topics: vec![
                TopicItem::new("Budget").with_owner("Alice"),
                TopicItem::default(),
                TopicItem::new("Launch").with_kind("decision").with_due("Friday"),
            ],
            ..Meeting::default()
        };
        let summary = format_summary(&meeting);
        assert!(summary.contains("Project: Apollo"));
        assert!(summary.contains("Attendees (2): Alice, Bob"));
        assert!(summary.contains("Found 2 topic(s):"));
        assert!(summary.contains("- [todo] Budget (owner: Alice)"));
        assert!(summary.contains("- [decision] Launch (due: Friday)"));
    }

    #[test]
    fn test_format_summary_without_topics() {
        assert!(format_summary(&Meeting::default()).contains("No topics found"));
    }
}
