//! Markdown import tests
mod common;

use common::at;
use minutes_md::{Meeting, TopicType, parse};

#[test]
fn test_project_only() {
    let meeting = parse("# ProjectOnly");
    assert_eq!(
        meeting,
        Meeting {
            project: Some("ProjectOnly".to_string()),
            ..Meeting::default()
        }
    );
}

#[test]
fn test_empty_input_yields_empty_meeting() {
    assert_eq!(parse(""), Meeting::default());
    assert_eq!(parse("\n\n   \n"), Meeting::default());
    assert_eq!(parse("just some prose\nwithout headings"), Meeting::default());
}

#[test]
fn test_unterminated_last_topic_is_kept() {
    let markdown = "## Minutes\n\n### First\n\n- Owner: Ann\n\n---\n\n### FinalTopic\n\n- Owner: Ben\n- Notes: still open";
    let meeting = parse(markdown);
    assert_eq!(meeting.topics.len(), 2);
    let last = &meeting.topics[1];
    assert_eq!(last.topic, "FinalTopic");
    assert_eq!(last.owner.as_deref(), Some("Ben"));
    assert_eq!(last.note.as_deref(), Some("still open"));
}

#[test]
fn test_empty_minutes_section() {
    let meeting = parse("# P\n\n## Minutes\n\n");
    assert!(meeting.topics.is_empty());
    assert_eq!(meeting.project.as_deref(), Some("P"));
}

#[test]
fn test_bad_date_does_not_abort() {
    let markdown = "### Meeting Details\n\n- Date/Time: not-a-real-date\n- Location: Lab\n- Minute Taker: Kim\n";
    let meeting = parse(markdown);
    assert_eq!(meeting.held_at, None);
    assert_eq!(meeting.place.as_deref(), Some("Lab"));
    assert_eq!(meeting.minute_taker.as_deref(), Some("Kim"));
}

#[test]
fn test_date_time_parsed_to_minute() {
    let meeting = parse("- Date/Time: 3/14/2025, 2:30:59 PM");
    assert_eq!(meeting.held_at, Some(at(14, 30)));
}

#[test]
fn test_topic_defaults() {
    let meeting = parse("## Minutes\n### Bare\n");
    let topic = &meeting.topics[0];
    assert_eq!(topic.kind, TopicType::Todo);
    assert_eq!(topic.note, None);
    assert_eq!(topic.owner, None);
    assert_eq!(topic.due_at, None);
}

#[test]
fn test_topic_fields_and_free_form_type() {
    let markdown = "## Minutes\n\n### Review\n\n- Owner: Zoe\n- Due: next sprint\n- Type: question\n\n---\n";
    let topic = &parse(markdown).topics[0];
    assert_eq!(topic.owner.as_deref(), Some("Zoe"));
    assert_eq!(topic.due_at.as_deref(), Some("next sprint"));
    assert_eq!(topic.kind, TopicType::Other("question".to_string()));
}

#[test]
fn test_topic_heading_outside_minutes_is_ignored() {
    let meeting = parse("### Stray\n\n- Owner: Nobody\n");
    assert!(meeting.topics.is_empty());
}

#[test]
fn test_title_skips_section_headings() {
    let meeting = parse("## Board review\n\n## Attendees\n\n- Ann\n\n## Minutes\n");
    assert_eq!(meeting.title.as_deref(), Some("Board review"));
    assert_eq!(meeting.attendees, vec!["Ann"]);
}

#[test]
fn test_attendees_keep_order_and_others_fold_in() {
    let markdown = "## Attendees\n\n- Zed\n- Amy\n\n**Others:**\n- Guest\n";
    assert_eq!(parse(markdown).attendees, vec!["Zed", "Amy", "Guest"]);
}

#[test]
fn test_unknown_bullets_and_lines_are_ignored() {
    let markdown = "### Meeting Details\n\n- Weather: sunny\n> quote\n| a | b |\n- Location: HQ\n";
    let meeting = parse(markdown);
    assert_eq!(meeting.place.as_deref(), Some("HQ"));
    assert!(meeting.attendees.is_empty());
}

#[test]
fn test_crlf_input() {
    let markdown = "# P\r\n\r\n## Minutes\r\n\r\n### T\r\n\r\n- Notes: a\\\r\nb\r\n\r\n---\r\n";
    let meeting = parse(markdown);
    assert_eq!(meeting.project.as_deref(), Some("P"));
    assert_eq!(meeting.topics[0].note.as_deref(), Some("a\nb"));
}

#[test]
fn test_description_flushed_at_minutes() {
    let markdown = "### Description\n\nfirst line\nsecond line\n\n## Minutes\n\n### T\n";
    let meeting = parse(markdown);
    assert_eq!(meeting.description.as_deref(), Some("first line\nsecond line"));
    assert_eq!(meeting.topics.len(), 1);
}

#[test]
fn test_description_flushed_at_end_of_input() {
    let meeting = parse("## Description\n\nonly text");
    assert_eq!(meeting.description.as_deref(), Some("only text"));
}

#[test]
fn test_note_continuation_with_separator_text() {
    // a continued line that reads "---" belongs to the note, not the topic list
    let markdown = "## Minutes\n\n### T\n\n- Notes: above\\\n---\\\nbelow\n\n---\n";
    let meeting = parse(markdown);
    assert_eq!(meeting.topics.len(), 1);
    assert_eq!(meeting.topics[0].note.as_deref(), Some("above\n---\nbelow"));
}

#[test]
fn test_no_cost_section_means_no_cost() {
    assert_eq!(parse("# P\n## Minutes\n").cost, None);
}
