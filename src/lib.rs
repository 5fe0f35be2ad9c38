//! Meeting Minutes Markdown Library
//!
//! This library models a set of meeting minutes (metadata, attendees,
//! description, a table of topics and an optional cost snapshot) and moves it
//! to and from a small Markdown dialect without losing multi-line fields,
//! ordering or optional sections.
//!
//! # Architecture
//!
//! - **Domain Layer**: `minutes` module - `Meeting`, `TopicItem`, the cost
//!   ticker and the form/table state the UI binds to
//! - **Markdown Layer**: `markdown` module - serializer and parser; both are
//!   total functions and never fail
//! - **Support**: `datetime`, `formatting`, `validation`, `config`, `logging`
//!
//! # Example
//!
//! ```
//! use minutes_md::{Meeting, TopicItem, parse, serialize};
//!
//! let meeting = Meeting {
//!     project: Some("Apollo".to_string()),
//!     topics: vec![TopicItem::new("Launch window").with_note("T-minus 3\nGo for launch")],
//!     ..Meeting::default()
//! };
//!
//! let markdown = serialize(&meeting);
//! assert!(markdown.starts_with("# Apollo\n"));
//! assert_eq!(parse(&markdown), meeting);
//! ```

pub mod config;
pub mod datetime;
pub mod formatting;
pub mod logging;
pub mod markdown;
pub mod minutes;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use datetime::DateStyle;
pub use markdown::{Parser, Serializer, parse, serialize};
pub use minutes::{CostSnapshot, CostTicker, Meeting, MinutesForm, MinutesTable, TopicItem, TopicType};
