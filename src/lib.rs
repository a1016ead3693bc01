//! Grading engine for an interactive quiz page.
//!
//! The centre of the crate is [`quiz::matching`], which pairs items of two columns,
//! draws connectors between them and grades the result. Multiple choice, true/false,
//! categorization and number-line questions are graded in the sibling modules of
//! [`quiz`]. Rendering stays behind [`view::ViewAdapter`]; [`terminal`] is a text
//! implementation of it.

pub mod config;
pub mod error;
pub mod quiz;
pub mod terminal;
pub mod view;

pub use config::QuizConfig;
pub use error::{CommandError, ConfigError};
pub use quiz::matching::{AnswerKey, MatchSet, MatchingQuestion, Pair};
pub use view::{AnnouncementSink, Item, Point, Segment, Side, ViewAdapter};
