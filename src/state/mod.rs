//! Project state extraction.
//!
//! Reads the status document and the session log directory into
//! [`ProjectState`](crate::models::ProjectState) and
//! [`SessionRecord`](crate::models::SessionRecord) values.

mod extractor;
mod session_log;

pub use extractor::DocumentFieldExtractor;
pub use session_log::{
    DEFAULT_INDEX_FILE, DEFAULT_LOG_EXTENSION, SUMMARY_MAX_CHARS, SUMMARY_MIN_CHARS,
    SessionLogLocator, summarize,
};
