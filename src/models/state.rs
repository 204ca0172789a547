//! Project state derived from the status document and session logs.

use serde::Serialize;

/// Fields extracted from the project status document.
///
/// Rebuilt from the document text on every invocation; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectState {
    /// Current phase, if the document names one.
    pub phase: Option<String>,
    /// Current focus, if the document names one.
    pub focus: Option<String>,
    /// Open blockers in document order.
    pub blockers: Vec<String>,
}

impl ProjectState {
    /// Returns true if no field was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phase.is_none() && self.focus.is_none() && self.blockers.is_empty()
    }
}

/// The most recent session log and its summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// File name of the log, without directory.
    pub file_name: String,
    /// First meaningful line of the log, possibly truncated.
    pub summary_line: Option<String>,
}

impl SessionRecord {
    /// Creates a record without a summary.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            summary_line: None,
        }
    }

    /// Sets the summary line.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary_line = Some(summary.into());
        self
    }
}

/// Rendered, human-readable context text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMessage {
    /// The full message.
    pub text: String,
}

impl ContextMessage {
    /// Wraps rendered text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for ContextMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ContextMessage> for String {
    fn from(message: ContextMessage) -> Self {
        message.text
    }
}
