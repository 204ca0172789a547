//! Latest session log lookup.
//!
//! Session logs are markdown files named with a sortable date prefix
//! (`2024-03-10.md`, `2024-03-10-auth.md`). Recency is taken to be reverse
//! lexicographic order of file names; logs named any other way will be
//! ordered wrongly, and that is accepted rather than corrected here.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::models::SessionRecord;
use crate::project::read_optional;

/// Default reserved index file excluded from recency selection.
pub const DEFAULT_INDEX_FILE: &str = "_index.md";

/// Default log file extension.
pub const DEFAULT_LOG_EXTENSION: &str = "md";

/// A summary line must be longer than this many characters.
pub const SUMMARY_MIN_CHARS: usize = 10;

/// Summary lines longer than this are truncated.
pub const SUMMARY_MAX_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Finds the most recent session log in a directory.
#[derive(Debug, Clone)]
pub struct SessionLogLocator {
    index_file: String,
    extension: String,
}

impl Default for SessionLogLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLogLocator {
    /// Creates a locator with the default index name and extension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index_file: DEFAULT_INDEX_FILE.to_string(),
            extension: DEFAULT_LOG_EXTENSION.to_string(),
        }
    }

    /// Sets the reserved index file name.
    #[must_use]
    pub fn with_index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Sets the log file extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Returns the latest log in `dir` with its summary line.
    ///
    /// Returns `None` if the directory is missing, unreadable, or holds no
    /// qualifying files. An unreadable log yields a record without summary.
    pub fn locate(&self, dir: &Path) -> Option<SessionRecord> {
        let file_name = self.latest_file_name(dir)?;
        let summary = read_optional(&dir.join(&file_name)).and_then(|content| summarize(&content));

        debug!(file = %file_name, has_summary = summary.is_some(), "located session log");
        Some(SessionRecord {
            file_name,
            summary_line: summary,
        })
    }

    /// Returns the file name that sorts last among qualifying logs in `dir`.
    pub fn latest_file_name(&self, dir: &Path) -> Option<String> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "session log directory unavailable");
                return None;
            },
        };

        entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                    None
                },
            })
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.is_log_file(name))
            .max()
    }

    fn is_log_file(&self, name: &str) -> bool {
        name != self.index_file
            && Path::new(name)
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }
}

/// Picks the first meaningful line of a log as its summary.
///
/// A line qualifies when, trimmed, it is not a heading and is longer than
/// [`SUMMARY_MIN_CHARS`]. Lines over [`SUMMARY_MAX_CHARS`] are cut and
/// suffixed with `...`.
pub fn summarize(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.starts_with('#') && line.chars().count() > SUMMARY_MIN_CHARS)
        .map(truncate_summary)
}

fn truncate_summary(line: &str) -> String {
    if line.chars().count() > SUMMARY_MAX_CHARS {
        let mut cut: String = line.chars().take(SUMMARY_MAX_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        line.to_string()
    }
}
