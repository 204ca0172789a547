//! Project layout and read-only file access.
//!
//! A project opts into the structured-state convention by carrying a marker
//! file. Everything else is located relative to the project root:
//!
//! | Path (default) | Purpose |
//! |----------------|---------|
//! | `docs/00_base.md` | Marker; its existence is the only signal |
//! | `docs/PROJECT_STATE.md` | Status document (phase, focus, blockers) |
//! | `docs/sessions/` | Dated session logs plus `_index.md` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::LayoutConfig;

/// Environment variable the host uses to pass the project root.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Paths of the structured-state files for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    layout: LayoutConfig,
}

impl ProjectLayout {
    /// Creates a layout with default relative paths.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, LayoutConfig::default())
    }

    /// Creates a layout with configured relative paths.
    #[must_use]
    pub fn with_layout(root: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Resolves the project root.
    ///
    /// Precedence: `explicit`, then the `CLAUDE_PROJECT_DIR` value passed in
    /// `env_dir`, then the current directory.
    #[must_use]
    pub fn resolve_root(explicit: Option<&Path>, env_dir: Option<&str>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(dir) = env_dir.filter(|dir| !dir.trim().is_empty()) {
            return PathBuf::from(dir);
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the relative layout.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Path to the marker file.
    #[must_use]
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(&self.layout.marker)
    }

    /// Path to the status document.
    #[must_use]
    pub fn state_document_path(&self) -> PathBuf {
        self.root.join(&self.layout.state_document)
    }

    /// Path to the session log directory.
    #[must_use]
    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join(&self.layout.sessions_dir)
    }

    /// Returns true if the marker file exists.
    pub fn is_detected(&self) -> bool {
        let detected = self.marker_path().exists();
        debug!(root = %self.root.display(), detected, "project detection");
        detected
    }

    /// Reads the status document, if present and readable.
    pub fn read_state_document(&self) -> Option<String> {
        read_optional(&self.state_document_path())
    }
}

/// Reads a UTF-8 file, treating any failure as absence.
///
/// A missing file is expected and logged at debug level; other failures
/// (permissions, invalid UTF-8) are logged as warnings.
pub fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not present");
            None
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "file unreadable, treating as absent");
            None
        },
    }
}
