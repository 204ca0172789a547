//! # Directions
//!
//! Documentation routing and project-state hooks for AI coding assistants.
//!
//! Two independent pipelines run around a conversational turn:
//!
//! - **Prompt routing**: a [`KeywordRouter`] maps free-form prompt text to
//!   the single most relevant documentation reference ("first rule wins").
//! - **Session context**: a [`DocumentFieldExtractor`] and a
//!   [`SessionLogLocator`] read the project status document and the latest
//!   session log, and a [`ContextComposer`] renders them into a message.
//!
//! Both pipelines are synchronous and stateless. Missing files, missing
//! fields and unmatched prompts are ordinary outcomes, never errors.
//!
//! ## Example
//!
//! ```rust
//! use directions::{KeywordRouter, MappingTable};
//!
//! let router = KeywordRouter::new(MappingTable::builtin())?;
//! let rule = router.route("the app crashes on launch");
//! assert_eq!(rule.map(|r| r.doc_id.as_str()), Some("31_debugging.md"));
//! # Ok::<(), directions::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod observability;
pub mod project;
pub mod routing;
pub mod state;

// Re-exports for convenience
pub use config::DirectionsConfig;
pub use context::{CommandMenu, ContextComposer};
pub use models::{
    ContextMessage, HookResponse, MappingRule, MappingTable, ProjectState, SessionRecord,
};
pub use project::ProjectLayout;
pub use routing::KeywordRouter;
pub use state::{DocumentFieldExtractor, SessionLogLocator};

/// Error type for directions operations.
///
/// Only setup work can fail: loading a config file, compiling the keyword
/// matchers, initializing logging or serializing a response. The routing and
/// extraction pipelines themselves represent every "nothing found" outcome as
/// an absent value.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | A configured mapping rule cannot be turned into a matcher |
/// | `OperationFailed` | Config file unreadable or malformed, logging init fails, JSON serialization fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and any displayable cause.
    pub fn operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for directions operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("empty keyword".to_string());
        assert_eq!(err.to_string(), "invalid input: empty keyword");

        let err = Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'read_config_file' failed: not found"
        );
    }

    #[test]
    fn test_error_operation_helper() {
        let err = Error::operation("serialize_response", "bad value");
        assert_eq!(
            err.to_string(),
            "operation 'serialize_response' failed: bad value"
        );
    }
}
