//! Command handlers module.
//!
//! This module organizes the CLI command implementations into separate files:
//! - `hook.rs`: Claude Code hook event handlers
//! - `interactive.rs`: Interactive commands (suggest, status, mappings)

mod hook;
mod interactive;

use std::path::PathBuf;

use clap::Subcommand;
use directions::DirectionsConfig;
use directions::project::{PROJECT_DIR_ENV, ProjectLayout};

pub use hook::cmd_hook;
pub use interactive::{cmd_mappings, cmd_status, cmd_suggest};

/// Hook events.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum HookEvent {
    /// Session start hook.
    SessionStart,
    /// User prompt submit hook.
    UserPromptSubmit,
}

impl HookEvent {
    /// Returns the hook event as a lowercase hyphenated string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SessionStart => "session-start",
            Self::UserPromptSubmit => "user-prompt-submit",
        }
    }
}

/// Settings shared by every command.
pub struct CommandContext {
    /// Loaded configuration.
    pub config: DirectionsConfig,
    /// Resolved project root.
    pub project_root: PathBuf,
}

impl CommandContext {
    /// Resolves the project root from the flag, `CLAUDE_PROJECT_DIR`, or the cwd.
    pub fn new(config: DirectionsConfig, project_dir: Option<PathBuf>) -> Self {
        let env_dir = std::env::var(PROJECT_DIR_ENV).ok();
        let project_root = ProjectLayout::resolve_root(project_dir.as_deref(), env_dir.as_deref());
        Self {
            config,
            project_root,
        }
    }
}
