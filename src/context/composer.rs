//! Session context rendering.

use crate::models::{ContextMessage, ProjectState, SessionRecord};

use super::CommandMenu;

const INTRO: &str = "This project uses **Directions** for documentation and workflow.";
const FOLLOW_UP: &str = "Use `/status` for full details or `/log` to update the session log.";
const MENU_PROMPT: &str = "What would you like to do?";
const MENU_INVITATION: &str = "Or just tell me what you're working on.";

/// Renders project state into a [`ContextMessage`].
///
/// Pure projection of its inputs; the command menu is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ContextComposer {
    menu: CommandMenu,
}

impl ContextComposer {
    /// Creates a composer with the given fallback menu.
    #[must_use]
    pub const fn new(menu: CommandMenu) -> Self {
        Self { menu }
    }

    /// Returns the fallback menu.
    #[must_use]
    pub const fn menu(&self) -> &CommandMenu {
        &self.menu
    }

    /// Composes the context message.
    ///
    /// Without a detected project the fallback menu is returned and `state`
    /// and `session` are ignored. Otherwise one line is emitted per present
    /// field; absent fields produce no line at all.
    #[must_use]
    pub fn compose(
        &self,
        state: &ProjectState,
        session: Option<&SessionRecord>,
        project_detected: bool,
    ) -> ContextMessage {
        if !project_detected {
            return self.fallback();
        }

        let mut parts = vec![INTRO.to_string()];

        if let Some(phase) = &state.phase {
            parts.push(format!("**Current Phase:** {phase}"));
        }
        if let Some(focus) = &state.focus {
            parts.push(format!("**Current Focus:** {focus}"));
        }
        if !state.blockers.is_empty() {
            parts.push(format!("**Blockers:** {}", state.blockers.join(", ")));
        }
        if let Some(session) = session {
            parts.push(format!("**Last Session:** {}", session.file_name));
            if let Some(summary) = &session.summary_line {
                parts.push(format!("  _{summary}_"));
            }
        }

        parts.push(String::new());
        parts.push(FOLLOW_UP.to_string());

        ContextMessage::new(parts.join("\n"))
    }

    /// The static menu shown when no structured project is detected.
    #[must_use]
    pub fn fallback(&self) -> ContextMessage {
        ContextMessage::new(format!(
            "{MENU_PROMPT}\n\n{}\n\n{MENU_INVITATION}",
            self.menu.render_table()
        ))
    }
}
