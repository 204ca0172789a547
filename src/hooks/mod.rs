//! Claude Code hooks.
//!
//! Implements handlers for the two hook events directions listens to.
//!
//! # Hook Response JSON Format
//!
//! Both hooks answer with the same envelope: an object with one optional
//! `message` field.
//!
//! | Event | `event_type()` | `message` Content |
//! |-------|----------------|-------------------|
//! | Session start | `SessionStart` | Project phase, focus, blockers, last session; or the command menu |
//! | User prompt | `UserPromptSubmit` | Pointer to the most relevant documentation file |
//!
//! Example response:
//!
//! ```json
//! { "message": "📚 **Relevant doc:** `docs/31_debugging.md` covers debugging strategies." }
//! ```
//!
//! ## Empty Response
//!
//! When there is nothing to say, handlers return an empty object `{}`.
//! Handlers never fail because of their input: malformed JSON, invalid
//! UTF-8, missing files and unmatched prompts all degrade to an empty or
//! fallback response.

mod session_start;
mod user_prompt;

pub use session_start::SessionStartHandler;
pub use user_prompt::{PROMPT_ENV, UserPromptHandler};

use std::io::Read;

use tracing::warn;

use crate::Result;

/// Reads a hook payload from `reader`.
///
/// Invalid UTF-8 is replaced rather than rejected. A read error yields an
/// empty payload, so the handler still runs and answers with an envelope.
pub fn read_input(mut reader: impl Read) -> String {
    let mut bytes = Vec::new();
    match reader.read_to_end(&mut bytes) {
        Ok(_) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!(error = %e, "failed to read hook input, continuing without it");
            String::new()
        },
    }
}

/// Trait for hook handlers.
pub trait HookHandler {
    /// The hook event type this handler processes.
    fn event_type(&self) -> &'static str;

    /// Handles the hook event, returning the serialized response envelope.
    ///
    /// # Errors
    ///
    /// Returns an error only if the response cannot be serialized.
    fn handle(&self, input: &str) -> Result<String>;
}
