//! Context message composition.
//!
//! Turns extracted [`ProjectState`](crate::models::ProjectState) and the
//! latest [`SessionRecord`](crate::models::SessionRecord) into the text
//! injected at session start, or a command menu when the project does not
//! follow the structured-state convention.

mod composer;
mod menu;

pub use composer::ContextComposer;
pub use menu::{CommandMenu, MenuEntry};
