//! Data models for directions.
//!
//! Plain values shared by the routing and context pipelines. None of these
//! types carry behavior beyond construction and rendering helpers.

mod envelope;
mod mapping;
mod state;

pub use envelope::HookResponse;
pub use mapping::{MappingRule, MappingTable};
pub use state::{ContextMessage, ProjectState, SessionRecord};
