//! Prompt-to-documentation routing.
//!
//! [`KeywordRouter`] holds the compiled [`MappingTable`](crate::models::MappingTable);
//! the built-in table lives in `table.rs` as plain data.

mod router;
mod table;

pub use router::{KeywordRouter, SHORT_KEYWORD_MAX_CHARS};
