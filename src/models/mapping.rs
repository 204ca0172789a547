//! Keyword-to-document mapping rules.

use serde::{Deserialize, Serialize};

/// A single routing rule: any of `keywords` points at `doc_id`.
///
/// Keywords are case-insensitive literals and are stored lowercased.
/// Their order is significant: the first keyword that matches wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Keywords in match order.
    pub keywords: Vec<String>,
    /// Document reference, relative to the docs directory.
    #[serde(rename = "doc")]
    pub doc_id: String,
    /// Short description of what the document covers.
    pub description: String,
}

impl MappingRule {
    /// Creates a rule, normalizing keywords to lowercase.
    #[must_use]
    pub fn new<I, S>(keywords: I, doc_id: impl Into<String>, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            doc_id: doc_id.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable list of mapping rules.
///
/// Table order is the only tie-break between rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    rules: Vec<MappingRule>,
}

impl MappingTable {
    /// Creates a table from rules in priority order.
    #[must_use]
    pub const fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<MappingRule> for MappingTable {
    fn from_iter<T: IntoIterator<Item = MappingRule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
