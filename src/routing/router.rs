//! First-match keyword router.
//!
//! Scans a prompt against an ordered [`MappingTable`]. The first rule with a
//! matching keyword wins; there is no scoring and no multi-match merge.
//!
//! # Matching Policy
//!
//! | Keyword length | Match |
//! |----------------|-------|
//! | 4 chars or fewer | Whole word only (`pr` does not hit `pray`) |
//! | More than 4 chars | Plain substring (`crash` hits `crashes`) |

use regex::Regex;
use tracing::debug;

use crate::models::{MappingRule, MappingTable};
use crate::{Error, Result};

/// Keywords up to this many characters must sit on word boundaries.
pub const SHORT_KEYWORD_MAX_CHARS: usize = 4;

#[derive(Debug)]
enum KeywordMatcher {
    Bounded(Regex),
    Substring(String),
}

impl KeywordMatcher {
    fn compile(keyword: &str) -> Result<Self> {
        if keyword.chars().count() <= SHORT_KEYWORD_MAX_CHARS {
            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            Regex::new(&pattern)
                .map(Self::Bounded)
                .map_err(|e| Error::InvalidInput(format!("keyword '{keyword}': {e}")))
        } else {
            Ok(Self::Substring(keyword.to_string()))
        }
    }

    /// `prompt` must already be lowercased.
    fn is_match(&self, prompt: &str) -> bool {
        match self {
            Self::Bounded(re) => re.is_match(prompt),
            Self::Substring(keyword) => prompt.contains(keyword.as_str()),
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    rule: MappingRule,
    matchers: Vec<KeywordMatcher>,
}

/// Maps prompt text to the single most relevant [`MappingRule`].
#[derive(Debug)]
pub struct KeywordRouter {
    rules: Vec<CompiledRule>,
}

impl KeywordRouter {
    /// Builds a router over `table`, compiling one matcher per keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a rule has an empty keyword or a
    /// keyword cannot be compiled into a matcher.
    pub fn new(table: MappingTable) -> Result<Self> {
        let mut rules = Vec::with_capacity(table.len());
        for rule in table.rules() {
            let mut matchers = Vec::with_capacity(rule.keywords.len());
            for keyword in &rule.keywords {
                if keyword.trim().is_empty() {
                    return Err(Error::InvalidInput(format!(
                        "empty keyword in mapping for '{}'",
                        rule.doc_id
                    )));
                }
                matchers.push(KeywordMatcher::compile(&keyword.to_lowercase())?);
            }
            rules.push(CompiledRule {
                rule: rule.clone(),
                matchers,
            });
        }
        Ok(Self { rules })
    }

    /// Returns the first rule, in table order, with a keyword found in `prompt`.
    ///
    /// `None` is the normal outcome for prompts that mention nothing routable.
    pub fn route(&self, prompt: &str) -> Option<&MappingRule> {
        let prompt = prompt.to_lowercase();

        for compiled in &self.rules {
            let hit = compiled
                .matchers
                .iter()
                .zip(&compiled.rule.keywords)
                .find(|(matcher, _)| matcher.is_match(&prompt));

            if let Some((_, keyword)) = hit {
                debug!(keyword = %keyword, doc = %compiled.rule.doc_id, "prompt routed");
                return Some(&compiled.rule);
            }
        }

        debug!("no mapping matched prompt");
        None
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> impl Iterator<Item = &MappingRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }
}
