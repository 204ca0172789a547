//! Heuristic field extraction from the project status document.
//!
//! The status document is loosely structured markdown. Three things are
//! pulled out of it:
//!
//! - **Phase** and **Focus**: a line starting with `Phase:` / `**Phase:**`
//!   wins, with bold markers stripped from its value; failing that, the
//!   first line mentioning "current phase" is used as written.
//! - **Blockers**: bullets under a heading that mentions "blocker", up to
//!   the next heading.
//!
//! Extraction is a pure function of the text. Unrecognized documents yield
//! an empty [`ProjectState`].

use crate::models::ProjectState;

const HEADING_MARKER: char = '#';
const BULLET_MARKERS: &[char] = &['-', '*'];
const BLOCKER_WORD: &str = "blocker";
const NO_BLOCKERS: &str = "none";

/// A labelled single-line field such as `Phase:`.
#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    /// Literal label, matched at line start with or without bold markers.
    label: &'static str,
    /// Lowercase fallback phrase matched anywhere in a line.
    phrase: &'static str,
}

const PHASE: FieldSpec = FieldSpec {
    label: "Phase:",
    phrase: "current phase",
};

const FOCUS: FieldSpec = FieldSpec {
    label: "Focus:",
    phrase: "current focus",
};

impl FieldSpec {
    fn is_label_line(self, line: &str) -> bool {
        line.starts_with(self.label)
            || line
                .strip_prefix("**")
                .and_then(|rest| rest.strip_prefix(self.label))
                .is_some_and(|rest| rest.starts_with("**"))
    }

    fn is_phrase_line(self, line: &str) -> bool {
        line.to_lowercase().contains(self.phrase)
    }

    fn extract(self, document: &str) -> Option<String> {
        if let Some(line) = document.lines().find(|line| self.is_label_line(line)) {
            return value_after_colon(line)
                .map(|value| value.trim_matches('*').trim())
                .and_then(non_empty);
        }
        document
            .lines()
            .find(|line| self.is_phrase_line(line))
            .and_then(value_after_colon)
            .and_then(non_empty)
    }
}

/// Text after the first colon, trimmed. Phrase lines keep any markup verbatim.
fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Position of the blocker scan within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockerScan {
    Scanning,
    InsideBlockerSection,
}

/// What a single line contributes to the blocker list.
#[derive(Debug, PartialEq, Eq)]
enum BlockerStep {
    Skip,
    Collect(String),
    Finish,
}

impl BlockerScan {
    fn step(self, line: &str) -> (Self, BlockerStep) {
        if is_blocker_heading(line) {
            return (Self::InsideBlockerSection, BlockerStep::Skip);
        }
        match self {
            Self::Scanning => (Self::Scanning, BlockerStep::Skip),
            Self::InsideBlockerSection if line.starts_with(HEADING_MARKER) => {
                (Self::Scanning, BlockerStep::Finish)
            },
            Self::InsideBlockerSection => {
                let step = bullet_text(line)
                    .filter(|text| !text.eq_ignore_ascii_case(NO_BLOCKERS))
                    .map_or(BlockerStep::Skip, |text| {
                        BlockerStep::Collect(text.to_string())
                    });
                (self, step)
            },
        }
    }
}

fn is_blocker_heading(line: &str) -> bool {
    line.contains(HEADING_MARKER) && line.to_lowercase().contains(BLOCKER_WORD)
}

fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(BULLET_MARKERS) {
        return None;
    }
    let text = trimmed.trim_start_matches(BULLET_MARKERS).trim();
    (!text.is_empty()).then_some(text)
}

/// Extracts [`ProjectState`] from status document text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFieldExtractor;

impl DocumentFieldExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extracts phase, focus, and blockers from `document`.
    pub fn extract(&self, document: &str) -> ProjectState {
        ProjectState {
            phase: PHASE.extract(document),
            focus: FOCUS.extract(document),
            blockers: self.extract_blockers(document),
        }
    }

    /// Collects bullets from the first blocker section.
    ///
    /// An unterminated section runs to the end of the document.
    pub fn extract_blockers(&self, document: &str) -> Vec<String> {
        let mut blockers = Vec::new();
        let mut scan = BlockerScan::Scanning;

        for line in document.lines() {
            let (next, step) = scan.step(line);
            scan = next;
            match step {
                BlockerStep::Skip => {},
                BlockerStep::Collect(text) => blockers.push(text),
                BlockerStep::Finish => break,
            }
        }

        blockers
    }
}
