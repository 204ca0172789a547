//! Built-in keyword mapping table.
//!
//! Static routing data, in priority order. A rule earlier in the list wins
//! over any later rule, regardless of where its keyword appears in the prompt.

use crate::models::{MappingRule, MappingTable};

/// `(keywords, doc, description)` triples, highest priority first.
const BUILTIN_MAPPINGS: &[(&[&str], &str, &str)] = &[
    (
        &[
            "coordinate",
            "position",
            "frame",
            "bounds",
            "cgpoint",
            "cgrect",
            "origin",
            "anchor",
        ],
        "21_coordinate-systems.md",
        "coordinate systems and positioning",
    ),
    (
        &[
            "not updating",
            "not refreshing",
            "state not changing",
            "observableobject",
            "@state",
            "@binding",
            "published",
            "view update",
            "refresh view",
            "redraw",
        ],
        "20_swiftui-gotchas.md",
        "SwiftUI state and view updates",
    ),
    (
        &[
            "sandbox",
            "bookmark",
            "entitlement",
            "security-scoped",
            "app sandbox",
            "file access",
            "permission",
        ],
        "22_macos-platform.md",
        "macOS sandboxing and entitlements",
    ),
    (
        &[
            "debug",
            "bug",
            "broken",
            "not working",
            "crash",
            "error",
            "issue",
            "problem",
        ],
        "31_debugging.md",
        "debugging strategies",
    ),
    (
        &[
            "ship",
            "release",
            "production",
            "deploy",
            "publish",
            "app store",
            "testflight",
        ],
        "30_production-checklist.md",
        "production readiness",
    ),
    (
        &["typography", "font", "text style", "sf pro", "dynamic type"],
        "40_typography.md",
        "typography guidelines",
    ),
    (
        &["git", "commit", "branch", "merge", "pull request", "pr"],
        "32_git-workflow.md",
        "git workflow",
    ),
    (
        &[
            "architecture",
            "design decision",
            "pattern",
            "structure",
            "approach",
        ],
        "04_architecture-decisions.md",
        "architecture decision records",
    ),
    (
        &["new project", "start", "scaffold", "setup", "initialize"],
        "10_new-project.md",
        "new project setup",
    ),
    (
        &["plan", "planning", "roadmap", "scope", "estimate"],
        "51_planning-patterns.md",
        "planning patterns",
    ),
    (
        &["web", "html", "css", "javascript", "browser", "responsive"],
        "24_web-gotchas.md",
        "web development gotchas",
    ),
    (
        &[
            "button",
            "menu",
            "toolbar",
            "sidebar",
            "navigation",
            "tab",
            "modal",
            "sheet",
        ],
        "41_apple-ui.md",
        "Apple UI patterns",
    ),
];

impl MappingTable {
    /// Returns the built-in documentation mapping table.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_MAPPINGS
            .iter()
            .map(|(keywords, doc, description)| {
                MappingRule::new(keywords.iter().copied(), *doc, *description)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_order() {
        let table = MappingTable::builtin();
        assert_eq!(table.len(), 12);
        assert_eq!(table.rules()[0].doc_id, "21_coordinate-systems.md");
        assert_eq!(table.rules()[3].doc_id, "31_debugging.md");
        assert_eq!(table.rules()[11].doc_id, "41_apple-ui.md");
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        for rule in MappingTable::builtin().rules() {
            for keyword in &rule.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }
}
