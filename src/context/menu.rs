//! Static command menu shown outside structured projects.

/// A slash command and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Command name including the leading slash.
    pub command: String,
    /// One-line effect.
    pub effect: String,
}

/// Ordered table of top-level commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMenu {
    entries: Vec<MenuEntry>,
}

const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    ("/setup", "Detect project state, set up or migrate Directions"),
    ("/status", "Check current phase, focus, blockers, last session"),
    ("/log", "Create or update today's session log"),
    ("/decide", "Record an architectural/design decision"),
    ("/interview", "Run the full discovery interview"),
    ("/learned", "Add a term to your personal glossary"),
    ("/reorg", "Reorganize folder structure (numbered folders)"),
    ("/update-directions", "Pull latest Directions from GitHub"),
];

impl Default for CommandMenu {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandMenu {
    /// Creates a menu from `(command, effect)` pairs.
    #[must_use]
    pub fn new<I, C, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, E)>,
        C: Into<String>,
        E: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(command, effect)| MenuEntry {
                    command: command.into(),
                    effect: effect.into(),
                })
                .collect(),
        }
    }

    /// The built-in command menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_COMMANDS.iter().copied())
    }

    /// Returns the entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Renders the menu as a markdown table.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut lines = vec![
            "| Command | What it does |".to_string(),
            "|---------|------------|".to_string(),
        ];
        lines.extend(
            self.entries
                .iter()
                .map(|entry| format!("| `{}` | {} |", entry.command, entry.effect)),
        );
        lines.join("\n")
    }
}
