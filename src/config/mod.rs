//! Configuration management.
//!
//! Configuration is optional: every field has a default matching the
//! conventional project layout and the built-in mapping table. A TOML file
//! may override any subset.
//!
//! ```toml
//! [layout]
//! docs_dir = "documentation"
//! sessions_dir = "documentation/log"
//!
//! [logging]
//! format = "json"
//! filter = "directions=debug"
//!
//! [[mappings]]
//! keywords = ["migration", "schema"]
//! doc = "60_database.md"
//! description = "database migrations"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{MappingRule, MappingTable};
use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DIRECTIONS_CONFIG_PATH";

const CONFIG_DIR_NAME: &str = "directions";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration for directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsConfig {
    /// Relative locations of the structured-state files.
    pub layout: LayoutConfig,
    /// Keyword routing table, in priority order.
    pub mappings: MappingTable,
    /// Logging settings, resolved later against env and CLI flags.
    pub logging: LoggingSettings,
}

/// Relative paths of the structured-state files under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Documentation directory; also the prefix of suggested doc paths.
    pub docs_dir: PathBuf,
    /// Marker file whose existence enables the hooks.
    pub marker: PathBuf,
    /// Project status document.
    pub state_document: PathBuf,
    /// Session log directory.
    pub sessions_dir: PathBuf,
    /// Reserved index file inside the session log directory.
    pub index_file: String,
    /// Session log extension, without the dot.
    pub log_extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::under_docs_dir(PathBuf::from("docs"))
    }
}

impl LayoutConfig {
    /// Builds the conventional layout beneath `docs_dir`.
    #[must_use]
    pub fn under_docs_dir(docs_dir: PathBuf) -> Self {
        Self {
            marker: docs_dir.join("00_base.md"),
            state_document: docs_dir.join("PROJECT_STATE.md"),
            sessions_dir: docs_dir.join("sessions"),
            docs_dir,
            index_file: crate::state::DEFAULT_INDEX_FILE.to_string(),
            log_extension: crate::state::DEFAULT_LOG_EXTENSION.to_string(),
        }
    }
}

/// Logging section as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// `EnvFilter` directive, e.g. `directions=debug`.
    pub filter: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Layout overrides.
    pub layout: Option<ConfigFileLayout>,
    /// Replacement mapping table.
    pub mappings: Option<Vec<MappingRule>>,
    /// Logging settings.
    pub logging: Option<LoggingSettings>,
}

/// Layout section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLayout {
    /// Documentation directory.
    pub docs_dir: Option<String>,
    /// Marker file.
    pub marker: Option<String>,
    /// Status document.
    pub state_document: Option<String>,
    /// Session log directory.
    pub sessions_dir: Option<String>,
    /// Reserved index file name.
    pub index_file: Option<String>,
    /// Session log extension.
    pub log_extension: Option<String>,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            mappings: MappingTable::builtin(),
            logging: LoggingSettings::default(),
        }
    }
}

impl DirectionsConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::operation("read_config_file", format!("{}: {e}", path.display())))?;
        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config file.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::operation("parse_config_file", e))?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/directions/` on macOS)
    /// 2. XDG config dir (`~/.config/directions/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found or loadable.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            base_dirs
                .home_dir()
                .join(".config")
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ];

        for path in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                },
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `DirectionsConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(layout) = file.layout {
            if let Some(docs_dir) = layout.docs_dir {
                config.layout = LayoutConfig::under_docs_dir(PathBuf::from(docs_dir));
            }
            if let Some(marker) = layout.marker {
                config.layout.marker = PathBuf::from(marker);
            }
            if let Some(state_document) = layout.state_document {
                config.layout.state_document = PathBuf::from(state_document);
            }
            if let Some(sessions_dir) = layout.sessions_dir {
                config.layout.sessions_dir = PathBuf::from(sessions_dir);
            }
            if let Some(index_file) = layout.index_file {
                config.layout.index_file = index_file;
            }
            if let Some(extension) = layout.log_extension {
                config.layout.log_extension = extension.trim_start_matches('.').to_string();
            }
        }
        if let Some(mappings) = file.mappings {
            config.mappings = mappings
                .into_iter()
                .map(|rule| MappingRule::new(rule.keywords, rule.doc_id, rule.description))
                .collect();
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Sets the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the mapping table.
    #[must_use]
    pub fn with_mappings(mut self, mappings: MappingTable) -> Self {
        self.mappings = mappings;
        self
    }
}
