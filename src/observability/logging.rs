//! Structured logging configuration.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "DIRECTIONS_LOG";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "DIRECTIONS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, defaulting to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
    /// Optional log file; stderr when absent.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from environment variables only.
    #[must_use]
    pub fn from_env(verbose: bool) -> Self {
        Self::from_settings(None, verbose)
    }

    /// Builds logging configuration from config settings with env overrides.
    ///
    /// Filter precedence: `DIRECTIONS_LOG`, then `--verbose`, then the config
    /// file, then `warn`. Format precedence: `DIRECTIONS_LOG_FORMAT`, then the
    /// config file.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_filter = std::env::var(LOG_FILTER_ENV).ok();
        let env_format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::resolve(settings, verbose, env_filter, env_format)
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env_filter: Option<String>,
        env_format: Option<String>,
    ) -> Self {
        let directive = env_filter
            .filter(|f| !f.trim().is_empty())
            .or_else(|| verbose.then(|| VERBOSE_FILTER.to_string()))
            .or_else(|| settings.and_then(|s| s.filter.clone()))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let format = env_format
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .map_or_else(LogFormat::default, |f| LogFormat::parse(&f));

        Self {
            format,
            filter,
            file: settings.and_then(|s| s.file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::resolve(None, false, None, None);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter.to_string(), "warn");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_verbose_beats_settings() {
        let settings = LoggingSettings {
            filter: Some("error".to_string()),
            ..LoggingSettings::default()
        };
        let config = LoggingConfig::resolve(Some(&settings), true, None, None);
        assert_eq!(config.filter.to_string(), "debug");
    }

    #[test]
    fn test_env_beats_everything() {
        let settings = LoggingSettings {
            format: Some("pretty".to_string()),
            filter: Some("error".to_string()),
            file: Some(PathBuf::from("/tmp/directions.log")),
        };
        let config = LoggingConfig::resolve(
            Some(&settings),
            true,
            Some("trace".to_string()),
            Some("json".to_string()),
        );
        assert_eq!(config.filter.to_string(), "trace");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/directions.log")));
    }
}
