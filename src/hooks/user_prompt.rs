//! User prompt submit hook handler.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use super::HookHandler;
use crate::Result;
use crate::config::DirectionsConfig;
use crate::models::{HookResponse, MappingRule};
use crate::project::ProjectLayout;
use crate::routing::KeywordRouter;

/// Environment variable consulted when stdin carries no prompt.
pub const PROMPT_ENV: &str = "CLAUDE_USER_PROMPT";

/// Handles `UserPromptSubmit` hook events.
///
/// Suggests the single most relevant documentation file for the prompt,
/// but only inside projects that carry the marker file.
#[derive(Debug)]
pub struct UserPromptHandler {
    router: KeywordRouter,
    layout: ProjectLayout,
    fallback_prompt: Option<String>,
}

impl UserPromptHandler {
    /// Creates a new handler.
    #[must_use]
    pub const fn new(router: KeywordRouter, layout: ProjectLayout) -> Self {
        Self {
            router,
            layout,
            fallback_prompt: None,
        }
    }

    /// Creates a handler for `root` from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured mapping table cannot be compiled.
    pub fn from_config(root: &Path, config: &DirectionsConfig) -> Result<Self> {
        let router = KeywordRouter::new(config.mappings.clone())?;
        let layout = ProjectLayout::with_layout(root, config.layout.clone());
        Ok(Self::new(router, layout))
    }

    /// Sets the prompt used when the hook input carries none.
    #[must_use]
    pub fn with_fallback_prompt(mut self, prompt: Option<String>) -> Self {
        self.fallback_prompt = prompt.filter(|p| !p.trim().is_empty());
        self
    }

    /// Extracts the prompt text from raw hook input.
    ///
    /// Accepts the host's JSON payload (`{"prompt": "..."}`), a bare JSON
    /// string, or plain text.
    fn extract_prompt(&self, input: &str) -> String {
        let prompt = match serde_json::from_str::<Value>(input) {
            Ok(Value::Object(map)) => map
                .get("prompt")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Ok(Value::String(text)) => text,
            _ => input.to_string(),
        };

        let prompt = prompt.trim();
        if prompt.is_empty() {
            self.fallback_prompt.clone().unwrap_or_default()
        } else {
            prompt.to_string()
        }
    }

    /// Returns the suggestion text for `prompt`, if any rule matches.
    pub fn suggest(&self, prompt: &str) -> Option<String> {
        self.router.route(prompt).map(|rule| self.render(rule))
    }

    fn render(&self, rule: &MappingRule) -> String {
        let docs_dir = self.layout.layout().docs_dir.display().to_string();
        let docs_dir = docs_dir.trim_end_matches(['/', '\\']);
        let path = if docs_dir.is_empty() {
            rule.doc_id.clone()
        } else {
            format!("{docs_dir}/{}", rule.doc_id)
        };
        format!(
            "📚 **Relevant doc:** `{path}` covers {}.",
            rule.description
        )
    }

    fn respond(&self, input: &str) -> HookResponse {
        let prompt = self.extract_prompt(input);
        if prompt.is_empty() {
            debug!("no prompt to analyze");
            return HookResponse::empty();
        }

        if !self.layout.is_detected() {
            return HookResponse::empty();
        }

        self.suggest(&prompt)
            .map_or_else(HookResponse::empty, HookResponse::message)
    }
}

impl HookHandler for UserPromptHandler {
    fn event_type(&self) -> &'static str {
        "UserPromptSubmit"
    }

    #[instrument(skip(self, input), fields(hook = "UserPromptSubmit"))]
    fn handle(&self, input: &str) -> Result<String> {
        self.respond(input).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MappingTable;
    use tempfile::TempDir;

    fn handler_for(root: &Path) -> UserPromptHandler {
        UserPromptHandler::from_config(root, &DirectionsConfig::default()).unwrap()
    }

    fn detected_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/00_base.md"), "# Base").unwrap();
        dir
    }

    fn response(handler: &UserPromptHandler, input: &str) -> HookResponse {
        serde_json::from_str(&handler.handle(input).unwrap()).unwrap()
    }

    #[test]
    fn test_handler_creation() {
        let dir = TempDir::new().unwrap();
        assert_eq!(handler_for(dir.path()).event_type(), "UserPromptSubmit");
    }

    #[test]
    fn test_json_prompt_suggests_doc() {
        let dir = detected_project();
        let handler = handler_for(dir.path());

        let result = response(&handler, r#"{"prompt": "the app crashes on launch"}"#);
        assert_eq!(
            result.message.as_deref(),
            Some("📚 **Relevant doc:** `docs/31_debugging.md` covers debugging strategies.")
        );
    }

    #[test]
    fn test_plain_text_prompt() {
        let dir = detected_project();
        let handler = handler_for(dir.path());

        let result = response(&handler, "please open a pr\n");
        assert_eq!(
            result.message.as_deref(),
            Some("📚 **Relevant doc:** `docs/32_git-workflow.md` covers git workflow.")
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let dir = detected_project();
        let handler = handler_for(dir.path());
        assert_eq!(handler.handle(r#"{"prompt": "hello"}"#).unwrap(), "{}");
    }

    #[test]
    fn test_without_marker_is_empty() {
        let dir = TempDir::new().unwrap();
        let handler = handler_for(dir.path());
        assert_eq!(handler.handle(r#"{"prompt": "it crashed"}"#).unwrap(), "{}");
    }

    #[test]
    fn test_empty_prompt_is_empty() {
        let dir = detected_project();
        let handler = handler_for(dir.path());
        assert_eq!(handler.handle(r#"{"prompt": ""}"#).unwrap(), "{}");
        assert_eq!(handler.handle("   ").unwrap(), "{}");
    }

    #[test]
    fn test_fallback_prompt_used_when_input_empty() {
        let dir = detected_project();
        let handler =
            handler_for(dir.path()).with_fallback_prompt(Some("ship it to testflight".to_string()));

        let result = response(&handler, "{}");
        assert!(result
            .message
            .is_some_and(|m| m.contains("30_production-checklist.md")));
    }

    #[test]
    fn test_fallback_prompt_ignored_when_input_present() {
        let dir = detected_project();
        let handler = handler_for(dir.path()).with_fallback_prompt(Some("crash".to_string()));
        assert_eq!(handler.handle(r#"{"prompt": "hello"}"#).unwrap(), "{}");
    }

    #[test]
    fn test_custom_docs_dir_prefix() {
        let dir = TempDir::new().unwrap();
        let config = DirectionsConfig::parse("[layout]\ndocs_dir = \"handbook/\"\n").unwrap();
        let handler = UserPromptHandler::from_config(dir.path(), &config).unwrap();
        let suggestion = handler.suggest("css grid").unwrap();
        assert!(suggestion.contains("`handbook/24_web-gotchas.md`"));
    }

    #[test]
    fn test_extract_prompt_variants() {
        let dir = TempDir::new().unwrap();
        let handler = UserPromptHandler::new(
            KeywordRouter::new(MappingTable::default()).unwrap(),
            ProjectLayout::new(dir.path()),
        );

        assert_eq!(handler.extract_prompt(r#"{"prompt": " hi "}"#), "hi");
        assert_eq!(handler.extract_prompt(r#""quoted""#), "quoted");
        assert_eq!(handler.extract_prompt("[1, 2]"), "[1, 2]");
        assert_eq!(handler.extract_prompt(r#"{"prompt": 42}"#), "");
    }
}
