//! Session start hook handler.

use std::path::Path;

use tracing::{debug, instrument};

use super::HookHandler;
use crate::Result;
use crate::config::DirectionsConfig;
use crate::context::ContextComposer;
use crate::models::{ContextMessage, HookResponse};
use crate::project::ProjectLayout;
use crate::state::{DocumentFieldExtractor, SessionLogLocator};

/// Handles `SessionStart` hook events.
///
/// Summarizes project state at the start of a session, or offers the command
/// menu when the project does not use the structured-state convention.
#[derive(Debug, Clone)]
pub struct SessionStartHandler {
    layout: ProjectLayout,
    extractor: DocumentFieldExtractor,
    locator: SessionLogLocator,
    composer: ContextComposer,
}

impl SessionStartHandler {
    /// Creates a handler with default extractor, locator and composer.
    #[must_use]
    pub fn new(layout: ProjectLayout) -> Self {
        let locator = SessionLogLocator::new()
            .with_index_file(layout.layout().index_file.clone())
            .with_extension(layout.layout().log_extension.clone());
        Self {
            layout,
            extractor: DocumentFieldExtractor::new(),
            locator,
            composer: ContextComposer::default(),
        }
    }

    /// Creates a handler for `root` from configuration.
    #[must_use]
    pub fn from_config(root: &Path, config: &DirectionsConfig) -> Self {
        Self::new(ProjectLayout::with_layout(root, config.layout.clone()))
    }

    /// Replaces the composer.
    #[must_use]
    pub fn with_composer(mut self, composer: ContextComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Builds the context message from the current files on disk.
    pub fn build_context(&self) -> ContextMessage {
        if !self.layout.is_detected() {
            return self.composer.fallback();
        }

        let state = self
            .layout
            .read_state_document()
            .map(|content| self.extractor.extract(&content))
            .unwrap_or_default();
        let session = self.locator.locate(&self.layout.sessions_dir());

        debug!(
            phase = state.phase.is_some(),
            focus = state.focus.is_some(),
            blockers = state.blockers.len(),
            session = session.is_some(),
            "composing session context"
        );
        self.composer.compose(&state, session.as_ref(), true)
    }
}

impl HookHandler for SessionStartHandler {
    fn event_type(&self) -> &'static str {
        "SessionStart"
    }

    #[instrument(skip(self, _input), fields(hook = "SessionStart"))]
    fn handle(&self, _input: &str) -> Result<String> {
        HookResponse::message(self.build_context()).to_json()
    }
}
