//! Hook command handler.
//!
//! Contains the implementation of the `hook` CLI command for
//! Claude Code hook event handling.

use std::io::{self, IsTerminal};

use directions::HookResponse;
use directions::hooks::{
    HookHandler, PROMPT_ENV, SessionStartHandler, UserPromptHandler, read_input,
};
use tracing::{info_span, warn};

use super::{CommandContext, HookEvent};

/// Hook command.
pub fn cmd_hook(event: HookEvent, ctx: &CommandContext) -> anyhow::Result<()> {
    let span = info_span!(
        "directions.hook.invoke",
        hook = event.as_str(),
        root = %ctx.project_root.display()
    );
    let _span_guard = span.enter();

    let input = read_hook_input();

    let response = match run_handler(event, ctx, &input) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "hook failed, answering with an empty response");
            HookResponse::empty().to_json()?
        },
    };

    // Output response (already JSON string)
    println!("{response}");

    Ok(())
}

fn run_handler(
    event: HookEvent,
    ctx: &CommandContext,
    input: &str,
) -> directions::Result<String> {
    match event {
        HookEvent::SessionStart => {
            SessionStartHandler::from_config(&ctx.project_root, &ctx.config).handle(input)
        },
        HookEvent::UserPromptSubmit => {
            UserPromptHandler::from_config(&ctx.project_root, &ctx.config)?
                .with_fallback_prompt(std::env::var(PROMPT_ENV).ok())
                .handle(input)
        },
    }
}

/// Reads hook input from stdin, or nothing when stdin is a terminal.
fn read_hook_input() -> String {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return String::new();
    }
    read_input(stdin.lock())
}
