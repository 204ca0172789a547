//! Interactive commands.
//!
//! These expose the same pipelines as the hooks for use from a terminal.

use directions::hooks::{SessionStartHandler, UserPromptHandler};
use directions::routing::KeywordRouter;

use super::CommandContext;

/// Suggest command: prints the matching doc reference, if any.
pub fn cmd_suggest(prompt: &str, ctx: &CommandContext) -> anyhow::Result<()> {
    let handler = UserPromptHandler::from_config(&ctx.project_root, &ctx.config)?;
    match handler.suggest(prompt) {
        Some(suggestion) => println!("{suggestion}"),
        None => println!("No matching documentation."),
    }
    Ok(())
}

/// Status command: prints the session context message.
pub fn cmd_status(ctx: &CommandContext) -> anyhow::Result<()> {
    let handler = SessionStartHandler::from_config(&ctx.project_root, &ctx.config);
    println!("{}", handler.build_context());
    Ok(())
}

/// Mappings command: lists the routing table in priority order.
pub fn cmd_mappings(ctx: &CommandContext) -> anyhow::Result<()> {
    let router = KeywordRouter::new(ctx.config.mappings.clone())?;
    for (priority, rule) in router.rules().enumerate() {
        println!("{:>2}. {} ({})", priority + 1, rule.doc_id, rule.description);
        println!("    {}", rule.keywords.join(", "));
    }
    Ok(())
}
