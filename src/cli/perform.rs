use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use touch_action::{ForwardedGesture, SessionHandle};
use touchwire_core_types::SessionId;
use tracing::{debug, info};

use crate::cli::context::CliContext;
use crate::cli::output::emit;
use crate::cli::source::GestureSource;
use crate::dry_run::DryRunExecutor;

#[derive(Args, Clone, Debug)]
pub struct PerformArgs {
    /// Session to anchor the gesture to (defaults to config, then a fresh id)
    #[arg(short, long)]
    pub session: Option<String>,

    /// Anchor the gesture to this element instead of the viewport
    #[arg(short, long)]
    pub element: Option<String>,

    #[command(flatten)]
    pub source: GestureSource,
}

pub async fn cmd_perform(args: PerformArgs, ctx: &CliContext) -> Result<()> {
    let request = args.source.load(ctx.config()).await?;

    let session_id = args
        .session
        .map(SessionId::from)
        .or_else(|| ctx.config().session_id.clone())
        .unwrap_or_else(|| {
            let generated = SessionId::new();
            info!(session = %generated, "No session configured, generated one");
            generated
        });
    let session = SessionHandle::new(session_id, Arc::new(DryRunExecutor));
    debug!(
        session = %session.id(),
        element = args.element.as_deref().unwrap_or("-"),
        steps = request.len(),
        "Performing gesture"
    );

    let outcome = match args.element {
        Some(element) => session.element(element).touch_action(request).await,
        None => session.touch_action(request).await,
    };
    let forwarded = outcome.unwrap_or_else(|never| match never {});

    emit(&forwarded, ctx.output(), render_forwarded)
}

fn render_forwarded(forwarded: &ForwardedGesture) -> String {
    let mut lines = vec![
        "Forwarded gesture".to_string(),
        format!("  anchor: {}", forwarded.anchor),
    ];
    for (index, step) in forwarded.request.steps().iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, step));
    }
    if forwarded.request.is_empty() {
        lines.push("  (no steps)".to_string());
    }
    lines.join("\n")
}
