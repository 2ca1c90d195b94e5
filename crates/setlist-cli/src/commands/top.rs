use setlist_core::top_ranked;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WindowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist top`.
pub fn handle(args: &WindowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let window = args.weeks.unwrap_or_else(|| ctx.config.report.window());
    let limit = flags.limit.unwrap_or(ctx.config.report.top_limit);

    tracing::debug!(%window, limit, "ranking titles");
    let ranked = top_ranked(
        &ctx.events,
        window,
        ctx.today(),
        Some(usize::try_from(limit)?),
    );

    output(&ranked, flags.format)
}
