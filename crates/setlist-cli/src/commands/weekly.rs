use setlist_core::weekly_series;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WeeklyArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist weekly`.
pub fn handle(args: &WeeklyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let weeks = args.weeks.unwrap_or(ctx.config.report.weekly_weeks);
    let series = weekly_series(&ctx.events, weeks, ctx.now);
    output(&series, flags.format)
}
