use setlist_core::category_tally;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WindowArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist sources`.
pub fn handle(args: &WindowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let window = args.weeks.unwrap_or_else(|| ctx.config.report.window());

    let mut tally = category_tally(window.filter(&ctx.events, ctx.today()));
    apply_limit(&mut tally, flags.limit);

    output(&tally, flags.format)
}
