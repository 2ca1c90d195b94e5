use setlist_core::usage_facts;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist facts`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut facts = usage_facts(&ctx.events);
    apply_limit(&mut facts, flags.limit);
    output(&facts, flags.format)
}
