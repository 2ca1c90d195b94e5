use setlist_core::{DayEvents, TemporalIndex};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist upcoming`.
pub fn handle_upcoming(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = TemporalIndex::build(&ctx.events);
    emit(index.nearest_upcoming(ctx.today()), flags)
}

/// Handle `setlist previous`.
pub fn handle_previous(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = TemporalIndex::build(&ctx.events);
    emit(index.nearest_previous(ctx.today()), flags)
}

fn emit(day: Option<DayEvents>, flags: &GlobalFlags) -> anyhow::Result<()> {
    match (day, flags.format) {
        (Some(day), OutputFormat::Table) => {
            if !flags.quiet {
                println!("{}", day.date.format("%A %Y-%m-%d"));
            }
            output(&day.events, flags.format)
        }
        (day, format) => output(&day, format),
    }
}
