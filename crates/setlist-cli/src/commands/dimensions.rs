use setlist_core::{date_dimension, song_dimension};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist songs`.
pub fn handle_songs(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut songs = song_dimension(&ctx.events);
    apply_limit(&mut songs, flags.limit);
    output(&songs, flags.format)
}

/// Handle `setlist dates`.
pub fn handle_dates(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dates = date_dimension(&ctx.events);
    apply_limit(&mut dates, flags.limit);
    output(&dates, flags.format)
}
