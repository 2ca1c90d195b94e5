use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Upcoming => commands::nearest::handle_upcoming(ctx, flags),
        Commands::Previous => commands::nearest::handle_previous(ctx, flags),
        Commands::Top(args) => commands::top::handle(args, ctx, flags),
        Commands::Weekly(args) => commands::weekly::handle(args, ctx, flags),
        Commands::Sources(args) => commands::sources::handle(args, ctx, flags),
        Commands::Rotation(args) => commands::rotation::handle(args, ctx, flags),
        Commands::Facts => commands::facts::handle(ctx, flags),
        Commands::Songs => commands::dimensions::handle_songs(ctx, flags),
        Commands::Dates => commands::dimensions::handle_dates(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
