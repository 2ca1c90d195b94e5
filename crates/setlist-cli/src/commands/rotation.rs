use anyhow::Context;
use setlist_core::{RotationThresholds, TitleRotation, rotation_report};

use crate::cli::root_commands::{RotationArgs, RotationFilter};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `setlist rotation`.
pub fn handle(args: &RotationArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let thresholds = thresholds(args, ctx)?;
    let mut report = rotation_report(&ctx.events, ctx.today(), thresholds);

    if let Some(filter) = args.only {
        let mut titles: Vec<&TitleRotation> = match filter {
            RotationFilter::Overused => report.overused(),
            RotationFilter::Underused => report.underused(),
        };
        apply_limit(&mut titles, flags.limit);
        return output(&titles, flags.format);
    }

    apply_limit(&mut report.titles, flags.limit);

    if flags.format == OutputFormat::Table {
        if !flags.quiet {
            println!(
                "{} titles, {} uses, average rotation {}",
                report.distinct_titles,
                report.total_uses,
                report
                    .avg_rotation_days
                    .map_or_else(|| String::from("-"), |days| format!("{days:.1} days")),
            );
        }
        return output(&report.titles, flags.format);
    }

    output(&report, flags.format)
}

/// Command-line thresholds override the configured ones, field by field.
fn thresholds(args: &RotationArgs, ctx: &AppContext) -> anyhow::Result<RotationThresholds> {
    let configured = &ctx.config.rotation;
    RotationThresholds::new(
        args.overused_days.unwrap_or(configured.overused_days),
        args.underused_days.unwrap_or(configured.underused_days),
    )
    .context("invalid rotation thresholds")
}
