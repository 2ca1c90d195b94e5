use schemars::{Schema, schema_for};
use setlist_core::{
    DateDimension, DayEvents, Event, RankedTitle, RotationReport, SongDimension, SourceCount,
    UsageFact, WeekCount,
};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `setlist schema`. Table output falls back to pretty JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(args.type_name);
    match flags.format {
        OutputFormat::Raw => output(&schema, OutputFormat::Raw),
        OutputFormat::Json | OutputFormat::Table => output(&schema, OutputFormat::Json),
    }
}

fn schema_of(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Event => schema_for!(Event),
        SchemaType::Day => schema_for!(DayEvents),
        SchemaType::Ranked => schema_for!(RankedTitle),
        SchemaType::Week => schema_for!(WeekCount),
        SchemaType::Source => schema_for!(SourceCount),
        SchemaType::Rotation => schema_for!(RotationReport),
        SchemaType::Fact => schema_for!(UsageFact),
        SchemaType::Song => schema_for!(SongDimension),
        SchemaType::Date => schema_for!(DateDimension),
    }
}
