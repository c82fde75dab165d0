use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use fieldsort_config::FieldsortConfig;
use fieldsort_core::Sorter;

use super::InspectArgs;
use crate::input::read_records;

/// Print the field descriptor `sort` would use for the same input.
pub fn run(args: InspectArgs, config: &FieldsortConfig) -> Result<()> {
    let records = read_records(&args.input)?;
    let sorter = Sorter::with_config(config.sorter.clone());

    let comparator = sorter
        .comparator_for(&records, &args.field, sorter.direction(None))
        .with_context(|| format!("failed to resolve field '{}'", args.field))?;
    let Some(comparator) = comparator else {
        bail!("no record holds a value for field '{}'", args.field);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, comparator.field())?;
    writeln!(out)?;
    Ok(())
}
