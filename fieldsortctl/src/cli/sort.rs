use std::io::{self, Write};

use anyhow::{Context, Result};
use fieldsort_config::FieldsortConfig;
use fieldsort_core::Sorter;
use tracing::info;

use super::SortArgs;
use crate::input::read_records;

pub fn run(args: SortArgs, config: &FieldsortConfig) -> Result<()> {
    let mut records = read_records(&args.input)?;
    let sorter = Sorter::with_config(config.sorter.clone());
    let direction = sorter.direction(args.order);

    let sorted = match args.kind {
        Some(kind) => sorter.sort_by_typed_field(
            &mut records,
            &args.field,
            kind,
            Some(direction),
        ),
        None => sorter.sort_by_field(&mut records, &args.field, Some(direction)),
    };
    sorted.with_context(|| format!("failed to sort by field '{}'", args.field))?;

    info!(
        field = %args.field,
        %direction,
        records = records.len(),
        "sorted input"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &records)?;
    } else {
        serde_json::to_writer(&mut out, &records)?;
    }
    writeln!(out)?;
    Ok(())
}
