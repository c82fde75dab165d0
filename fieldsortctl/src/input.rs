use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

/// Read a JSON array of objects from `path`, or stdin when `path` is `-`.
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read records from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| {
            format!("failed to read records from {}", path.display())
        })?
    };

    let records: Vec<Value> = serde_json::from_str(&raw)
        .context("input must be a JSON array of objects")?;

    if let Some(index) = records.iter().position(|record| !record.is_object())
    {
        bail!("record {index} is not a JSON object");
    }

    debug!(records = records.len(), "read input records");
    Ok(records)
}
