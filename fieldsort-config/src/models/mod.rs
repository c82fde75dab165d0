pub mod sources;

use anyhow::{Context, anyhow};
use fieldsort_core::SorterConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub use sources::ConfigSource;

/// Filter used when neither `RUST_LOG` nor a config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Everything a fieldsort process can be configured with.
///
/// Every section is optional in a config document; omitted values keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldsortConfig {
    /// Sort orchestration: parallel threshold, default direction and
    /// representative scanning.
    pub sorter: SorterConfig,
    pub logging: LoggingConfig,
}

/// Logging settings for binaries. Libraries only emit `tracing` events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `info,fieldsort_core=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FieldsortConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read fieldsort config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid fieldsort config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid fieldsort config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse fieldsort config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid fieldsort config json: {err}"))
    }
}
