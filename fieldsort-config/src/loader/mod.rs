//! Layered configuration discovery.

pub mod error;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::{ConfigSource, FieldsortConfig};
use crate::validation::validate;
use error::ConfigLoadError;

/// Names a config file to load, overriding discovery.
pub const CONFIG_PATH_ENV: &str = "FIELDSORT_CONFIG_PATH";
/// Holds a whole config document as inline JSON.
pub const CONFIG_JSON_ENV: &str = "FIELDSORT_CONFIG_JSON";

/// Files probed, relative to the loader root, when no env var applies.
pub const DEFAULT_CANDIDATES: &[&str] =
    &["fieldsort.toml", "fieldsort.json", "config/fieldsort.toml"];

/// A validated configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    pub config: FieldsortConfig,
    pub source: ConfigSource,
}

/// Resolves the effective [`FieldsortConfig`].
///
/// Evaluation order:
/// 1) an explicit path set with [`ConfigLoader::with_explicit_path`],
/// 2) `$FIELDSORT_CONFIG_PATH` (TOML or JSON file),
/// 3) `$FIELDSORT_CONFIG_JSON` (inline JSON),
/// 4) the first existing file in [`DEFAULT_CANDIDATES`],
/// 5) defaults.
///
/// The result is validated before it is returned.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    root: PathBuf,
    explicit_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
    env_json: Option<String>,
}

impl ConfigLoader {
    /// Loader rooted at the working directory that reads the process
    /// environment.
    pub fn from_env() -> Self {
        Self {
            root: PathBuf::from("."),
            explicit_path: None,
            env_path: non_blank_var(CONFIG_PATH_ENV).map(PathBuf::from),
            env_json: non_blank_var(CONFIG_JSON_ENV),
        }
    }

    /// Directory the default candidates are resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn with_env_path(mut self, path: Option<PathBuf>) -> Self {
        self.env_path = path;
        self
    }

    pub fn with_env_json(mut self, raw: Option<String>) -> Self {
        self.env_json = raw;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) =
            self.discover().map_err(ConfigLoadError::Source)?;
        validate(&config)?;
        Ok(ConfigLoad { config, source })
    }

    fn discover(&self) -> anyhow::Result<(FieldsortConfig, ConfigSource)> {
        if let Some(path) = &self.explicit_path {
            let config = FieldsortConfig::load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &self.env_path {
            let config = FieldsortConfig::load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &self.env_json {
            let config = FieldsortConfig::parse_json(raw)
                .context("failed to parse FIELDSORT_CONFIG_JSON")?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = FieldsortConfig::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((FieldsortConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.root.join(Path::new(candidate)))
            .find(|path| path.exists())
    }
}

impl FieldsortConfig {
    /// Load using the process environment and the working directory.
    pub fn load_from_env() -> Result<ConfigLoad, ConfigLoadError> {
        ConfigLoader::from_env().load()
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
