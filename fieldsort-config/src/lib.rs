//! Shared configuration library for fieldsort.
//!
//! Loads [`FieldsortConfig`] from an explicit file, the
//! `FIELDSORT_CONFIG_PATH` / `FIELDSORT_CONFIG_JSON` environment variables
//! or a default candidate file, and validates it before handing it to a
//! binary.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigLoad, ConfigLoader,
    DEFAULT_CANDIDATES, error::ConfigLoadError,
};
pub use models::{
    ConfigSource, DEFAULT_LOG_FILTER, FieldsortConfig, LoggingConfig,
};
pub use validation::validate;
