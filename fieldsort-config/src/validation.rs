use tracing_subscriber::EnvFilter;

use crate::loader::error::ConfigLoadError;
use crate::models::FieldsortConfig;

/// Reject configurations that would load but cannot work.
pub fn validate(config: &FieldsortConfig) -> Result<(), ConfigLoadError> {
    if config.sorter.parallel_threshold == 0 {
        return Err(ConfigLoadError::ZeroParallelThreshold);
    }

    let filter = config.logging.filter.trim();
    if filter.is_empty() {
        return Err(ConfigLoadError::EmptyLogFilter);
    }
    EnvFilter::try_new(filter).map_err(|err| {
        ConfigLoadError::InvalidLogFilter {
            filter: filter.to_string(),
            reason: err.to_string(),
        }
    })?;

    Ok(())
}
