use crate::sorting::parallel::DEFAULT_PARALLEL_THRESHOLD;
use fieldsort_model::SortDirection;
use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::Sorter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SorterConfig {
    /// Collections with at least this many records are sorted with rayon.
    /// Smaller ones stay on the calling thread, where spawning work costs
    /// more than it saves.
    pub parallel_threshold: usize,
    /// Direction used when a request does not name one.
    pub default_direction: SortDirection,
    /// Infer the kind from the first record that holds a value instead of
    /// always using the first record. Leading nulls then do not make the
    /// kind indeterminate.
    pub scan_for_representative: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            default_direction: SortDirection::Ascending,
            scan_for_representative: true,
        }
    }
}
