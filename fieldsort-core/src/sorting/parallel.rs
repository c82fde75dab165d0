//! Parallel sorting for large datasets
//!
//! A [`FieldComparator`] holds only immutable state, so one instance can be
//! shared by rayon workers. Workers never share a collection: either one
//! large collection is split into key extraction and a parallel stable sort,
//! or several disjoint collections are sorted side by side.

use crate::error::Result;
use crate::sorting::comparator::FieldComparator;
use crate::sorting::strategy::{FieldSort, SortStrategy, abort, extract_keys};
use crate::sorting::utils::reorder_by_indices;
use fieldsort_model::Record;
use rayon::prelude::*;
use tracing::trace;

/// Default item count above which [`ParallelSort`] goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Key-extraction sort that switches to rayon above a size threshold.
#[derive(Debug, Clone)]
pub struct ParallelSort {
    comparator: FieldComparator,
    threshold: usize,
}

impl ParallelSort {
    /// Create a new parallel sort with default threshold (10,000 items)
    pub fn new(comparator: FieldComparator) -> Self {
        Self::with_threshold(comparator, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a parallel sort with custom threshold
    pub fn with_threshold(comparator: FieldComparator, threshold: usize) -> Self {
        Self {
            comparator,
            threshold: threshold.max(1),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<R: Record + Sync> SortStrategy<R> for ParallelSort {
    fn try_sort(&self, items: &mut [R]) -> Result<()> {
        if items.len() < self.threshold {
            // Dataset too small, use sequential sorting
            return FieldSort::new(self.comparator.clone()).try_sort(items);
        }

        let order = {
            let view: &[R] = items;
            let mut keyed = view
                .par_iter()
                .enumerate()
                .map(|(index, item)| {
                    self.comparator.sort_key(item).map(|key| (index, key))
                })
                .collect::<Result<Vec<_>>>()
                .map_err(|err| abort(&self.comparator, view.len(), err))?;
            // rayon's par_sort_by is stable.
            keyed.par_sort_by(|a, b| self.comparator.compare_keys(&a.1, &b.1));
            keyed.into_iter().map(|(index, _)| index).collect::<Vec<_>>()
        };

        reorder_by_indices(items, &order);
        trace!(
            field = self.comparator.field_id(),
            len = items.len(),
            "sorted records in parallel"
        );
        Ok(())
    }
}

/// Sort several disjoint collections concurrently with one shared
/// comparator. Results are returned in batch order; a failed batch is left
/// in its input order and does not affect the others.
pub fn sort_batches<R>(
    comparator: &FieldComparator,
    batches: &mut [Vec<R>],
) -> Vec<Result<()>>
where
    R: Record + Send + Sync,
{
    batches
        .par_iter_mut()
        .map(|batch| -> Result<()> {
            let order = {
                let mut keyed = extract_keys(comparator, batch)
                    .map_err(|err| abort(comparator, batch.len(), err))?;
                keyed.sort_by(|a, b| comparator.compare_keys(&a.1, &b.1));
                keyed.into_iter().map(|(index, _)| index).collect::<Vec<_>>()
            };
            reorder_by_indices(batch, &order);
            Ok(())
        })
        .collect()
}
