//! Sort strategies that consume a [`FieldComparator`]
//!
//! Every strategy is stable and all-or-nothing: when a record cannot be
//! read as the resolved kind the sort is aborted and the caller's slice is
//! left in its input order.

use crate::error::{Result, SortError};
use crate::sorting::comparator::FieldComparator;
use crate::sorting::keys::SortKey;
use crate::sorting::utils::{
    is_sorted_by, reorder_by_indices, try_merge_sort_by,
};
use fieldsort_model::Record;
use tracing::{trace, warn};

/// A sorting strategy over records of type `R`
pub trait SortStrategy<R>: Send + Sync {
    /// Sort `items` in place, or leave them untouched and return the error
    /// that prevented a correct order.
    fn try_sort(&self, items: &mut [R]) -> Result<()>;
}

/// Stable permutation that sorts `items` by pre-extracted keys, or `None`
/// when `items` are already in order.
///
/// Every key is read before anything is compared, so an extraction error
/// is reported before any ordering work is done.
pub fn sorted_order<R: Record>(
    comparator: &FieldComparator,
    items: &[R],
) -> Result<Option<Vec<usize>>> {
    let mut keyed = extract_keys(comparator, items)?;
    if is_sorted_by(&keyed, |a, b| comparator.compare_keys(&a.1, &b.1)) {
        return Ok(None);
    }
    keyed.sort_by(|a, b| comparator.compare_keys(&a.1, &b.1));
    Ok(Some(keyed.into_iter().map(|(index, _)| index).collect()))
}

pub(crate) fn extract_keys<'r, R: Record>(
    comparator: &FieldComparator,
    items: &'r [R],
) -> Result<Vec<(usize, SortKey<'r>)>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| comparator.sort_key(item).map(|key| (index, key)))
        .collect()
}

pub(crate) fn abort(
    comparator: &FieldComparator,
    len: usize,
    err: SortError,
) -> SortError {
    warn!(
        field = comparator.field_id(),
        len,
        error = %err,
        "aborting sort; records left in input order"
    );
    err
}

/// Key-extraction sort: each record's key is read exactly once.
#[derive(Debug, Clone)]
pub struct FieldSort {
    comparator: FieldComparator,
}

impl FieldSort {
    /// Create a new field sort strategy
    pub fn new(comparator: FieldComparator) -> Self {
        Self { comparator }
    }

    pub fn comparator(&self) -> &FieldComparator {
        &self.comparator
    }
}

impl<R: Record> SortStrategy<R> for FieldSort {
    fn try_sort(&self, items: &mut [R]) -> Result<()> {
        let order = sorted_order(&self.comparator, items)
            .map_err(|err| abort(&self.comparator, items.len(), err))?;

        let Some(order) = order else {
            trace!(
                field = self.comparator.field_id(),
                len = items.len(),
                "records already in order"
            );
            return Ok(());
        };
        reorder_by_indices(items, &order);
        trace!(
            field = self.comparator.field_id(),
            len = items.len(),
            "sorted records by extracted keys"
        );
        Ok(())
    }
}

/// Comparison-driven sort: calls [`FieldComparator::compare`] for every
/// pair the merge visits and stops at the first failing comparison.
#[derive(Debug, Clone)]
pub struct ComparatorSort {
    comparator: FieldComparator,
}

impl ComparatorSort {
    pub fn new(comparator: FieldComparator) -> Self {
        Self { comparator }
    }
}

impl<R: Record> SortStrategy<R> for ComparatorSort {
    fn try_sort(&self, items: &mut [R]) -> Result<()> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        {
            let view: &[R] = items;
            try_merge_sort_by(&mut order, |&a, &b| {
                self.comparator.compare(&view[a], &view[b])
            })
            .map_err(|err| abort(&self.comparator, view.len(), err))?;
        }
        reorder_by_indices(items, &order);
        trace!(
            field = self.comparator.field_id(),
            len = items.len(),
            "sorted records by pairwise comparison"
        );
        Ok(())
    }
}
