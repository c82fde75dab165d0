//! One-call sorting over a whole collection
//!
//! [`Sorter`] picks a representative record, builds the comparator and
//! chooses between the sequential and the rayon strategy. Callers that sort
//! the same field repeatedly can build a [`FieldComparator`] once and use
//! [`Sorter::sort_with`].

use crate::config::SorterConfig;
use crate::error::{Result, SortError};
use crate::sorting::comparator::{ComparatorFactory, FieldComparator};
use crate::sorting::parallel::ParallelSort;
use crate::sorting::resolver::{FieldResolver, Probe};
use crate::sorting::strategy::SortStrategy;
use fieldsort_model::{FieldKind, Record, SortDirection};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Sorter {
    config: SorterConfig,
}

impl Sorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SorterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    /// The requested direction, or the configured default.
    pub fn direction(&self, requested: Option<SortDirection>) -> SortDirection {
        requested.unwrap_or(self.config.default_direction)
    }

    /// Sort by a field whose kind is inferred from the collection.
    ///
    /// Empty collections, and collections where no record holds a value
    /// for the field, are left as they are.
    pub fn sort_by_field<R>(
        &self,
        items: &mut [R],
        field_id: &str,
        direction: Option<SortDirection>,
    ) -> Result<()>
    where
        R: Record + Sync,
    {
        let direction = self.direction(direction);
        match self.comparator_for(items, field_id, direction)? {
            Some(comparator) => self.sort_with(items, &comparator),
            None => {
                trace!(field = field_id, len = items.len(), "nothing to sort");
                Ok(())
            }
        }
    }

    /// Build the inferred-mode comparator [`Sorter::sort_by_field`] would
    /// use for `items`, or `None` when no record holds a value.
    ///
    /// With scanning enabled an integer field is widened to float when any
    /// record holds a float, since JSON writes `10.0` as `10` and the first
    /// value seen must not decide the kind on its own.
    pub fn comparator_for<R: Record>(
        &self,
        items: &[R],
        field_id: &str,
        direction: SortDirection,
    ) -> Result<Option<FieldComparator>> {
        let Some((representative, probe)) =
            self.representative(items, field_id, true)?
        else {
            return Ok(None);
        };

        let factory = ComparatorFactory::new(field_id, direction);
        let widen = self.config.scan_for_representative
            && probe == Probe::Present(FieldKind::Integer)
            && items.iter().any(|item| {
                matches!(
                    FieldResolver::probe(item, field_id),
                    Ok((_, Probe::Present(FieldKind::Float)))
                )
            });

        let comparator = if widen {
            trace!(field = field_id, "integer field also holds floats; widening");
            factory.typed(FieldKind::Float, representative)?
        } else {
            factory.infer(representative)?
        };
        Ok(Some(comparator))
    }

    /// Sort by a field whose kind the caller declares.
    pub fn sort_by_typed_field<R>(
        &self,
        items: &mut [R],
        field_id: &str,
        kind: FieldKind,
        direction: Option<SortDirection>,
    ) -> Result<()>
    where
        R: Record + Sync,
    {
        let direction = self.direction(direction);
        let comparator = match self.representative(items, field_id, false)? {
            Some((representative, _)) => {
                ComparatorFactory::new(field_id, direction)
                    .typed(kind, representative)?
            }
            None => return Ok(()),
        };
        self.sort_with(items, &comparator)
    }

    /// Sort with a prebuilt comparator. Large collections go to rayon.
    pub fn sort_with<R>(
        &self,
        items: &mut [R],
        comparator: &FieldComparator,
    ) -> Result<()>
    where
        R: Record + Sync,
    {
        ParallelSort::with_threshold(
            comparator.clone(),
            self.config.parallel_threshold,
        )
        .try_sort(items)
    }

    /// Record used to resolve the field.
    ///
    /// Without scanning this is the first record. With scanning it is the
    /// first record that holds a value, or that merely has the field when
    /// `need_value` is false. Records lacking a map key are skipped; the
    /// lookup only fails with `FieldNotFound` when every record lacks it.
    fn representative<'a, R: Record>(
        &self,
        items: &'a [R],
        field_id: &str,
        need_value: bool,
    ) -> Result<Option<(&'a R, Probe)>> {
        let Some(first) = items.first() else {
            return Ok(None);
        };
        if !self.config.scan_for_representative {
            let (_, probe) = FieldResolver::probe(first, field_id)?;
            return Ok(Some((first, probe)));
        }

        let mut not_found = None;
        let mut saw_null = false;
        for item in items {
            match FieldResolver::probe(item, field_id) {
                Ok((_, probe @ Probe::Present(_))) => {
                    return Ok(Some((item, probe)));
                }
                Ok((_, Probe::Null)) if !need_value => {
                    return Ok(Some((item, Probe::Null)));
                }
                Ok((_, Probe::Null)) => saw_null = true,
                Err(err @ SortError::FieldNotFound { .. }) => {
                    not_found.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }

        match not_found {
            Some(err) if !saw_null => Err(err),
            _ => Ok(None),
        }
    }
}
