//! Comparator factory
//!
//! A [`FieldComparator`] is an immutable `{field, kind, access, direction}`
//! bundle. It is built once per distinct (field, direction) request and
//! then called O(n log n) times by a sort.

use crate::error::{Result, SortError};
use crate::sorting::keys::SortKey;
use crate::sorting::resolver::{FieldResolver, Probe, ResolvedField};
use fieldsort_model::{FieldKind, Record, SortDirection};
use std::cmp::Ordering;
use tracing::debug;

/// Reusable comparison over one resolved field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldComparator {
    field: ResolvedField,
    direction: SortDirection,
}

impl FieldComparator {
    /// Assemble a comparator from an already resolved field.
    pub fn from_resolved(field: ResolvedField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn field(&self) -> &ResolvedField {
        &self.field
    }

    pub fn field_id(&self) -> &str {
        &self.field.field_id
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Same field, opposite direction. No re-resolution happens.
    pub fn reversed(&self) -> Self {
        Self {
            field: self.field.clone(),
            direction: self.direction.reverse(),
        }
    }

    /// Read the sort key of a single record.
    #[inline]
    pub fn sort_key<'r, R: Record + ?Sized>(
        &self,
        record: &'r R,
    ) -> Result<SortKey<'r>> {
        self.field.extract(record)
    }

    /// Order two records.
    ///
    /// Present values compare in the field's natural order, inverted for
    /// descending. Missing values sort last in either direction. A record
    /// whose value is not of the resolved kind yields `ValueExtraction`.
    pub fn compare<R: Record + ?Sized>(&self, a: &R, b: &R) -> Result<Ordering> {
        let key_a = self.field.extract(a)?;
        let key_b = self.field.extract(b)?;
        Ok(key_a.compare_with_direction(&key_b, self.direction))
    }

    /// Strict "a sorts before b".
    pub fn less<R: Record + ?Sized>(&self, a: &R, b: &R) -> Result<bool> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    /// Compare two keys already read by [`FieldComparator::sort_key`].
    #[inline]
    pub fn compare_keys(&self, a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
        a.compare_with_direction(b, self.direction)
    }
}

/// Builds [`FieldComparator`]s for one field identifier and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparatorFactory {
    field_id: String,
    direction: SortDirection,
}

impl ComparatorFactory {
    pub fn new(field_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field_id: field_id.into(),
            direction,
        }
    }

    /// Inferred mode: the kind comes from the representative record.
    pub fn infer<R: Record + ?Sized>(
        &self,
        representative: &R,
    ) -> Result<FieldComparator> {
        let field = FieldResolver::resolve(representative, &self.field_id)?;
        Ok(self.finish(field))
    }

    /// Typed mode: the caller declares the kind up front.
    ///
    /// The representative is still consulted for the access path and must
    /// not contradict the declaration. An integer representative satisfies
    /// a float declaration; a null one satisfies any declaration.
    pub fn typed<R: Record + ?Sized>(
        &self,
        expected: FieldKind,
        representative: &R,
    ) -> Result<FieldComparator> {
        let (access, probe) =
            FieldResolver::probe(representative, &self.field_id)?;

        if let Probe::Present(actual) = probe {
            let compatible = actual == expected
                || (expected == FieldKind::Float
                    && actual == FieldKind::Integer);
            if !compatible {
                return Err(SortError::KindMismatch {
                    field: self.field_id.clone(),
                    expected,
                    actual: actual.as_str(),
                });
            }
        }

        Ok(self.finish(ResolvedField {
            field_id: self.field_id.clone(),
            kind: expected,
            access,
        }))
    }

    fn finish(&self, field: ResolvedField) -> FieldComparator {
        debug!(
            field = %field.field_id,
            kind = %field.kind,
            access = %field.access,
            direction = %self.direction,
            "built field comparator"
        );
        FieldComparator::from_resolved(field, self.direction)
    }
}

/// Build an inferred-mode comparator in one call.
pub fn build_comparator<R: Record + ?Sized>(
    representative: &R,
    field_id: &str,
    direction: SortDirection,
) -> Result<FieldComparator> {
    ComparatorFactory::new(field_id, direction).infer(representative)
}
