//! Field resolution
//!
//! Resolution runs once per comparator build: it finds how a field is reached
//! on the representative record and what kind of value it holds. Extraction
//! then reuses that answer for every record without looking at kinds again.

use crate::error::{Result, SortError};
use crate::sorting::keys::SortKey;
use fieldsort_model::{FieldAccess, FieldKind, FieldValue, Record};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Field identifier plus the access path and kind resolved for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedField {
    pub field_id: String,
    pub kind: FieldKind,
    pub access: FieldAccess,
}

/// Result of probing a representative record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Probe {
    Present(FieldKind),
    Null,
}

pub struct FieldResolver;

impl FieldResolver {
    /// Resolve `field_id` against a representative record.
    ///
    /// Fails with `FieldNotFound` when neither a struct field nor a map key
    /// matches, `UnsupportedKind` for values that are not strings, integers
    /// or floats and `IndeterminateKind` when the representative holds null.
    pub fn resolve<R: Record + ?Sized>(
        representative: &R,
        field_id: &str,
    ) -> Result<ResolvedField> {
        let (access, probe) = Self::probe(representative, field_id)?;
        match probe {
            Probe::Present(kind) => Ok(ResolvedField {
                field_id: field_id.to_string(),
                kind,
                access,
            }),
            Probe::Null => Err(SortError::IndeterminateKind {
                field: field_id.to_string(),
            }),
        }
    }

    /// Locate `field_id` and classify its value without requiring one.
    pub(crate) fn probe<R: Record + ?Sized>(
        representative: &R,
        field_id: &str,
    ) -> Result<(FieldAccess, Probe)> {
        if field_id.trim().is_empty() {
            return Err(SortError::InvalidFieldId {
                field: field_id.to_string(),
            });
        }

        let (access, value) = FieldAccess::locate(representative, field_id)
            .ok_or_else(|| SortError::FieldNotFound {
                field: field_id.to_string(),
            })?;

        let probe = match unwrap_value(value) {
            Ok(FieldValue::Null) => Probe::Null,
            Ok(FieldValue::Str(_)) => Probe::Present(FieldKind::String),
            Ok(FieldValue::Int(_)) => Probe::Present(FieldKind::Integer),
            Ok(FieldValue::Float(_)) => Probe::Present(FieldKind::Float),
            Ok(other) => {
                return Err(SortError::UnsupportedKind {
                    field: field_id.to_string(),
                    kind: other.type_name(),
                });
            }
            Err(kind) => {
                return Err(SortError::UnsupportedKind {
                    field: field_id.to_string(),
                    kind,
                });
            }
        };

        trace!(field = field_id, %access, ?probe, "probed sort field");
        Ok((access, probe))
    }
}

impl ResolvedField {
    /// Read this field from `record` as a sort key.
    ///
    /// Only the cached access path is consulted. A keyed record that lacks
    /// the key yields `Missing`; a structural record that lacks the field was
    /// built from a different schema and is reported as an extraction error.
    pub fn extract<'r, R: Record + ?Sized>(
        &self,
        record: &'r R,
    ) -> Result<SortKey<'r>> {
        let value = match self.access.read(record, &self.field_id) {
            Some(value) => value,
            None if self.access == FieldAccess::Keyed => {
                return Ok(SortKey::Missing);
            }
            None => return Err(self.extraction_error("no such field")),
        };

        let value =
            unwrap_value(value).map_err(|kind| self.extraction_error(kind))?;

        match (self.kind, value) {
            (_, FieldValue::Null) => Ok(SortKey::Missing),
            (FieldKind::String, FieldValue::Str(s)) => Ok(SortKey::Str(s)),
            (FieldKind::Integer, FieldValue::Int(i)) => Ok(SortKey::Int(i)),
            (FieldKind::Float, FieldValue::Float(f)) => Ok(SortKey::float(f)),
            // Integral JSON numbers lose their fraction marker.
            (FieldKind::Float, FieldValue::Int(i)) => {
                Ok(SortKey::float(i as f64))
            }
            (_, other) => Err(self.extraction_error(other.type_name())),
        }
    }

    fn extraction_error(&self, found: &'static str) -> SortError {
        SortError::ValueExtraction {
            field: self.field_id.clone(),
            expected: self.kind,
            found,
        }
    }
}

/// Strip one layer of dynamic wrapping; a second layer is unsupported.
fn unwrap_value(
    value: FieldValue<'_>,
) -> std::result::Result<FieldValue<'_>, &'static str> {
    value.unwrap_dynamic().map_err(|_| "nested dynamic value")
}
