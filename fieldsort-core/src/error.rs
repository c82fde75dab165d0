use fieldsort_model::FieldKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    #[error("invalid field identifier {field:?}")]
    InvalidFieldId { field: String },

    #[error("field '{field}' not found as a struct field or map key")]
    FieldNotFound { field: String },

    #[error("field '{field}' has unsupported kind {kind}")]
    UnsupportedKind { field: String, kind: &'static str },

    #[error(
        "field '{field}' holds no value on the representative record, \
         so its kind cannot be inferred"
    )]
    IndeterminateKind { field: String },

    #[error("field '{field}' declared as {expected} but record holds {actual}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        actual: &'static str,
    },

    #[error(
        "cannot read field '{field}' as {expected}: record holds {found}"
    )]
    ValueExtraction {
        field: String,
        expected: FieldKind,
        found: &'static str,
    },
}

impl SortError {
    /// True for errors raised while building a comparator, false for errors
    /// raised while comparing records.
    pub fn is_construction_error(&self) -> bool {
        !matches!(self, SortError::ValueExtraction { .. })
    }

    pub fn field(&self) -> &str {
        match self {
            SortError::InvalidFieldId { field }
            | SortError::FieldNotFound { field }
            | SortError::UnsupportedKind { field, .. }
            | SortError::IndeterminateKind { field }
            | SortError::KindMismatch { field, .. }
            | SortError::ValueExtraction { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
