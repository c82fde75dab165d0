//! Data model shared across fieldsort crates: the [`Record`] capability
//! trait, the [`FieldValue`] tagged union and the kind/direction enums a
//! comparator is configured with.

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod kind;
pub mod record;
pub mod value;

pub use error::{ModelError, Result as ModelResult};
#[cfg(feature = "json")]
pub use json::json_field_value;
pub use kind::{FieldKind, SortDirection};
pub use record::{FieldAccess, Record};
pub use value::{AsFieldValue, FieldValue};
