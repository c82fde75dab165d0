//! # Fieldsort Core
//!
//! Sorts homogeneous collections by a field named at runtime.
//!
//! ## Overview
//!
//! A sort request names a field and a direction. The field is resolved once
//! against a representative record, which fixes both the access path
//! (struct field or map key) and the value kind (string, integer or float).
//! The resulting [`FieldComparator`] is immutable and reused for every
//! comparison, so no kind dispatch happens inside the sort loop.
//!
//! - **Resolution errors** (`FieldNotFound`, `UnsupportedKind`,
//!   `KindMismatch`, ...) are returned before any comparator exists.
//! - **Comparison errors** (`ValueExtraction`) abort the sort and leave the
//!   collection in its input order.
//! - Missing values sort last in both directions.
//! - Strings compare byte-lexicographically; no locale collation.
//!
//! ## Examples
//!
//! ```
//! use fieldsort_core::{FieldSort, SortDirection, SortStrategy, build_comparator};
//! use serde_json::json;
//!
//! let mut people = vec![
//!     json!({"name": "Bob", "age": 25}),
//!     json!({"name": "Alice", "age": 30}),
//!     json!({"name": "Alice", "age": 20}),
//! ];
//!
//! let by_age = build_comparator(&people[0], "age", SortDirection::Descending)?;
//! FieldSort::new(by_age).try_sort(&mut people)?;
//!
//! assert_eq!(people[0]["age"], 30);
//! assert_eq!(people[2]["age"], 20);
//! # Ok::<(), fieldsort_core::SortError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Sorter tuning shared with the config crate
pub mod config;
/// Error taxonomy for resolution and comparison
pub mod error;
/// Resolution, comparators and sort strategies
pub mod sorting;

pub use config::SorterConfig;
pub use error::{Result, SortError};
pub use sorting::{
    ComparatorFactory, ComparatorSort, DEFAULT_PARALLEL_THRESHOLD,
    FieldComparator, FieldResolver, FieldSort, ParallelSort, ResolvedField,
    SortKey, SortStrategy, Sorter, build_comparator, sort_batches,
    sorted_order,
};

pub use fieldsort_model::{
    AsFieldValue, FieldAccess, FieldKind, FieldValue, Record, SortDirection,
    impl_record,
};
