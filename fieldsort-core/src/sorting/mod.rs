//! Field sorting for records whose schema is only known at runtime
//!
//! This module provides:
//! - Field resolution against a representative record
//! - Comparators bound to a resolved field and a direction
//! - Sort key extraction and comparison
//! - Strategies that apply a comparator to whole collections

pub mod comparator;
pub mod keys;
pub mod parallel;
pub mod resolver;
pub mod sorter;
pub mod strategy;
pub mod utils;

pub use comparator::{ComparatorFactory, FieldComparator, build_comparator};
pub use keys::SortKey;
pub use parallel::{DEFAULT_PARALLEL_THRESHOLD, ParallelSort, sort_batches};
pub use resolver::{FieldResolver, ResolvedField};
pub use sorter::Sorter;
pub use strategy::{ComparatorSort, FieldSort, SortStrategy, sorted_order};
