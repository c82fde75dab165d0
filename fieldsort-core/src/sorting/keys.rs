//! Sort keys extracted from records
//!
//! A key is what a comparator actually orders. Keys produced by one resolved
//! field always share a kind, so only present-vs-missing ever has to be
//! decided across variants.

use fieldsort_model::SortDirection;
use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Comparable value of one record's sort field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortKey<'a> {
    /// Compared with `str::cmp`: byte order, no locale collation
    Str(Cow<'a, str>),
    Int(i64),
    /// NaN is the greatest float; missing still sorts after it
    Float(OrderedFloat<f64>),
    /// The record holds no value for the field
    Missing,
}

impl<'a> SortKey<'a> {
    pub fn float(value: f64) -> Self {
        SortKey::Float(OrderedFloat(value))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SortKey::Missing)
    }

    /// Detach the key from the record it was read from.
    pub fn into_owned(self) -> SortKey<'static> {
        match self {
            SortKey::Str(s) => SortKey::Str(Cow::Owned(s.into_owned())),
            SortKey::Int(v) => SortKey::Int(v),
            SortKey::Float(v) => SortKey::Float(v),
            SortKey::Missing => SortKey::Missing,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Str(_) => 0,
            SortKey::Int(_) => 1,
            SortKey::Float(_) => 2,
            SortKey::Missing => 3,
        }
    }

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    pub fn compare_with_direction(
        &self,
        other: &Self,
        direction: SortDirection,
    ) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if direction.is_descending() {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Str(a), SortKey::Str(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_sort_last() {
        let present = SortKey::Str("test".into());
        let missing = SortKey::Missing;
        assert!(present < missing);

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                SortKey::Int(42).compare_with_direction(&missing, direction),
                Ordering::Less
            );
            assert_eq!(
                missing.compare_with_direction(&SortKey::float(1.0), direction),
                Ordering::Greater
            );
            assert_eq!(
                missing.compare_with_direction(&SortKey::Missing, direction),
                Ordering::Equal
            );
        }
    }

    #[test]
    fn test_key_ordering() {
        let a = SortKey::Str("apple".into());
        let b = SortKey::Str("banana".into());
        assert!(a < b);

        let low = SortKey::float(1.0);
        let high = SortKey::float(10.0);
        assert!(low < high);
        assert_eq!(
            low.compare_with_direction(&high, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn strings_compare_by_bytes() {
        // Uppercase code points precede lowercase ones.
        assert!(SortKey::Str("Zebra".into()) < SortKey::Str("apple".into()));
        assert!(SortKey::Str("é".into()) > SortKey::Str("z".into()));
    }

    #[test]
    fn nan_sorts_after_numbers_but_before_missing() {
        let nan = SortKey::float(f64::NAN);
        assert!(SortKey::float(f64::INFINITY) < nan);
        assert!(nan < SortKey::Missing);
    }

    #[test]
    fn into_owned_preserves_value() {
        let text = String::from("owned");
        let key = SortKey::Str(Cow::Borrowed(text.as_str())).into_owned();
        drop(text);
        assert_eq!(key, SortKey::Str("owned".into()));
    }
}
