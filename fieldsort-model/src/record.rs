//! The record capability trait
//!
//! Sorting works over any type that can answer "what is the value of field
//! X?". Fixed-schema types answer through [`Record::get_field`], open-schema
//! types (string keyed maps, JSON objects) through [`Record::get_key`]. A
//! hybrid type may answer both.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display, Formatter};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::value::{AsFieldValue, FieldValue};

/// A uniformly shaped value whose fields can be read by name.
pub trait Record {
    /// Structural access to a named field of a fixed schema.
    fn get_field(&self, _name: &str) -> Option<FieldValue<'_>> {
        None
    }

    /// Keyed lookup into an open schema.
    fn get_key(&self, _key: &str) -> Option<FieldValue<'_>> {
        None
    }
}

/// How a field identifier was matched on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldAccess {
    Structural,
    Keyed,
}

impl FieldAccess {
    /// Locate `field_id`, trying structural access before keyed lookup.
    pub fn locate<'r, R: Record + ?Sized>(
        record: &'r R,
        field_id: &str,
    ) -> Option<(FieldAccess, FieldValue<'r>)> {
        if let Some(value) = record.get_field(field_id) {
            return Some((FieldAccess::Structural, value));
        }
        record
            .get_key(field_id)
            .map(|value| (FieldAccess::Keyed, value))
    }

    /// Read `field_id` through this access path only.
    pub fn read<'r, R: Record + ?Sized>(
        self,
        record: &'r R,
        field_id: &str,
    ) -> Option<FieldValue<'r>> {
        match self {
            FieldAccess::Structural => record.get_field(field_id),
            FieldAccess::Keyed => record.get_key(field_id),
        }
    }
}

impl Display for FieldAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldAccess::Structural => f.write_str("structural"),
            FieldAccess::Keyed => f.write_str("keyed"),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get_field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).get_field(name)
    }

    fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).get_key(key)
    }
}

macro_rules! forward_record {
    ($($wrapper:ident),*) => {
        $(
            impl<R: Record + ?Sized> Record for $wrapper<R> {
                fn get_field(&self, name: &str) -> Option<FieldValue<'_>> {
                    (**self).get_field(name)
                }

                fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
                    (**self).get_key(key)
                }
            }
        )*
    };
}

forward_record!(Box, Rc, Arc);

impl<V: AsFieldValue, S: BuildHasher> Record for HashMap<String, V, S> {
    fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(|value| value.as_field_value())
    }
}

impl<V: AsFieldValue> Record for BTreeMap<String, V> {
    fn get_key(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(|value| value.as_field_value())
    }
}

/// Implement [`Record`] for a struct by listing its sortable fields.
///
/// Each listed field must implement [`AsFieldValue`] and is exposed under
/// its Rust identifier. A trailing `keyed <field>` clause forwards keyed
/// lookups to a map-like member, which makes the struct a hybrid record.
///
/// ```
/// use std::collections::HashMap;
/// use fieldsort_model::{impl_record, FieldValue, Record};
///
/// struct Person {
///     name: String,
///     age: u32,
///     labels: HashMap<String, String>,
/// }
///
/// impl_record!(Person { name, age } keyed labels);
///
/// let person = Person {
///     name: "Ada".into(),
///     age: 36,
///     labels: HashMap::from([("team".to_string(), "core".to_string())]),
/// };
/// assert_eq!(person.get_field("age"), Some(FieldValue::Int(36)));
/// assert!(person.get_key("team").is_some());
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? } keyed $extras:ident) => {
        impl $crate::Record for $ty {
            fn get_field(
                &self,
                name: &str,
            ) -> ::core::option::Option<$crate::FieldValue<'_>> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(
                            $crate::AsFieldValue::as_field_value(&self.$field),
                        );
                    }
                )*
                ::core::option::Option::None
            }

            fn get_key(
                &self,
                key: &str,
            ) -> ::core::option::Option<$crate::FieldValue<'_>> {
                $crate::Record::get_key(&self.$extras, key)
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn get_field(
                &self,
                name: &str,
            ) -> ::core::option::Option<$crate::FieldValue<'_>> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(
                            $crate::AsFieldValue::as_field_value(&self.$field),
                        );
                    }
                )*
                ::core::option::Option::None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Product {
        name: String,
        price: f64,
        discontinued: Option<bool>,
    }

    crate::impl_record!(Product { name, price, discontinued });

    struct Tagged {
        id: i64,
        tags: BTreeMap<String, i64>,
    }

    crate::impl_record!(Tagged { id } keyed tags);

    #[test]
    fn macro_exposes_listed_fields() {
        let product = Product {
            name: "Mouse".into(),
            price: 29.99,
            discontinued: None,
        };
        assert_eq!(
            product.get_field("name"),
            Some(FieldValue::Str(Cow::Borrowed("Mouse")))
        );
        assert_eq!(product.get_field("price"), Some(FieldValue::Float(29.99)));
        assert_eq!(product.get_field("discontinued"), Some(FieldValue::Null));
        assert_eq!(product.get_field("Price"), None);
        assert_eq!(product.get_key("name"), None);
    }

    #[test]
    fn locate_prefers_structural_then_keyed() {
        let tagged = Tagged {
            id: 7,
            tags: BTreeMap::from([
                ("id".to_string(), 99),
                ("rank".to_string(), 3),
            ]),
        };

        let (access, value) = FieldAccess::locate(&tagged, "id").unwrap();
        assert_eq!(access, FieldAccess::Structural);
        assert_eq!(value, FieldValue::Int(7));

        let (access, value) = FieldAccess::locate(&tagged, "rank").unwrap();
        assert_eq!(access, FieldAccess::Keyed);
        assert_eq!(value, FieldValue::Int(3));

        assert!(FieldAccess::locate(&tagged, "missing").is_none());
    }

    #[test]
    fn read_uses_only_the_given_path() {
        let tagged = Tagged {
            id: 1,
            tags: BTreeMap::from([("rank".to_string(), 3)]),
        };
        assert_eq!(FieldAccess::Structural.read(&tagged, "rank"), None);
        assert_eq!(
            FieldAccess::Keyed.read(&tagged, "rank"),
            Some(FieldValue::Int(3))
        );
    }

    #[test]
    fn smart_pointers_forward() {
        let map: HashMap<String, String> =
            HashMap::from([("city".to_string(), "Oslo".to_string())]);
        let shared = Arc::new(map);
        assert_eq!(
            shared.get_key("city"),
            Some(FieldValue::Str(Cow::Borrowed("Oslo")))
        );
    }
}
