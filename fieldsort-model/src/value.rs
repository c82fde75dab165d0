//! Tagged union for values read out of a record
//!
//! A record hands out [`FieldValue`]s instead of exposing its concrete type,
//! so the sorting core never needs runtime type inspection.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// A single field value borrowed from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// No value present (an unset optional, a JSON `null`)
    Null,
    Str(Cow<'a, str>),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Lists, maps and other values with no natural sort order
    Composite(&'static str),
    /// A value behind a dynamic or boxed wrapper
    Dynamic(Box<FieldValue<'a>>),
}

impl<'a> FieldValue<'a> {
    /// Short name of the value category, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Composite(name) => *name,
            FieldValue::Dynamic(_) => "dynamic value",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Strip one level of dynamic wrapping.
    ///
    /// Returns `Err` with the still-wrapped value when a second `Dynamic`
    /// layer is found underneath the first.
    pub fn unwrap_dynamic(self) -> Result<FieldValue<'a>, FieldValue<'a>> {
        match self {
            FieldValue::Dynamic(inner) => match *inner {
                nested @ FieldValue::Dynamic(_) => Err(nested),
                value => Ok(value),
            },
            value => Ok(value),
        }
    }
}

impl Display for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Str(s) => write!(f, "{s:?}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Composite(name) => write!(f, "<{name}>"),
            FieldValue::Dynamic(inner) => write!(f, "dyn({inner})"),
        }
    }
}

/// Conversion of a struct field into a [`FieldValue`].
///
/// Implemented for the primitive types a sortable field normally holds.
/// `Option<T>` renders `None` as [`FieldValue::Null`]; `Box<T>` and
/// `serde_json::Value` count as dynamic wrappers.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self))
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self.as_str()))
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(Cow::Borrowed(self.as_ref()))
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

// Unsigned values past i64::MAX have no integer representation here.
macro_rules! wide_int_field_value {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    match i64::try_from(*self) {
                        Ok(v) => FieldValue::Int(v),
                        Err(_) => FieldValue::Composite(
                            concat!("out-of-range ", stringify!($ty)),
                        ),
                    }
                }
            }
        )*
    };
}

wide_int_field_value!(u64, usize, isize);

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.as_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Dynamic(Box::new((**self).as_field_value()))
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Composite("list")
    }
}
