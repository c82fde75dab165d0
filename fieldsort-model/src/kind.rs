use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Value categories a comparator knows how to order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    /// UTF-8 text, ordered byte-lexicographically
    String,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float with a total order
    Float,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(FieldKind::String),
            "integer" | "int" => Ok(FieldKind::Integer),
            "float" | "number" => Ok(FieldKind::Float),
            _ => Err(ModelError::InvalidKind(s.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Accepts the `order` vocabulary used by list endpoints: `asc`,
/// `ascending`, `desc`, `descending`, in any case.
impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_query_vocabulary() {
        assert_eq!(
            "ASC".parse::<SortDirection>().unwrap(),
            SortDirection::Ascending
        );
        assert_eq!(
            " descending ".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        let err = "sideways".parse::<SortDirection>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("int".parse::<FieldKind>().unwrap(), FieldKind::Integer);
        assert_eq!("Float".parse::<FieldKind>().unwrap(), FieldKind::Float);
        assert!("bool".parse::<FieldKind>().is_err());
    }

    #[test]
    fn reverse_flips_direction() {
        assert_eq!(
            SortDirection::Ascending.reverse(),
            SortDirection::Descending
        );
        assert!(SortDirection::Ascending.reverse().is_descending());
    }
}
