use std::fmt::{self, Display};

/// Errors produced when parsing model values from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidDirection(String),
    InvalidKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDirection(raw) => write!(
                f,
                "invalid sort direction '{raw}' (expected asc or desc)"
            ),
            ModelError::InvalidKind(raw) => write!(
                f,
                "invalid field kind '{raw}' (expected string, integer or float)"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
