use std::fmt;

/// Errors that can occur when accessing or assigning an AnyValue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyError {
    /// The container holds no value
    Empty,
    /// The held value is not exactly of the requested type
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Attempted a strict assignment from a container that holds no value
    EmptySource,
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnyError::Empty => write!(f, "Container holds no value"),
            AnyError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
            AnyError::EmptySource => write!(f, "Cannot assign from an empty container"),
        }
    }
}

impl std::error::Error for AnyError {}
