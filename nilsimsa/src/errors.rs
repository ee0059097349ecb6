//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = NilsimsaError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NilsimsaError {
    /// Contains [`FormatError`].
    Format(FormatError),
}

impl fmt::Display for NilsimsaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Format(e) => e.fmt(f),
        }
    }
}

impl Error for NilsimsaError {}

impl NilsimsaError {
    pub(crate) const fn format(msg: String) -> Self {
        Self::Format(FormatError { msg })
    }
}

/// Error used when an external digest representation cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    msg: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FormatError: {}", self.msg)
    }
}
