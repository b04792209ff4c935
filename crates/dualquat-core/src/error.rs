//! Error types for dualquat.

use thiserror::Error;

/// The main error type for dual quaternion operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DualQuatError {
    /// An input had the wrong shape or violated a construction precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Flat array input of the wrong length.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The real part has zero norm, so the value has no inverse.
    #[error("singular value: real part has zero norm")]
    SingularValue,
}

impl DualQuatError {
    /// Returns true for every shape or precondition failure on an input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::SizeMismatch { .. })
    }

    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            log::debug!("rejected input of length {actual}, expected {expected}");
            Err(Self::SizeMismatch { expected, actual })
        }
    }
}

/// A specialized Result type for dual quaternion operations.
pub type Result<T> = std::result::Result<T, DualQuatError>;
