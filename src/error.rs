//! error.rs
//! Defines the container error and result types.

use core::fmt;

/// Error type for container operations. Contains diagnostic information.
///
/// Every error is detected by a precondition check before any mutation
/// occurs, so a failed operation leaves its container unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// An access or insertion index is outside the valid range for the
    /// current size.
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    /// An operation requiring at least one element was invoked on an
    /// empty container.
    Underflow,
    /// An insertion into a fixed-capacity container that is already full.
    Overflow {
        capacity: usize,
    },
    /// A resize was requested with a target capacity smaller than the
    /// current size, or smaller than one.
    InvalidCapacity {
        requested: usize,
        size: usize,
    },
}

/// Result type for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;

// Display trait for ContainerError
impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ContainerError::*;
        match self {
            IndexOutOfBounds { index, size } => {
                write!(
                    f,
                    "Index out of bounds: index {}, size {}.",
                    index, size
                )
            }
            Underflow => {
                write!(f, "Underflow: the container is empty.")
            }
            Overflow { capacity } => {
                write!(
                    f,
                    "Overflow: fixed capacity {} is exhausted. This insertion cannot succeed.",
                    capacity
                )
            }
            InvalidCapacity { requested, size } => {
                write!(
                    f,
                    "Invalid capacity: requested {}, but must be >= 1 and >= current size {}.",
                    requested, size
                )
            }
        }
    }
}

impl std::error::Error for ContainerError {}
