//! Error types for simulation operations.

use core::fmt;

/// Errors that can occur while building or running a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Backing memory for a pool could not be reserved at construction.
    AllocationFailed,
    /// Insertion into a pool that has no free slots left.
    PoolFull { capacity: usize },
    /// A constraint endpoint does not refer to an occupied point slot.
    InvalidPointRef { index: usize },
    /// A constraint references the same point slot twice.
    DegenerateConstraint,
    /// Cloth grids must be at least 2x2.
    InvalidGridDimensions,
    /// Ropes must have at least one segment.
    InsufficientSegments,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::AllocationFailed => write!(f, "pool memory could not be allocated"),
            SimError::PoolFull { capacity } => {
                write!(f, "pool is full (capacity: {})", capacity)
            }
            SimError::InvalidPointRef { index } => {
                write!(f, "point slot {} is not occupied", index)
            }
            SimError::DegenerateConstraint => {
                write!(f, "constraint endpoints must be distinct points")
            }
            SimError::InvalidGridDimensions => write!(f, "cloth grid must be at least 2x2"),
            SimError::InsufficientSegments => write!(f, "rope needs at least one segment"),
        }
    }
}
