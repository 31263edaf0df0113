//! Errors reported by the sets in this crate.

use std::fmt;

/// Errors that can occur while operating on a set or one of its cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetError {
    /// A fixed capacity table has no free slot left for a new element.
    TableFull {
        /// Number of slots in the table.
        capacity: usize,
    },
    /// A cursor was advanced past its last element.
    Exhausted,
    /// A cursor was asked to remove an element without a preceding `next()`.
    IllegalState,
    /// A table was requested with a bit count outside `2..=31`.
    InvalidBits(u32),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::TableFull { capacity } => {
                write!(f, "table is full ({} slots)", capacity)
            }
            SetError::Exhausted => write!(f, "no more elements"),
            SetError::IllegalState => write!(f, "remove() called without a preceding next()"),
            SetError::InvalidBits(bits) => {
                write!(f, "table size must be 2^2..=2^31 slots, got 2^{}", bits)
            }
        }
    }
}

impl std::error::Error for SetError {}
