use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors produced by heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Peek or extract on a heap with no elements
    EmptyContainer,

    /// Positional removal outside the live region
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of live elements at the time of the call
        len: usize,
    },

    /// A required construction argument was never supplied
    InvalidConstructionArgument(&'static str),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "can't take elements from an empty heap"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
            HeapError::InvalidConstructionArgument(argument) => {
                write!(f, "missing construction argument: {}", argument)
            }
        }
    }
}

impl Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            HeapError::EmptyContainer.to_string(),
            "can't take elements from an empty heap"
        );
        assert_eq!(
            HeapError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range for heap of length 3"
        );
        assert_eq!(
            HeapError::InvalidConstructionArgument("ordering").to_string(),
            "missing construction argument: ordering"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn Error> = Box::new(HeapError::EmptyContainer);
        assert!(err.source().is_none());
    }
}
