//! Binary-heap priority queue over a contiguous buffer, with a pluggable
//! ordering and a choice of max or min at the root.

pub mod builder;
pub mod error;
pub mod heap;
pub mod ordering;
pub mod sort;
mod tree;

pub use builder::HeapBuilder;
pub use error::HeapError;
pub use heap::HeapEngine;
pub use ordering::{Compare, FloatOrder, HeapKind, KeyOrder, NaturalOrder, Reversed};
pub use sort::{heap_sort, heap_sort_by};
