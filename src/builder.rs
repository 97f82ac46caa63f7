use crate::error::HeapError;
use crate::heap::HeapEngine;
use crate::ordering::{Compare, HeapKind};

/// Collects construction parameters for a [`HeapEngine`].
/// Nothing is validated until [`HeapBuilder::build`].
#[derive(Debug, Clone)]
pub struct HeapBuilder<T, C> {
    kind: HeapKind,
    ordering: Option<C>,
    capacity: usize,
    elements: Vec<T>,
}

impl<T, C> Default for HeapBuilder<T, C> {
    fn default() -> Self {
        HeapBuilder {
            kind: HeapKind::default(),
            ordering: None,
            capacity: 0,
            elements: Vec::new(),
        }
    }
}

impl<T, C> HeapBuilder<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: HeapKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn max(self) -> Self {
        self.kind(HeapKind::Max)
    }

    pub fn min(self) -> Self {
        self.kind(HeapKind::Min)
    }

    /// The comparison deciding priority. Required.
    pub fn ordering(mut self, ordering: C) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    // may be called more than once
    pub fn elements<I: IntoIterator<Item = T>>(mut self, elements: I) -> Self {
        self.elements.extend(elements);
        self
    }
}

impl<T, C: Compare<T>> HeapBuilder<T, C> {
    pub fn build(self) -> Result<HeapEngine<T, C>, HeapError> {
        let ordering = self
            .ordering
            .ok_or(HeapError::InvalidConstructionArgument("ordering"))?;
        let mut data = self.elements;
        if self.capacity > data.len() {
            data.reserve_exact(self.capacity - data.len());
        }
        Ok(HeapEngine::from_vec(data, self.kind, ordering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{NaturalOrder, Reversed};

    #[test]
    fn test_missing_ordering() {
        let result = HeapBuilder::<i32, NaturalOrder>::new()
            .elements(vec![1, 2, 3])
            .build();
        assert_eq!(
            result.unwrap_err(),
            HeapError::InvalidConstructionArgument("ordering")
        );
    }

    #[test]
    fn test_build_min() {
        let mut heap = HeapBuilder::new()
            .min()
            .ordering(NaturalOrder)
            .elements(vec![10, 5, 8])
            .elements(vec![2, 14])
            .build()
            .unwrap();
        assert_eq!(heap.kind(), HeapKind::Min);
        assert_eq!(heap.len(), 5);
        assert!(heap.is_heap());
        assert_eq!(heap.extract(), Ok(2));
    }

    #[test]
    fn test_build_reserves_capacity() {
        let heap = HeapBuilder::new()
            .ordering(Reversed(NaturalOrder))
            .capacity(32)
            .elements(vec!['b', 'a', 'c'])
            .build()
            .unwrap();
        assert!(heap.capacity() >= 32);
        // reversed ordering in a max heap puts the smallest element on top
        assert_eq!(heap.peek(), Ok(&'a'));
    }

    #[test]
    fn test_default_is_max() {
        let heap = HeapBuilder::new()
            .ordering(|a: &u8, b: &u8| a.cmp(b))
            .elements(0..10u8)
            .build()
            .unwrap();
        assert_eq!(heap.kind(), HeapKind::Max);
        assert_eq!(heap.sorted(), (0..10u8).rev().collect::<Vec<_>>());
    }
}
