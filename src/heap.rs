use std::fmt;

use crate::error::HeapError;
use crate::ordering::{Compare, HeapKind, NaturalOrder};
use crate::tree;

/// Array-backed binary heap whose root is the element of highest priority.
/// Priority is decided by `cmp` read in the direction given by `kind`.
#[derive(Clone)]
pub struct HeapEngine<T, C = NaturalOrder> {
    data: Vec<T>,
    kind: HeapKind,
    cmp: C,
}

impl<T: Ord + Clone> HeapEngine<T, NaturalOrder> {
    pub fn max(elements: &[T]) -> Self {
        HeapEngine::new(elements, HeapKind::Max, NaturalOrder)
    }

    pub fn min(elements: &[T]) -> Self {
        HeapEngine::new(elements, HeapKind::Min, NaturalOrder)
    }
}

impl<T: Clone, C: Compare<T>> HeapEngine<T, C> {
    /// Build a heap over a copy of `elements`; the caller keeps its slice untouched
    pub fn new(elements: &[T], kind: HeapKind, cmp: C) -> Self {
        HeapEngine::from_vec(elements.to_vec(), kind, cmp)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Copy of the elements from highest to lowest priority; the heap itself is unchanged
    pub fn sorted(&self) -> Vec<T> {
        let mut copy = self.data.clone();
        self.drain_sorted(&mut copy);
        copy
    }
}

impl<T, C: Compare<T>> HeapEngine<T, C> {
    pub fn from_vec(data: Vec<T>, kind: HeapKind, cmp: C) -> Self {
        let mut heap = HeapEngine { data, kind, cmp };
        {
            let (data, mut outranks) = heap.split();
            tree::heapify(data, &mut outranks);
        }
        heap
    }

    pub fn with_capacity(capacity: usize, kind: HeapKind, cmp: C) -> Self {
        HeapEngine {
            data: Vec::with_capacity(capacity),
            kind,
            cmp,
        }
    }

    /// Reuse the allocation of `buffer`, discarding whatever it held
    pub fn with_buffer(mut buffer: Vec<T>, kind: HeapKind, cmp: C) -> Self {
        buffer.clear();
        HeapEngine {
            data: buffer,
            kind,
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Shared borrows of the live elements, in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable view of the live region together with the priority test
    fn split(&mut self) -> (&mut [T], impl FnMut(&T, &T) -> bool + '_) {
        let kind = self.kind;
        let cmp = &self.cmp;
        (&mut self.data[..], move |a: &T, b: &T| {
            kind.outranks(cmp.compare(a, b))
        })
    }

    fn drain_sorted(&self, data: &mut [T]) {
        /* `data` must already satisfy the heap property under this heap's ordering */
        let kind = self.kind;
        let cmp = &self.cmp;
        let mut outranks = |a: &T, b: &T| kind.outranks(cmp.compare(a, b));
        tree::pop_to_tail(data, &mut outranks);
        data.reverse();
    }

    pub fn add(&mut self, element: T) {
        self.data.push(element);
        let last = self.data.len() - 1;
        let (data, mut outranks) = self.split();
        tree::sift_up(data, last, &mut outranks);
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.try_peek().ok_or(HeapError::EmptyContainer)
    }

    pub fn try_peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn extract(&mut self) -> Result<T, HeapError> {
        self.try_extract().ok_or(HeapError::EmptyContainer)
    }

    pub fn try_extract(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let len = self.data.len();
        self.data.swap(0, len - 1);
        let result = self.data.pop();
        let (data, mut outranks) = self.split();
        tree::sift_down(data, 0, &mut outranks);
        result
    }

    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfRange { index, len });
        }
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            // the former last element now sits in the hole and may belong above or below it
            let (data, mut outranks) = self.split();
            if tree::sift_up(data, index, &mut outranks) == index {
                tree::sift_down(data, index, &mut outranks);
            }
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn is_heap(&self) -> bool {
        let kind = self.kind;
        let cmp = &self.cmp;
        tree::is_heap(&self.data, &mut |a: &T, b: &T| kind.outranks(cmp.compare(a, b)))
    }

    /// Give the buffer back, in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consume the heap, returning its elements from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut data = std::mem::take(&mut self.data);
        self.drain_sorted(&mut data);
        data
    }
}

impl<T, C: Compare<T>> Extend<T> for HeapEngine<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.add(element);
        }
    }
}

impl<T, C> IntoIterator for HeapEngine<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a HeapEngine<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for HeapEngine<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapEngine")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .finish()
    }
}
