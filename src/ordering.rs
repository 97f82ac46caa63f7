use std::cmp::Ordering;

use num::Float;

/// `Greater` means `a` has priority in a max heap, `Less` means it has priority in a min heap
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Max,
    Min,
}

impl HeapKind {
    /// Whether the left side of a comparison should sit above the right side
    pub fn outranks(self, ordering: Ordering) -> bool {
        match self {
            HeapKind::Max => ordering == Ordering::Greater,
            HeapKind::Min => ordering == Ordering::Less,
        }
    }
}

impl Default for HeapKind {
    fn default() -> Self {
        HeapKind::Max
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares elements by a key extracted from each one
#[derive(Debug, Clone, Copy)]
pub struct KeyOrder<F>(pub F);

impl<T, K, F> Compare<T> for KeyOrder<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Total order over floats: NaN compares below every number and equal to itself.
/// A max heap therefore keeps NaNs at the bottom, a min heap surfaces them first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl<T: Float> Compare<T> for FloatOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // both numbers, so partial_cmp always succeeds
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_outranks() {
        assert!(HeapKind::Max.outranks(Ordering::Greater));
        assert!(!HeapKind::Max.outranks(Ordering::Equal));
        assert!(!HeapKind::Max.outranks(Ordering::Less));
        assert!(HeapKind::Min.outranks(Ordering::Less));
        assert!(!HeapKind::Min.outranks(Ordering::Equal));
        assert!(!HeapKind::Min.outranks(Ordering::Greater));
        assert_eq!(HeapKind::default(), HeapKind::Max);
    }

    #[test]
    fn test_closure_compare() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
        assert_eq!(Reversed(by_len).compare(&"ab", &"abc"), Ordering::Greater);
    }

    #[test]
    fn test_key_order() {
        let by_second = KeyOrder(|pair: &(i32, i32)| pair.1);
        assert_eq!(by_second.compare(&(9, 1), &(0, 2)), Ordering::Less);
        assert_eq!(by_second.compare(&(9, 2), &(0, 2)), Ordering::Equal);
    }

    #[test]
    fn test_float_order_nan() {
        assert_eq!(FloatOrder.compare(&1.0f64, &2.0), Ordering::Less);
        assert_eq!(FloatOrder.compare(&-0.5f32, &-0.75), Ordering::Greater);
        assert_eq!(FloatOrder.compare(&std::f64::NAN, &-1e300), Ordering::Less);
        assert_eq!(
            FloatOrder.compare(&std::f64::INFINITY, &std::f64::NAN),
            Ordering::Greater
        );
        assert_eq!(
            FloatOrder.compare(&std::f64::NAN, &std::f64::NAN),
            Ordering::Equal
        );
    }
}
