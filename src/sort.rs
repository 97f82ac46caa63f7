use crate::tree;

/// Sorts `v` in place using heapsort, *O*(*n* log *n*) worst-case with no extra memory.
/// Elements for which `is_less` holds end up first.
pub fn heap_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // A max heap with respect to `is_less`, so the greatest element is popped to the tail first
    let mut outranks = |a: &T, b: &T| is_less(b, a);
    tree::heapify(v, &mut outranks);
    tree::pop_to_tail(v, &mut outranks);
}

/// Sorts `v` in ascending order
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, |a, b| a < b)
}
