// Index arithmetic and invariant restoration for a complete binary tree laid out in a slice.
// `outranks(a, b)` answers whether `a` belongs above `b`.

#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Move the element at `index` toward the root while it outranks its parent
/// Returns the index where the element came to rest
pub fn sift_up<T, F>(data: &mut [T], index: usize, outranks: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    match parent(index) {
        Some(parent_index) if outranks(&data[index], &data[parent_index]) => {
            data.swap(index, parent_index);
            sift_up(data, parent_index, outranks)
        }
        _ => index,
    }
}

/// Move the element at `index` toward the leaves until neither child outranks it
pub fn sift_down<T, F>(data: &mut [T], index: usize, outranks: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    let left = left_child(index);
    let right = right_child(index);
    let mut top = index;
    if left < len && outranks(&data[left], &data[top]) {
        top = left;
    }
    if right < len && outranks(&data[right], &data[top]) {
        top = right;
    }
    if top != index {
        data.swap(index, top);
        sift_down(data, top, outranks)
    }
}

/// Bottom-up construction, linear in `data.len()`
pub fn heapify<T, F>(data: &mut [T], outranks: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // everything from len / 2 onwards is a leaf
    for i in (0..data.len() / 2).rev() {
        sift_down(data, i, outranks);
    }
}

/// Repeatedly move the root of a valid heap behind the shrinking live region.
/// Afterwards `data` runs from lowest to highest priority.
pub fn pop_to_tail<T, F>(data: &mut [T], outranks: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, outranks);
    }
}

pub fn is_heap<T, F>(data: &[T], outranks: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..data.len()).all(|i| match parent(i) {
        Some(p) => !outranks(&data[i], &data[p]),
        None => true,
    })
}
