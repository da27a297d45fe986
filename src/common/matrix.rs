//! Dense row-major indexing of |V|×|V| matrices.

/// Index of the cell in the flat row-major storage of a square matrix with
/// `capacity` rows.
#[inline]
pub fn index(row: usize, col: usize, capacity: usize) -> usize {
    row * capacity + col
}

/// Number of cells of a square matrix with `capacity` rows.
#[inline]
pub fn size_of(capacity: usize) -> usize {
    capacity * capacity
}

/// Inverse of [`index`].
#[inline]
pub fn coords(index: usize, capacity: usize) -> (usize, usize) {
    (index / capacity, index % capacity)
}
