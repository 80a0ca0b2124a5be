//! Level-1 kernels: vector-vector operations on strided buffers.
//!
//! All kernels assume the caller has validated that every buffer addresses
//! at least `n` logical elements. Writes go through `Cell`, so `x` and `y`
//! may be the same buffer where the operation permits it.

use std::cell::Cell;

use num_traits::Float;

use crate::core::raw::Strided;

/// y ← x
pub fn copy<T: Float>(n: usize, x: Strided<'_, T>, y: Strided<'_, T>) {
    for i in 0..n {
        y.set(i, x.get(i));
    }
}

/// x ← α·x. A zero α clears `x`, even where it holds NaN or ±∞.
pub fn scal<T: Float>(n: usize, alpha: T, x: Strided<'_, T>) {
    if alpha == T::zero() {
        for i in 0..n {
            x.set(i, T::zero());
        }
        return;
    }
    for i in 0..n {
        x.set(i, alpha * x.get(i));
    }
}

/// y ← y + α·x
pub fn axpy<T: Float>(n: usize, alpha: T, x: Strided<'_, T>, y: Strided<'_, T>) {
    if alpha == T::zero() {
        return;
    }
    for i in 0..n {
        y.set(i, y.get(i) + alpha * x.get(i));
    }
}

/// xᵀy
pub fn dot<T: Float>(n: usize, x: Strided<'_, T>, y: Strided<'_, T>) -> T {
    (0..n).fold(T::zero(), |acc, i| acc + x.get(i) * y.get(i))
}

/// dst ← α·x + y over unit-stride buffers of equal length.
pub fn axpy_unitary_to<T: Float>(dst: &[Cell<T>], alpha: T, x: &[Cell<T>], y: &[Cell<T>]) {
    for ((d, xi), yi) in dst.iter().zip(x).zip(y) {
        d.set(alpha * xi.get() + yi.get());
    }
}
