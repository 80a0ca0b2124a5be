//! Level-2 kernels: matrix-vector products on row-major buffers.
//!
//! `x` and `y` must not share storage in `gemv`/`symv`; `Vector::mul_vec`
//! guarantees this by computing into a workspace buffer when they would.

use num_traits::Float;

use crate::core::raw::{Diag, General, Strided, Symmetric, Trans, Triangular, Uplo};
use crate::kernel::level1::scal;

fn scale_output<T: Float>(m: usize, beta: T, y: Strided<'_, T>) {
    if beta == T::zero() {
        // y is write-only when beta is zero
        for i in 0..m {
            y.set(i, T::zero());
        }
    } else if beta != T::one() {
        scal(m, beta, y);
    }
}

/// y ← α·op(A)·x + β·y
pub fn gemv<T: Float>(
    trans: Trans,
    alpha: T,
    a: General<'_, T>,
    x: Strided<'_, T>,
    beta: T,
    y: Strided<'_, T>,
) {
    let m = match trans {
        Trans::NoTrans => a.rows,
        Trans::Trans => a.cols,
    };
    scale_output(m, beta, y);
    if alpha == T::zero() {
        return;
    }
    for i in 0..a.rows {
        let row = &a.data[i * a.stride..i * a.stride + a.cols];
        match trans {
            Trans::NoTrans => {
                let sum = row
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (j, &aij)| acc + aij * x.get(j));
                y.set(i, y.get(i) + alpha * sum);
            }
            Trans::Trans => {
                let t = alpha * x.get(i);
                for (j, &aij) in row.iter().enumerate() {
                    y.set(j, y.get(j) + t * aij);
                }
            }
        }
    }
}

/// y ← α·A·x + β·y for symmetric A
pub fn symv<T: Float>(alpha: T, a: Symmetric<'_, T>, x: Strided<'_, T>, beta: T, y: Strided<'_, T>) {
    scale_output(a.n, beta, y);
    if alpha == T::zero() {
        return;
    }
    for i in 0..a.n {
        let sum = (0..a.n).fold(T::zero(), |acc, j| acc + a.at(i, j) * x.get(j));
        y.set(i, y.get(i) + alpha * sum);
    }
}

/// x ← op(A)·x for triangular A, in place.
pub fn trmv<T: Float>(trans: Trans, a: Triangular<'_, T>, x: Strided<'_, T>) {
    let n = a.n;
    let elem = |i: usize, j: usize| match trans {
        Trans::NoTrans => a.data[i * a.stride + j],
        Trans::Trans => a.data[j * a.stride + i],
    };
    let diag = |i: usize, xi: T| match a.diag {
        Diag::Unit => xi,
        Diag::NonUnit => elem(i, i) * xi,
    };
    // op(A) is upper when exactly one of (stored upper, transposed) holds.
    let upper = (a.uplo == Uplo::Upper) != (trans == Trans::Trans);
    if upper {
        // row i only reads x[i..], which is still untouched
        for i in 0..n {
            let sum = (i + 1..n).fold(diag(i, x.get(i)), |acc, j| acc + elem(i, j) * x.get(j));
            x.set(i, sum);
        }
    } else {
        for i in (0..n).rev() {
            let sum = (0..i).fold(diag(i, x.get(i)), |acc, j| acc + elem(i, j) * x.get(j));
            x.set(i, sum);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn cells(v: &[f64]) -> Vec<Cell<f64>> {
        v.iter().copied().map(Cell::new).collect()
    }

    fn values(c: &[Cell<f64>]) -> Vec<f64> {
        c.iter().map(Cell::get).collect()
    }

    #[test]
    fn gemv_both_orientations() {
        // 2×3 matrix [[1,2,0],[0,3,4]]
        let data = [1.0, 2.0, 0.0, 0.0, 3.0, 4.0];
        let a = General { rows: 2, cols: 3, stride: 3, data: &data };

        let x = cells(&[1.0, 1.0, 1.0]);
        let y = cells(&[7.0, 7.0]);
        gemv(Trans::NoTrans, 1.0, a, Strided::unit(&x), 0.0, Strided::unit(&y));
        assert_eq!(values(&y), vec![3.0, 7.0]);

        let x = cells(&[1.0, 2.0]);
        let y = cells(&[1.0, 1.0, 1.0]);
        gemv(Trans::Trans, 1.0, a, Strided::unit(&x), 1.0, Strided::unit(&y));
        assert_eq!(values(&y), vec![2.0, 9.0, 9.0]);
    }

    #[test]
    fn gemv_beta_zero_ignores_nan_output() {
        let data = [2.0];
        let a = General { rows: 1, cols: 1, stride: 1, data: &data };
        let x = cells(&[3.0]);
        let y = cells(&[f64::NAN]);
        gemv(Trans::NoTrans, 1.0, a, Strided::unit(&x), 0.0, Strided::unit(&y));
        assert_eq!(values(&y), vec![6.0]);
    }

    #[test]
    fn symv_reads_one_triangle() {
        // lower triangle of [[2,1],[1,3]]; upper slot is garbage
        let data = [2.0, -50.0, 1.0, 3.0];
        let a = Symmetric { n: 2, stride: 2, uplo: Uplo::Lower, data: &data };
        let x = cells(&[1.0, 2.0]);
        let y = cells(&[0.0, 0.0]);
        symv(1.0, a, Strided::unit(&x), 0.0, Strided::unit(&y));
        assert_eq!(values(&y), vec![4.0, 7.0]);
    }

    #[test]
    fn trmv_all_triangles() {
        // upper [[1,2,3],[0,4,5],[0,0,6]]
        let up = [1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0];
        let a = Triangular { n: 3, stride: 3, uplo: Uplo::Upper, diag: Diag::NonUnit, data: &up };
        let x = cells(&[1.0, 1.0, 1.0]);
        trmv(Trans::NoTrans, a, Strided::unit(&x));
        assert_eq!(values(&x), vec![6.0, 9.0, 6.0]);

        let x = cells(&[1.0, 1.0, 1.0]);
        trmv(Trans::Trans, a, Strided::unit(&x));
        assert_eq!(values(&x), vec![1.0, 6.0, 14.0]);

        let a = Triangular { diag: Diag::Unit, ..a };
        let x = cells(&[1.0, 1.0, 1.0]);
        trmv(Trans::NoTrans, a, Strided::unit(&x));
        assert_eq!(values(&x), vec![6.0, 6.0, 1.0]);

        // lower [[1,0],[2,3]]
        let lo = [1.0, 0.0, 2.0, 3.0];
        let a = Triangular { n: 2, stride: 2, uplo: Uplo::Lower, diag: Diag::NonUnit, data: &lo };
        let x = cells(&[1.0, 1.0]);
        trmv(Trans::NoTrans, a, Strided::unit(&x));
        assert_eq!(values(&x), vec![1.0, 5.0]);
        let x = cells(&[1.0, 1.0]);
        trmv(Trans::Trans, a, Strided::unit(&x));
        assert_eq!(values(&x), vec![3.0, 3.0]);
    }
}
