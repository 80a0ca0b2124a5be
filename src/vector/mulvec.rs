//! Matrix-vector multiplication with capability dispatch.
//!
//! The left operand is resolved once per call into a [`Path`], checked in
//! order of decreasing specialisation: another vector, a symmetric buffer, a
//! triangular buffer, a dense row-major buffer, bulk row/column streaming,
//! and finally element-by-element access.

use std::cell::Cell;

use tracing::trace;

use crate::core::raw::{General, Strided, Symmetric, Trans, Triangular};
use crate::core::traits::{Matrix, RowColumnStream, untranspose};
use crate::error::{MatError, Result};
use crate::kernel::{copy, dot, gemv, symv, trmv};
use crate::vector::Vector;
use crate::workspace;

/// The algorithm selected for a left operand.
pub enum Path<'a> {
    Vector(&'a Vector),
    Symmetric(Symmetric<'a, f64>),
    Triangular(Triangular<'a, f64>),
    Dense(General<'a, f64>),
    Stream(&'a dyn RowColumnStream),
    Generic(&'a dyn Matrix),
}

impl<'a> Path<'a> {
    /// Pick the cheapest path `a` supports. `a` must already be untransposed.
    pub fn resolve(a: &'a dyn Matrix) -> Self {
        if let Some(v) = a.as_vector() {
            Path::Vector(v)
        } else if let Some(s) = a.raw_symmetric() {
            Path::Symmetric(s)
        } else if let Some(t) = a.raw_triangular() {
            Path::Triangular(t)
        } else if let Some(g) = a.raw_matrix() {
            Path::Dense(g)
        } else if let Some(s) = a.as_stream() {
            Path::Stream(s)
        } else {
            Path::Generic(a)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Path::Vector(_) => "vector",
            Path::Symmetric(_) => "symmetric",
            Path::Triangular(_) => "triangular",
            Path::Dense(_) => "dense",
            Path::Stream(_) => "stream",
            Path::Generic(_) => "generic",
        }
    }
}

fn unit(buf: &mut [f64]) -> Strided<'_, f64> {
    Strided::unit(Cell::from_mut(buf).as_slice_of_cells())
}

/// v[k] ← line(k)·x for each of `lines` lines of length `len`, where
/// `fill` materialises a line into a reusable buffer.
fn reduce_lines(
    lines: usize,
    len: usize,
    x: Strided<'_, f64>,
    v: Strided<'_, f64>,
    mut fill: impl FnMut(&mut [f64], usize),
) {
    let mut buf = vec![0.0; len];
    for k in 0..lines {
        fill(buf.as_mut_slice(), k);
        v.set(k, dot(len, unit(buf.as_mut_slice()), x));
    }
}

/// dst ← op(A)·b along `path`. `dims` are those of the untransposed A and
/// `dst` must already have the output length and not alias `b`.
fn apply(path: &Path<'_>, dims: (usize, usize), trans: bool, b: &Vector, dst: &Vector) {
    let (v, x) = (dst.raw_vector(), b.raw_vector());
    let (ar, ac) = dims;
    match *path {
        Path::Vector(a) => {
            let y = a.raw_vector();
            if a.len() == 1 {
                // {1,1} × {1,n}
                let s = y.get(0);
                for i in 0..b.len() {
                    v.set(i, s * x.get(i));
                }
            } else if b.len() == 1 {
                // {n,1} × {1,1}
                let s = x.get(0);
                for i in 0..a.len() {
                    v.set(i, s * y.get(i));
                }
            } else {
                // {1,n} × {n,1}
                v.set(0, dot(a.len(), y, x));
            }
        }
        Path::Symmetric(s) => symv(1.0, s, x, 0.0, v),
        Path::Triangular(t) => {
            copy(b.len(), x, v);
            trmv(Trans::from_flag(trans), t, v);
        }
        Path::Dense(g) => gemv(Trans::from_flag(trans), 1.0, g, x, 0.0, v),
        Path::Stream(s) => {
            if trans {
                reduce_lines(ac, ar, x, v, |buf, j| s.col(buf, j));
            } else {
                reduce_lines(ar, ac, x, v, |buf, i| s.row(buf, i));
            }
        }
        Path::Generic(m) => {
            if trans {
                reduce_lines(ac, ar, x, v, |buf, j| {
                    for (i, e) in buf.iter_mut().enumerate() {
                        *e = m.at(i, j);
                    }
                });
            } else {
                reduce_lines(ar, ac, x, v, |buf, i| {
                    for (j, e) in buf.iter_mut().enumerate() {
                        *e = m.at(i, j);
                    }
                });
            }
        }
    }
}

impl Vector {
    /// self ← a·b
    ///
    /// `a` may be any [`Matrix`], including an implicit [`Transpose`] or
    /// another vector. A length-1 vector on the left acts as a scalar and
    /// scales `b`. The receiver may be `b` or the left vector operand; the
    /// product is then computed in a pooled workspace and copied back.
    ///
    /// [`Transpose`]: crate::matrix::Transpose
    pub fn mul_vec(&mut self, a: &dyn Matrix, b: &Vector) -> Result<()> {
        let (r, c) = a.dims();
        let (inner, trans) = untranspose(a);
        let broadcast = inner.as_vector().is_some_and(|av| av.len() == 1);
        let r = if broadcast {
            b.len()
        } else {
            if c != b.len() {
                return Err(MatError::Shape { expected: c, found: b.len() });
            }
            r
        };
        self.reuse_as(r)?;
        if r == 0 {
            return Ok(());
        }

        let path = Path::resolve(inner);
        let aliased = inner.as_vector().is_some_and(|av| self.is_same(av)) || self.is_same(b);
        trace!(
            path = path.name(),
            rows = r,
            cols = c,
            transposed = trans,
            aliased,
            capabilities = ?inner.capabilities(),
            "resolved matrix-vector path"
        );

        if aliased {
            let work = workspace::borrow(r)?;
            apply(&path, inner.dims(), trans, b, &work);
            self.copy_vec(&work);
            return Ok(());
        }
        apply(&path, inner.dims(), trans, b, self);
        Ok(())
    }
}
