//! Dense column vector over shared strided storage.
//!
//! A `Vector` is either a *placeholder* (length 0, increment 0) that sizes
//! itself on first write, or a fixed-length window `data[offset + i * inc]`
//! into a reference-counted buffer of cells. Views and [`Vector::shared`]
//! handles point into the same buffer, so writes through one are visible
//! through all of them; this is also how a caller passes the receiver of an
//! operation as one of its operands.

mod arith;
mod mulvec;

pub use mulvec::Path;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::raw::Strided;
use crate::core::traits::Matrix;
use crate::error::{MatError, Result};
use crate::kernel;
use crate::matrix::Transpose;

/// Allocate `n` zeroed cells, surfacing allocation failure as an error.
pub(crate) fn alloc(n: usize) -> Result<Rc<[Cell<f64>]>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n).map_err(|_| MatError::Allocation(n))?;
    buf.resize_with(n, || Cell::new(0.0));
    Ok(Rc::from(buf))
}

fn empty() -> Rc<[Cell<f64>]> {
    Rc::from(Vec::new())
}

/// A column vector. Invariant: `n == 0` iff `inc == 0`.
pub struct Vector {
    data: Rc<[Cell<f64>]>,
    offset: usize,
    inc: usize,
    n: usize,
}

impl Vector {
    /// Create a vector of length `n`, backed by `data` when given.
    ///
    /// `data` must hold exactly `n` elements. Without it a zeroed buffer is
    /// allocated. A length of zero yields a placeholder.
    pub fn new(n: usize, data: Option<Vec<f64>>) -> Result<Self> {
        let data: Rc<[Cell<f64>]> = match data {
            Some(d) if d.len() != n => {
                return Err(MatError::Shape { expected: n, found: d.len() });
            }
            Some(d) => d.into_iter().map(Cell::new).collect(),
            None => alloc(n)?,
        };
        if n == 0 {
            return Ok(Self::default());
        }
        Ok(Self { data, offset: 0, inc: 1, n })
    }

    /// Zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Result<Self> {
        Self::new(n, None)
    }

    /// Unit-stride vector over the first `n` cells of `data`.
    pub(crate) fn from_storage(data: Rc<[Cell<f64>]>, n: usize) -> Self {
        debug_assert!(n > 0 && n <= data.len());
        Self { data, offset: 0, inc: 1, n }
    }

    /// Hand back the backing buffer, leaving `self` a placeholder.
    pub(crate) fn take_storage(&mut self) -> Rc<[Cell<f64>]> {
        let data = std::mem::replace(&mut self.data, empty());
        self.reset();
        data
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        // dims() relies on inc and n being zeroed together; see reset.
        self.inc == 0
    }

    /// Sub-vector of `n` elements starting at element `i`, sharing storage.
    pub fn view(&self, i: usize, n: usize) -> Result<Vector> {
        if n == 0 || i.checked_add(n).is_none_or(|end| end > self.n) {
            return Err(MatError::IndexOutOfRange { index: i, len: self.n });
        }
        Ok(Vector {
            data: Rc::clone(&self.data),
            offset: self.offset + i * self.inc,
            inc: self.inc,
            n,
        })
    }

    /// A second handle addressing exactly the same elements as `self`.
    pub fn shared(&self) -> Vector {
        Vector {
            data: Rc::clone(&self.data),
            offset: self.offset,
            inc: self.inc,
            n: self.n,
        }
    }

    /// True when both handles address the same elements of the same buffer.
    pub fn is_same(&self, other: &Vector) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
            && self.offset == other.offset
            && self.inc == other.inc
            && self.n == other.n
    }

    /// Implicit transpose: presents the vector as a `1 × n` matrix.
    pub fn t(&self) -> Transpose<'_> {
        Transpose(self)
    }

    /// Return to the placeholder state so the vector can receive a result
    /// of any length. The buffer is kept, not freed.
    pub fn reset(&mut self) {
        // inc and n must only ever reach zero together.
        self.inc = 0;
        self.n = 0;
        self.offset = 0;
    }

    pub fn raw_vector(&self) -> Strided<'_, f64> {
        let span = if self.n == 0 { 0 } else { (self.n - 1) * self.inc + 1 };
        Strided { inc: self.inc, data: &self.data[self.offset..self.offset + span] }
    }

    pub fn at_vec(&self, i: usize) -> Result<f64> {
        if i >= self.n {
            return Err(MatError::IndexOutOfRange { index: i, len: self.n });
        }
        Ok(self.raw_vector().get(i))
    }

    pub fn set_vec(&mut self, i: usize, v: f64) -> Result<()> {
        if i >= self.n {
            return Err(MatError::IndexOutOfRange { index: i, len: self.n });
        }
        self.raw_vector().set(i, v);
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        let raw = self.raw_vector();
        (0..self.n).map(|i| raw.get(i)).collect()
    }

    /// Copy `a` into the receiver, resizing it to `a`'s length.
    pub fn clone_vec(&mut self, a: &Vector) -> Result<()> {
        if self.is_same(a) {
            return Ok(());
        }
        if a.is_placeholder() {
            self.reset();
            return Ok(());
        }
        self.adopt(a.n)?;
        kernel::copy(a.n, a.raw_vector(), self.raw_vector());
        Ok(())
    }

    /// Copy as many leading elements of `a` as fit, returning the count.
    /// Unlike the other operations this never fails on a length mismatch.
    pub fn copy_vec(&mut self, a: &Vector) -> usize {
        let n = self.n.min(a.n);
        if !self.is_same(a) {
            kernel::copy(n, a.raw_vector(), self.raw_vector());
        }
        n
    }

    /// Size a placeholder receiver to `r`, or check a sized one already is.
    pub(crate) fn reuse_as(&mut self, r: usize) -> Result<()> {
        if self.is_placeholder() {
            if r > 0 {
                self.adopt(r)?;
            }
            return Ok(());
        }
        if r != self.n {
            return Err(MatError::Shape { expected: self.n, found: r });
        }
        Ok(())
    }

    /// Point at `r` zeroed unit-stride elements, reusing the old buffer
    /// when nothing else holds it and it is large enough.
    fn adopt(&mut self, r: usize) -> Result<()> {
        let unique = Rc::get_mut(&mut self.data).is_some();
        if unique && self.data.len() >= r {
            self.data[..r].iter().for_each(|c| c.set(0.0));
        } else {
            self.data = alloc(r)?;
            trace!(len = r, "vector adopted fresh storage");
        }
        self.offset = 0;
        self.inc = 1;
        self.n = r;
        Ok(())
    }
}

impl Default for Vector {
    /// A placeholder vector.
    fn default() -> Self {
        Self { data: empty(), offset: 0, inc: 0, n: 0 }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        if data.is_empty() {
            return Self::default();
        }
        let n = data.len();
        Self::from_storage(data.into_iter().map(Cell::new).collect(), n)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("inc", &self.inc)
            .field("data", &self.to_vec())
            .finish()
    }
}

impl Matrix for Vector {
    fn dims(&self) -> (usize, usize) {
        if self.is_placeholder() {
            return (0, 0);
        }
        (self.n, 1)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j == 0, "index ({i}, {j}) out of range for {}×1 vector", self.n);
        self.raw_vector().get(i)
    }

    fn as_vector(&self) -> Option<&Vector> {
        Some(self)
    }
}
