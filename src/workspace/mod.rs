//! Thread-local pool of scratch vectors.
//!
//! `Vector::mul_vec` borrows from here when its receiver is also one of its
//! operands. A loan is a [`Workspace`] guard; its buffer goes back to the
//! pool when the guard is dropped, on every exit path. Buffers are bucketed
//! by power-of-two size class and their contents on loan are unspecified
//! unless [`PoolOptions::zero_on_loan`] is set.

use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::rc::Rc;

use tracing::debug;

use crate::config::options::PoolOptions;
use crate::error::{MatError, Result};
use crate::vector::{Vector, alloc};

thread_local! {
    static POOL: RefCell<Pool> = RefCell::new(Pool::new(PoolOptions::default()));
}

/// Smallest `k` with `n <= 2^k`. `n` must be non-zero.
fn size_class(n: usize) -> u32 {
    usize::BITS - (n - 1).leading_zeros()
}

struct Pool {
    opts: PoolOptions,
    classes: Vec<Vec<Rc<[Cell<f64>]>>>,
}

impl Pool {
    fn new(opts: PoolOptions) -> Self {
        Self { opts, classes: Vec::new() }
    }

    fn take(&mut self, n: usize) -> Result<Rc<[Cell<f64>]>> {
        let class = size_class(n);
        if let Some(buf) = self.classes.get_mut(class as usize).and_then(Vec::pop) {
            if self.opts.zero_on_loan {
                buf.iter().for_each(|c| c.set(0.0));
            }
            return Ok(buf);
        }
        let cap = 1usize.checked_shl(class).ok_or(MatError::Allocation(n))?;
        debug!(len = n, capacity = cap, "workspace pool allocating");
        alloc(cap)
    }

    fn give(&mut self, buf: Rc<[Cell<f64>]>) {
        // A buffer someone else still references is never recycled.
        if Rc::strong_count(&buf) != 1 || Rc::weak_count(&buf) != 0 {
            return;
        }
        let len = buf.len();
        if !len.is_power_of_two() {
            return;
        }
        let class = len.trailing_zeros() as usize;
        if self.classes.len() <= class {
            self.classes.resize_with(class + 1, Vec::new);
        }
        let slot = &mut self.classes[class];
        if slot.len() < self.opts.max_per_class {
            slot.push(buf);
        }
    }

    fn configure(&mut self, opts: PoolOptions) {
        self.opts = opts;
        for slot in &mut self.classes {
            slot.truncate(opts.max_per_class);
        }
    }

    fn idle(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }
}

/// A scratch vector on loan from the calling thread's pool.
pub struct Workspace {
    vec: Vector,
}

impl Deref for Workspace {
    type Target = Vector;

    fn deref(&self) -> &Vector {
        &self.vec
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.vec.is_placeholder() {
            return;
        }
        let buf = self.vec.take_storage();
        // The pool may already be gone during thread teardown.
        let _ = POOL.try_with(move |pool| {
            if let Ok(mut pool) = pool.try_borrow_mut() {
                pool.give(buf);
            }
        });
    }
}

/// Borrow a length-`n` scratch vector. A zero length yields a placeholder.
pub fn borrow(n: usize) -> Result<Workspace> {
    if n == 0 {
        return Ok(Workspace { vec: Vector::default() });
    }
    let buf = POOL.with(|pool| pool.borrow_mut().take(n))?;
    Ok(Workspace { vec: Vector::from_storage(buf, n) })
}

/// Replace this thread's pool options, dropping idle buffers over the new limit.
pub fn configure(opts: PoolOptions) {
    POOL.with(|pool| pool.borrow_mut().configure(opts));
}

/// Number of idle buffers held by this thread's pool.
pub fn idle_buffers() -> usize {
    POOL.with(|pool| pool.borrow().idle())
}
