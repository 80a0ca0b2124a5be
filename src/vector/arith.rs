//! Element-wise arithmetic on vectors.
//!
//! The receiver may be either operand, both, or neither. Binary loops read
//! both operands' element `i` before writing element `i`, which makes every
//! one of those cases safe. `add_scaled_vec` instead picks a separate
//! evaluation order per aliasing case.

use crate::error::{MatError, Result};
use crate::kernel::{axpy, axpy_unitary_to, copy, scal};
use crate::vector::Vector;

fn common_len(a: &Vector, b: &Vector) -> Result<usize> {
    if a.len() != b.len() {
        return Err(MatError::Shape { expected: a.len(), found: b.len() });
    }
    Ok(a.len())
}

impl Vector {
    fn zip_into(&mut self, a: &Vector, b: &Vector, f: impl Fn(f64, f64) -> f64) -> Result<()> {
        let n = common_len(a, b)?;
        self.reuse_as(n)?;
        let (v, a, b) = (self.raw_vector(), a.raw_vector(), b.raw_vector());
        for i in 0..n {
            let (x, y) = (a.get(i), b.get(i));
            v.set(i, f(x, y));
        }
        Ok(())
    }

    /// self ← a + b
    pub fn add_vec(&mut self, a: &Vector, b: &Vector) -> Result<()> {
        self.zip_into(a, b, |x, y| x + y)
    }

    /// self ← a − b
    pub fn sub_vec(&mut self, a: &Vector, b: &Vector) -> Result<()> {
        self.zip_into(a, b, |x, y| x - y)
    }

    /// self ← a ⊙ b
    pub fn mul_elem_vec(&mut self, a: &Vector, b: &Vector) -> Result<()> {
        self.zip_into(a, b, |x, y| x * y)
    }

    /// self ← a ⊘ b
    pub fn div_elem_vec(&mut self, a: &Vector, b: &Vector) -> Result<()> {
        self.zip_into(a, b, |x, y| x / y)
    }

    /// self ← α·a
    pub fn scale_vec(&mut self, alpha: f64, a: &Vector) -> Result<()> {
        let n = a.len();
        if !self.is_same(a) {
            self.reuse_as(n)?;
            copy(n, a.raw_vector(), self.raw_vector());
        }
        if alpha != 1.0 {
            scal(n, alpha, self.raw_vector());
        }
        Ok(())
    }

    /// self ← a + α·b
    pub fn add_scaled_vec(&mut self, a: &Vector, alpha: f64, b: &Vector) -> Result<()> {
        if alpha == 1.0 {
            return self.add_vec(a, b);
        }
        if alpha == -1.0 {
            return self.sub_vec(a, b);
        }
        let n = common_len(a, b)?;
        self.reuse_as(n)?;
        if alpha == 0.0 {
            self.copy_vec(a);
            return Ok(());
        }

        let (v, ar, br) = (self.raw_vector(), a.raw_vector(), b.raw_vector());
        match (self.is_same(a), self.is_same(b)) {
            // v ← v + α·v = (α + 1)·v
            (true, true) => scal(n, alpha + 1.0, v),
            // v ← v + α·b
            (true, false) => axpy(n, alpha, br, v),
            // v ← a + α·v: scale v before a is added in
            (false, true) => {
                if v.inc == 1 && ar.inc == 1 {
                    for (vi, ai) in v.data.iter().zip(ar.data) {
                        vi.set(vi.get() * alpha + ai.get());
                    }
                } else {
                    scal(n, alpha, v);
                    axpy(n, 1.0, ar, v);
                }
            }
            // v ← a + α·b
            (false, false) => {
                if v.inc == 1 && ar.inc == 1 && br.inc == 1 {
                    axpy_unitary_to(v.data, alpha, br.data, ar.data);
                } else {
                    copy(n, ar, v);
                    axpy(n, alpha, br, v);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_scaled_concrete() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        let mut v = Vector::default();
        v.add_scaled_vec(&a, 2.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![9.0, 12.0, 15.0]);
    }

    #[test]
    fn add_scaled_receiver_is_a() {
        let mut v = Vector::from(vec![1.0, 2.0, 3.0]);
        let a = v.shared();
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        v.add_scaled_vec(&a, 2.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![9.0, 12.0, 15.0]);
        assert_eq!(b.to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn add_scaled_receiver_is_b() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let mut v = Vector::from(vec![4.0, 5.0, 6.0]);
        let b = v.shared();
        v.add_scaled_vec(&a, 2.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![9.0, 12.0, 15.0]);
    }

    #[test]
    fn add_scaled_receiver_is_b_strided() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let backing = Vector::from(vec![4.0, 0.0, 5.0, 0.0, 6.0]);
        let mut v = Vector { inc: 2, n: 3, ..backing.shared() };
        let b = v.shared();
        v.add_scaled_vec(&a, 2.0, &b).unwrap();
        assert_eq!(backing.to_vec(), vec![9.0, 0.0, 12.0, 0.0, 15.0]);
    }

    #[test]
    fn add_scaled_receiver_is_both() {
        let mut v = Vector::from(vec![1.0, 2.0, 3.0]);
        let (a, b) = (v.shared(), v.shared());
        v.add_scaled_vec(&a, 3.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![4.0, 8.0, 12.0]);
    }

    #[test]
    fn add_scaled_degenerate_alphas() {
        let a = Vector::from(vec![1.0, 2.0]);
        let b = Vector::from(vec![10.0, 20.0]);
        let mut v = Vector::default();
        v.add_scaled_vec(&a, 0.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![1.0, 2.0]);
        v.add_scaled_vec(&a, -1.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![-9.0, -18.0]);
        v.add_scaled_vec(&a, 1.0, &b).unwrap();
        assert_eq!(v.to_vec(), vec![11.0, 22.0]);
    }

    #[test]
    fn mismatched_operands_leave_receiver_untouched() {
        let a = Vector::from(vec![1.0, 2.0]);
        let b = Vector::from(vec![1.0, 2.0, 3.0]);
        let mut v = Vector::from(vec![7.0, 7.0]);
        assert_eq!(
            v.add_scaled_vec(&a, 2.0, &b).unwrap_err(),
            MatError::Shape { expected: 2, found: 3 }
        );
        assert!(v.add_vec(&a, &b).is_err());
        assert!(v.div_elem_vec(&a, &b).is_err());
        assert_eq!(v.to_vec(), vec![7.0, 7.0]);
    }

    #[test]
    fn sized_receiver_is_never_resized() {
        let a = Vector::from(vec![1.0; 5]);
        let mut v = Vector::from(vec![0.0; 3]);
        assert!(v.add_vec(&a, &a).is_err());
        v.reset();
        v.add_vec(&a, &a).unwrap();
        assert_eq!(v.to_vec(), vec![2.0; 5]);
    }

    #[test]
    fn elementwise_ops_with_aliases() {
        let mut v = Vector::from(vec![2.0, 4.0]);
        let a = v.shared();
        v.mul_elem_vec(&a, &a).unwrap();
        assert_eq!(v.to_vec(), vec![4.0, 16.0]);
        let d = Vector::from(vec![2.0, 8.0]);
        let a = v.shared();
        v.div_elem_vec(&a, &d).unwrap();
        assert_eq!(v.to_vec(), vec![2.0, 2.0]);
        let b = v.shared();
        v.sub_vec(&d, &b).unwrap();
        assert_eq!(v.to_vec(), vec![0.0, 6.0]);
    }

    #[test]
    fn scale_vec_cases() {
        let a = Vector::from(vec![1.0, -2.0]);
        let mut v = Vector::default();
        v.scale_vec(1.0, &a).unwrap();
        assert_eq!(v.to_vec(), a.to_vec());
        v.scale_vec(0.0, &a).unwrap();
        assert_eq!(v.to_vec(), vec![0.0, 0.0]);
        let s = v.shared();
        v.copy_vec(&a);
        v.scale_vec(-3.0, &s).unwrap();
        assert_eq!(v.to_vec(), vec![-3.0, 6.0]);
    }

    #[test]
    fn scale_by_zero_clears_non_finite() {
        let a = Vector::from(vec![f64::INFINITY, f64::NAN, 1.0, f64::NEG_INFINITY]);
        let mut v = Vector::default();
        v.scale_vec(0.0, &a).unwrap();
        assert_eq!(v.to_vec(), vec![0.0; 4]);
        // in place
        let mut w = a.shared();
        w.scale_vec(0.0, &a).unwrap();
        assert_eq!(a.to_vec(), vec![0.0; 4]);
    }
}
