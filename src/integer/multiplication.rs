//! Multiplication and integer powers.

use core::ops::{Mul, MulAssign};

use num_traits::{One, Zero};

use crate::algorithms::karatsuba::{mul_into, sqr_into};
use crate::integer::Integer;

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    fn mul(self, other: &Integer) -> Integer {
        if self.is_zero() || other.is_zero() {
            return Integer::zero();
        }
        let mut out = vec![0; self.data.len() + other.data.len()];
        if core::ptr::eq(self, other) {
            sqr_into(&self.data, &mut out);
        } else {
            mul_into(&self.data, &other.data, &mut out);
        }
        Integer::from_digits(self.sign * other.sign, out)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for Integer, mul);
forward_binop_assign!(impl MulAssign for Integer, mul_assign, Mul, mul);

impl Integer {
    /// `self^exponent` with `x^0 == 1`.
    ///
    /// Odd exponent factors are peeled off first, then the remaining
    /// power of two is applied as a chain of squarings.
    pub fn pow(&self, exponent: usize) -> Integer {
        if exponent == 0 {
            return Integer::one();
        }
        if self.is_zero() {
            return Integer::zero();
        }
        let j = exponent.trailing_zeros();
        let mut e = exponent >> j;
        let mut p = self.clone();
        let mut q = self.clone();
        while e >= 2 {
            e >>= 1;
            q = &q * &q;
            if e & 1 == 1 {
                p = &p * &q;
            }
        }
        for _ in 0..j {
            p = &p * &p;
        }
        p
    }
}
