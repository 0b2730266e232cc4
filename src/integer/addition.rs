//! Addition and subtraction with sign-magnitude semantics.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::Zero;

use crate::algorithms::add::{add_full, sub_full};
use crate::algorithms::cmp::cmp_slice;
use crate::big_digit::BigDigit;
use crate::integer::Integer;

/// `|l| + |r|` on normalized magnitudes.
pub(crate) fn add_magnitudes(l: &[BigDigit], r: &[BigDigit]) -> Vec<BigDigit> {
    let (big, small) = if l.len() >= r.len() { (l, r) } else { (r, l) };
    let mut out = vec![0; big.len() + 1];
    add_full(big, small, &mut out);
    out
}

/// `|big| - |small|`, requires `|big| >= |small|`.
pub(crate) fn sub_magnitudes(big: &[BigDigit], small: &[BigDigit]) -> Vec<BigDigit> {
    let mut out = vec![0; big.len()];
    sub_full(big, small, &mut out);
    out
}

impl Add<&Integer> for &Integer {
    type Output = Integer;

    fn add(self, other: &Integer) -> Integer {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign == other.sign {
            Integer::from_digits(self.sign, add_magnitudes(&self.data, &other.data))
        } else {
            match cmp_slice(&self.data, &other.data) {
                Ordering::Equal => Integer::zero(),
                Ordering::Greater => {
                    Integer::from_digits(self.sign, sub_magnitudes(&self.data, &other.data))
                }
                Ordering::Less => {
                    Integer::from_digits(other.sign, sub_magnitudes(&other.data, &self.data))
                }
            }
        }
    }
}

impl Sub<&Integer> for &Integer {
    type Output = Integer;

    fn sub(self, other: &Integer) -> Integer {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -other.clone();
        }
        if self.sign != other.sign {
            Integer::from_digits(self.sign, add_magnitudes(&self.data, &other.data))
        } else {
            match cmp_slice(&self.data, &other.data) {
                Ordering::Equal => Integer::zero(),
                Ordering::Greater => {
                    Integer::from_digits(self.sign, sub_magnitudes(&self.data, &other.data))
                }
                Ordering::Less => {
                    Integer::from_digits(-self.sign, sub_magnitudes(&other.data, &self.data))
                }
            }
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for Integer, add);
forward_all_binop_to_ref_ref!(impl Sub for Integer, sub);
forward_binop_assign!(impl AddAssign for Integer, add_assign, Add, add);
forward_binop_assign!(impl SubAssign for Integer, sub_assign, Sub, sub);
