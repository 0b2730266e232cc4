//! Division and the non-negative remainder.
//!
//! `/` truncates toward zero. `%` always lands in `[0, |divisor|)`: for
//! a negative dividend the magnitude remainder is subtracted from the
//! divisor's magnitude (and a remainder of zero stays zero). This is
//! *not* the truncated remainder that pairs with `/`; RSA private-key
//! validation (`d mod (p - 1)`) relies on the non-negative convention.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::Zero;

use crate::algorithms::div::div_rem;
use crate::integer::addition::sub_magnitudes;
use crate::integer::{Integer, Sign};

impl Div<&Integer> for &Integer {
    type Output = Integer;

    fn div(self, other: &Integer) -> Integer {
        let (q, _) = div_rem(&self.data, &other.data);
        Integer::from_digits(self.sign * other.sign, q)
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    fn rem(self, other: &Integer) -> Integer {
        let (_, r) = div_rem(&self.data, &other.data);
        if r.is_empty() {
            return Integer::zero();
        }
        if self.is_negative() {
            Integer::from_digits(Sign::Plus, sub_magnitudes(&other.data, &r))
        } else {
            Integer::from_digits(Sign::Plus, r)
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for Integer, div);
forward_all_binop_to_ref_ref!(impl Rem for Integer, rem);
forward_binop_assign!(impl DivAssign for Integer, div_assign, Div, div);
forward_binop_assign!(impl RemAssign for Integer, rem_assign, Rem, rem);
