//! Limb- and bit-granular shifts. The sign rides along unchanged; a
//! magnitude shifted down to nothing collapses to canonical zero.

use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;

use crate::algorithms::bits::{shl_words_and_bits, shr_bits_in_place};
use crate::big_digit;
use crate::integer::Integer;

impl Shl<usize> for &Integer {
    type Output = Integer;

    fn shl(self, shift: usize) -> Integer {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }
        let head = self.data.len() - 1;
        let words = shift / big_digit::BITS;
        let bits = shift % big_digit::BITS;
        let mut out = vec![0; head + words + 2];
        let out_head = shl_words_and_bits(&self.data, head, bits, words, &mut out);
        out.truncate(out_head + 1);
        Integer::from_digits(self.sign, out)
    }
}

impl Shr<usize> for &Integer {
    type Output = Integer;

    fn shr(self, shift: usize) -> Integer {
        if shift == 0 {
            return self.clone();
        }
        let words = shift / big_digit::BITS;
        if self.data.len() <= words {
            return Integer::zero();
        }
        let bits = shift % big_digit::BITS;
        let mut out = self.data[words..].to_vec();
        if bits != 0 {
            let out_len = out.len();
            let head = shr_bits_in_place(&mut out, out_len - 1, bits);
            out.truncate(head + 1);
        }
        Integer::from_digits(self.sign, out)
    }
}

impl Shl<usize> for Integer {
    type Output = Integer;

    #[inline]
    fn shl(self, shift: usize) -> Integer {
        (&self) << shift
    }
}

impl Shr<usize> for Integer {
    type Output = Integer;

    #[inline]
    fn shr(self, shift: usize) -> Integer {
        (&self) >> shift
    }
}

impl ShlAssign<usize> for Integer {
    #[inline]
    fn shl_assign(&mut self, shift: usize) {
        *self = &*self << shift;
    }
}

impl ShrAssign<usize> for Integer {
    #[inline]
    fn shr_assign(&mut self, shift: usize) {
        *self = &*self >> shift;
    }
}
