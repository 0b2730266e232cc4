//! Bitwise operators.
//!
//! These act on the raw magnitude limbs, *not* on a two's-complement
//! encoding: `&` runs over the shorter operand, `|` and `^` over the
//! longer, and the result never carries a sign.

use core::ops::{BitAnd, BitOr, BitXor};

use crate::integer::{Integer, Sign};

impl BitAnd<&Integer> for &Integer {
    type Output = Integer;

    fn bitand(self, other: &Integer) -> Integer {
        let n = self.data.len().min(other.data.len());
        let out = (0..n).map(|i| self.data[i] & other.data[i]).collect();
        Integer::from_digits(Sign::Plus, out)
    }
}

impl BitOr<&Integer> for &Integer {
    type Output = Integer;

    fn bitor(self, other: &Integer) -> Integer {
        let (big, small) = if self.data.len() >= other.data.len() {
            (&self.data, &other.data)
        } else {
            (&other.data, &self.data)
        };
        let mut out = big.clone();
        for (o, s) in out.iter_mut().zip(small.iter()) {
            *o |= s;
        }
        Integer::from_digits(Sign::Plus, out)
    }
}

impl BitXor<&Integer> for &Integer {
    type Output = Integer;

    fn bitxor(self, other: &Integer) -> Integer {
        let (big, small) = if self.data.len() >= other.data.len() {
            (&self.data, &other.data)
        } else {
            (&other.data, &self.data)
        };
        let mut out = big.clone();
        for (o, s) in out.iter_mut().zip(small.iter()) {
            *o ^= s;
        }
        Integer::from_digits(Sign::Plus, out)
    }
}

forward_all_binop_to_ref_ref!(impl BitAnd for Integer, bitand);
forward_all_binop_to_ref_ref!(impl BitOr for Integer, bitor);
forward_all_binop_to_ref_ref!(impl BitXor for Integer, bitxor);

#[cfg(test)]
mod tests {
    use crate::integer::Integer;
    use num_traits::Zero;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn operate_on_magnitudes_only() {
        let x = int("0xabdeaf1234355512313123a");
        let y = int("0xabdeadeeeeeeeeeeeeeee");
        assert_eq!(&x | &y, int("0xabffffbffefffffeffffefe"));
        assert_eq!(&x & &y, int("0x8a8e0024244402202022a"));
        assert_eq!(&x ^ &y, int("0xab7571bfdadbbbfcdfdfcd4"));
    }

    #[test]
    fn results_are_never_negative() {
        let x = int("-0xff00");
        let y = int("-0x0ff0");
        assert!(!(&x & &y).is_negative());
        assert!(!(&x | &y).is_negative());
        assert!(!(&x ^ &y).is_negative());
        assert_eq!(&x & &y, int("0x0f00"));
    }

    #[test]
    fn xor_with_self_is_zero() {
        let x = int("0xfffffffffffffffffffff");
        assert!((&x ^ &x).is_zero());
    }
}
