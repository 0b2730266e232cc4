//! Low-level algorithms for big integer arithmetic.
//!
//! This module exposes the internal arithmetic primitives used by
//! [`Integer`](crate::Integer), making them available for direct use on
//! limb slices.

#![allow(clippy::many_single_char_names)]

pub mod add;
pub(crate) mod barrett;
pub mod bits;
pub mod cmp;
pub mod div;
pub mod gcd;
pub mod karatsuba;
pub mod mod_inverse;
pub mod mul;

// --- addition / subtraction ---
pub use self::add::{adc, add2, add_full, sbb, sub2, sub_full};

// --- comparison ---
pub use self::cmp::cmp_slice;

// --- division ---
pub use self::div::div_rem;

// --- multiplication ---
pub use self::karatsuba::{mul_into, sqr_into};
pub use self::mul::{mul_by_doubleword, mul_by_word};

// --- shift / bit counts ---
pub use self::bits::{leading_zero_bits, trailing_zero_bits, trailing_zero_bits_slice};

// --- number theory ---
pub use self::gcd::{extended_gcd, gcd, lcm};
pub use self::mod_inverse::mod_inverse;
