//! Sign-magnitude multi-precision integer arithmetic, sized for RSA.
//!
//! The crate provides a single arbitrary-precision [`Integer`] type backed
//! by a little-endian limb vector, together with the number-theoretic
//! operations needed to generate, validate and serialize two-prime RSA
//! keys: Karatsuba multiplication and squaring, long division with
//! two-limb quotient estimation, Barrett-reduced sliding-window modular
//! exponentiation, extended Euclidean GCD and modular inverse, and
//! Miller-Rabin primality testing backed by a small-prime sieve.
//!
//! Hot paths are allocation-free: recursive and iterative cores run on
//! thread-local scratch arenas (see [`scratch`]) and fall back to one-shot
//! heap buffers when an operand outgrows them.
//!
//! The limb width is selected at compile time: 64-bit limbs with the
//! default `u64_digit` feature, 32-bit without it, 16-bit with the
//! `u16_digit` feature. All three widths have identical semantics; the
//! narrower widths exist for targets without a native double-word
//! multiply.
//!
//! # Example
//!
//! ```
//! use mpa::Integer;
//!
//! let a: Integer = "0xab123567567adeeff143565756742".parse().unwrap();
//! let b: Integer = "0x1234aeefdbba123231221".parse().unwrap();
//! assert_eq!((&a / &b).to_hex(), "0x96582653d");
//! assert_eq!(a.to_decimal(), "55515754828527398988712969445402434");
//! ```
//!
//! This crate makes no constant-time guarantees; exponents, moduli and
//! key material are *not* protected against timing side channels.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod algorithms;
mod integer;
pub mod scratch;
mod traits;

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub mod bigrand;

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub mod prime;

pub use crate::integer::{Integer, ParseIntegerError, Sign};
pub use crate::traits::{ExtendedGcd, ModInverse};

#[cfg(feature = "rand")]
pub use crate::bigrand::RandInteger;

#[cfg(feature = "prime")]
pub use crate::bigrand::RandPrime;

/// Limb-width selection and the constants derived from it.
///
/// `BigDigit` is one limb of an [`Integer`] magnitude; `DoubleBigDigit`
/// holds a full two-limb product.
pub mod big_digit {
    #[cfg(feature = "u16_digit")]
    mod digit {
        pub type BigDigit = u16;
        pub type DoubleBigDigit = u32;
        pub type SignedDoubleBigDigit = i32;
        /// Multiplicative inverse of 5 modulo `2^BITS`.
        pub(crate) const INV5: BigDigit = 0xcccd;
        /// Decimal digits that always fit in one limb.
        pub(crate) const DECIMAL_DIGITS_PER_LIMB: usize = 4;
        /// `10^DECIMAL_DIGITS_PER_LIMB`.
        pub(crate) const DECIMAL_LIMB_BASE: BigDigit = 10_000;
    }

    #[cfg(all(feature = "u64_digit", not(feature = "u16_digit")))]
    mod digit {
        pub type BigDigit = u64;
        pub type DoubleBigDigit = u128;
        pub type SignedDoubleBigDigit = i128;
        pub(crate) const INV5: BigDigit = 0xcccc_cccc_cccc_cccd;
        pub(crate) const DECIMAL_DIGITS_PER_LIMB: usize = 19;
        pub(crate) const DECIMAL_LIMB_BASE: BigDigit = 10_000_000_000_000_000_000;
    }

    #[cfg(not(any(feature = "u64_digit", feature = "u16_digit")))]
    mod digit {
        pub type BigDigit = u32;
        pub type DoubleBigDigit = u64;
        pub type SignedDoubleBigDigit = i64;
        pub(crate) const INV5: BigDigit = 0xcccc_cccd;
        pub(crate) const DECIMAL_DIGITS_PER_LIMB: usize = 9;
        pub(crate) const DECIMAL_LIMB_BASE: BigDigit = 1_000_000_000;
    }

    pub use digit::{BigDigit, DoubleBigDigit, SignedDoubleBigDigit};
    pub(crate) use digit::{DECIMAL_DIGITS_PER_LIMB, DECIMAL_LIMB_BASE, INV5};

    /// Bits per limb.
    pub const BITS: usize = BigDigit::BITS as usize;
    /// All-ones limb.
    pub const MAX: BigDigit = BigDigit::MAX;
    /// The most significant bit of a limb.
    pub const MSB: BigDigit = 1 << (BITS - 1);

    #[inline]
    pub(crate) fn to_double(lo: BigDigit, hi: BigDigit) -> DoubleBigDigit {
        DoubleBigDigit::from(lo) | (DoubleBigDigit::from(hi) << BITS)
    }

    #[inline]
    pub(crate) fn lo(x: DoubleBigDigit) -> BigDigit {
        x as BigDigit
    }

    #[inline]
    pub(crate) fn hi(x: DoubleBigDigit) -> BigDigit {
        (x >> BITS) as BigDigit
    }
}
