//! Primality testing.
//!
//! [`probably_prime`] screens a candidate against the first 2048 primes
//! (trial division via cached per-limb residues), then runs Miller-Rabin
//! with random witnesses; each witness exponentiation goes through the
//! Barrett sliding-window machinery.

#![cfg(feature = "prime")]
#![cfg_attr(docsrs, doc(cfg(feature = "prime")))]

use std::sync::LazyLock;

use num_traits::Zero;

use crate::algorithms::barrett::Barrett;
use crate::algorithms::bits::trailing_zero_bits_slice;
use crate::bigrand::RandInteger;
use crate::big_digit::BigDigit;
use crate::integer::Integer;

/// Number of precomputed small primes.
pub(crate) const SIEVE_SIZE: usize = 2048;

/// The largest of the 2048 sieve primes.
pub(crate) const LARGEST_SIEVE_PRIME: u32 = 17863;

static PRIMES_SIEVE: LazyLock<[u32; SIEVE_SIZE]> = LazyLock::new(|| {
    const SQRT_BOUND: u32 = 133;
    let mut out = [0u32; SIEVE_SIZE];
    let mut idx = 0;
    out[idx] = 2;
    idx += 1;
    for i in 3..=LARGEST_SIEVE_PRIME {
        let bound = i.min(SQRT_BOUND + 1);
        let mut prime = true;
        let mut factor = 2;
        while prime && factor < bound {
            prime = i % factor != 0;
            factor += 1;
        }
        if prime {
            out[idx] = i;
            idx += 1;
        }
    }
    debug_assert_eq!(idx, SIEVE_SIZE);
    out
});

/// The first [`SIEVE_SIZE`] primes, ascending.
pub(crate) fn primes_sieve() -> &'static [u32; SIEVE_SIZE] {
    &PRIMES_SIEVE
}

/// `n mod p` for a small prime `p`, without long division: with
/// `B = 2^BITS`, `n mod p = sum (limb[i] mod p) * (B mod p)^i (mod p)`.
pub(crate) fn mod_small(digits: &[BigDigit], p: u32) -> u32 {
    let m = u64::from(p);
    let mut iter = digits.iter();
    let mut out = match iter.next() {
        Some(&w) => u64::from(w) % m,
        None => return 0,
    };
    let base_factor = (u64::from(crate::big_digit::MAX) % m + 1) % m;
    let mut current = base_factor;
    for &w in iter {
        out = (out + (u64::from(w) % m) * current) % m;
        current = (current * base_factor) % m;
    }
    out as u32
}

/// Miller-Rabin primality test with `steps` random witnesses, preceded
/// by trial division against the small-prime sieve.
///
/// Values below 2 and negative values are composite by convention. The
/// error probability for a composite surviving is at most `4^-steps`;
/// 32 rounds suit one-off checks, prime search uses 64.
///
/// # Example
///
/// ```
/// use mpa::prime::probably_prime;
/// use mpa::Integer;
///
/// let p: Integer = "0x7fffffffffffffffffffffffffffffff".parse().unwrap();
/// // 2^127 - 1 is a Mersenne prime
/// assert!(probably_prime(&p, 32));
/// assert!(!probably_prime(&(&p * &p), 32));
/// ```
pub fn probably_prime(candidate: &Integer, steps: usize) -> bool {
    if candidate.is_negative() || candidate.is_zero() {
        return false;
    }
    let digits = candidate.digits();
    if digits.len() == 1 {
        if digits[0] == 1 {
            return false;
        }
        if digits[0] <= LARGEST_SIEVE_PRIME as BigDigit {
            return primes_sieve().binary_search(&(digits[0] as u32)).is_ok();
        }
    }
    // trial division: a sieve hit means composite unless n is that prime
    for &p in primes_sieve().iter() {
        if mod_small(digits, p) == 0 {
            return digits.len() == 1 && digits[0] == p as BigDigit;
        }
    }

    // n - 1 = 2^r * d with d odd
    let n_minus_one = candidate - 1u32;
    let r = trailing_zero_bits_slice(n_minus_one.digits());
    let barrett = Barrett::new(digits);
    // witnesses a in [2, n - 2]
    let limit = candidate - 3u32;
    let mut rng = rand::rng();

    for _ in 0..steps {
        let a = &rng.gen_integer_below(&limit) + 2u32;
        // x = a^d mod n
        let mut x = barrett.pow(a.digits(), n_minus_one.digits(), r);
        if x == [1] || x == n_minus_one.digits() {
            continue;
        }
        let mut passed = false;
        let mut j = r;
        while j > 1 && x != [1] {
            x = barrett.square_value(&x);
            if x == n_minus_one.digits() {
                passed = true;
                break;
            }
            j -= 1;
        }
        if !passed {
            return false;
        }
    }
    true
}
