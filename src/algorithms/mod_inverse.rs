//! Modular multiplicative inverse via the extended GCD.

use num_traits::One;

use crate::algorithms::gcd::extended_gcd;
use crate::integer::Integer;

/// `g^-1 mod |m|`, or `None` when `gcd(g, m) != 1` (no inverse exists).
///
/// The result is always in `[0, |m|)`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn mod_inverse(g: &Integer, m: &Integer) -> Option<Integer> {
    let (d, s, _) = extended_gcd(g, m);
    if !d.is_one() {
        return None;
    }
    // the Bezout coefficient may be negative or oversized; `%` lands it
    // in [0, |m|)
    Some(&s % m)
}
