//! Extended Euclidean GCD, GCD and LCM.
//!
//! The classical iterative algorithm: keep the triples
//! `(r, s, t)` with `r = s*x + t*y` invariant while applying the
//! Euclidean step `(v0, v1) <- (v1, v0 - q*v1)` to each pair.
//!
//! Inputs may be zero or negative; the returned gcd is always
//! non-negative and the Bezout identity `g = s*x + t*y` holds for the
//! original signed inputs.

use core::mem;

use num_traits::{One, Zero};

use crate::integer::Integer;

/// One Euclidean update: `(x0, x1) <- (x1, x0 - q*x1)`.
#[inline]
fn euclid_step(x0: &mut Integer, x1: &mut Integer, q: &Integer) {
    let next = &*x0 - &(q * &*x1);
    mem::swap(x0, x1);
    *x1 = next;
}

/// Extended GCD: returns `(g, s, t)` with `g = s*x + t*y` and `g >= 0`.
///
/// `extended_gcd(0, 0)` is `(0, 1, 0)`.
///
/// # Example
///
/// ```
/// use mpa::algorithms::extended_gcd;
/// use mpa::Integer;
///
/// let (g, s, t) = extended_gcd(&Integer::from(240u32), &Integer::from(46u32));
/// assert_eq!(g, Integer::from(2u32));
/// assert_eq!(&(&s * &Integer::from(240u32)) + &(&t * &Integer::from(46u32)), g);
/// ```
pub fn extended_gcd(x: &Integer, y: &Integer) -> (Integer, Integer, Integer) {
    let mut r0 = x.clone();
    let mut r1 = y.clone();
    let mut s0 = Integer::one();
    let mut s1 = Integer::zero();
    let mut t0 = Integer::zero();
    let mut t1 = Integer::one();

    // avoid a pointless first division
    if r1 > r0 {
        mem::swap(&mut r0, &mut r1);
        mem::swap(&mut s0, &mut s1);
        mem::swap(&mut t0, &mut t1);
    }

    while !r1.is_zero() {
        let q = &r0 / &r1;
        euclid_step(&mut r0, &mut r1, &q);
        euclid_step(&mut s0, &mut s1, &q);
        euclid_step(&mut t0, &mut t1, &q);
    }

    // canonicalize a non-negative gcd
    if r0.is_negative() {
        r0 = -r0;
        s0 = -s0;
        t0 = -t0;
    }
    (r0, s0, t0)
}

/// Greatest common divisor, non-negative.
pub fn gcd(x: &Integer, y: &Integer) -> Integer {
    extended_gcd(x, y).0
}

/// Least common multiple `|x*y| / gcd(x, y)`, non-negative; zero when
/// either input is zero.
pub fn lcm(x: &Integer, y: &Integer) -> Integer {
    if x.is_zero() || y.is_zero() {
        return Integer::zero();
    }
    let g = gcd(x, y);
    (&(x * y) / &g).abs()
}
