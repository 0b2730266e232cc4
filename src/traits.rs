use crate::algorithms::gcd::extended_gcd;
use crate::algorithms::mod_inverse::mod_inverse;
use crate::integer::Integer;

/// Generic trait for the modular multiplicative inverse.
///
/// Computes the [modular multiplicative inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse)
/// of an integer *a* modulo *m*.
///
/// Returns `None` if the inverse does not exist (i.e., `gcd(a, m) != 1`).
pub trait ModInverse<R: Sized>: Sized {
    /// The output type of the modular inverse.
    type Output: Sized;

    /// Returns the modular inverse of `self` modulo `m`, or `None` if it
    /// does not exist.
    fn mod_inverse(self, m: R) -> Option<Self::Output>;
}

/// Generic trait for the extended Euclidean algorithm.
///
/// Computes the [extended GCD](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm),
/// returning `(gcd, x, y)` such that `self * x + other * y = gcd`.
pub trait ExtendedGcd<R: Sized>: Sized {
    /// Returns `(gcd, x, y)` such that `self * x + other * y = gcd`.
    fn extended_gcd(self, other: R) -> (Integer, Integer, Integer);
}

// --- ModInverse impls ---

impl ModInverse<&Integer> for &Integer {
    type Output = Integer;

    fn mod_inverse(self, m: &Integer) -> Option<Integer> {
        mod_inverse(self, m)
    }
}

impl ModInverse<Integer> for &Integer {
    type Output = Integer;

    fn mod_inverse(self, m: Integer) -> Option<Integer> {
        mod_inverse(self, &m)
    }
}

impl ModInverse<&Integer> for Integer {
    type Output = Integer;

    fn mod_inverse(self, m: &Integer) -> Option<Integer> {
        mod_inverse(&self, m)
    }
}

impl ModInverse<Integer> for Integer {
    type Output = Integer;

    fn mod_inverse(self, m: Integer) -> Option<Integer> {
        mod_inverse(&self, &m)
    }
}

// --- ExtendedGcd impls ---

impl ExtendedGcd<&Integer> for &Integer {
    fn extended_gcd(self, other: &Integer) -> (Integer, Integer, Integer) {
        extended_gcd(self, other)
    }
}

impl ExtendedGcd<Integer> for &Integer {
    fn extended_gcd(self, other: Integer) -> (Integer, Integer, Integer) {
        extended_gcd(self, &other)
    }
}

impl ExtendedGcd<&Integer> for Integer {
    fn extended_gcd(self, other: &Integer) -> (Integer, Integer, Integer) {
        extended_gcd(&self, other)
    }
}

impl ExtendedGcd<Integer> for Integer {
    fn extended_gcd(self, other: Integer) -> (Integer, Integer, Integer) {
        extended_gcd(&self, &other)
    }
}
