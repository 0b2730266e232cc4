//! Randomization of big integers.
//!
//! Both traits are implemented for every [`rand::Rng`]; the
//! convenience constructors on [`Integer`] use the thread-local
//! [`rand::rng()`], which is seeded from operating-system entropy and
//! suitable for key material.

#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use num_integer::Integer as _;
use num_traits::Zero;
use rand::prelude::*;

use crate::algorithms::cmp::cmp_slice;
use crate::big_digit::{self, BigDigit};
use crate::integer::{Integer, Sign};

#[cfg(feature = "prime")]
use crate::prime;

/// A trait for sampling random [`Integer`]s.
pub trait RandInteger {
    /// A random `Integer` of exactly `word_count` limbs; the top limb is
    /// forced non-zero so the announced width is real.
    fn gen_integer(&mut self, word_count: usize, negative: bool) -> Integer;

    /// A uniform `Integer` in `[0, |limit|)` by rejection sampling.
    /// Fails when `limit` is zero.
    fn gen_integer_below(&mut self, limit: &Integer) -> Integer;
}

fn gen_bits<R: Rng + ?Sized>(rng: &mut R, bit_size: usize) -> Integer {
    let (limbs, rem) = bit_size.div_rem(&big_digit::BITS);
    let len = limbs + (rem > 0) as usize;
    let mut data = vec![0 as BigDigit; len];
    // `fill` is faster than one `random` call per limb
    rng.fill(&mut data[..]);
    if rem > 0 {
        data[len - 1] >>= big_digit::BITS - rem;
    }
    Integer::from_digits(Sign::Plus, data)
}

impl<R: Rng + ?Sized> RandInteger for R {
    fn gen_integer(&mut self, word_count: usize, negative: bool) -> Integer {
        assert!(word_count > 0, "cannot generate a zero-width integer");
        let mut data = vec![0 as BigDigit; word_count];
        self.fill(&mut data[..]);
        // a zero top limb would shrink the width; substitute all ones
        if data[word_count - 1] == 0 {
            data[word_count - 1] = big_digit::MAX;
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Integer::from_digits(sign, data)
    }

    fn gen_integer_below(&mut self, limit: &Integer) -> Integer {
        assert!(!limit.is_zero(), "cannot sample below zero");
        let bits = limit.get_bit_count();
        loop {
            let n = gen_bits(self, bits);
            if cmp_slice(n.digits(), limit.digits()).is_lt() {
                return n;
            }
        }
    }
}

/// A trait for generating random primes.
///
/// *Warning*: the quality of the primes is entirely dependent on the
/// provided random number generator.
///
/// # Example
///
/// ```
/// use mpa::{big_digit, RandPrime};
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(128 / big_digit::BITS);
/// assert_eq!(p.get_bit_count(), 128);
/// ```
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub trait RandPrime {
    /// A random probable prime of exactly `word_count` limbs, with the
    /// top bit set.
    fn gen_prime(&mut self, word_count: usize) -> Integer;
}

/// Force the candidate odd with its top bit set, then step it to
/// `1 (mod 6)` so the +4/+2 wheel only visits `6k +/- 1` residues. The
/// mod-3 value comes from folding the limbs, since `2^BITS = 1 (mod 3)`.
#[cfg(feature = "prime")]
fn prepare_candidate(p: &mut Integer) {
    {
        let data = p.data_mut();
        data[0] |= 1;
        let top = data.len() - 1;
        data[top] |= big_digit::MSB;
    }
    let mut p_mod_3 = 0u64;
    for &w in p.digits() {
        p_mod_3 = (p_mod_3 + u64::from(w) % 3) % 3;
    }
    match p_mod_3 {
        // p = 3 mod 6
        0 => *p = &*p + 4u32,
        // p = 5 mod 6
        2 => *p = &*p + 2u32,
        _ => {}
    }
}

/// Residues of the candidate against every sieve prime.
#[cfg(feature = "prime")]
fn seed_residues(p: &Integer) -> Vec<u32> {
    prime::primes_sieve()
        .iter()
        .map(|&q| prime::mod_small(p.digits(), q))
        .collect()
}

#[cfg(feature = "prime")]
impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, word_count: usize) -> Integer {
        assert!(word_count > 0, "cannot generate a zero-width prime");
        let sieve = prime::primes_sieve();

        let mut p = self.gen_integer(word_count, false);
        prepare_candidate(&mut p);
        let mut residues = seed_residues(&p);
        // `step` is the uncommitted offset from p, `memory_step` the
        // total offset since the residues were seeded
        let mut step: u64 = 0;
        let mut memory_step: u32 = 0;
        let mut j: u64 = 0;
        loop {
            let composite = residues
                .iter()
                .zip(sieve.iter())
                .any(|(&r, &q)| (r + memory_step) % q == 0);
            if !composite {
                if step != 0 {
                    p = &p + step;
                    step = 0;
                }
                if prime::probably_prime(&p, 64) {
                    return p;
                }
            }
            let increment = if j & 1 == 0 { 4 } else { 2 };
            step += increment;
            memory_step += increment as u32;
            j += 1;
            // the candidate drifted too far for the cached residues:
            // reseed from a fresh random value and restart the wheel
            if memory_step >= i16::MAX as u32 {
                p = self.gen_integer(word_count, false);
                prepare_candidate(&mut p);
                residues = seed_residues(&p);
                step = 0;
                memory_step = 0;
                j = 0;
            }
        }
    }
}

impl Integer {
    /// A random `Integer` of `word_count` limbs from the thread-local
    /// CSPRNG; see [`RandInteger::gen_integer`].
    pub fn random(word_count: usize, negative: bool) -> Integer {
        rand::rng().gen_integer(word_count, negative)
    }

    /// A uniform `Integer` in `[0, |limit|)` from the thread-local
    /// CSPRNG.
    pub fn random_below(limit: &Integer) -> Integer {
        rand::rng().gen_integer_below(limit)
    }

    /// A random probable prime of `word_count` limbs from the
    /// thread-local CSPRNG.
    #[cfg(feature = "prime")]
    #[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
    pub fn random_prime(word_count: usize) -> Integer {
        rand::rng().gen_prime(word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn gen_integer_has_the_requested_width() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for words in [1usize, 2, 7, 32] {
            let x = rng.gen_integer(words, false);
            assert_eq!(x.digits().len(), words);
            assert!(x.digits()[words - 1] != 0);
            assert!(!x.is_negative());
        }
        let neg = rng.gen_integer(3, true);
        assert!(neg.is_negative());
    }

    #[test]
    fn gen_below_stays_in_range() {
        let mut rng = XorShiftRng::from_seed([2u8; 16]);
        let limit: Integer = "0x1234aeefdbba123231221".parse().unwrap();
        for _ in 0..50 {
            let x = rng.gen_integer_below(&limit);
            assert!(!x.is_negative());
            assert!(x < limit);
        }
        // a negative limit bounds by magnitude
        let neg = -limit.clone();
        let x = rng.gen_integer_below(&neg);
        assert!(!x.is_negative());
        assert!(x < limit);
    }

    #[test]
    fn gen_below_tiny_limit() {
        let mut rng = XorShiftRng::from_seed([3u8; 16]);
        let one = Integer::from(1u32);
        for _ in 0..10 {
            assert!(rng.gen_integer_below(&one).is_zero());
        }
    }

    #[test]
    #[cfg(feature = "prime")]
    fn candidate_preparation() {
        let mut rng = XorShiftRng::from_seed([4u8; 16]);
        for _ in 0..20 {
            let mut p = rng.gen_integer(4, false);
            prepare_candidate(&mut p);
            assert!(p.is_odd());
            assert!(p.get_bit(4 * crate::big_digit::BITS - 1));
            // p = 1 (mod 6)
            let six = Integer::from(6u32);
            assert_eq!(&p % &six, Integer::from(1u32));
        }
    }

    #[test]
    #[cfg(feature = "prime")]
    fn generated_primes_verify() {
        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        let p = rng.gen_prime(2);
        assert_eq!(p.digits().len(), 2);
        assert!(p.get_bit(2 * crate::big_digit::BITS - 1));
        assert!(prime::probably_prime(&p, 32));
        let q = rng.gen_prime(2);
        if p != q {
            assert!(!prime::probably_prime(&(&p * &q), 32));
        }
    }
}
