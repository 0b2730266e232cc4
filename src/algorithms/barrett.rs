//! Barrett reduction and sliding-window modular exponentiation.
//!
//! A [`Barrett`] context precomputes `mu = floor(B^2k / m)` for a
//! `k`-limb modulus; each reduction then replaces a division by two
//! multiplications:
//!
//! ```text
//! q = floor(floor(x / B^(k-1)) * mu / B^(k+1))
//! r = x - q * m, then subtract m at most twice
//! ```
//!
//! Exponentiation scans the exponent bits from the top with window
//! size 6: runs of bits ending in a 1 index a precomputed table of the
//! 32 odd powers `base^1, base^3, ..., base^63`. The table lives in the
//! thread-local power arena with a fixed per-entry stride; entry
//! lengths sit in a parallel array.

use core::mem;

use num_traits::{One, Zero};

use crate::algorithms::add::sub2;
use crate::algorithms::cmp::{cmp_slice, used_len};
use crate::algorithms::div::div_rem;
use crate::algorithms::karatsuba::{mul_into, sqr_into};
use crate::algorithms::mod_inverse::mod_inverse;
use crate::big_digit::{self, BigDigit};
use crate::integer::{Integer, Sign};
use crate::scratch;

const WINDOW_SIZE: usize = 6;
const TABLE_ENTRIES: usize = 1 << (WINDOW_SIZE - 1);

/// A magnitude in the low `len` limbs of a fixed-capacity buffer.
/// Limbs at `len..` are kept zero so the buffer can serve as a
/// multiplication target without re-clearing.
struct Reg {
    buf: Vec<BigDigit>,
    len: usize,
}

impl Reg {
    fn new(cap: usize) -> Reg {
        Reg {
            buf: vec![0; cap],
            len: 0,
        }
    }

    fn digits(&self) -> &[BigDigit] {
        &self.buf[..self.len]
    }

    fn set(&mut self, src: &[BigDigit]) {
        self.buf[..self.len].fill(0);
        self.buf[..src.len()].copy_from_slice(src);
        self.len = used_len(src);
    }

    fn reset(&mut self) {
        self.buf[..self.len].fill(0);
        self.len = 0;
    }
}

/// Barrett context for a fixed modulus.
pub(crate) struct Barrett {
    modulus: Vec<BigDigit>,
    mu: Vec<BigDigit>,
    k: usize,
}

impl Barrett {
    /// Precomputes `mu = floor(B^2k / m)`. `m` is a normalized
    /// magnitude with `m > 1`.
    pub(crate) fn new(modulus: &[BigDigit]) -> Barrett {
        debug_assert!(modulus.len() > 1 || modulus[0] > 1);
        let k = modulus.len();
        let mut power = vec![0; 2 * k + 1];
        power[2 * k] = 1;
        let (mu, _) = div_rem(&power, modulus);
        Barrett {
            modulus: modulus.to_vec(),
            mu,
            k,
        }
    }

    /// Register capacity sufficient for any intermediate value.
    fn cap(&self) -> usize {
        2 * self.k + 4
    }

    /// `x mod m` for `x < m^2`.
    fn reduce(&self, x: &mut Reg, q_reg: &mut Reg, t_reg: &mut Reg) {
        let k = self.k;
        if x.len >= k {
            q_reg.reset();
            let q1 = &x.buf[k - 1..x.len];
            let prod_len = q1.len() + self.mu.len();
            mul_into(q1, &self.mu, &mut q_reg.buf[..prod_len]);
            q_reg.len = used_len(&q_reg.buf[..prod_len]);
            if q_reg.len >= k + 2 {
                t_reg.reset();
                let q3 = &q_reg.buf[k + 1..q_reg.len];
                let t_len = q3.len() + k;
                mul_into(q3, &self.modulus, &mut t_reg.buf[..t_len]);
                t_reg.len = used_len(&t_reg.buf[..t_len]);
                sub2(&mut x.buf, t_reg.digits());
                x.len = used_len(&x.buf[..x.len]);
            }
        }
        for _ in 0..2 {
            if cmp_slice(x.digits(), &self.modulus).is_ge() {
                sub2(&mut x.buf, &self.modulus);
                x.len = used_len(&x.buf[..x.len]);
            }
        }
    }

    /// `x = x * y mod m`.
    fn mul(&self, x: &mut Reg, y: &[BigDigit], tmp: &mut Reg, q_reg: &mut Reg, t_reg: &mut Reg) {
        tmp.reset();
        if x.len != 0 && !y.is_empty() {
            let prod_len = x.len + y.len();
            mul_into(x.digits(), y, &mut tmp.buf[..prod_len]);
            tmp.len = used_len(&tmp.buf[..prod_len]);
        }
        mem::swap(x, tmp);
        self.reduce(x, q_reg, t_reg);
    }

    /// `x = x^2 mod m`.
    fn square(&self, x: &mut Reg, tmp: &mut Reg, q_reg: &mut Reg, t_reg: &mut Reg) {
        tmp.reset();
        if x.len != 0 {
            sqr_into(x.digits(), &mut tmp.buf[..2 * x.len]);
            tmp.len = used_len(&tmp.buf[..2 * x.len]);
        }
        mem::swap(x, tmp);
        self.reduce(x, q_reg, t_reg);
    }

    /// `x^2 mod m` for a normalized magnitude `x < m`.
    pub(crate) fn square_value(&self, x: &[BigDigit]) -> Vec<BigDigit> {
        let cap = self.cap();
        let mut reg = Reg::new(cap);
        reg.set(x);
        let mut tmp = Reg::new(cap);
        let mut q_reg = Reg::new(cap);
        let mut t_reg = Reg::new(cap);
        self.square(&mut reg, &mut tmp, &mut q_reg, &mut t_reg);
        reg.digits().to_vec()
    }

    /// `base^(exp >> low_bit) mod m` by sliding-window exponentiation.
    ///
    /// `base` is a normalized magnitude already reduced modulo `m`;
    /// `exp` is a normalized non-zero magnitude whose bits above
    /// `low_bit` are the effective exponent (the bits below must be
    /// zero, as they are for the odd part of `n - 1` in Miller-Rabin).
    pub(crate) fn pow(&self, base: &[BigDigit], exp: &[BigDigit], low_bit: usize) -> Vec<BigDigit> {
        debug_assert!(cmp_slice(base, &self.modulus).is_lt());

        let cap = self.cap();
        let mut p = Reg::new(cap);
        p.buf[0] = 1;
        p.len = 1;
        let mut tmp = Reg::new(cap);
        let mut q_reg = Reg::new(cap);
        let mut t_reg = Reg::new(cap);

        let bit_count = exp.len() * big_digit::BITS - exp.last().unwrap().leading_zeros() as usize;
        let get_bit =
            |idx: usize| (exp[idx / big_digit::BITS] >> (idx % big_digit::BITS)) & 1 == 1;

        scratch::with_power_buffer(TABLE_ENTRIES * cap, |table| {
            // precompute the odd powers base^(2j+1) mod m
            let mut lens = [0usize; TABLE_ENTRIES];
            table[..base.len()].copy_from_slice(base);
            lens[0] = base.len();
            let mut w = Reg::new(cap);
            w.set(base);
            let mut sq = Reg::new(cap);
            sq.set(base);
            self.square(&mut sq, &mut tmp, &mut q_reg, &mut t_reg);
            for j in 1..TABLE_ENTRIES {
                self.mul(&mut w, sq.digits(), &mut tmp, &mut q_reg, &mut t_reg);
                table[j * cap..j * cap + w.len].copy_from_slice(w.digits());
                lens[j] = w.len;
            }

            let low = low_bit as i64;
            let mut i = bit_count as i64 - 1;
            while i >= low {
                if !get_bit(i as usize) {
                    self.square(&mut p, &mut tmp, &mut q_reg, &mut t_reg);
                    i -= 1;
                } else {
                    // widest window of bits [l..=i] starting and ending in a 1
                    let mut window = 0usize;
                    let mut width = 0usize;
                    let right_most_possible = if (WINDOW_SIZE as i64) < i + 1 {
                        0
                    } else {
                        WINDOW_SIZE as i64 - i - 1
                    };
                    let mut l = 0i64;
                    let mut found_l = false;
                    for j in right_most_possible..WINDOW_SIZE as i64 {
                        let index = (i - WINDOW_SIZE as i64 + 1 + j) as usize;
                        let component = get_bit(index) as usize;
                        if !found_l && component == 1 {
                            l = index as i64;
                            found_l = true;
                        }
                        window |= component << width;
                        width += (window > 0) as usize;
                    }
                    for _ in 0..i - l + 1 {
                        self.square(&mut p, &mut tmp, &mut q_reg, &mut t_reg);
                    }
                    let entry = window >> 1;
                    let looked_up = &table[entry * cap..entry * cap + lens[entry]];
                    self.mul(&mut p, looked_up, &mut tmp, &mut q_reg, &mut t_reg);
                    i = l - 1;
                }
            }
            p.digits().to_vec()
        })
    }
}

/// `base^exponent mod modulus`; see [`Integer::modpow`] for the
/// conventions.
pub(crate) fn modpow(base: &Integer, exponent: &Integer, modulus: &Integer) -> Integer {
    let m = modulus.digits();
    assert!(
        m.len() > 1 || (m.len() == 1 && m[0] > 1),
        "modpow requires |modulus| > 1"
    );
    if exponent.is_zero() {
        return Integer::one();
    }
    if base.is_zero() {
        return Integer::zero();
    }

    let base_reduced = if exponent.is_negative() {
        match mod_inverse(base, modulus) {
            Some(inverse) => inverse,
            None => return Integer::zero(),
        }
    } else {
        base % modulus
    };
    if base_reduced.is_zero() {
        return Integer::zero();
    }

    let barrett = Barrett::new(m);
    let out = barrett.pow(base_reduced.digits(), exponent.digits(), 0);
    Integer::from_digits(Sign::Plus, out)
}
