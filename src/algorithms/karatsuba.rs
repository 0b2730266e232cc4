//! Karatsuba multiplication and squaring.
//!
//! The product is assembled as `z0 + B^m * z1 + B^2m * z2` with
//! `m = max(lsize, rsize) / 2`:
//!
//! ```text
//! z0 = l_low * r_low
//! z2 = l_high * r_high
//! z1 = (l_low + l_high) * (r_low + r_high) - z0 - z2
//! ```
//!
//! `z0` and `z2` land directly in the output buffer; `z1` and the two
//! operand sums live in a scratch region carved off the front of the
//! scratch slice, so nested calls chain on the same arena. When either
//! operand fits entirely in its low half, `z2` vanishes. Operands of at
//! most [`MUL_TABLE_MAX_LEN`] limbs dispatch to the schoolbook table.

use crate::algorithms::add::{add_full, add2, sub2};
use crate::algorithms::mul::{mul_dispatch, square_dispatch, MUL_TABLE_MAX_LEN};
use crate::big_digit::BigDigit;
use crate::scratch;

/// Worst-case scratch need (in limbs) for multiplying or squaring
/// operands of at most `n` limbs: every level consumes `2 * z1_size`
/// limbs and recurses on operands of at most `n - n/2 + 1` limbs.
pub(crate) fn karatsuba_scratch_len(mut n: usize) -> usize {
    let mut total = 0;
    while n > MUL_TABLE_MAX_LEN {
        let m = n / 2;
        total += 4 * (n - m + 1);
        n = n - m + 1;
    }
    total
}

/// `out[..l.len() + r.len()] = l * r`; `out` must come in zeroed.
pub fn mul_into(l: &[BigDigit], r: &[BigDigit], out: &mut [BigDigit]) {
    debug_assert!(!l.is_empty() && !r.is_empty());
    debug_assert_eq!(out.len(), l.len() + r.len());

    if l.len() <= MUL_TABLE_MAX_LEN && r.len() <= MUL_TABLE_MAX_LEN {
        mul_dispatch(l, r, out);
    } else {
        let needed = karatsuba_scratch_len(l.len().max(r.len()));
        scratch::with_karatsuba_buffer(needed, |s| multiply_karatsuba(l, r, out, s));
    }
}

/// `out[..2 * l.len()] = l * l`; `out` must come in zeroed.
pub fn sqr_into(l: &[BigDigit], out: &mut [BigDigit]) {
    debug_assert!(!l.is_empty());
    debug_assert_eq!(out.len(), 2 * l.len());

    if l.len() <= MUL_TABLE_MAX_LEN {
        square_dispatch(l, out);
    } else {
        let needed = karatsuba_scratch_len(l.len());
        scratch::with_karatsuba_buffer(needed, |s| square_karatsuba(l, out, s));
    }
}

fn multiply_karatsuba(l: &[BigDigit], r: &[BigDigit], out: &mut [BigDigit], scratch: &mut [BigDigit]) {
    let (lsize, rsize) = (l.len(), r.len());
    if lsize <= MUL_TABLE_MAX_LEN && rsize <= MUL_TABLE_MAX_LEN {
        return mul_dispatch(l, r, out);
    }

    let m = lsize.max(rsize) / 2;
    let (l_low, l_high) = l.split_at(m.min(lsize));
    let (r_low, r_high) = r.split_at(m.min(rsize));

    let sum_l_size = l_low.len().max(l_high.len()) + 1;
    let sum_r_size = r_low.len().max(r_high.len()) + 1;
    let z1_size = sum_l_size + sum_r_size;

    let (z1_area, rest) = scratch.split_at_mut(2 * z1_size);
    z1_area.fill(0);
    let (z1, sums) = z1_area.split_at_mut(z1_size);
    let (sum_l, sum_r) = sums.split_at_mut(sum_l_size);

    // z0 straight into the low limbs of the output
    multiply_karatsuba(l_low, r_low, &mut out[..l_low.len() + r_low.len()], rest);

    let carry_l = if l_low.len() >= l_high.len() {
        add_full(l_low, l_high, sum_l)
    } else {
        add_full(l_high, l_low, sum_l)
    };
    let carry_r = if r_low.len() >= r_high.len() {
        add_full(r_low, r_high, sum_r)
    } else {
        add_full(r_high, r_low, sum_r)
    };
    // drop the carry limb of each sum that stayed clear
    let sum_l_len = sum_l_size - !carry_l as usize;
    let sum_r_len = sum_r_size - !carry_r as usize;
    let z1_len = sum_l_len + sum_r_len;

    multiply_karatsuba(&sum_l[..sum_l_len], &sum_r[..sum_r_len], &mut z1[..z1_len], rest);
    sub2(z1, &out[..l_low.len() + r_low.len()]);

    if !l_high.is_empty() && !r_high.is_empty() {
        let z2_len = l_high.len() + r_high.len();
        multiply_karatsuba(l_high, r_high, &mut out[2 * m..2 * m + z2_len], rest);
        sub2(z1, &out[2 * m..2 * m + z2_len]);
    }

    let count = (lsize + rsize - m).min(z1_len);
    add2(&mut out[m..], &z1[..count]);
}

fn square_karatsuba(l: &[BigDigit], out: &mut [BigDigit], scratch: &mut [BigDigit]) {
    let lsize = l.len();
    if lsize <= MUL_TABLE_MAX_LEN {
        return square_dispatch(l, out);
    }

    let m = lsize / 2;
    let (l_low, l_high) = l.split_at(m);

    let sum_l_size = l_high.len() + 1;
    let z1_size = 2 * sum_l_size;

    let (z1_area, rest) = scratch.split_at_mut(2 * z1_size);
    z1_area.fill(0);
    let (z1, sum_l) = z1_area.split_at_mut(z1_size);

    square_karatsuba(l_low, &mut out[..2 * m], rest);

    let carry_l = add_full(l_high, l_low, sum_l);
    let sum_l_len = sum_l_size - !carry_l as usize;
    let z1_len = 2 * sum_l_len;

    square_karatsuba(&sum_l[..sum_l_len], &mut z1[..z1_len], rest);
    sub2(z1, &out[..2 * m]);

    let z2_len = 2 * l_high.len();
    square_karatsuba(l_high, &mut out[2 * m..2 * m + z2_len], rest);
    sub2(z1, &out[2 * m..2 * m + z2_len]);

    let count = (2 * lsize - m).min(z1_len);
    add2(&mut out[m..], &z1[..count]);
}
