//! Schoolbook long division with two-limb quotient estimation.
//!
//! The divisor is normalized by a left shift chosen so its shifted
//! length `t` is even and the top double-limb has its most significant
//! bit set; the numerator is shifted by the same amount, so the quotient
//! is unchanged and only the remainder needs denormalizing. Each main
//! loop step estimates the next two quotient limbs by dividing the top
//! two double-limbs of the running remainder by the divisor's top
//! double-limb, checks the estimate against the top four divisor limbs,
//! applies it with a double-limb multiply-subtract, and corrects once
//! more if the remainder went negative.
//!
//! The workspace is three slabs of `K = num_head + 5` limbs:
//! `[remainder | shifted divisor | correction]`.

use crate::algorithms::add::sub2;
use crate::algorithms::bits::{leading_zero_bits, shl_words_and_bits, shr_bits_in_place};
use crate::algorithms::cmp::{cmp_words_gt, find_head};
use crate::algorithms::mul::{mul_4_by_2, mul_by_doubleword};
use crate::big_digit::{self, BigDigit, DoubleBigDigit, MAX};
use crate::scratch;

/// Slack limbs the division buffers carry beyond the numerator head.
pub(crate) const DIV_SLACK: usize = 5;

/// Quotient and remainder of two normalized magnitudes. Division
/// truncates; both results come back normalized (empty = zero).
///
/// # Panics
///
/// Panics if `d` is zero.
pub fn div_rem(u: &[BigDigit], d: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    assert!(!d.is_empty(), "attempt to divide by zero");
    debug_assert!(u.last() != Some(&0) && d.last() != Some(&0));

    if u.len() < d.len() {
        return (Vec::new(), u.to_vec());
    }

    let k = (u.len() - 1) + DIV_SLACK;
    scratch::with_divmod_buffer(3 * k, |ws| {
        let mut quot = vec![0; k];
        let (quot_head, rem_head) = divmod(u, d, &mut quot, ws, k);
        quot.truncate(quot_head + 1);
        if quot == [0] {
            quot.clear();
        }
        let mut rem = ws[..rem_head + 1].to_vec();
        if rem == [0] {
            rem.clear();
        }
        (quot, rem)
    })
}

/// Two double-limbs divided by one double-limb whose high bit is set.
/// Performs two divisions by the divisor's upper half, each corrected at
/// most twice for overflow.
fn div_two_doublewords_by_one_doubleword(
    ah: DoubleBigDigit,
    al: DoubleBigDigit,
    b: DoubleBigDigit,
    q: &mut [BigDigit; 2],
) {
    let overflow_barrier = DoubleBigDigit::MAX - b;
    let b1 = b >> big_digit::BITS;
    let b0 = b & DoubleBigDigit::from(MAX);

    let mut q_tmp = ah / b1;
    let mut d = q_tmp.wrapping_mul(b0);
    let mut tmp = (al >> big_digit::BITS) | ((ah - q_tmp * b1) << big_digit::BITS);
    if tmp < d {
        let overflow = tmp > overflow_barrier;
        q_tmp -= 1;
        tmp = tmp.wrapping_add(b);
        if !overflow && tmp < d {
            q_tmp -= 1;
            tmp = tmp.wrapping_add(b);
        }
    }
    let r = tmp.wrapping_sub(d);
    q[1] = q_tmp as BigDigit;

    q_tmp = r / b1;
    d = q_tmp.wrapping_mul(b0);
    tmp = (al & DoubleBigDigit::from(MAX)) | ((r - q_tmp * b1) << big_digit::BITS);
    if tmp < d {
        let overflow = tmp > overflow_barrier;
        q_tmp -= 1;
        tmp = tmp.wrapping_add(b);
        if !overflow && tmp < d {
            q_tmp -= 1;
        }
    }
    q[0] = q_tmp as BigDigit;
}

/// Core divider. `num.len() >= den.len()`, `den` non-zero, `quot` a
/// zeroed buffer of `k` limbs, `ws` a zeroed workspace of `3 * k` limbs
/// with `k = num_head + DIV_SLACK`. On return the quotient head is in
/// `quot` and the denormalized remainder sits in `ws[..k]`; both heads
/// are returned.
fn divmod(
    num: &[BigDigit],
    den: &[BigDigit],
    quot: &mut [BigDigit],
    ws: &mut [BigDigit],
    k: usize,
) -> (usize, usize) {
    let num_head = num.len() - 1;
    let den_head = den.len() - 1;

    let (rem, rest) = ws.split_at_mut(k);
    let (sy, corr) = rest.split_at_mut(k);

    // normalize so the shifted divisor length t is even and its top
    // double-limb has the MSB set
    let backshift = if den_head & 1 == 1 {
        leading_zero_bits(den[den_head])
    } else {
        big_digit::BITS + leading_zero_bits(den[den_head])
    };
    let backshift_words = backshift / big_digit::BITS;
    let backshift_bits = backshift - backshift_words * big_digit::BITS;

    let mut n = shl_words_and_bits(num, num_head, backshift_bits, backshift_words, rem) + 1;
    n += n & 1;
    let t = den_head + backshift_words + 1;
    let nn = (n >> 1) - 1;
    let tt = (t >> 1) - 1;
    let offset = n - t;

    shl_words_and_bits(den, den_head, backshift_bits, backshift_words, &mut sy[offset..]);

    let divisor = big_digit::to_double(sy[offset + t - 2], sy[offset + t - 1]);
    let y_checker: [BigDigit; 4] = [
        if t > 2 { sy[offset + t - 4] } else { 0 },
        if t > 2 { sy[offset + t - 3] } else { 0 },
        sy[offset + t - 2],
        sy[offset + t - 1],
    ];

    let mut sy_len = t + offset;
    let mut rem_corr_len = n;
    let mut ys = 0;
    let mut cs = offset;

    // top fix: the shifted divisor may already fit under the top t limbs
    if !cmp_words_gt(sy, rem, n) {
        quot[offset] += 1;
        sub2(rem, &sy[..sy_len]);
    }

    let words_to_clear = rem_corr_len - offset + 2;
    let loop_bound = if tt == 0 { 1 } else { tt };
    let mut i = nn;
    while i > loop_bound {
        let mut q_words: [BigDigit; 2] = [MAX, MAX];
        // estimate the current quotient double-limb; never less than the
        // actual value
        let top = big_digit::to_double(rem[2 * i], rem[2 * i + 1]);
        if top != divisor {
            div_two_doublewords_by_one_doubleword(
                top,
                big_digit::to_double(rem[2 * i - 2], rem[2 * i - 1]),
                divisor,
                &mut q_words,
            );
        }
        // first pass of adjusting the estimate
        let mut checker: [BigDigit; 6] = [0; 6];
        mul_4_by_2(&y_checker, &q_words, &mut checker);
        let comp = cmp_words_gt(&checker, &rem[2 * i - 4..], 6);
        let underflow = q_words[0] < comp as BigDigit;
        q_words[0] = q_words[0].wrapping_sub(comp as BigDigit);
        q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);
        if comp {
            sub2(&mut checker, &y_checker);
        }
        let comp = cmp_words_gt(&checker, &rem[2 * i - 4..], 6);
        let underflow = q_words[0] < comp as BigDigit;
        q_words[0] = q_words[0].wrapping_sub(comp as BigDigit);
        q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);

        sy_len -= 2;
        ys += 2;
        cs -= 2;
        corr[cs..cs + words_to_clear].fill(0);
        mul_by_doubleword(&q_words, &sy[offset..], t, &mut corr[cs..]);

        // second pass: if the subtraction would go negative, give one
        // multiple of the divisor back
        let mut j = 0;
        while j < words_to_clear && rem[rem_corr_len - 1 - j] == corr[rem_corr_len - 1 - j] {
            j += 1;
        }
        if j < words_to_clear && rem[rem_corr_len - 1 - j] < corr[rem_corr_len - 1 - j] {
            let underflow = q_words[0] == 0;
            q_words[0] = q_words[0].wrapping_sub(1);
            q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);
            sub2(corr, &sy[ys..ys + sy_len]);
        }
        // finally, set the quotient limbs
        let pos = 2 * (i - tt - 1);
        quot[pos] = q_words[0];
        if q_words[1] != 0 {
            quot[pos + 1] = q_words[1];
        }
        // and update the remainder
        sub2(rem, &corr[..rem_corr_len]);
        rem_corr_len -= 2;
        i -= 1;
    }
    if i == 1 && tt == 0 {
        // the last step runs without the running index bookkeeping
        let mut q_words: [BigDigit; 2] = [MAX, MAX];
        let top = big_digit::to_double(rem[2], rem[3]);
        if top != divisor {
            div_two_doublewords_by_one_doubleword(
                top,
                big_digit::to_double(rem[0], rem[1]),
                divisor,
                &mut q_words,
            );
        }
        let mut checker: [BigDigit; 6] = [0; 6];
        mul_4_by_2(&y_checker, &q_words, &mut checker);
        let tmp_words: [BigDigit; 6] = [0, 0, rem[0], rem[1], rem[2], rem[3]];
        let comp = cmp_words_gt(&checker, &tmp_words, 6);
        let underflow = q_words[0] < comp as BigDigit;
        q_words[0] = q_words[0].wrapping_sub(comp as BigDigit);
        q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);
        if comp {
            sub2(&mut checker, &y_checker);
        }
        let comp = cmp_words_gt(&checker, &tmp_words, 6);
        let underflow = q_words[0] < comp as BigDigit;
        q_words[0] = q_words[0].wrapping_sub(comp as BigDigit);
        q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);

        sy_len -= 2;
        ys += 2;
        cs -= 2;
        corr[cs..cs + words_to_clear].fill(0);
        mul_by_doubleword(&q_words, &sy[offset..], t, &mut corr[cs..]);

        let mut j = 0;
        while j < words_to_clear && rem[rem_corr_len - 1 - j] == corr[rem_corr_len - 1 - j] {
            j += 1;
        }
        if j < words_to_clear && rem[rem_corr_len - 1 - j] < corr[rem_corr_len - 1 - j] {
            let underflow = q_words[0] == 0;
            q_words[0] = q_words[0].wrapping_sub(1);
            q_words[1] = q_words[1].wrapping_sub(underflow as BigDigit);
            sub2(corr, &sy[ys..ys + sy_len]);
        }
        quot[0] = q_words[0];
        if q_words[1] != 0 {
            quot[1] = q_words[1];
        }
        sub2(rem, &corr[..rem_corr_len]);
    }

    // denormalize the remainder
    let mut rem_head = find_head(rem, k - 1);
    if rem_head + 1 <= backshift_words {
        rem[0] = 0;
        rem_head = 0;
    } else {
        let rem_wc = rem_head + 1 - backshift_words;
        rem.copy_within(backshift_words..backshift_words + rem_wc, 0);
        rem_head = rem_wc - 1;
        if backshift_bits != 0 {
            rem_head = shr_bits_in_place(rem, rem_head, backshift_bits);
        }
    }

    (find_head(quot, offset), rem_head)
}
