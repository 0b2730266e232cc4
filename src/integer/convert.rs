//! String and byte conversions.
//!
//! Parsing accepts bases 2, 10 and 16; [`FromStr`] auto-detects the
//! `0b`/`0x` prefixes (decimal otherwise) with an optional leading `-`.
//! Rendering mirrors that: [`Integer::to_binary`] and
//! [`Integer::to_hex`] carry the prefix, [`Integer::to_decimal`] does
//! not, and zero renders as `"0b0"` / `"0x0"` / `"0"`.

use core::fmt;
use core::str::FromStr;

use num_traits::Zero;

use crate::algorithms::cmp::find_head;
use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::integer::{Integer, Sign};

/// An error which can be returned when parsing an [`Integer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegerError {
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorKind {
    Empty,
    InvalidDigit,
    UnsupportedRadix(u32),
}

impl ParseIntegerError {
    fn empty() -> Self {
        ParseIntegerError {
            kind: ErrorKind::Empty,
        }
    }

    fn invalid() -> Self {
        ParseIntegerError {
            kind: ErrorKind::InvalidDigit,
        }
    }

    fn radix(radix: u32) -> Self {
        ParseIntegerError {
            kind: ErrorKind::UnsupportedRadix(radix),
        }
    }
}

impl fmt::Display for ParseIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Empty => f.write_str("cannot parse integer from empty string"),
            ErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
            ErrorKind::UnsupportedRadix(r) => write!(f, "radix {r} is not supported"),
        }
    }
}

impl std::error::Error for ParseIntegerError {}

impl Integer {
    /// Parses `digits` (no prefix, optional leading `-`) in the given
    /// radix. Only radices 2, 10 and 16 are supported.
    pub fn from_str_radix(digits: &str, radix: u32) -> Result<Integer, ParseIntegerError> {
        if !matches!(radix, 2 | 10 | 16) {
            return Err(ParseIntegerError::radix(radix));
        }
        let (sign, body) = match digits.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, digits),
        };
        if body.is_empty() {
            return Err(ParseIntegerError::empty());
        }
        let valid = match radix {
            2 => body.bytes().all(|b| b == b'0' || b == b'1'),
            10 => body.bytes().all(|b| b.is_ascii_digit()),
            _ => body.bytes().all(|b| b.is_ascii_hexdigit()),
        };
        if !valid {
            return Err(ParseIntegerError::invalid());
        }
        let data = match radix {
            10 => parse_decimal(body),
            _ => parse_power_of_two(body, radix),
        };
        Ok(Integer::from_digits(sign, data))
    }

    /// Magnitude as big-endian bytes along with the sign. Zero yields a
    /// single `0` byte.
    pub fn to_bytes_be(&self) -> (Sign, Vec<u8>) {
        if self.is_zero() {
            return (Sign::NoSign, vec![0]);
        }
        const LIMB_BYTES: usize = big_digit::BITS / 8;
        let head = self.data.len() - 1;
        let top = self.data[head];
        let top_bytes = (big_digit::BITS - top.leading_zeros() as usize).div_ceil(8);
        let mut out = Vec::with_capacity(top_bytes + head * LIMB_BYTES);
        for j in (0..top_bytes).rev() {
            out.push((top >> (8 * j)) as u8);
        }
        for &w in self.data[..head].iter().rev() {
            for j in (0..LIMB_BYTES).rev() {
                out.push((w >> (8 * j)) as u8);
            }
        }
        (self.sign, out)
    }

    /// Builds an `Integer` from big-endian magnitude bytes and a sign.
    pub fn from_bytes_be(sign: Sign, bytes: &[u8]) -> Integer {
        const LIMB_BYTES: usize = big_digit::BITS / 8;
        let mut data = Vec::with_capacity(bytes.len().div_ceil(LIMB_BYTES));
        for chunk in bytes.rchunks(LIMB_BYTES) {
            let mut w: BigDigit = 0;
            for &b in chunk {
                w = (w << 8) | BigDigit::from(b);
            }
            data.push(w);
        }
        Integer::from_digits(sign, data)
    }

    /// Canonical decimal rendering; a leading `-` for negatives, `"0"`
    /// for zero.
    ///
    /// Each pass over the limbs divides the magnitude by 10 in place and
    /// produces one decimal digit: since 5 is odd,
    /// `v / 10 == ((v - v mod 10) / 2) * inv5 mod 2^BITS`, so the limb
    /// walk needs no division, only the precomputed inverse of 5 and a
    /// half-limb fixup when the incoming remainder is odd.
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let mut tmp = self.data.clone();
        let mut head = tmp.len() - 1;
        let mut digits: Vec<u8> = Vec::new();
        loop {
            let mut rem: BigDigit = 0;
            for i in (0..=head).rev() {
                let hi = rem;
                let lo = tmp[i];
                rem = ((lo % 10) + 6 * (hi % 10)) % 10;
                let adjust = BigDigit::from(lo < rem && hi & 1 == 0)
                    + BigDigit::from(lo >= rem && hi & 1 == 1);
                let rhs = (lo.wrapping_sub(rem) >> 1)
                    + BigDigit::from(hi != 0) * adjust * big_digit::MSB;
                tmp[i] = big_digit::INV5.wrapping_mul(rhs);
            }
            digits.push(rem as u8);
            head = find_head(&tmp, head);
            if head == 0 && tmp[0] == 0 {
                break;
            }
        }
        let mut out = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            out.push('-');
        }
        for &d in digits.iter().rev() {
            out.push((b'0' + d) as char);
        }
        out
    }

    /// Hexadecimal rendering with a `0x` prefix (after the sign); zero
    /// is `"0x0"`.
    pub fn to_hex(&self) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str("0x");
        match self.data.split_last() {
            Some((&top, rest)) => {
                out.push_str(&format!("{top:x}"));
                for &w in rest.iter().rev() {
                    out.push_str(&format!("{w:0width$x}", width = big_digit::BITS / 4));
                }
            }
            None => out.push('0'),
        }
        out
    }

    /// Binary rendering with a `0b` prefix (after the sign); zero is
    /// `"0b0"`.
    pub fn to_binary(&self) -> String {
        if self.is_zero() {
            return "0b0".to_owned();
        }
        let bits = self.get_bit_count();
        let mut out = String::with_capacity(bits + 3);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str("0b");
        for i in (0..bits).rev() {
            out.push(if self.get_bit(i) { '1' } else { '0' });
        }
        out
    }
}

/// Radix 2 or 16: pack whole limbs from the tail of the digit string.
fn parse_power_of_two(body: &str, radix: u32) -> Vec<BigDigit> {
    let chars_per_limb = if radix == 16 {
        big_digit::BITS / 4
    } else {
        big_digit::BITS
    };
    let bytes = body.as_bytes();
    let mut data = Vec::with_capacity(bytes.len().div_ceil(chars_per_limb));
    for chunk in bytes.rchunks(chars_per_limb) {
        let chunk = core::str::from_utf8(chunk).unwrap();
        // digits were validated by the caller
        data.push(BigDigit::from_str_radix(chunk, radix).unwrap());
    }
    data
}

/// Radix 10: fold front-to-back in chunks that fit one limb,
/// `acc = acc * 10^chunk_len + chunk`.
fn parse_decimal(body: &str) -> Vec<BigDigit> {
    let bytes = body.as_bytes();
    let mut data: Vec<BigDigit> = Vec::with_capacity(
        bytes.len() / big_digit::DECIMAL_DIGITS_PER_LIMB + 1,
    );
    let first = bytes.len() % big_digit::DECIMAL_DIGITS_PER_LIMB;
    let mut chunks = Vec::new();
    if first != 0 {
        chunks.push(&bytes[..first]);
    }
    chunks.extend(bytes[first..].chunks(big_digit::DECIMAL_DIGITS_PER_LIMB));
    for chunk in chunks {
        let chunk_str = core::str::from_utf8(chunk).unwrap();
        let val: BigDigit = chunk_str.parse().unwrap();
        let scale = if chunk.len() == big_digit::DECIMAL_DIGITS_PER_LIMB {
            big_digit::DECIMAL_LIMB_BASE
        } else {
            (10 as BigDigit).pow(chunk.len() as u32)
        };
        // data = data * scale + val
        let mut carry = DoubleBigDigit::from(val);
        for w in data.iter_mut() {
            let x = DoubleBigDigit::from(*w) * DoubleBigDigit::from(scale) + carry;
            *w = big_digit::lo(x);
            carry = DoubleBigDigit::from(big_digit::hi(x));
        }
        if carry != 0 {
            data.push(big_digit::lo(carry));
        }
    }
    data
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Integer, ParseIntegerError> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (radix, digits) = if let Some(hex) = body.strip_prefix("0x") {
            (16, hex)
        } else if let Some(bin) = body.strip_prefix("0b") {
            (2, bin)
        } else {
            (10, body)
        };
        if digits.starts_with('-') {
            return Err(ParseIntegerError::invalid());
        }
        let parsed = Integer::from_str_radix(digits, radix)?;
        Ok(if negative { -parsed } else { parsed })
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.abs().to_decimal();
        f.pad_integral(!self.is_negative(), "", &s)
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.to_hex();
        let digits = full.trim_start_matches('-').trim_start_matches("0x");
        f.pad_integral(!self.is_negative(), "0x", digits)
    }
}

impl fmt::Binary for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.to_binary();
        let digits = full.trim_start_matches('-').trim_start_matches("0b");
        f.pad_integral(!self.is_negative(), "0b", digits)
    }
}

impl Integer {
    /// The magnitude as a `u128`, if it fits.
    fn magnitude_u128(&self) -> Option<u128> {
        if self.get_bit_count() > 128 {
            return None;
        }
        let mut out: u128 = 0;
        for &w in self.data.iter().rev() {
            out = (out << big_digit::BITS) | u128::from(w);
        }
        Some(out)
    }
}

impl num_traits::ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u128()?;
        match self.sign {
            Sign::Minus => {
                if mag <= i64::MAX as u128 + 1 {
                    Some((mag as i64).wrapping_neg())
                } else {
                    None
                }
            }
            _ => i64::try_from(mag).ok(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.to_u128()?).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        if self.sign == Sign::Minus {
            return None;
        }
        self.magnitude_u128()
    }
}

impl num_traits::FromPrimitive for Integer {
    #[inline]
    fn from_i64(n: i64) -> Option<Integer> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Integer> {
        Some(Integer::from(n))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Integer {
                    let mut v = u128::try_from(value).unwrap();
                    let mut data = Vec::new();
                    while v != 0 {
                        data.push(v as BigDigit);
                        v >>= big_digit::BITS;
                    }
                    Integer::from_digits(Sign::Plus, data)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Integer {
                    let mag = Integer::from(u128::try_from(value.unsigned_abs()).unwrap());
                    if value < 0 {
                        -mag
                    } else {
                        mag
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);
