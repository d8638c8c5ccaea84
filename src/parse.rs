//! Decimal and hexadecimal text parsing.
//!
//! Mirrors a `strtod`-style partial parse: [`Fixed::parse_with_endptr`]
//! never fails, consuming as much of the input as forms a valid number and
//! reporting how many bytes that was. [`std::str::FromStr`] wraps it and
//! turns "consumed nothing" into the crate's one error case.

use std::str::FromStr;

use crate::error::ParseFixedError;
use crate::fixed::Fixed;
use crate::fmt::decimal_point;
use crate::wide::udiv128_64;

impl Fixed {
    /// Parses a leading number out of `s`, returning the value and the
    /// number of bytes consumed. If `s` contains no valid number at all,
    /// returns `(Fixed::ZERO, 0)` -- callers can tell "nothing parsed"
    /// apart from "parsed exactly zero" by checking the count.
    ///
    /// Accepts leading whitespace, an optional `+`/`-` sign, an optional
    /// `0x`/`0X` prefix selecting base 16 (default base 10), a run of
    /// digits, and an optional fractional part introduced by the current
    /// [`crate::fmt::decimal_point`].
    pub fn parse_with_endptr(s: &str) -> (Self, usize) {
        let mut chars = s.char_indices().peekable();
        let mut consumed = 0usize;

        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() {
                consumed = i + c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let mut negative = false;
        if let Some(&(i, c)) = chars.peek() {
            if c == '+' || c == '-' {
                negative = c == '-';
                consumed = i + c.len_utf8();
                chars.next();
            }
        }

        let mut base = 10u32;
        let mut lookahead = chars.clone();
        if let Some((_, '0')) = lookahead.next() {
            if let Some((_, c1)) = lookahead.next() {
                if c1 == 'x' || c1 == 'X' {
                    base = 16;
                }
            }
        }
        if base == 16 {
            chars.next();
            if let Some((i, c)) = chars.next() {
                consumed = i + c.len_utf8();
            }
        }

        let mut hi: u64 = 0u64;
        let mut any_digit = false;
        while let Some(&(i, c)) = chars.peek() {
            match c.to_digit(base) {
                Some(d) => {
                    hi = hi.wrapping_mul(base as u64).wrapping_add(d as u64);
                    consumed = i + c.len_utf8();
                    any_digit = true;
                    chars.next();
                }
                None => break,
            }
        }

        let sep = decimal_point();
        let mut frac_digits: Vec<u8> = Vec::new();
        if let Some(&(i, c)) = chars.peek() {
            if c == sep {
                let mut after = chars.clone();
                after.next();
                let starts_fraction = matches!(after.peek(), Some((_, c2)) if c2.to_digit(base).is_some());
                if starts_fraction {
                    consumed = i + c.len_utf8();
                    chars.next();
                    while let Some(&(fi, fc)) = chars.peek() {
                        match fc.to_digit(base) {
                            Some(d) => {
                                frac_digits.push(d as u8);
                                consumed = fi + fc.len_utf8();
                                any_digit = true;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                }
            }
        }

        if !any_digit {
            return (Self::ZERO, 0);
        }

        // Fractional digits are scanned most-significant-first but must be
        // folded in least-significant-first: each step divides the digit
        // just below the current remainder into it, the same 128/64
        // widening divide the rest of the crate uses.
        let mut lo: u64 = 0;
        for &d in frac_digits.iter().rev() {
            lo = udiv128_64(lo, d as u64, base as u64).0;
        }

        let magnitude = Self { lo, hi };
        let value = if negative { -magnitude } else { magnitude };
        (value, consumed)
    }
}

impl FromStr for Fixed {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, consumed) = Self::parse_with_endptr(s);
        if consumed == 0 {
            Err(ParseFixedError::NoDigits)
        } else {
            Ok(value)
        }
    }
}
