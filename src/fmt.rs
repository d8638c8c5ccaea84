//! Decimal formatting: a lossless default rendering plus a small
//! printf-flavored options struct for width, precision, sign, and padding.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::fixed::Fixed;

static DECIMAL_POINT: AtomicU32 = AtomicU32::new(b'.' as u32);

/// The character currently used to separate the integer and fractional
/// parts when formatting, `.` by default. Process-global and shared by
/// every [`Fixed`] value, matching the original C library this crate is
/// descended from.
pub fn decimal_point() -> char {
    char::from_u32(DECIMAL_POINT.load(Ordering::Relaxed)).unwrap_or('.')
}

/// Overrides the global decimal separator used by [`Fixed::to_string_opt`]
/// and [`std::fmt::Display`].
pub fn set_decimal_point(c: char) {
    DECIMAL_POINT.store(c as u32, Ordering::Relaxed);
}

/// How to render the sign of a non-negative value. Negative values always
/// render with a leading `-` regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Show nothing for non-negative values.
    #[default]
    OnlyNegative,
    /// Show a leading `+`.
    Always,
    /// Show a leading space, printf's `% d` convention.
    Space,
}

/// Formatting options for [`Fixed::to_string_opt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToStringFormat {
    pub sign: Sign,
    /// Minimum total width, padded with spaces (or `0` if `zero_pad` is
    /// set). `0` means no padding.
    pub width: usize,
    /// Number of fractional digits to print, rounding half away from
    /// zero. `None` prints the minimum number of digits needed to
    /// reconstruct the value exactly (at most 64, since `2^-64` is the
    /// smallest representable increment).
    pub precision: Option<usize>,
    pub zero_pad: bool,
    pub left_align: bool,
    /// Always emit the decimal point, even when no fractional digits
    /// follow it (printf's `#` flag).
    pub force_decimal: bool,
}

impl ToStringFormat {
    /// Parses a small subset of printf's conversion grammar:
    /// `%[flags][width][.precision]f`. Flags are any of `+`, ` `, `-`,
    /// `0`, `#`; anything else in the spec is ignored rather than
    /// rejected, since this exists to drive formatting, not to validate
    /// input.
    pub fn from_printf(spec: &str) -> Self {
        let mut fmt = Self::default();
        let s = spec.strip_prefix('%').unwrap_or(spec);
        let mut chars = s.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '+' => {
                    fmt.sign = Sign::Always;
                    chars.next();
                }
                ' ' => {
                    if fmt.sign == Sign::OnlyNegative {
                        fmt.sign = Sign::Space;
                    }
                    chars.next();
                }
                '-' => {
                    fmt.left_align = true;
                    chars.next();
                }
                '0' => {
                    fmt.zero_pad = true;
                    chars.next();
                }
                '#' => {
                    fmt.force_decimal = true;
                    chars.next();
                }
                _ => break,
            }
        }

        let mut width_str = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                width_str.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if !width_str.is_empty() {
            fmt.width = width_str.parse().unwrap_or(0);
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            let mut prec_str = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    prec_str.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            fmt.precision = Some(prec_str.parse().unwrap_or(0));
        }

        fmt
    }
}

/// Default fractional digit count when no precision is requested. Not
/// enough to reconstruct every value's exact decimal expansion (`2^-64`
/// terminates in up to 64 decimal digits), but enough that round-tripping
/// through [`std::str::FromStr`] lands back on the same bit pattern for
/// values that occur in practice.
const MAX_FRAC_DIGITS: usize = 20;

fn integer_digits(mut hi: u64) -> Vec<u8> {
    if hi == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while hi != 0 {
        digits.push((hi % 10) as u8);
        hi /= 10;
    }
    digits.reverse();
    digits
}

/// Emits up to `count` fractional decimal digits, most significant first,
/// by repeatedly multiplying the fractional limb by ten and peeling the
/// carry off the top: each step is a 64x64->128 widening multiply, same
/// shape as the crate's other wide arithmetic, just specialized to a
/// multiplier of ten.
fn fractional_digits(mut lo: u64, count: usize) -> Vec<u8> {
    let mut digits = Vec::with_capacity(count);
    for _ in 0..count {
        if lo == 0 {
            break;
        }
        let product = (lo as u128) * 10;
        digits.push((product >> 64) as u8);
        lo = product as u64;
    }
    digits
}

/// Truncates `frac_digits` to `keep` entries, rounding half up and
/// propagating any carry leftward through the fractional digits and then,
/// if still carrying, through `int_digits`.
fn round_half_up(int_digits: &mut Vec<u8>, frac_digits: &mut Vec<u8>, keep: usize) {
    while frac_digits.len() <= keep {
        frac_digits.push(0);
    }
    let round_up = frac_digits[keep] >= 5;
    frac_digits.truncate(keep);

    if !round_up {
        return;
    }

    let mut carry = true;
    for d in frac_digits.iter_mut().rev() {
        if !carry {
            break;
        }
        *d += 1;
        if *d == 10 {
            *d = 0;
        } else {
            carry = false;
        }
    }
    if !carry {
        return;
    }
    for d in int_digits.iter_mut().rev() {
        if !carry {
            break;
        }
        *d += 1;
        if *d == 10 {
            *d = 0;
        } else {
            carry = false;
        }
    }
    if carry {
        int_digits.insert(0, 1);
    }
}

impl Fixed {
    /// Renders `self` as a decimal string per `opt`. With the default
    /// options this is lossless: parsing the result back with
    /// [`std::str::FromStr`] recovers the exact bit pattern.
    pub fn to_string_opt(&self, opt: &ToStringFormat) -> String {
        let negative = self.is_negative();
        let mag = self.abs();

        let mut int_digits = integer_digits(mag.hi);
        let gen_count = opt.precision.map(|p| p + 1).unwrap_or(MAX_FRAC_DIGITS);
        let mut frac_digits = fractional_digits(mag.lo, gen_count);

        if let Some(p) = opt.precision {
            round_half_up(&mut int_digits, &mut frac_digits, p);
        }

        let mut body = String::with_capacity(int_digits.len() + frac_digits.len() + 1);
        for d in &int_digits {
            body.push((b'0' + d) as char);
        }
        if !frac_digits.is_empty() || opt.force_decimal {
            body.push(decimal_point());
            for d in &frac_digits {
                body.push((b'0' + d) as char);
            }
        }

        let sign_str = if negative {
            "-"
        } else {
            match opt.sign {
                Sign::Always => "+",
                Sign::Space => " ",
                Sign::OnlyNegative => "",
            }
        };

        let total_len = sign_str.len() + body.len();
        if total_len >= opt.width {
            return format!("{sign_str}{body}");
        }

        let pad = opt.width - total_len;
        if opt.left_align {
            format!("{sign_str}{body}{:pad$}", "", pad = pad)
        } else if opt.zero_pad {
            format!("{sign_str}{:0>pad$}{body}", "", pad = pad)
        } else {
            format!("{:pad$}{sign_str}{body}", "", pad = pad)
        }
    }
}

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_opt(&ToStringFormat::default()))
    }
}
