//! 128-bit signed fixed-point arithmetic, Q64.64: 64 integer bits, 64
//! fractional bits, two's-complement.
//!
//! The representation is a pair of 64-bit limbs `(lo, hi)`: `lo` carries the
//! fractional bits (weight `2^-64 .. 2^-1`), `hi` carries the integer bits
//! (weight `2^0 .. 2^63`, top bit is the sign). The numeric value is
//! `signed128(hi:lo) / 2^64`.
//!
//! Arithmetic never traps: addition, subtraction, and multiplication wrap
//! in two's complement on overflow, division saturates to [`Fixed::MIN`]
//! or [`Fixed::MAX`] on division by zero or quotient overflow, and there
//! are no infinities, NaNs, or subnormals.

mod div;
mod error;
mod fixed;
mod fmt;
mod mul;
mod parse;
mod wide;

pub use error::ParseFixedError;
pub use fixed::Fixed;
pub use fmt::{Sign, ToStringFormat, decimal_point, set_decimal_point};
