//! 64x64->128 widening multiply and 128/64->64 widening divide.
//!
//! Everything above this module consumes only these two functions; the rest
//! of the crate never reasons about limbs directly. Both are implemented on
//! top of the native `u128` type rather than hand rolled 32-bit-limb
//! schoolbook routines: `u128` arithmetic already lowers to the best
//! available instruction on every target Rust supports (a single
//! `mul`/`div` pair on 64-bit architectures, a compiler-rt routine
//! elsewhere), so a bespoke fallback would only add a second, harder to
//! trust, path to the same answer.

/// Splits `a * b` into its low and high 64-bit halves.
#[inline]
pub(crate) fn umul64_128(a: u64, b: u64) -> (u64, u64) {
    let p = (a as u128) * (b as u128);
    (p as u64, (p >> 64) as u64)
}

/// Divides the 128-bit value `(hi:lo)` by `d`, returning `(quotient,
/// remainder)`.
///
/// Callers must ensure `d != 0` and `hi < d`, which guarantees the quotient
/// fits in 64 bits.
#[inline]
pub(crate) fn udiv128_64(lo: u64, hi: u64, d: u64) -> (u64, u64) {
    debug_assert!(d != 0);
    debug_assert!(hi < d);
    let n = ((hi as u128) << 64) | lo as u128;
    let d = d as u128;
    ((n / d) as u64, (n % d) as u64)
}
