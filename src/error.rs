use thiserror::Error;

/// Error returned by [`crate::Fixed`]'s [`FromStr`](std::str::FromStr) impl.
///
/// Arithmetic on [`crate::Fixed`] never fails; parsing is the crate's only
/// fallible surface, and it fails only when the input contains no digits at
/// all. A string with trailing garbage after a valid number (`"3.5xyz"`) is
/// not an error here -- use [`crate::Fixed::parse_with_endptr`] to recover
/// how much of the input was consumed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseFixedError {
    /// The input held no recognizable digits after the optional sign and
    /// base prefix.
    #[error("no digits found in fixed-point literal")]
    NoDigits,
}
