//! Integer long division using only shifts, additions, subtractions, and comparisons.
//!
//! The unsigned core divides by repeatedly doubling the divisor while it still fits in the type,
//! falling back to the original divisor whenever the doubled divisor passes what is left of the
//! dividend. The signed adapters divide the magnitudes with the unsigned core of the same width
//! and then restore signs, either truncating (like the `/` and `%` operators) or flooring.
//!
//! Every function is pure and returns `Err` instead of panicking:
//!
//! ```
//! use shift_div_rem::{divide_signed, divide_signed_floor, divide_unsigned, DivError};
//!
//! assert_eq!(divide_unsigned(27u32, 11), Ok((2, 5)));
//! assert_eq!(divide_signed(-7i32, 2), Ok((-3, -1)));
//! assert_eq!(divide_signed_floor(-7i32, 2), Ok((-4, 1)));
//! assert_eq!(divide_unsigned(1u8, 0), Err(DivError::DivisionByZero));
//! assert_eq!(divide_signed(i64::MIN, -1), Err(DivError::MagnitudeOverflow));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod doubling;

#[macro_use]
mod traits;

mod error;
mod implement;

#[cfg(feature = "harness")]
pub mod harness;

pub use error::DivError;
pub use implement::*;
pub use traits::{SignedLongDiv, UnsignedLongDiv};

/// Computes the quotient and remainder of `dividend` divided by `divisor` for any unsigned
/// primitive.
///
/// # Errors
///
/// Returns `DivError::DivisionByZero` if `divisor == 0`.
#[inline]
pub fn divide_unsigned<U: UnsignedLongDiv>(dividend: U, divisor: U) -> Result<(U, U), DivError> {
    dividend.long_div_rem(divisor)
}

/// Computes the truncated quotient and remainder of `dividend` divided by `divisor` for any
/// signed primitive. The quotient rounds toward zero and a nonzero remainder has the sign of
/// `dividend`.
///
/// # Errors
///
/// Returns `DivError::DivisionByZero` if `divisor == 0`, and `DivError::MagnitudeOverflow` if the
/// quotient is `MAX + 1` (`MIN / -1`).
#[inline]
pub fn divide_signed<S: SignedLongDiv>(dividend: S, divisor: S) -> Result<(S, S), DivError> {
    dividend.long_div_rem(divisor)
}

/// Computes the floored quotient and remainder of `dividend` divided by `divisor` for any signed
/// primitive. The quotient rounds toward negative infinity and a nonzero remainder has the sign of
/// `divisor`.
///
/// # Errors
///
/// Returns `DivError::DivisionByZero` if `divisor == 0`, and `DivError::MagnitudeOverflow` if the
/// quotient is `MAX + 1` (`MIN / -1`).
#[inline]
pub fn divide_signed_floor<S: SignedLongDiv>(dividend: S, divisor: S) -> Result<(S, S), DivError> {
    dividend.long_div_rem_floor(divisor)
}
