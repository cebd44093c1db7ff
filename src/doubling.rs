macro_rules! impl_doubling {
    (
        $unsigned_name:ident, // name of the unsigned division function
        $signed_name:ident, // name of the truncating signed division function
        $signed_floor_name:ident, // name of the flooring signed division function
        $uX:ident, // unsigned integer type for the inputs and outputs of `$unsigned_name`
        $iX:ident, // signed integer type for the inputs and outputs of the signed functions
        $($unsigned_attr:meta),*; // attributes for the unsigned function
        $($signed_attr:meta),* // attributes for the signed functions
    ) => {
        /// Computes the quotient and remainder of `duo` divided by `div` and returns them as a
        /// tuple.
        ///
        /// This uses binary long division by repeated doubling. Only shifts, additions,
        /// subtractions, and comparisons are used, so it works on CPUs without any division
        /// hardware and never calls a smaller division.
        ///
        /// # Errors
        ///
        /// Returns `DivError::DivisionByZero` if `div == 0`.
        $(
            #[$unsigned_attr]
        )*
        pub fn $unsigned_name(duo: $uX, div: $uX) -> Result<($uX, $uX), DivError> {
            if div == 0 {
                return Err(DivError::DivisionByZero)
            }

            // `shl` is always `div << k` for some `k`, and `pow` is `1 << k`. Every subtraction of
            // `shl` from `duo` is matched by adding `pow` to `quo`, so
            // `quo * div + duo == duo_original` holds throughout.
            //
            // Example: dividing 200u8 (0b11001000) by 3u8 (0b11)
            // first pass:
            // duo: 200, shl:  3, pow:  1 -> duo: 197, quo:   1
            // duo: 197, shl:  6, pow:  2 -> duo: 191, quo:   3
            // duo: 191, shl: 12, pow:  4 -> duo: 179, quo:   7
            // duo: 179, shl: 24, pow:  8 -> duo: 155, quo:  15
            // duo: 155, shl: 48, pow: 16 -> duo: 107, quo:  31
            // duo: 107, shl: 96, pow: 32 -> duo:  11, quo:  63
            // `shl` doubles to 192 and `duo < shl`, but `duo` is still at least `div`
            // second pass:
            // duo:  11, shl:  3, pow:  1 -> duo:   8, quo:  64
            // duo:   8, shl:  6, pow:  2 -> duo:   2, quo:  66
            // `duo < div`, so the quotient is 66 and the remainder is 2
            let mut duo = duo;
            let mut quo: $uX = 0;
            let mut shl = div;
            let mut pow: $uX = 1;
            loop {
                while duo >= shl {
                    duo -= shl;
                    quo += pow;
                    // Shifting left may push the most significant bit of `shl` out of the type.
                    // If the bit did not survive, shifting back right will not reproduce `shl`,
                    // and the doubling is discarded. `shl` then stays at its largest multiple and
                    // the inner loop keeps draining at that scale.
                    let next = shl << 1;
                    if (next >> 1) == shl {
                        shl = next;
                        pow <<= 1;
                    }
                }
                if duo < div {
                    return Ok((quo, duo))
                }
                // restart from the original divisor to drain what is left
                shl = div;
                pow = 1;
            }
        }

        /// Computes the quotient and remainder of `duo` divided by `div` and returns them as a
        /// tuple.
        ///
        /// This is truncating division, matching the `/` and `%` operators: the quotient rounds
        /// toward zero, and a nonzero remainder has the sign of `duo`. The magnitudes are divided
        /// with the unsigned long division function of the same width.
        ///
        /// # Errors
        ///
        /// Returns `DivError::DivisionByZero` if `div == 0`, and `DivError::MagnitudeOverflow` if
        /// `duo == MIN` and `div == -1`.
        $(
            #[$signed_attr]
        )*
        pub fn $signed_name(duo: $iX, div: $iX) -> Result<($iX, $iX), DivError> {
            let duo_neg = duo < 0;
            let div_neg = div < 0;
            let duo_mag = duo.unsigned_abs();
            let div_mag = div.unsigned_abs();
            // the magnitude of `MIN` is `MAX + 1`, which always fits in the unsigned type
            debug_assert!(!duo_neg || (duo_mag as $iX).wrapping_neg() == duo);
            debug_assert!(!div_neg || (div_mag as $iX).wrapping_neg() == div);

            let (quo, rem) = $unsigned_name(duo_mag, div_mag)?;
            let quo = if duo_neg != div_neg {
                // `quo <= MAX + 1`, and `MAX + 1` wraps around to `MIN` which is its own negation
                (quo as $iX).wrapping_neg()
            } else if quo > ($iX::MAX as $uX) {
                return Err(DivError::MagnitudeOverflow)
            } else {
                quo as $iX
            };
            // `rem < div_mag <= MAX + 1`
            let rem = if duo_neg {
                (rem as $iX).wrapping_neg()
            } else {
                rem as $iX
            };
            Ok((quo, rem))
        }

        /// Computes the quotient and remainder of `duo` divided by `div` and returns them as a
        /// tuple.
        ///
        /// This is flooring division: the quotient rounds toward negative infinity, and a nonzero
        /// remainder has the sign of `div`. The result differs from the truncating function only
        /// when the signs of `duo` and `div` differ and the division is inexact.
        ///
        /// # Errors
        ///
        /// Returns `DivError::DivisionByZero` if `div == 0`, and `DivError::MagnitudeOverflow` if
        /// `duo == MIN` and `div == -1`.
        $(
            #[$signed_attr]
        )*
        pub fn $signed_floor_name(duo: $iX, div: $iX) -> Result<($iX, $iX), DivError> {
            let negative = (duo < 0) != (div < 0);
            let div_mag = div.unsigned_abs();

            let (mut quo, mut rem) = $unsigned_name(duo.unsigned_abs(), div_mag)?;
            if negative && rem != 0 {
                // The remainder is measured from the other end of the divisor, and the quotient
                // magnitude grows by one. A nonzero remainder means `div_mag > 1`, so
                // `quo < MAX + 1` and the increment cannot leave the type.
                rem = div_mag - rem;
                quo += 1;
            }
            let quo = if negative {
                (quo as $iX).wrapping_neg()
            } else if quo > ($iX::MAX as $uX) {
                return Err(DivError::MagnitudeOverflow)
            } else {
                quo as $iX
            };
            let rem = if div < 0 {
                (rem as $iX).wrapping_neg()
            } else {
                rem as $iX
            };
            Ok((quo, rem))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        i32_div_rem_doubling, i32_div_rem_floor_doubling, i8_div_rem_doubling,
        i8_div_rem_floor_doubling, u128_div_rem_doubling, u8_div_rem_doubling, DivError,
    };

    #[test]
    fn walkthrough() {
        assert_eq!(u8_div_rem_doubling(200, 3), Ok((66, 2)));
    }

    #[test]
    fn capped_doubling() {
        // `shl` cannot double past the most significant bit, so these need several passes
        assert_eq!(u8_div_rem_doubling(255, 1), Ok((255, 0)));
        assert_eq!(u8_div_rem_doubling(255, 127), Ok((2, 1)));
        assert_eq!(u8_div_rem_doubling(255, 128), Ok((1, 127)));
        assert_eq!(u8_div_rem_doubling(254, 255), Ok((0, 254)));
        assert_eq!(u128_div_rem_doubling(u128::MAX, 1), Ok((u128::MAX, 0)));
        assert_eq!(
            u128_div_rem_doubling(u128::MAX, 3),
            Ok((u128::MAX / 3, 0))
        );
        assert_eq!(
            u128_div_rem_doubling(u128::MAX, (1 << 127) + 1),
            Ok((1, (1 << 127) - 2))
        );
    }

    #[test]
    fn signed_boundaries() {
        assert_eq!(i8_div_rem_doubling(i8::MIN, 1), Ok((i8::MIN, 0)));
        assert_eq!(i8_div_rem_doubling(i8::MIN, i8::MIN), Ok((1, 0)));
        assert_eq!(i8_div_rem_doubling(i8::MAX, i8::MIN), Ok((0, i8::MAX)));
        assert_eq!(i8_div_rem_doubling(i8::MIN, i8::MAX), Ok((-1, -1)));
        assert_eq!(i8_div_rem_doubling(i8::MIN, 3), Ok((-42, -2)));
        assert_eq!(
            i8_div_rem_doubling(i8::MIN, -1),
            Err(DivError::MagnitudeOverflow)
        );
        assert_eq!(i8_div_rem_floor_doubling(i8::MIN, 3), Ok((-43, 1)));
        assert_eq!(i8_div_rem_floor_doubling(i8::MAX, i8::MIN), Ok((-1, -1)));
        assert_eq!(i8_div_rem_floor_doubling(i8::MIN, -2), Ok((64, 0)));
        assert_eq!(
            i8_div_rem_floor_doubling(i8::MIN, -1),
            Err(DivError::MagnitudeOverflow)
        );
    }

    #[test]
    fn truncating_and_flooring() {
        assert_eq!(i32_div_rem_doubling(-7, 2), Ok((-3, -1)));
        assert_eq!(i32_div_rem_doubling(7, -2), Ok((-3, 1)));
        assert_eq!(i32_div_rem_doubling(-7, -2), Ok((3, -1)));
        assert_eq!(i32_div_rem_floor_doubling(-7, 2), Ok((-4, 1)));
        assert_eq!(i32_div_rem_floor_doubling(7, -2), Ok((-4, -1)));
        assert_eq!(i32_div_rem_floor_doubling(-7, -2), Ok((3, -1)));
        // exact divisions agree
        assert_eq!(i32_div_rem_floor_doubling(-8, 2), Ok((-4, 0)));
        assert_eq!(i32_div_rem_doubling(-8, 2), Ok((-4, 0)));
    }
}
