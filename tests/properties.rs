use proptest::prelude::*;
use shift_div_rem::{divide_signed, divide_signed_floor, divide_unsigned, DivError};

macro_rules! properties {
    ($($mod_name:ident, $uX:ident, $iX:ident, $wide_i:ident);*;) => {
        $(
            mod $mod_name {
                use super::*;

                proptest! {
                    #[test]
                    fn unsigned_reconstruction(duo in any::<$uX>(), div in any::<$uX>()) {
                        match divide_unsigned(duo, div) {
                            Ok((quo, rem)) => {
                                prop_assert!(rem < div);
                                prop_assert_eq!(
                                    div.checked_mul(quo).and_then(|x| x.checked_add(rem)),
                                    Some(duo)
                                );
                            }
                            Err(e) => {
                                prop_assert_eq!(div, 0);
                                prop_assert_eq!(e, DivError::DivisionByZero);
                            }
                        }
                    }

                    #[test]
                    fn truncating_signs(duo in any::<$iX>(), div in any::<$iX>()) {
                        prop_assume!(div != 0);
                        prop_assume!(!((duo == $iX::MIN) && (div == -1)));
                        let (quo, rem) = divide_signed(duo, div).unwrap();
                        prop_assert!(rem.unsigned_abs() < div.unsigned_abs());
                        prop_assert_eq!(
                            (quo as $wide_i) * (div as $wide_i) + (rem as $wide_i),
                            duo as $wide_i
                        );
                        // a nonzero remainder has the sign of the dividend
                        prop_assert!((rem == 0) || ((rem < 0) == (duo < 0)));
                        // the quotient rounds toward zero
                        prop_assert_eq!(quo, duo / div);
                    }

                    #[test]
                    fn flooring_signs(duo in any::<$iX>(), div in any::<$iX>()) {
                        prop_assume!(div != 0);
                        prop_assume!(!((duo == $iX::MIN) && (div == -1)));
                        let (quo, rem) = divide_signed_floor(duo, div).unwrap();
                        prop_assert!(rem.unsigned_abs() < div.unsigned_abs());
                        prop_assert_eq!(
                            (quo as $wide_i) * (div as $wide_i) + (rem as $wide_i),
                            duo as $wide_i
                        );
                        match (duo < 0, div < 0) {
                            (false, false) => prop_assert!((quo >= 0) && (rem >= 0)),
                            (true, false) => prop_assert!((quo <= 0) && (rem >= 0)),
                            (true, true) => prop_assert!((quo >= 0) && (rem <= 0)),
                            (false, true) => prop_assert!((quo <= 0) && (rem <= 0)),
                        }
                    }

                    #[test]
                    fn boundary_divisors(
                        duo in any::<$iX>(),
                        s in 0..($iX::BITS - 1),
                        t in 0..$uX::BITS,
                    ) {
                        // 2^k - 1 for every `k` that fits
                        let div = $iX::MAX >> s;
                        for div in [div, -div] {
                            prop_assert_eq!(
                                divide_signed(duo, div),
                                Ok((duo / div, duo % div))
                            );
                        }
                        let div = $uX::MAX >> t;
                        prop_assert_eq!(
                            divide_unsigned(duo as $uX, div),
                            Ok(((duo as $uX) / div, (duo as $uX) % div))
                        );
                    }
                }
            }
        )*
    };
}

properties!(
    width_8, u8, i8, i16;
    width_16, u16, i16, i32;
    width_32, u32, i32, i64;
    width_64, u64, i64, i128;
);

proptest! {
    #[test]
    fn truncating_128(duo in any::<i128>(), div in any::<i128>()) {
        prop_assume!(div != 0);
        if (duo == i128::MIN) && (div == -1) {
            prop_assert_eq!(divide_signed(duo, div), Err(DivError::MagnitudeOverflow));
        } else {
            prop_assert_eq!(divide_signed(duo, div), Ok((duo / div, duo % div)));
            prop_assert_eq!(
                divide_unsigned(duo as u128, div as u128),
                Ok(((duo as u128) / (div as u128), (duo as u128) % (div as u128)))
            );
        }
    }

    #[test]
    fn flooring_128(duo in any::<i128>(), div in any::<i128>()) {
        prop_assume!(div != 0);
        prop_assume!(!((duo == i128::MIN) && (div == -1)));
        let (quo, rem) = divide_signed_floor(duo, div).unwrap();
        prop_assert!(rem.unsigned_abs() < div.unsigned_abs());
        prop_assert!((rem == 0) || ((rem < 0) == (div < 0)));
        prop_assert_eq!(div.wrapping_mul(quo).wrapping_add(rem), duo);
    }
}
