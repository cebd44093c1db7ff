use crate::DivError;

/// Long division of fixed width unsigned integers
pub trait UnsignedLongDiv: Copy + Sized {
    /// Returns the quotient and remainder of `self` divided by `div`
    fn long_div_rem(self, div: Self) -> Result<(Self, Self), DivError>;
}

/// Long division of fixed width signed integers, delegating to the unsigned type of the same
/// width
pub trait SignedLongDiv: Copy + Sized {
    /// The unsigned type of the same width, which can hold the magnitude of any value of `Self`
    type Unsigned: UnsignedLongDiv;

    /// Returns the truncated quotient and remainder of `self` divided by `div`
    fn long_div_rem(self, div: Self) -> Result<(Self, Self), DivError>;

    /// Returns the floored quotient and remainder of `self` divided by `div`
    fn long_div_rem_floor(self, div: Self) -> Result<(Self, Self), DivError>;
}

macro_rules! impl_long_div_traits {
    (
        $unsigned_name:ident,
        $signed_name:ident,
        $signed_floor_name:ident,
        $uX:ident,
        $iX:ident
    ) => {
        impl UnsignedLongDiv for $uX {
            #[inline]
            fn long_div_rem(self, div: Self) -> Result<(Self, Self), DivError> {
                $unsigned_name(self, div)
            }
        }

        impl SignedLongDiv for $iX {
            type Unsigned = $uX;

            #[inline]
            fn long_div_rem(self, div: Self) -> Result<(Self, Self), DivError> {
                $signed_name(self, div)
            }

            #[inline]
            fn long_div_rem_floor(self, div: Self) -> Result<(Self, Self), DivError> {
                $signed_floor_name(self, div)
            }
        }
    };
}
