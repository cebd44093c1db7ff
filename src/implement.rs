use crate::{DivError, SignedLongDiv, UnsignedLongDiv};

// Inlining is only done on the signed functions in order to encourage optimal branching if LLVM
// knows that one or both inputs cannot be negative.

// 8 bit
impl_doubling!(
    u8_div_rem_doubling,
    i8_div_rem_doubling,
    i8_div_rem_floor_doubling,
    u8,
    i8,;
    inline
);

// 16 bit
impl_doubling!(
    u16_div_rem_doubling,
    i16_div_rem_doubling,
    i16_div_rem_floor_doubling,
    u16,
    i16,;
    inline
);

// 32 bit
impl_doubling!(
    u32_div_rem_doubling,
    i32_div_rem_doubling,
    i32_div_rem_floor_doubling,
    u32,
    i32,;
    inline
);

// 64 bit
impl_doubling!(
    u64_div_rem_doubling,
    i64_div_rem_doubling,
    i64_div_rem_floor_doubling,
    u64,
    i64,;
    inline
);

// 128 bit
impl_doubling!(
    u128_div_rem_doubling,
    i128_div_rem_doubling,
    i128_div_rem_floor_doubling,
    u128,
    i128,;
    inline
);

// pointer sized
impl_doubling!(
    usize_div_rem_doubling,
    isize_div_rem_doubling,
    isize_div_rem_floor_doubling,
    usize,
    isize,;
    inline
);

impl_long_div_traits!(
    u8_div_rem_doubling,
    i8_div_rem_doubling,
    i8_div_rem_floor_doubling,
    u8,
    i8
);
impl_long_div_traits!(
    u16_div_rem_doubling,
    i16_div_rem_doubling,
    i16_div_rem_floor_doubling,
    u16,
    i16
);
impl_long_div_traits!(
    u32_div_rem_doubling,
    i32_div_rem_doubling,
    i32_div_rem_floor_doubling,
    u32,
    i32
);
impl_long_div_traits!(
    u64_div_rem_doubling,
    i64_div_rem_doubling,
    i64_div_rem_floor_doubling,
    u64,
    i64
);
impl_long_div_traits!(
    u128_div_rem_doubling,
    i128_div_rem_doubling,
    i128_div_rem_floor_doubling,
    u128,
    i128
);
impl_long_div_traits!(
    usize_div_rem_doubling,
    isize_div_rem_doubling,
    isize_div_rem_floor_doubling,
    usize,
    isize
);
