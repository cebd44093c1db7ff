//! Randomized and boundary checks of the division functions for every width.
//!
//! Each check runs a division and validates the properties every result must have: the expected
//! error for zero divisors and `MIN / -1`, a remainder smaller in magnitude than the divisor, exact
//! reconstruction of the dividend, and the sign rules of truncating and flooring division.

use std::fmt;

use rand::Rng;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::{implement::*, DivError};

/// A property that a division result failed to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("quotient * divisor + remainder != dividend")]
    Reconstruction,
    #[error("remainder magnitude is not less than the divisor magnitude")]
    RemainderBound,
    #[error("quotient has the wrong sign")]
    QuotientSign,
    #[error("remainder has the wrong sign")]
    RemainderSign,
    #[error("floored result is not the truncated result moved by one divisor")]
    FloorMismatch,
}

/// A failed check. The operands and results are kept formatted so that every width shares one
/// error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The division succeeded when it should have failed, failed when it should have succeeded,
    /// or failed with the wrong error
    #[error("{function} failed with lhs:{lhs} rhs:{rhs} expected:{expected:?} found:{found:?}")]
    Outcome {
        function: &'static str,
        lhs: String,
        rhs: String,
        expected: Option<DivError>,
        found: Option<DivError>,
    },
    /// The division returned a result that breaks `violation`
    #[error("{function} failed with lhs:{lhs} rhs:{rhs} found:({quo}, {rem}): {violation}")]
    Invariant {
        function: &'static str,
        lhs: String,
        rhs: String,
        quo: String,
        rem: String,
        violation: Violation,
    },
}

impl CheckError {
    fn invariant<T: fmt::Display>(
        function: &'static str,
        lhs: T,
        rhs: T,
        quo: T,
        rem: T,
        violation: Violation,
    ) -> Self {
        CheckError::Invariant {
            function,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            quo: quo.to_string(),
            rem: rem.to_string(),
            violation,
        }
    }
}

/// Compares the outcome of a division with the `expected` error. Returns the quotient and
/// remainder if the division succeeded as expected, and `None` if it failed as expected.
fn outcome<T: Copy + fmt::Display>(
    function: &'static str,
    lhs: T,
    rhs: T,
    found: Result<(T, T), DivError>,
    expected: Option<DivError>,
) -> Result<Option<(T, T)>, CheckError> {
    match (found, expected) {
        (Ok(res), None) => Ok(Some(res)),
        (Err(e), Some(x)) if e == x => Ok(None),
        (found, expected) => Err(CheckError::Outcome {
            function,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            expected,
            found: found.err(),
        }),
    }
}

/// Runtime configuration of `run_checks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Seed of the random number generator. The same seed always checks the same operands.
    pub seed: u64,
    /// Number of uniformly random operand pairs per signedness and width
    pub samples: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seed: 3,
            samples: 100_000,
        }
    }
}

/// The number of checks that passed for one width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthReport {
    pub types: &'static str,
    pub checks: usize,
}

/// Summary of a successful `run_checks`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub widths: Vec<WidthReport>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.widths.iter().map(|w| w.checks).sum()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for width in &self.widths {
            writeln!(f, "{}: {} checks passed", width.types, width.checks)?;
        }
        write!(f, "total: {} checks passed", self.total())
    }
}

macro_rules! impl_check {
    (
        $check_unsigned:ident, // name of the unsigned check function
        $check_signed:ident, // name of the signed check function
        $run_name:ident, // name of the function running all checks for this width
        $unsigned_name:ident, // the unsigned division function
        $signed_name:ident, // the truncating signed division function
        $signed_floor_name:ident, // the flooring signed division function
        $uX:ident, // unsigned integer type
        $iX:ident // signed version of $uX
    ) => {
        /// Divides `lhs` by `rhs` with the unsigned long division function of this width and
        /// validates the result.
        pub fn $check_unsigned(lhs: $uX, rhs: $uX) -> Result<(), CheckError> {
            let function = stringify!($unsigned_name);
            let expected = if rhs == 0 {
                Some(DivError::DivisionByZero)
            } else {
                None
            };
            let found = $unsigned_name(lhs, rhs);
            let (quo, rem) = match outcome(function, lhs, rhs, found, expected)? {
                Some(res) => res,
                None => return Ok(()),
            };
            let violation = if rem >= rhs {
                Some(Violation::RemainderBound)
            } else if rhs.checked_mul(quo).and_then(|x| x.checked_add(rem)) != Some(lhs) {
                Some(Violation::Reconstruction)
            } else {
                None
            };
            match violation {
                Some(v) => Err(CheckError::invariant(function, lhs, rhs, quo, rem, v)),
                None => Ok(()),
            }
        }

        /// Divides `lhs` by `rhs` with both signed long division functions of this width and
        /// validates the results.
        pub fn $check_signed(lhs: $iX, rhs: $iX) -> Result<(), CheckError> {
            let expected = if rhs == 0 {
                Some(DivError::DivisionByZero)
            } else if (lhs == $iX::MIN) && (rhs == -1) {
                Some(DivError::MagnitudeOverflow)
            } else {
                None
            };

            let function = stringify!($signed_name);
            let trunc = outcome(function, lhs, rhs, $signed_name(lhs, rhs), expected)?;
            if let Some((quo, rem)) = trunc {
                let (quo_sign, rem_sign) = match (lhs < 0, rhs < 0) {
                    (false, false) => (quo >= 0, rem >= 0),
                    (true, false) => (quo <= 0, rem <= 0),
                    (true, true) => (quo >= 0, rem <= 0),
                    (false, true) => (quo <= 0, rem >= 0),
                };
                // `|quo * rhs| <= |lhs|` for a truncated quotient, so checked arithmetic
                // reconstructs exactly
                let violation = if rem.unsigned_abs() >= rhs.unsigned_abs() {
                    Some(Violation::RemainderBound)
                } else if rhs.checked_mul(quo).and_then(|x| x.checked_add(rem)) != Some(lhs) {
                    Some(Violation::Reconstruction)
                } else if !quo_sign {
                    Some(Violation::QuotientSign)
                } else if !rem_sign {
                    Some(Violation::RemainderSign)
                } else {
                    None
                };
                if let Some(v) = violation {
                    return Err(CheckError::invariant(function, lhs, rhs, quo, rem, v))
                }
            }

            let function = stringify!($signed_floor_name);
            let floor = outcome(function, lhs, rhs, $signed_floor_name(lhs, rhs), expected)?;
            if let Some((quo, rem)) = floor {
                let (quo_sign, rem_sign) = match (lhs < 0, rhs < 0) {
                    (false, false) => (quo >= 0, rem >= 0),
                    (true, false) => (quo <= 0, rem >= 0),
                    (true, true) => (quo >= 0, rem <= 0),
                    (false, true) => (quo <= 0, rem <= 0),
                };
                // `quo * rhs` can leave the type when flooring (e.x. `-128i8 / 3 == -43`), so
                // exactness comes from agreeing with the exactly checked truncated result
                let moved = trunc.map(|(t_quo, t_rem)| {
                    if (t_rem != 0) && ((t_rem < 0) != (rhs < 0)) {
                        (t_quo.wrapping_sub(1), t_rem.wrapping_add(rhs))
                    } else {
                        (t_quo, t_rem)
                    }
                });
                let violation = if rem.unsigned_abs() >= rhs.unsigned_abs() {
                    Some(Violation::RemainderBound)
                } else if rhs.wrapping_mul(quo).wrapping_add(rem) != lhs {
                    Some(Violation::Reconstruction)
                } else if !quo_sign {
                    Some(Violation::QuotientSign)
                } else if !rem_sign {
                    Some(Violation::RemainderSign)
                } else if moved != Some((quo, rem)) {
                    Some(Violation::FloorMismatch)
                } else {
                    None
                };
                if let Some(v) = violation {
                    return Err(CheckError::invariant(function, lhs, rhs, quo, rem, v))
                }
            }
            Ok(())
        }

        /// Runs the zero divisor, uniform sample, and boundary sweep checks for this width and
        /// returns the number of checks that passed.
        pub fn $run_name(
            rng: &mut Xoshiro128StarStar,
            samples: usize,
        ) -> Result<usize, CheckError> {
            let mut checks = 0;

            // every dividend fails with a zero divisor
            for duo in [0, 1, $uX::MAX, rng.gen()] {
                $check_unsigned(duo, 0)?;
            }
            for duo in [0, 1, -1, $iX::MIN, $iX::MAX, rng.gen()] {
                $check_signed(duo, 0)?;
            }
            $check_signed($iX::MIN, -1)?;
            checks += 11;

            // uniformly random samples over the full range of both signednesses
            for _ in 0..samples {
                let lhs: $uX = rng.gen();
                let mut rhs: $uX = rng.gen();
                while rhs == 0 {
                    rhs = rng.gen();
                }
                $check_unsigned(lhs, rhs)?;

                let lhs: $iX = rng.gen();
                let mut rhs: $iX = rng.gen();
                while rhs == 0 {
                    rhs = rng.gen();
                }
                $check_signed(lhs, rhs)?;
                checks += 2;
            }

            // boundary sweep with the divisors 1, 3, 7, 15, ... up to the maximum
            let mut div: $uX = 1;
            loop {
                for duo in [0, 1, div, $uX::MAX, rng.gen()] {
                    $check_unsigned(duo, div)?;
                }
                checks += 5;
                if div == $uX::MAX {
                    break
                }
                div = (div << 1) | 1;
            }
            let mut div: $iX = 1;
            loop {
                for div in [div, -div] {
                    for duo in [0, 1, -1, $iX::MIN, $iX::MAX, rng.gen()] {
                        $check_signed(duo, div)?;
                    }
                    checks += 6;
                }
                if div == $iX::MAX {
                    break
                }
                div = (div << 1) | 1;
            }
            Ok(checks)
        }
    };
}

impl_check!(
    check_u8,
    check_i8,
    run_8,
    u8_div_rem_doubling,
    i8_div_rem_doubling,
    i8_div_rem_floor_doubling,
    u8,
    i8
);
impl_check!(
    check_u16,
    check_i16,
    run_16,
    u16_div_rem_doubling,
    i16_div_rem_doubling,
    i16_div_rem_floor_doubling,
    u16,
    i16
);
impl_check!(
    check_u32,
    check_i32,
    run_32,
    u32_div_rem_doubling,
    i32_div_rem_doubling,
    i32_div_rem_floor_doubling,
    u32,
    i32
);
impl_check!(
    check_u64,
    check_i64,
    run_64,
    u64_div_rem_doubling,
    i64_div_rem_doubling,
    i64_div_rem_floor_doubling,
    u64,
    i64
);
impl_check!(
    check_u128,
    check_i128,
    run_128,
    u128_div_rem_doubling,
    i128_div_rem_doubling,
    i128_div_rem_floor_doubling,
    u128,
    i128
);
impl_check!(
    check_usize,
    check_isize,
    run_size,
    usize_div_rem_doubling,
    isize_div_rem_doubling,
    isize_div_rem_floor_doubling,
    usize,
    isize
);

/// Runs every check for every width, stopping at the first failure
pub fn run_checks(config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let mut rng = Xoshiro128StarStar::seed_from_u64(config.seed);
    let runs: [(&'static str, fn(&mut Xoshiro128StarStar, usize) -> Result<usize, CheckError>);
        6] = [
        ("u8/i8", run_8),
        ("u16/i16", run_16),
        ("u32/i32", run_32),
        ("u64/i64", run_64),
        ("u128/i128", run_128),
        ("usize/isize", run_size),
    ];
    let mut report = CheckReport::default();
    for (types, run) in runs {
        let checks = run(&mut rng, config.samples)?;
        report.widths.push(WidthReport { types, checks });
    }
    Ok(report)
}
