use std::{num::ParseIntError, process::ExitCode, str::FromStr};

use clap::{Parser, Subcommand, ValueEnum};
use shift_div_rem::{
    divide_signed, divide_signed_floor, divide_unsigned,
    harness::{run_checks, CheckConfig},
    DivError,
};

#[derive(Parser, Debug)]
#[command(
    name = "long-div",
    about = "Integer long division by shifting, adding, and subtracting"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Check the division functions of every width with random and boundary operands
    Check {
        /// Number of random operand pairs per signedness and width
        #[arg(long, default_value_t = CheckConfig::default().samples)]
        samples: usize,
        /// Seed of the random number generator
        #[arg(long, default_value_t = CheckConfig::default().seed)]
        seed: u64,
    },
    /// Divide two integers and print the quotient and remainder
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: String,
        #[arg(allow_negative_numbers = true)]
        divisor: String,
        /// Integer type of the operands
        #[arg(long, value_enum, default_value_t = IntType::I64)]
        ty: IntType,
        /// Round the quotient toward negative infinity instead of toward zero (signed types
        /// only)
        #[arg(long)]
        floor: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum IntType {
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

#[derive(Debug, thiserror::Error)]
enum DivideError {
    #[error("could not parse `{input}` as {ty}: {source}")]
    Parse {
        input: String,
        ty: &'static str,
        source: ParseIntError,
    },
    #[error(transparent)]
    Div(#[from] DivError),
}

fn parse<T: FromStr<Err = ParseIntError>>(input: &str) -> Result<T, DivideError> {
    input.parse().map_err(|source| DivideError::Parse {
        input: input.to_owned(),
        ty: std::any::type_name::<T>(),
        source,
    })
}

/// Returns the formatted quotient and remainder
fn divide(
    dividend: &str,
    divisor: &str,
    ty: IntType,
    floor: bool,
) -> Result<(String, String), DivideError> {
    macro_rules! unsigned {
        ($uX:ident) => {{
            let (quo, rem) = divide_unsigned(parse::<$uX>(dividend)?, parse::<$uX>(divisor)?)?;
            (quo.to_string(), rem.to_string())
        }};
    }
    macro_rules! signed {
        ($iX:ident) => {{
            let duo = parse::<$iX>(dividend)?;
            let div = parse::<$iX>(divisor)?;
            let (quo, rem) = if floor {
                divide_signed_floor(duo, div)?
            } else {
                divide_signed(duo, div)?
            };
            (quo.to_string(), rem.to_string())
        }};
    }
    Ok(match ty {
        IntType::U8 => unsigned!(u8),
        IntType::U16 => unsigned!(u16),
        IntType::U32 => unsigned!(u32),
        IntType::U64 => unsigned!(u64),
        IntType::U128 => unsigned!(u128),
        IntType::Usize => unsigned!(usize),
        IntType::I8 => signed!(i8),
        IntType::I16 => signed!(i16),
        IntType::I32 => signed!(i32),
        IntType::I64 => signed!(i64),
        IntType::I128 => signed!(i128),
        IntType::Isize => signed!(isize),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    match args.command {
        Command::Check { samples, seed } => match run_checks(&CheckConfig { seed, samples }) {
            Ok(report) => {
                println!("{report}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Command::Divide {
            dividend,
            divisor,
            ty,
            floor,
        } => match divide(&dividend, &divisor, ty, floor) {
            Ok((quo, rem)) => {
                println!("quotient: {quo}");
                println!("remainder: {rem}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(res: (&str, &str)) -> (String, String) {
        (res.0.to_owned(), res.1.to_owned())
    }

    #[test]
    fn divide_types() {
        assert_eq!(
            divide("27", "11", IntType::U8, false).unwrap(),
            strings(("2", "5"))
        );
        assert_eq!(
            divide("-7", "2", IntType::I64, false).unwrap(),
            strings(("-3", "-1"))
        );
        assert_eq!(
            divide("-7", "2", IntType::I64, true).unwrap(),
            strings(("-4", "1"))
        );
        assert_eq!(
            divide("340282366920938463463374607431768211455", "1", IntType::U128, false).unwrap(),
            strings(("340282366920938463463374607431768211455", "0"))
        );
    }

    #[test]
    fn divide_errors() {
        assert!(matches!(
            divide("1", "0", IntType::I32, false),
            Err(DivideError::Div(DivError::DivisionByZero))
        ));
        assert!(matches!(
            divide("-128", "-1", IntType::I8, false),
            Err(DivideError::Div(DivError::MagnitudeOverflow))
        ));
        let err = divide("256", "1", IntType::U8, false).unwrap_err();
        assert!(matches!(err, DivideError::Parse { ty: "u8", .. }));
        assert!(err.to_string().starts_with("could not parse `256` as u8"));
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from(["long-div", "divide", "-7", "-2", "--ty", "i8"]).unwrap();
        assert_eq!(
            args.command,
            Command::Divide {
                dividend: "-7".to_owned(),
                divisor: "-2".to_owned(),
                ty: IntType::I8,
                floor: false,
            }
        );
        let args = Args::try_parse_from(["long-div", "check"]).unwrap();
        assert_eq!(
            args.command,
            Command::Check {
                samples: 100_000,
                seed: 3
            }
        );
        assert!(Args::try_parse_from(["long-div", "divide", "1"]).is_err());
    }
}
