/// The reason a division could not produce a quotient and remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum DivError {
    /// The divisor is zero
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// The magnitude of a signed result does not fit in the signed type. With two's complement
    /// this only happens when dividing `MIN` by `-1`, since the quotient would be `MAX + 1`.
    #[error("quotient magnitude overflows the signed range")]
    MagnitudeOverflow,
}

#[cfg(test)]
mod tests {
    use super::DivError;

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(
            DivError::DivisionByZero.to_string(),
            "attempt to divide by zero"
        );
        assert_eq!(
            DivError::MagnitudeOverflow.to_string(),
            "quotient magnitude overflows the signed range"
        );
    }

    #[test]
    fn ordering() {
        assert!(DivError::DivisionByZero < DivError::MagnitudeOverflow);
    }
}
