//! Two-operand arithmetic behind the calculator endpoint.

use std::str::FromStr;

use thiserror::Error;

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operation {
    /// `a + b`.
    #[default]
    Add,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
    /// `a / b`.
    Divide,
}

/// Why a calculation produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The operation name was not recognised.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    /// The result overflowed or was not a number.
    #[error("result is not a finite number")]
    NotFinite,
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(CalculationError::UnknownOperation(other.to_owned())),
        }
    }
}

/// Apply `operation` to `a` and `b`.
///
/// # Examples
/// ```
/// use userdesk::domain::{Operation, calculate};
///
/// assert_eq!(calculate(7.0, 2.0, Operation::Divide), Ok(3.5));
/// ```
///
/// # Errors
/// [`CalculationError::DivisionByZero`] when dividing by zero, and
/// [`CalculationError::NotFinite`] when the result overflows.
pub fn calculate(a: f64, b: f64, operation: Operation) -> Result<f64, CalculationError> {
    let result = match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide if b == 0.0 => return Err(CalculationError::DivisionByZero),
        Operation::Divide => a / b,
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalculationError::NotFinite)
    }
}
