//! Error types raised by the AD core and the optimizers.

use thiserror::Error;

/// All recoverable failures of the crate.
///
/// Every variant is a local, synchronous failure raised at the point of the
/// violating operation; values returned before the failure are immutable and
/// unaffected by it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdError {
    /// An elementary function's input value lies outside its documented domain.
    #[error("`{func}` domain error: input value {value} is outside {domain}")]
    Domain {
        func: &'static str,
        value: f64,
        domain: &'static str,
    },
    /// Division with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
    /// Zero raised to a non-positive power.
    #[error("zero base cannot be raised to the non-positive power {exponent}")]
    ZeroBasePower { exponent: f64 },
    /// A plain number was supplied where a dual number coordinate is required.
    #[error("coordinate {index} is a plain number, not a dual number")]
    NotDifferentiable { index: usize },
    /// Two vector operands have different lengths.
    #[error("vector operands have unequal lengths ({lhs} and {rhs})")]
    ShapeMismatch { lhs: usize, rhs: usize },
    /// `vars` and `dual` arguments of a constructor disagree in length.
    #[error("`vars` and `dual` must have the same length ({vars} and {dual})")]
    LengthMismatch { vars: usize, dual: usize },
    /// A primitive name was declared twice within one differentiation episode.
    #[error("variable name `{0}` was already declared in this episode")]
    NameCollision(String),
}
