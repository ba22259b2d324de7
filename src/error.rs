use thiserror::Error;

/// Failures surfaced by ring construction, arithmetic and conversion.
///
/// Internal consistency breaks are not represented here: those are
/// programming errors inside the library and abort through assertions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,

    /// An exact coefficient division was required but does not exist in the
    /// coefficient ring.
    #[error("exact division is not possible in the coefficient ring")]
    NotDivisible,

    /// An exactly computed value does not fit the declared coefficient type.
    /// Widening the coefficient ring makes the operation succeed.
    #[error("coefficient does not fit the coefficient ring, use a wider ring")]
    CoefficientOverflow,

    /// A conversion would lose a variable carrying a nonzero exponent.
    #[error("variable `{0}` cannot be represented in the target ring")]
    IncompatibleVariables(String),

    /// Ring construction with a repeated or colliding variable name.
    #[error("duplicate variable name `{0}`")]
    DuplicateVariable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
