use thiserror::Error;

/// Errors produced by field arithmetic, literal parsing and law checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Inverse of, or division by, the zero element of a field.
    #[error("division by zero is undefined")]
    DivisionUndefined,

    /// A non-zero element with no multiplicative inverse (a residue sharing a
    /// factor with a composite modulus).
    #[error("element {element} has no multiplicative inverse")]
    NotInvertible { element: String },

    /// An algebraic law did not hold for the sampled elements.
    #[error("{law} law violated: {lhs} != {rhs}")]
    AxiomViolation {
        law: &'static str,
        lhs: String,
        rhs: String,
    },

    /// Text does not match the literal grammar of the target type.
    #[error("invalid {kind} literal: {input:?}")]
    Parse { kind: &'static str, input: String },

    /// A ratio was built with a zero denominator.
    #[error("ratio denominator must be non-zero")]
    ZeroDenominator,

    /// A finite field was requested with a modulus below 2.
    #[error("modulus {0} is too small, expected at least 2")]
    InvalidModulus(u64),

    /// The complex logarithm of zero.
    #[error("logarithm of zero is undefined")]
    LogarithmOfZero,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Error::Parse {
            kind,
            input: input.to_owned(),
        }
    }
}
