use thiserror::Error;

/// Result alias for the checked polynomial operations.
pub type Result<T> = core::result::Result<T, PolyError>;

/// Errors returned by the checked polynomial operations.
///
/// The arithmetic operators and the single-step [`Poly::rem`](crate::Poly::rem)
/// never fail; only [`Poly::try_new`](crate::Poly::try_new) and
/// [`Poly::div_rem`](crate::Poly::div_rem) report errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    /// Full division by the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// A coefficient is NaN or infinite.
    #[error("non-finite coefficient {value} at index {index}")]
    NonFiniteCoefficient { index: usize, value: f64 },
}
