//! Single-variable polynomials with `f64` coefficients.
//!
//! [`Poly`] is an immutable value type: arithmetic goes through the standard
//! operators, and calculus and division are methods returning new values.
//!
//! ```
//! use fpoly::{poly, Poly};
//!
//! let p = poly![-3, -1, 2, 0, 4];
//! assert_eq!(p.to_string(), "4.000x^4 + 2.000x^2 - x - 3.000");
//!
//! let q = &poly![3, 4] * &poly![1, 2, 3];
//! assert_eq!(q, poly![3, 10, 17, 12]);
//! assert_eq!(q.derivative(), poly![10, 34, 36]);
//! assert_eq!(Poly::default(), poly![0]);
//! ```

pub mod error;
pub mod structures;

pub use error::{PolyError, Result};
pub use structures::poly::Poly;

/// Build a [`Poly`] from coefficients in ascending order of degree.
///
/// Each argument is converted with `f64::from`, so integer and float literals
/// can be mixed. With no arguments the zero polynomial is returned.
///
/// ```
/// use fpoly::poly;
///
/// let p = poly![1, 2.5, 3]; // 1 + 2.5x + 3x^2
/// assert_eq!(p.degree(), 2);
/// assert!(poly![].is_zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::zero()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(vec![$(f64::from($c)),+])
    };
}
