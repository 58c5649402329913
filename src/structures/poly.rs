use crate::error::{PolyError, Result};

/// Effective coefficients of a polynomial with empty storage.
const ZERO_COEFFS: &[f64] = &[0.0];

/// Polynomial in one variable with `f64` coefficients.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// Trailing zero coefficients are removed on construction, but the constant
/// term is always kept, so the zero polynomial is `[0.0]` and has degree 0.
/// `Poly::default()` has empty storage and behaves exactly like `[0.0]`.
#[derive(Clone, Default)]
pub struct Poly {
    coeffs: Vec<f64>,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::Poly;
    ///
    /// // 3 + 2x + x^2
    /// let p = Poly::new(vec![3.0, 2.0, 1.0]);
    /// assert_eq!(p.degree(), 2);
    ///
    /// let z = Poly::new(vec![0.0, 0.0, 0.0]);
    /// assert_eq!(z.degree(), 0);
    /// assert_eq!(z.coefficients(), &[0.0]);
    /// ```
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create a polynomial, rejecting NaN and infinite coefficients.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::{Poly, PolyError};
    ///
    /// assert!(Poly::try_new(vec![1.0, 2.0]).is_ok());
    /// assert!(matches!(
    ///     Poly::try_new(vec![1.0, f64::NAN]),
    ///     Err(PolyError::NonFiniteCoefficient { index: 1, .. })
    /// ));
    /// ```
    pub fn try_new(coeffs: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            tracing::debug!(index, value, "rejecting non-finite coefficient");
            return Err(PolyError::NonFiniteCoefficient { index, value });
        }
        Ok(Self::new(coeffs))
    }

    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0.0],
        }
    }

    /// Create a constant polynomial.
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![0.0, 1.0],
        }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::Poly;
    ///
    /// let m = Poly::monomial(3.0, 2); // 3x^2
    /// assert_eq!(m.degree(), 2);
    /// assert_eq!(m.eval(2.0), 12.0);
    /// ```
    pub fn monomial(c: f64, n: usize) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Generate a polynomial of degree at most `degree` with coefficients
    /// drawn uniformly from `[-1, 1)`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, degree: usize) -> Self {
        let coeffs = (0..=degree).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self::new(coeffs)
    }

    /// Coefficients in ascending order of degree.
    ///
    /// Never empty: a default-constructed polynomial yields `[0.0]`.
    pub fn coefficients(&self) -> &[f64] {
        if self.coeffs.is_empty() {
            ZERO_COEFFS
        } else {
            &self.coeffs
        }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients() == ZERO_COEFFS
    }

    /// Get the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0, same as any other constant.
    pub fn degree(&self) -> usize {
        self.coefficients().len() - 1
    }

    /// Get the coefficient at index `degree()`.
    pub fn leading_coeff(&self) -> f64 {
        self.coefficients()[self.degree()]
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> f64 {
        self.coefficients().get(i).copied().unwrap_or(0.0)
    }

    /// Get the coefficient of `x^i` for a signed index.
    ///
    /// Negative indices and indices beyond the degree yield zero.
    pub fn coeff_signed(&self, i: i64) -> f64 {
        usize::try_from(i).map_or(0.0, |i| self.coeff(i))
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::poly;
    ///
    /// // p(x) = -1 + 2x - 3x^2
    /// let p = poly![-1, 2, -3];
    /// assert_eq!(p.eval(2.5), -14.75);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients()
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Remove trailing zero coefficients, keeping the constant term.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0.0);
        }
    }

    /// One step of Euclidean division: cancel the leading term of `self`
    /// against `divisor` and return what is left.
    ///
    /// If `deg(self) >= deg(divisor)`, the result is
    /// `self - (lc(self) / lc(divisor)) * x^(deg(self) - deg(divisor)) * divisor`.
    /// Otherwise `self` is returned unchanged. Only a single reduction is
    /// performed, so the result may still have degree `>= deg(divisor)`; use
    /// [`Poly::div_rem`] for the full remainder.
    ///
    /// A zero divisor is not rejected: the coefficients of the result become
    /// NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::poly;
    ///
    /// let r = poly![1, 2, 3].rem(&poly![3, 4]);
    /// assert_eq!(r, poly![1, -0.25]);
    ///
    /// // Dividend of lower degree is returned as is.
    /// assert_eq!(poly![3, 4].rem(&poly![1, 2, 3]), poly![3, 4]);
    /// ```
    pub fn rem(&self, divisor: &Self) -> Self {
        let d = divisor.degree();
        let n = self.degree();
        if n < d {
            return self.clone();
        }

        let lc = divisor.leading_coeff();
        if lc == 0.0 {
            tracing::warn!(dividend_degree = n, "remainder by the zero polynomial");
        }

        let term = Self::monomial(self.leading_coeff() / lc, n - d);
        self - &(term * divisor)
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and either
    /// `deg(r) < deg(divisor)` or `divisor` is a nonzero constant and `r` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroDivisor`] if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::poly;
    ///
    /// // (x^2 - 1) / (x - 1) = x + 1, remainder 0
    /// let (q, r) = poly![-1, 0, 1].div_rem(&poly![-1, 1]).unwrap();
    /// assert_eq!(q, poly![1, 1]);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(PolyError::ZeroDivisor);
        }

        let d = divisor.degree();
        let n = self.degree();
        if n < d {
            return Ok((Self::zero(), self.clone()));
        }

        let lc = divisor.leading_coeff();
        let mut remainder = self.coefficients().to_vec();
        let mut quotient = vec![0.0; n - d + 1];

        for shift in (0..quotient.len()).rev() {
            let t = remainder[shift + d] / lc;
            quotient[shift] = t;

            // remainder -= t * x^shift * divisor
            for (i, &dc) in divisor.coefficients().iter().enumerate() {
                remainder[shift + i] -= t * dc;
            }
            remainder[shift + d] = 0.0;
            tracing::trace!(shift, term = t, "division step");
        }

        remainder.truncate(d);
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Compute the derivative of this polynomial.
    ///
    /// Each term `c * x^i` becomes `i * c * x^(i-1)`; constants vanish.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::poly;
    ///
    /// assert_eq!(poly![1, 2, 3].derivative(), poly![2, 6]);
    /// assert!(poly![7].derivative().is_zero());
    /// ```
    pub fn derivative(&self) -> Self {
        let coeffs = self.coefficients();
        if coeffs.len() <= 1 {
            return Self::zero();
        }

        let coeffs = coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * i as f64)
            .collect();
        Self::new(coeffs)
    }

    /// Compute the antiderivative whose constant term is `k`.
    ///
    /// # Example
    ///
    /// ```
    /// use fpoly::poly;
    ///
    /// // ∫ (1 + 4x) dx = 5 + x + 2x^2 with k = 5
    /// assert_eq!(poly![1, 4].integral(5.0), poly![5, 1, 2]);
    /// ```
    pub fn integral(&self, k: f64) -> Self {
        let src = self.coefficients();
        let mut coeffs = Vec::with_capacity(src.len() + 1);
        coeffs.push(k);
        coeffs.extend(src.iter().enumerate().map(|(i, &c)| c / (i + 1) as f64));
        Self::new(coeffs)
    }

    /// Integrate over `[a, b]`.
    pub fn definite_integral(&self, a: f64, b: f64) -> f64 {
        let antiderivative = self.integral(0.0);
        antiderivative.eval(b) - antiderivative.eval(a)
    }

    /// Compare coefficient-wise within an absolute tolerance.
    ///
    /// Polynomials of different degree are never approximately equal.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let (a, b) = (self.coefficients(), other.coefficients());
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

impl From<Vec<f64>> for Poly {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Poly {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Poly {
    fn from(coeffs: [f64; N]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl FromIterator<f64> for Poly {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the vector of effective coefficients
        serde::Serialize::serialize(self.coefficients(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = <Vec<f64> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}
