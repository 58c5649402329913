use core::ops::{Add, Mul, Neg, Rem, Sub};

use super::poly::Poly;

/// Coefficient-wise sum. The longer operand is copied and the shorter one
/// added into it.
fn add_coeffs(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut coeffs = long.to_vec();
    for (c, &s) in coeffs.iter_mut().zip(short) {
        *c += s;
    }
    coeffs
}

fn neg_coeffs(coeffs: &[f64]) -> Vec<f64> {
    coeffs.iter().map(|&c| -c).collect()
}

/// Naive O(n*m) convolution.
fn mul_coeffs(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let mut coeffs = vec![0.0; lhs.len() + rhs.len() - 1];
    for (i, &a) in lhs.iter().enumerate() {
        for (j, &b) in rhs.iter().enumerate() {
            coeffs[i + j] += a * b;
        }
    }
    coeffs
}

/* ---- Addition ---- */

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        Poly::new(add_coeffs(self.coefficients(), rhs.coefficients()))
    }
}

impl Add<&Poly> for Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        &self + rhs
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

/* ---- Negation and subtraction ---- */

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly::new(neg_coeffs(self.coefficients()))
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self + &(-rhs)
    }
}

impl Sub<&Poly> for Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        &self - rhs
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

/* ---- Multiplication ---- */

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        Poly::new(mul_coeffs(self.coefficients(), rhs.coefficients()))
    }
}

impl Mul<&Poly> for Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        &self * rhs
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

/// Scalar multiplication: polynomial * f64
impl Mul<f64> for Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Poly {
        let coeffs = self.coefficients().iter().map(|&c| c * rhs).collect();
        Poly::new(coeffs)
    }
}

/* ---- Remainder ---- */

/// `a % b` is the single-step remainder [`Poly::rem`].
impl Rem<&Poly> for &Poly {
    type Output = Poly;

    fn rem(self, rhs: &Poly) -> Poly {
        Poly::rem(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{poly, Poly};

    const TOL: f64 = 1e-5;

    fn assert_close(got: &Poly, want: &Poly) {
        assert!(got.approx_eq(want, TOL), "got {:?}, want {:?}", got, want);
    }

    #[test]
    fn add() {
        let cases = [
            (Poly::default(), Poly::default(), Poly::default()),
            (poly![], poly![], poly![]),
            (poly![1, 2], Poly::default(), poly![1, 2]),
            (Poly::default(), poly![1, 2], poly![1, 2]),
            (poly![1, 2], poly![3, 4], poly![4, 6]),
            (poly![1, 2, 3], poly![3, 4], poly![4, 6, 3]),
            (poly![1, 2], poly![3, 4, 5], poly![4, 6, 5]),
            (poly![1, 2, 3], poly![-1, 2, -3], poly![0, 4]),
        ];
        for (p, q, want) in cases {
            assert_close(&(&p + &q), &want);
            assert_close(&(q + p), &want);
        }
    }

    #[test]
    fn add_cancellation_normalizes() {
        let sum = poly![1, 2, 3] + poly![0, 0, -3];
        assert_eq!(sum.coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn neg() {
        assert_eq!(-poly![1, -2], poly![-1, 2]);
        assert!((-Poly::default()).is_zero());
    }

    #[test]
    fn sub() {
        let cases = [
            (Poly::default(), Poly::default(), Poly::default()),
            (poly![], poly![], poly![]),
            (poly![1, 2], Poly::default(), poly![1, 2]),
            (Poly::default(), poly![1, 2], poly![-1, -2]),
            (poly![1, 2], poly![3, 4], poly![-2, -2]),
            (poly![1, 2, 3], poly![3, 4], poly![-2, -2, 3]),
            (poly![1, 2], poly![3, 4, 5], poly![-2, -2, -5]),
            (poly![1, 4, 3], poly![1, 2, 3], poly![0, 2]),
        ];
        for (p, q, want) in cases {
            assert_close(&(p - q), &want);
        }
    }

    #[test]
    fn sub_self_is_zero() {
        let p = poly![1.5, -2, 3];
        let diff = &p - &p;
        assert_eq!(diff.coefficients(), &[0.0]);
    }

    #[test]
    fn mul() {
        let cases = [
            (Poly::default(), Poly::default(), Poly::default()),
            (poly![], poly![], poly![]),
            (poly![1, 2], Poly::default(), Poly::default()),
            (Poly::default(), poly![1, 2], Poly::default()),
            (poly![2, 1], poly![-2, 1], poly![-4, 0, 1]),
            (poly![1, 2], poly![3, 4], poly![3, 10, 8]),
            (poly![1, 2, 3], poly![3, 4], poly![3, 10, 17, 12]),
            (poly![3, 4], poly![1, 2, 3], poly![3, 10, 17, 12]),
        ];
        for (p, q, want) in cases {
            assert_close(&(p * q), &want);
        }
    }

    #[test]
    fn mul_degree_sum() {
        let p = poly![1, 2, 3];
        let q = poly![4, 5];
        assert_eq!((&p * &q).degree(), p.degree() + q.degree());
    }

    #[test]
    fn mul_scalar() {
        assert_eq!(poly![1, 2] * 3.0, poly![3, 6]);
        assert!((poly![1, 2] * 0.0).is_zero());
    }

    #[test]
    fn rem_operator_matches_method() {
        let p = poly![1, 2, 3];
        let q = poly![3, 4];
        assert_eq!(&p % &q, p.rem(&q));
    }

    #[test]
    fn arithmetic_eval_consistency() {
        // (p + q)(x) = p(x) + q(x)
        // (p * q)(x) = p(x) * q(x)
        let p = poly![1, 2];
        let q = poly![3, 4, 5];
        let x = 7.0;

        assert!(((&p + &q).eval(x) - (p.eval(x) + q.eval(x))).abs() <= TOL);
        assert!(((&p * &q).eval(x) - p.eval(x) * q.eval(x)).abs() <= TOL);
    }
}
