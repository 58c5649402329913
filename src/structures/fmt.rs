use core::fmt;

use super::poly::Poly;

/// Terms with a smaller coefficient magnitude are not rendered.
const DISPLAY_THRESHOLD: f64 = 0.0001;

/// Decimal digits printed per coefficient unless the formatter asks for
/// another precision.
const DEFAULT_PRECISION: usize = 3;

/// Renders highest degree first, e.g. `4.000x^4 + 2.000x^2 - x - 3.000`.
///
/// Coefficients of magnitude one are elided on non-constant terms. A
/// precision such as `{:.1}` overrides the default of three decimals.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);

        let mut first = true;
        for (e, &c) in self.coefficients().iter().enumerate().rev() {
            let abs = c.abs();
            // the constant term is kept when nothing else was written
            if abs < DISPLAY_THRESHOLD && !(first && e == 0) {
                continue;
            }

            let mut value = c;
            if !first {
                f.write_str(if c < 0.0 { " - " } else { " + " })?;
                value = abs;
            }

            if abs != 1.0 || e == 0 {
                // + 0.0 turns -0.0 into 0.0
                write!(f, "{:.*}", precision, value + 0.0)?;
            } else if first && c < 0.0 {
                f.write_str("-")?;
            }

            match e {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", e)?,
            }
            first = false;
        }

        Ok(())
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&self.coefficients()).finish()
    }
}
