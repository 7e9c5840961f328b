// gdecimal: exact base-10 decimal arithmetic
// decimal/fmt.rs
//
// Display: plain fixed-point text, never scientific
// notation. This model has no "engineering string" non-goal carve-out,
// so there's no threshold to pick a scientific form at, only one rule.

use crate::coefficient::Coefficient;
use crate::decimal::Decimal;
use crate::policy::Policy;

impl<P: Policy> std::fmt::Display for Decimal<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sign() {
            write!(f, "-")?;
        }
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_infinite() {
            return write!(f, "Infinity");
        }

        let digits = self.coeff.to_decimal_string();
        let exponent = self.exponent;

        if exponent >= 0 {
            write!(f, "{digits}")?;
            for _ in 0..exponent {
                write!(f, "0")?;
            }
            return Ok(());
        }

        let num_digits = digits.len() as i64;
        let point = num_digits + exponent;
        if point > 0 {
            let at = point as usize;
            write!(f, "{}.{}", &digits[..at], &digits[at..])
        } else {
            write!(f, "0.")?;
            for _ in 0..(-point) {
                write!(f, "0")?;
            }
            write!(f, "{digits}")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::policy::Abort;
    use crate::Decimal;

    type D = Decimal<Abort>;

    #[test]
    fn displays_integers_plainly() {
        assert_eq!(D::parse("123").to_string(), "123");
        assert_eq!(D::parse("-5").to_string(), "-5");
    }

    #[test]
    fn displays_fractions_with_leading_zero() {
        assert_eq!(D::parse("0.5").to_string(), "0.5");
        assert_eq!(D::parse(".25").to_string(), "0.25");
    }

    #[test]
    fn displays_small_magnitudes_without_scientific_notation() {
        assert_eq!(D::parse("7.7E-11").to_string(), "0.000000000077");
    }

    #[test]
    fn displays_special_values() {
        assert_eq!(D::nan().to_string(), "NaN");
        assert_eq!(D::infinity(false).to_string(), "Infinity");
        assert_eq!(D::infinity(true).to_string(), "-Infinity");
    }

    #[test]
    fn round_trips_through_parse() {
        for s in ["123", "-5.5", "0.0001", "1000000"] {
            let d = D::parse(s);
            let reparsed = D::parse(&d.to_string());
            assert_eq!(d, reparsed);
        }
    }
}
