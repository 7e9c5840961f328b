// gdecimal: exact base-10 decimal arithmetic
// decimal/cast.rs
//
// Conversions in and out of Decimal. Construction
// from native integers stays exact; going the other way (to f64) is
// inherently lossy and is documented as such rather than guarded.

use crate::coefficient::Coefficient;
use crate::decimal::Decimal;
use crate::policy::Policy;

fn coeff_from_digits<C: Coefficient>(digits: &str) -> C {
    digits
        .bytes()
        .fold(C::zero(), |acc, b| acc.push_digit(b - b'0'))
}

impl<P: Policy> From<i64> for Decimal<P> {
    fn from(v: i64) -> Self {
        let sign = v < 0;
        Decimal::from_coefficient(sign, P::Coeff::from_u64(v.unsigned_abs()), 0)
    }
}

impl<P: Policy> From<i128> for Decimal<P> {
    fn from(v: i128) -> Self {
        let sign = v < 0;
        let coeff = coeff_from_digits::<P::Coeff>(&v.unsigned_abs().to_string());
        Decimal::from_coefficient(sign, coeff, 0)
    }
}

impl<P: Policy> From<f64> for Decimal<P> {
    /// Round-trips through Rust's own shortest decimal rendering of `v`
    /// and reuses the text grammar parser, rather than
    /// hand-rolling binary-to-decimal conversion.
    fn from(v: f64) -> Self {
        if v.is_nan() {
            return Decimal::raw_nan(v.is_sign_negative());
        }
        if v.is_infinite() {
            return Decimal::raw_infinity(v < 0.0);
        }
        Decimal::parse(&format!("{v}"))
    }
}

impl<P: Policy> Decimal<P> {
    /// `true` for NaN/Infinity, or any finite value whose magnitude is
    /// at least 1; `false` for zero and for finite values strictly
    /// between -1 and 1.
    pub fn to_bool(&self) -> bool {
        if !self.is_finite() {
            return true;
        }
        if self.is_zero() {
            return false;
        }
        let adjusted = self.exponent() + self.coeff.digits() as i64 - 1;
        adjusted >= 0
    }

    /// Lossy conversion to `f64`, going through the coefficient's own
    /// `f64` approximation scaled by `10^exponent`.
    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return if self.sign() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        let magnitude = self.coeff.to_f64() * 10f64.powi(self.exponent() as i32);
        if self.sign() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl<P: Policy> From<&Decimal<P>> for bool {
    fn from(v: &Decimal<P>) -> bool {
        v.to_bool()
    }
}

impl<P: Policy> From<Decimal<P>> for bool {
    fn from(v: Decimal<P>) -> bool {
        v.to_bool()
    }
}

impl<P: Policy> From<&Decimal<P>> for f64 {
    fn from(v: &Decimal<P>) -> f64 {
        v.to_f64()
    }
}

impl<P: Policy> From<Decimal<P>> for f64 {
    fn from(v: Decimal<P>) -> f64 {
        v.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use crate::policy::Abort;
    use crate::Decimal;

    type D = Decimal<Abort>;

    #[test]
    fn from_i64_roundtrips_sign_and_magnitude() {
        let d: D = Decimal::from(-42i64);
        assert!(d.sign());
        assert_eq!(d.to_string(), "-42");
        let min: D = Decimal::from(i64::MIN);
        assert!(min.sign());
    }

    #[test]
    fn from_f64_plain_value() {
        let d: D = Decimal::from(3.5f64);
        assert_eq!(d.to_string(), "3.5");
    }

    #[test]
    fn from_f64_special_values() {
        let nan: D = Decimal::from(f64::NAN);
        assert!(nan.is_nan());
        let inf: D = Decimal::from(f64::INFINITY);
        assert!(inf.is_infinite());
        assert!(!inf.sign());
    }

    #[test]
    fn bool_cast_matches_magnitude_threshold() {
        assert!(!D::parse("0").to_bool());
        assert!(!D::parse("0.5").to_bool());
        assert!(D::parse("1").to_bool());
        assert!(D::parse("-1.5").to_bool());
        assert!(D::nan().to_bool());
        assert!(D::infinity(false).to_bool());
    }

    #[test]
    fn f64_cast_is_approximately_right() {
        let d: D = D::parse("2.5");
        assert!((d.to_f64() - 2.5).abs() < 1e-9);
    }
}
