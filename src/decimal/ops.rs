// gdecimal: exact base-10 decimal arithmetic
// decimal/ops.rs
//
// Binary +, -, x, /, unary +/- and increment/decrement.
// Case-splits on NaN/infinity/finite before touching coefficients,
// generalized from binary floating point to decimal exponents.

use std::cmp::Ordering;

use crate::coefficient::{self, Coefficient};
use crate::decimal::Decimal;
use crate::policy::Policy;
use crate::round::RoundingMode;

impl<P: Policy> Decimal<P> {
    /// Unary `+`: an unchanged copy. Rust has no unary `+`
    /// operator to overload, so this is a plain method.
    pub fn plus(&self) -> Self {
        self.clone()
    }

    /// Pre-increment: `self += 1` in place.
    pub fn incr(&mut self) {
        *self = add(self, &Decimal::one());
    }

    /// Pre-decrement: `self -= 1` in place.
    pub fn decr(&mut self) {
        *self = sub(self, &Decimal::one());
    }
}

impl<P: Policy> std::ops::Neg for Decimal<P> {
    type Output = Decimal<P>;

    /// Flips the sign unless the value is zero or NaN.
    fn neg(self) -> Self::Output {
        let mut v = self;
        if (v.is_finite() && !v.is_zero()) || v.is_infinite() {
            v.sign = !v.sign;
        }
        v
    }
}

impl<P: Policy> std::ops::Neg for &Decimal<P> {
    type Output = Decimal<P>;

    fn neg(self) -> Self::Output {
        -(self.clone())
    }
}

/// Flips a coefficient's sign unconditionally, used to turn subtraction
/// into addition. Unlike `Neg`, zero's sign flips too: the
/// zero-result sign rule in [`add`] needs to see both original signs.
fn flip_sign<P: Policy>(v: &Decimal<P>) -> Decimal<P> {
    let mut c = v.clone();
    c.sign = !c.sign;
    c
}

fn add<P: Policy>(l: &Decimal<P>, r: &Decimal<P>) -> Decimal<P> {
    if l.is_nan() {
        return Decimal::raw_nan(l.sign());
    }
    if r.is_nan() {
        return Decimal::raw_nan(r.sign());
    }

    if l.is_infinite() || r.is_infinite() {
        return match (l.is_infinite(), r.is_infinite()) {
            (true, true) => {
                if l.sign() == r.sign() {
                    Decimal::raw_infinity(l.sign())
                } else {
                    Decimal::raw_nan(false).flag_invalid_operation()
                }
            }
            (true, false) => Decimal::raw_infinity(l.sign()),
            (false, true) => Decimal::raw_infinity(r.sign()),
            (false, false) => unreachable!(),
        };
    }

    match align(l, r) {
        Alignment::Aligned(c1, c2, exp) => {
            let (raw_sign, coeff) = combine(l.sign(), r.sign(), c1, c2);
            let sign = zero_sign_rule::<P>(l.sign(), r.sign(), raw_sign, coeff.is_zero());
            Decimal::from_coefficient(sign, coeff, exp)
        }
        Alignment::Overflowed { larger_sign } => {
            if P::MAX_EXPONENT.is_some() || P::MIN_EXPONENT.is_some() {
                Decimal::raw_infinity(larger_sign).flag_overflow()
            } else {
                panic!(
                    "gdecimal: exponent alignment overflowed the coefficient \
                     backend and no exponent bounds are configured to \
                     recover into"
                );
            }
        }
    }
}

fn sub<P: Policy>(l: &Decimal<P>, r: &Decimal<P>) -> Decimal<P> {
    // Open question: sign of the first NaN operand wins;
    // subtraction never flips a NaN's sign.
    if r.is_nan() {
        return if l.is_nan() {
            Decimal::raw_nan(l.sign())
        } else {
            Decimal::raw_nan(r.sign())
        };
    }
    add(l, &flip_sign(r))
}

fn mul<P: Policy>(l: &Decimal<P>, r: &Decimal<P>) -> Decimal<P> {
    if l.is_nan() {
        return Decimal::raw_nan(l.sign());
    }
    if r.is_nan() {
        return Decimal::raw_nan(r.sign());
    }

    let sign = l.sign() != r.sign();

    if l.is_infinite() && r.is_infinite() {
        return Decimal::raw_infinity(sign);
    }
    if l.is_infinite() {
        return if r.is_zero() {
            Decimal::raw_nan(false).flag_invalid_operation()
        } else {
            Decimal::raw_infinity(sign)
        };
    }
    if r.is_infinite() {
        return if l.is_zero() {
            Decimal::raw_nan(false).flag_invalid_operation()
        } else {
            Decimal::raw_infinity(sign)
        };
    }

    let coeff = l
        .coeff
        .checked_mul(&r.coeff)
        .expect("gdecimal: multiplication overflowed the coefficient backend");
    let exponent = l.exponent + r.exponent;
    Decimal::from_coefficient(sign, coeff, exponent)
}

fn div<P: Policy>(l: &Decimal<P>, r: &Decimal<P>) -> Decimal<P> {
    if l.is_nan() {
        return Decimal::raw_nan(l.sign());
    }
    if r.is_nan() {
        return Decimal::raw_nan(r.sign());
    }

    let sign = l.sign() != r.sign();

    if l.is_infinite() && r.is_infinite() {
        return Decimal::raw_nan(false).flag_invalid_operation();
    }
    if l.is_zero() && r.is_zero() {
        return Decimal::raw_nan(false).flag_division_by_zero();
    }
    if l.is_infinite() {
        return Decimal::raw_infinity(sign);
    }
    if r.is_infinite() {
        return Decimal::raw_zero(sign);
    }
    if r.is_zero() {
        return Decimal::raw_infinity(sign)
            .flag_division_by_zero()
            .flag_invalid_operation();
    }
    if l.is_zero() {
        return Decimal::from_coefficient(sign, P::Coeff::zero(), l.exponent - r.exponent);
    }

    long_division(sign, l, r)
}

/// Long division in base 10 to exactly `precision + 1` digits, then
/// rounded down to `precision`.
fn long_division<P: Policy>(sign: bool, l: &Decimal<P>, r: &Decimal<P>) -> Decimal<P> {
    let mut dividend = l.coeff.clone();
    let mut divisor = r.coeff.clone();
    let mut res = P::Coeff::zero();
    let mut adjust: i64 = 0;
    let precision = P::PRECISION;

    while coefficient::cmp(&dividend, &divisor) == Ordering::Less {
        dividend = dividend.push_digit(0);
        adjust += 1;
    }
    loop {
        let divisor_x10 = divisor.push_digit(0);
        if coefficient::cmp(&dividend, &divisor_x10) == Ordering::Less {
            break;
        }
        divisor = divisor_x10;
        adjust -= 1;
    }

    loop {
        while coefficient::cmp(&divisor, &dividend) != Ordering::Greater {
            dividend = dividend.sub(&divisor);
            res = res
                .checked_add(&P::Coeff::one())
                .expect("gdecimal: division result overflowed the coefficient backend");
        }
        if (dividend.is_zero() && adjust >= 0) || res.digits() == precision + 1 {
            break;
        }
        res = res.push_digit(0);
        dividend = dividend.push_digit(0);
        adjust += 1;
    }

    let exponent = l.exponent() - r.exponent() - adjust;
    Decimal::from_coefficient(sign, res, exponent)
}

enum Alignment<C> {
    Aligned(C, C, i64),
    Overflowed { larger_sign: bool },
}

fn align<P: Policy>(l: &Decimal<P>, r: &Decimal<P>) -> Alignment<P::Coeff> {
    let exp = l.exponent.min(r.exponent);
    let c1 = match scale_to(l, exp) {
        Some(c) => c,
        None => {
            return Alignment::Overflowed {
                larger_sign: l.sign(),
            }
        }
    };
    let c2 = match scale_to(r, exp) {
        Some(c) => c,
        None => {
            return Alignment::Overflowed {
                larger_sign: r.sign(),
            }
        }
    };
    Alignment::Aligned(c1, c2, exp)
}

fn scale_to<P: Policy>(v: &Decimal<P>, target_exp: i64) -> Option<P::Coeff> {
    if v.exponent == target_exp {
        return Some(v.coeff.clone());
    }
    let shift = (v.exponent - target_exp) as u32;
    v.coeff.checked_mul_pow10(shift)
}

/// Adds (same sign) or subtracts the smaller magnitude from the larger
/// (opposite signs); the caller still has to apply the zero-sign rule.
fn combine<C: Coefficient>(s1: bool, s2: bool, c1: C, c2: C) -> (bool, C) {
    if s1 == s2 {
        (
            s1,
            c1.checked_add(&c2)
                .expect("gdecimal: aligned addition overflowed the coefficient backend"),
        )
    } else {
        match coefficient::cmp(&c1, &c2) {
            Ordering::Equal => (false, c1.sub(&c2)),
            Ordering::Greater => (s1, c1.sub(&c2)),
            Ordering::Less => (s2, c2.sub(&c1)),
        }
    }
}

/// Sign of a zero addition result: `+0` unless both
/// operands were negative, or the rounding mode is `Floor` and the
/// operand signs differed.
fn zero_sign_rule<P: Policy>(s1: bool, s2: bool, raw_sign: bool, is_zero: bool) -> bool {
    if !is_zero {
        return raw_sign;
    }
    if s1 && s2 {
        return true;
    }
    if s1 != s2 && P::ROUNDING_MODE == RoundingMode::Floor {
        return true;
    }
    false
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $func:ident) => {
        impl<P: Policy> std::ops::$trait<Decimal<P>> for Decimal<P> {
            type Output = Decimal<P>;
            fn $method(self, rhs: Decimal<P>) -> Decimal<P> {
                $func(&self, &rhs)
            }
        }

        impl<P: Policy> std::ops::$trait<&Decimal<P>> for Decimal<P> {
            type Output = Decimal<P>;
            fn $method(self, rhs: &Decimal<P>) -> Decimal<P> {
                $func(&self, rhs)
            }
        }

        impl<P: Policy> std::ops::$trait<Decimal<P>> for &Decimal<P> {
            type Output = Decimal<P>;
            fn $method(self, rhs: Decimal<P>) -> Decimal<P> {
                $func(self, &rhs)
            }
        }

        impl<P: Policy> std::ops::$trait<&Decimal<P>> for &Decimal<P> {
            type Output = Decimal<P>;
            fn $method(self, rhs: &Decimal<P>) -> Decimal<P> {
                $func(self, rhs)
            }
        }

        impl<P: Policy> std::ops::$assign_trait<Decimal<P>> for Decimal<P> {
            fn $assign_method(&mut self, rhs: Decimal<P>) {
                *self = $func(self, &rhs);
            }
        }

        impl<P: Policy> std::ops::$assign_trait<&Decimal<P>> for Decimal<P> {
            fn $assign_method(&mut self, rhs: &Decimal<P>) {
                *self = $func(self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul);
impl_binop!(Div, div, DivAssign, div_assign, div);

macro_rules! impl_mixed_binop {
    ($native:ty) => {
        impl<P: Policy> std::ops::Add<$native> for Decimal<P> {
            type Output = Decimal<P>;
            fn add(self, rhs: $native) -> Decimal<P> {
                add(&self, &Decimal::from(rhs))
            }
        }
        impl<P: Policy> std::ops::Sub<$native> for Decimal<P> {
            type Output = Decimal<P>;
            fn sub(self, rhs: $native) -> Decimal<P> {
                sub(&self, &Decimal::from(rhs))
            }
        }
        impl<P: Policy> std::ops::Mul<$native> for Decimal<P> {
            type Output = Decimal<P>;
            fn mul(self, rhs: $native) -> Decimal<P> {
                mul(&self, &Decimal::from(rhs))
            }
        }
        impl<P: Policy> std::ops::Div<$native> for Decimal<P> {
            type Output = Decimal<P>;
            fn div(self, rhs: $native) -> Decimal<P> {
                div(&self, &Decimal::from(rhs))
            }
        }
    };
}

impl_mixed_binop!(i64);
impl_mixed_binop!(i128);
impl_mixed_binop!(f64);

#[cfg(test)]
mod tests {
    use crate::policy::{Abort, HighPrecision};
    use crate::Decimal;

    #[test]
    fn scenario_subtraction_small_exponents() {
        let l: Decimal<HighPrecision> = Decimal::parse("1.23E-10");
        let r: Decimal<HighPrecision> = Decimal::parse("2.00E-10");
        let result = l - r;
        assert_eq!(result.to_string(), "-0.000000000077");
    }

    #[test]
    fn scenario_division_one_third() {
        let l: Decimal<Abort> = Decimal::parse("1");
        let r: Decimal<Abort> = Decimal::parse("3");
        let result = l / r;
        assert_eq!(result.to_string(), "0.333333333");
        assert!(result.flags.inexact);
        assert!(result.flags.rounded);
        assert!(!result.flags.division_by_zero);
        assert!(!result.flags.invalid_operation);
    }

    #[test]
    fn scenario_infinity_minus_infinity() {
        let l: Decimal<Abort> = Decimal::infinity(false);
        let r: Decimal<Abort> = Decimal::infinity(false);
        let result = l - r;
        assert!(result.is_nan());
        assert!(result.flags.invalid_operation);
    }

    #[test]
    fn scenario_nonzero_div_zero() {
        let l: Decimal<Abort> = Decimal::parse("1000");
        let r: Decimal<Abort> = Decimal::parse("0");
        let result = l / r;
        assert!(result.is_infinite());
        assert!(result.flags.division_by_zero);
        assert!(result.flags.invalid_operation);
    }

    #[test]
    fn identity_properties() {
        let d: Decimal<Abort> = Decimal::parse("42.5");
        assert_eq!(d.clone() * Decimal::one(), d);
        assert_eq!(d.clone() / Decimal::one(), d);
        let sum = d.clone() + (-d.clone());
        assert!(sum.is_zero());
    }

    #[test]
    fn incr_decr_in_place() {
        let mut d: Decimal<Abort> = Decimal::parse("5");
        d.incr();
        assert_eq!(d.to_string(), "6");
        d.decr();
        d.decr();
        assert_eq!(d.to_string(), "4");
    }
}
