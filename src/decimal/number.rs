// gdecimal: exact base-10 decimal arithmetic
// decimal/number.rs
//
// The Decimal value type and its condition flags.

use crate::coefficient::Coefficient;
use crate::policy::Policy;
use crate::round::round_coefficient;

/// The eight condition flags a [`Decimal`] may carry.
///
/// Flags are sticky within a single operation result but are not cleared
/// automatically between operations; callers combine or reset them with
/// [`Flags::reset`]. Every field is public and independently writable,
/// matching "public read-write booleans".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub clamped: bool,
    pub division_by_zero: bool,
    pub inexact: bool,
    pub invalid_operation: bool,
    pub overflow: bool,
    pub rounded: bool,
    pub subnormal: bool,
    pub underflow: bool,
}

impl Flags {
    /// Clears every flag.
    pub fn reset(&mut self) {
        *self = Flags::default();
    }

    /// Combines two flag sets with a bitwise OR, for callers accumulating
    /// flags across a computation.
    pub fn combine(self, other: Flags) -> Flags {
        Flags {
            clamped: self.clamped || other.clamped,
            division_by_zero: self.division_by_zero || other.division_by_zero,
            inexact: self.inexact || other.inexact,
            invalid_operation: self.invalid_operation || other.invalid_operation,
            overflow: self.overflow || other.overflow,
            rounded: self.rounded || other.rounded,
            subnormal: self.subnormal || other.subnormal,
            underflow: self.underflow || other.underflow,
        }
    }
}

/// An exact base-10 decimal value: `(-1)^sign * coefficient * 10^exponent`,
/// or a signed NaN, or a signed infinity.
///
/// `P` is a compile-time [`Policy`] fixing the precision, rounding mode,
/// optional exponent bounds, and optional condition hooks. Two `Decimal`s
/// under different policies are different types; promote through
/// [`Decimal::from`] to compare or combine
/// them under one policy.
pub struct Decimal<P: Policy> {
    pub(crate) sign: bool,
    pub(crate) is_nan: bool,
    pub(crate) is_inf: bool,
    pub(crate) coeff: P::Coeff,
    pub(crate) exponent: i64,
    /// Condition flags raised while producing this value.
    pub flags: Flags,
}

impl<P: Policy> Clone for Decimal<P> {
    fn clone(&self) -> Self {
        Decimal {
            sign: self.sign,
            is_nan: self.is_nan,
            is_inf: self.is_inf,
            coeff: self.coeff.clone(),
            exponent: self.exponent,
            flags: self.flags,
        }
    }
}

impl<P: Policy> std::fmt::Debug for Decimal<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decimal")
            .field("sign", &self.sign)
            .field("is_nan", &self.is_nan)
            .field("is_inf", &self.is_inf)
            .field("coeff", &self.coeff)
            .field("exponent", &self.exponent)
            .field("flags", &self.flags)
            .finish()
    }
}

impl<P: Policy> Decimal<P> {
    /// The canonical `+0`.
    pub fn zero() -> Self {
        Self::raw_zero(false)
    }

    /// The canonical `+1`.
    pub fn one() -> Self {
        Self {
            sign: false,
            is_nan: false,
            is_inf: false,
            coeff: P::Coeff::one(),
            exponent: 0,
            flags: Flags::default(),
        }
    }

    /// A positive NaN with no payload (Non-goals: no diagnostic
    /// NaN payloads, no signaling NaN).
    pub fn nan() -> Self {
        Self::raw_nan(false)
    }

    /// Signed infinity.
    pub fn infinity(sign: bool) -> Self {
        Self::raw_infinity(sign)
    }

    pub(crate) fn raw_zero(sign: bool) -> Self {
        Self {
            sign,
            is_nan: false,
            is_inf: false,
            coeff: P::Coeff::zero(),
            exponent: 0,
            flags: Flags::default(),
        }
    }

    pub(crate) fn raw_nan(sign: bool) -> Self {
        Self {
            sign,
            is_nan: true,
            is_inf: false,
            coeff: P::Coeff::zero(),
            exponent: 0,
            flags: Flags::default(),
        }
    }

    pub(crate) fn raw_infinity(sign: bool) -> Self {
        Self {
            sign,
            is_nan: false,
            is_inf: true,
            coeff: P::Coeff::zero(),
            exponent: 0,
            flags: Flags::default(),
        }
    }

    /// Rounds `coeff * 10^exponent` to this policy's precision and wires
    /// up the `rounded`/`inexact` flags and hooks,
    /// then applies any configured exponent bounds.
    pub(crate) fn from_coefficient(sign: bool, coeff: P::Coeff, exponent: i64) -> Self {
        let (coeff, exponent, outcome) =
            round_coefficient(coeff, exponent, P::PRECISION, P::ROUNDING_MODE, sign);
        let mut val = Self {
            sign,
            is_nan: false,
            is_inf: false,
            coeff,
            exponent,
            flags: Flags::default(),
        };
        if outcome.inexact {
            val.flags.inexact = true;
            P::on_inexact(&val);
        }
        if outcome.rounded {
            val.flags.rounded = true;
            P::on_rounded(&val);
        }
        val.apply_exponent_bounds()
    }

    fn apply_exponent_bounds(mut self) -> Self {
        if self.is_zero() {
            return self;
        }
        if let Some(max) = P::MAX_EXPONENT {
            if self.exponent > max {
                self.flags.overflow = true;
                P::on_overflow(&self);
            }
        }
        if let Some(min) = P::MIN_EXPONENT {
            if self.exponent < min {
                self.flags.underflow = true;
                self.flags.inexact = true;
                self.flags.rounded = true;
                self.flags.subnormal = true;
                P::on_underflow(&self);
            }
        }
        self
    }

    pub(crate) fn flag_invalid_operation(mut self) -> Self {
        self.flags.invalid_operation = true;
        P::on_invalid_operation(&self);
        self
    }

    pub(crate) fn flag_division_by_zero(mut self) -> Self {
        self.flags.division_by_zero = true;
        P::on_division_by_zero(&self);
        self
    }

    pub(crate) fn flag_overflow(mut self) -> Self {
        self.flags.overflow = true;
        P::on_overflow(&self);
        self
    }

    /// Sign bit: `false` for non-negative, `true` for negative. Applies
    /// to zeros, NaNs, and infinities too.
    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn is_nan(&self) -> bool {
        self.is_nan
    }

    pub fn is_infinite(&self) -> bool {
        self.is_inf
    }

    pub fn is_finite(&self) -> bool {
        !self.is_nan && !self.is_inf
    }

    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.coeff.is_zero()
    }

    pub fn coefficient(&self) -> &P::Coeff {
        &self.coeff
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Clears every condition flag on this value.
    pub fn reset_flags(&mut self) {
        self.flags.reset();
    }

    /// `abs(self)`: clears the sign bit unconditionally.
    pub fn abs(&self) -> Self {
        let mut val = self.clone();
        val.sign = false;
        val
    }

    /// A mutable copy carrying this value's flags.
    pub fn dup(&self) -> Self {
        self.clone()
    }

    /// An immutable copy carrying this value's flags.
    pub fn idup(&self) -> Self {
        self.clone()
    }
}
