/*!
Compile-time configuration for [`Decimal`][crate::decimal::Decimal].

A [`Policy`] bundles precision, rounding mode, optional exponent bounds,
and optional per-condition callbacks behind a single associated type,
the coefficient backend: picking it is a compile-time decision a
`Policy` implementation makes once, and every `Decimal<P>` built under
that policy shares the same representation.

Hook methods default to empty bodies. Because `Decimal<P>`'s arithmetic is
monomorphized per `P`, an unoverridden hook compiles away entirely:
"absent" and "present" are distinguished statically, not by a runtime
`Option<fn>` check.
*/

use crate::coefficient::Coefficient;
use crate::decimal::Decimal;
use crate::round::RoundingMode;

/// Compile-time policy parameterizing a [`Decimal`].
pub trait Policy: Clone + std::fmt::Debug + 'static {
    /// The coefficient backend this policy's precision calls for:
    /// `u64` for precision <= 9, `u128` for 9 < precision <= 19,
    /// `rug::Integer` beyond that.
    type Coeff: Coefficient;

    /// Maximum number of significant decimal digits a coefficient may
    /// carry after any operation completes.
    const PRECISION: u32;

    const ROUNDING_MODE: RoundingMode;

    /// Exponent bounds. `None` means unbounded; `overflow`/`underflow`/
    /// `subnormal`/`clamped` are only observable when these are `Some`.
    const MAX_EXPONENT: Option<i64> = None;
    const MIN_EXPONENT: Option<i64> = None;

    fn on_clamped(_val: &Decimal<Self>) {}
    fn on_rounded(_val: &Decimal<Self>) {}
    fn on_inexact(_val: &Decimal<Self>) {}
    fn on_division_by_zero(_val: &Decimal<Self>) {}
    fn on_invalid_operation(_val: &Decimal<Self>) {}
    fn on_overflow(_val: &Decimal<Self>) {}
    fn on_subnormal(_val: &Decimal<Self>) {}
    fn on_underflow(_val: &Decimal<Self>) {}
}

/// Typed fatal conditions the [`Throw`] policy raises via
/// `std::panic::panic_any`. A hook has no return type to signal failure
/// through, so raising a typed panic payload is how a hook can refuse to
/// return control while still letting a caller `catch_unwind` and
/// recover the condition.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecimalError {
    #[error("invalid operation")]
    InvalidOperation,
    #[error("division by zero")]
    DivisionByZero,
    #[error("exponent overflow")]
    Overflow,
    #[error("exponent underflow")]
    Underflow,
}

/// Default policy: precision 9, `HalfUp`, aborts the process on any
/// exceptional condition.
#[derive(Clone, Copy, Debug, Default)]
pub struct Abort;

impl Policy for Abort {
    type Coeff = u64;
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_invalid_operation(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_division_by_zero(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_overflow(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_underflow(_val: &Decimal<Self>) {
        std::process::abort();
    }
}

/// Same numeric behavior as [`Abort`], but raises [`DecimalError`] via
/// `panic_any` instead of calling `std::process::abort`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Throw;

impl Policy for Throw {
    type Coeff = u64;
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_invalid_operation(_val: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::InvalidOperation);
    }
    fn on_division_by_zero(_val: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::DivisionByZero);
    }
    fn on_overflow(_val: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::Overflow);
    }
    fn on_underflow(_val: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::Underflow);
    }
}

/// Precision 64, `HalfUp`, `rug::Integer`-backed, aborts like [`Abort`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HighPrecision;

impl Policy for HighPrecision {
    type Coeff = rug::Integer;
    const PRECISION: u32 = 64;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_invalid_operation(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_division_by_zero(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_overflow(_val: &Decimal<Self>) {
        std::process::abort();
    }
    fn on_underflow(_val: &Decimal<Self>) {
        std::process::abort();
    }
}

/// Precision 9, `HalfUp`, every hook left at its silent default: sets the
/// flag and does nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOp;

impl Policy for NoOp {
    type Coeff = u64;
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;
}
