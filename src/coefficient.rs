// gdecimal: exact base-10 decimal arithmetic
// coefficient.rs
//
// The wide-integer substrate contract.
//
// This crate never hand-rolls wide-integer arithmetic: the two native
// backends are plain `u64`/`u128`, and the arbitrary-precision backend is
// `rug::Integer`. `Coefficient` is the seam the rounding engine and the
// arithmetic kernel are written against so they don't care which backend
// a particular `Policy` picked.

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{ToPrimitive, Zero};
use rug::Integer;

use crate::digits;

/// Operations the decimal kernel needs from an unsigned integer magnitude.
///
/// Implemented for `u64` and `u128` (native backends, tiers 1-2)
/// and for `rug::Integer` (arbitrary-precision backend, tier 3). All three
/// are non-negative by construction within this crate; sign lives
/// alongside the coefficient on `Decimal`, never inside it.
pub trait Coefficient: Clone + Debug + PartialEq + PartialOrd + Sized {
    /// The additive identity. `digits()` of this value is defined to be 1,
    /// matching the General Decimal Arithmetic convention that zero still
    /// occupies one significant digit.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    fn is_zero(&self) -> bool;

    /// Number of decimal digits, with `digits(0) == 1`.
    fn digits(&self) -> u32;

    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// Subtracts `other` from `self`. Callers must ensure `other <= self`;
    /// violating that is a logic error in the kernel, not a user-facing
    /// condition, so this panics rather than returning `Option`.
    fn sub(&self, other: &Self) -> Self;

    fn checked_mul(&self, other: &Self) -> Option<Self>;

    /// `10^n`, or `None` if it doesn't fit this backend.
    fn checked_pow10(n: u32) -> Option<Self>;

    /// `self * 10^n`, or `None` on overflow.
    fn checked_mul_pow10(&self, n: u32) -> Option<Self> {
        Self::checked_pow10(n).and_then(|p| self.checked_mul(&p))
    }

    /// `self * 10 + d` for a single decimal digit `d` (0..=9). Used while
    /// parsing and while rounding decides the discarded digit.
    fn push_digit(&self, d: u8) -> Self;

    /// Divides by 10, returning `(quotient, remainder_digit)`.
    fn div_rem_10(&self) -> (Self, u8);

    fn from_u64(v: u64) -> Self;

    /// Truncating conversion to `u64`, used only for values already known
    /// to fit (e.g. after rounding to a precision small enough for it).
    fn to_u64_truncating(&self) -> u64;

    fn to_f64(&self) -> f64;

    fn to_decimal_string(&self) -> String;
}

// --- native backends -------------------------------------------------

macro_rules! impl_coefficient_native {
    ($ty:ty, $digits_fn:path) => {
        impl Coefficient for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn digits(&self) -> u32 {
                $digits_fn(*self)
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }

            fn sub(&self, other: &Self) -> Self {
                self.checked_sub(*other)
                    .expect("Coefficient::sub: other must not exceed self")
            }

            fn checked_mul(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_mul(*self, *other)
            }

            fn checked_pow10(n: u32) -> Option<Self> {
                (10 as $ty).checked_pow(n)
            }

            fn push_digit(&self, d: u8) -> Self {
                self.checked_mul(10)
                    .and_then(|v| v.checked_add(d as $ty))
                    .expect("Coefficient::push_digit: overflowed native backend")
            }

            fn div_rem_10(&self) -> (Self, u8) {
                (*self / 10, (*self % 10) as u8)
            }

            fn from_u64(v: u64) -> Self {
                v as $ty
            }

            fn to_u64_truncating(&self) -> u64 {
                *self as u64
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn to_decimal_string(&self) -> String {
                self.to_string()
            }
        }
    };
}

impl_coefficient_native!(u64, digits::digits_u64);
impl_coefficient_native!(u128, digits::digits_u128);

// --- arbitrary-precision backend --------------------------------------

impl Coefficient for Integer {
    fn zero() -> Self {
        Integer::from(0)
    }

    fn one() -> Self {
        Integer::from(1)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn digits(&self) -> u32 {
        digits::digits_big(self)
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Integer::from(self + other))
    }

    fn sub(&self, other: &Self) -> Self {
        let result = Integer::from(self - other);
        assert!(
            result >= Integer::zero(),
            "Coefficient::sub: other must not exceed self"
        );
        result
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Some(Integer::from(self * other))
    }

    fn checked_pow10(n: u32) -> Option<Self> {
        Some(Integer::from(Integer::from(10).pow(n)))
    }

    fn push_digit(&self, d: u8) -> Self {
        Integer::from(self * 10) + d
    }

    fn div_rem_10(&self) -> (Self, u8) {
        let ten = Integer::from(10);
        let q = Integer::from(self / &ten);
        let r = Integer::from(self - Integer::from(&q * &ten));
        (q, r.to_u32().unwrap_or(0) as u8)
    }

    fn from_u64(v: u64) -> Self {
        Integer::from(v)
    }

    fn to_u64_truncating(&self) -> u64 {
        let mask = Integer::from(u64::MAX);
        let masked = Integer::from(self & &mask);
        masked.to_u64().unwrap_or(0)
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::INFINITY)
    }

    fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

/// Total order over coefficients, used by §4.8's comparison.
pub fn cmp<C: Coefficient>(a: &C, b: &C) -> Ordering {
    a.partial_cmp(b).expect("Coefficient must be totally ordered")
}
