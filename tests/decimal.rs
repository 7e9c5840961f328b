// tests/decimal.rs
//
// Scenario and property tests for the Decimal type.

use gdecimal::{Abort, Decimal, HighPrecision, NoOp, Policy};

type D = Decimal<Abort>;

#[test]
fn scenario_small_magnitude_subtraction() {
    let a: Decimal<HighPrecision> = Decimal::parse("1.23E-10");
    let b: Decimal<HighPrecision> = Decimal::parse("2.00E-10");
    let result = a - b;
    assert_eq!(result.to_string(), "-0.000000000077");
}

#[test]
fn scenario_inexact_division() {
    let a: D = Decimal::parse("1");
    let b: D = Decimal::parse("3");
    let result = a / b;
    assert_eq!(result.to_string(), "0.333333333");
    assert!(result.flags.inexact);
    assert!(result.flags.rounded);
    assert!(!result.flags.division_by_zero);
    assert!(!result.flags.invalid_operation);
}

#[test]
fn scenario_infinity_minus_infinity_is_invalid() {
    let a: D = Decimal::infinity(false);
    let b: D = Decimal::infinity(false);
    let result = a - b;
    assert!(result.is_nan());
    assert!(!result.sign());
    assert!(result.flags.invalid_operation);
}

#[test]
fn scenario_nonzero_over_zero_is_infinite_and_invalid() {
    let a: D = Decimal::parse("1000");
    let b: D = Decimal::parse("0");
    let result = a / b;
    assert!(result.is_infinite());
    assert!(!result.sign());
    assert!(result.flags.division_by_zero);
    assert!(result.flags.invalid_operation);
}

#[test]
fn scenario_zero_over_zero_is_nan_division_by_zero_only() {
    let a: D = Decimal::parse("0");
    let b: D = Decimal::parse("0");
    let result = a / b;
    assert!(result.is_nan());
    assert!(result.flags.division_by_zero);
    assert!(!result.flags.invalid_operation);
}

#[test]
fn scenario_malformed_input_is_positive_nan() {
    let v: D = Decimal::parse("not a number");
    assert!(v.is_nan());
    assert!(!v.sign());
    assert!(v.flags.invalid_operation);
}

#[test]
fn precision_invariant_holds_after_every_operation() {
    let a: D = Decimal::parse("123456789012345");
    let b: D = Decimal::parse("987654321098765");
    let sum = a * b;
    assert!(sum.coefficient().to_string().len() as u32 <= Abort::PRECISION);
}

#[test]
fn compare_is_reflexive_for_every_kind_of_value() {
    use std::cmp::Ordering;
    let vals: Vec<D> = vec![
        Decimal::zero(),
        Decimal::one(),
        Decimal::nan(),
        Decimal::infinity(false),
        Decimal::infinity(true),
        Decimal::parse("-3.14"),
    ];
    for v in &vals {
        assert_eq!(v.compare(v), Ordering::Equal, "{v:?} should equal itself");
    }
}

#[test]
fn additive_inverse_is_zero() {
    let d: D = Decimal::parse("17.5");
    let result = d.clone() + (-d);
    assert!(result.is_zero());
}

#[test]
fn multiplicative_identity_preserves_value() {
    let d: D = Decimal::parse("9.81");
    assert_eq!(d.clone() * Decimal::one(), d);
    assert_eq!(d.clone() / Decimal::one(), d);
}

#[test]
fn multiplying_by_zero_yields_a_signed_zero() {
    let d: D = Decimal::parse("-4.2");
    let result = d * Decimal::zero();
    assert!(result.is_zero());
    assert!(result.sign());
}

#[test]
fn round_trip_through_display_and_parse() {
    for s in ["0", "1", "-1", "123.456", "-0.0007", "99999999.9"] {
        let d: D = Decimal::parse(s);
        let reparsed: D = Decimal::parse(&d.to_string());
        assert_eq!(d, reparsed, "{s:?} did not round-trip");
    }
}

#[test]
fn addition_commutes() {
    let a: D = Decimal::parse("12.34");
    let b: D = Decimal::parse("-5.6");
    assert_eq!(a.clone() + b.clone(), b + a);
}

#[test]
fn multiplication_commutes() {
    let a: D = Decimal::parse("2.5");
    let b: D = Decimal::parse("4");
    assert_eq!(a.clone() * b.clone(), b * a);
}

#[test]
fn reset_flags_clears_every_flag() {
    let mut d: D = Decimal::parse("1") / Decimal::parse("3");
    assert!(d.flags.inexact);
    d.reset_flags();
    assert_eq!(d.flags, gdecimal::Flags::default());
}

#[test]
fn malformed_parse_is_nan() {
    let v: D = Decimal::parse("not a number");
    assert!(v.is_nan());
}

#[test]
fn bool_cast_matches_magnitude_threshold() {
    let small: D = Decimal::parse("0.2");
    let large: D = Decimal::parse("5");
    assert!(!small.to_bool());
    assert!(large.to_bool());
}

#[test]
fn noop_policy_never_aborts_on_division_by_zero() {
    let a: Decimal<NoOp> = Decimal::parse("1");
    let b: Decimal<NoOp> = Decimal::parse("0");
    let result = a / b;
    assert!(result.is_infinite());
    assert!(result.flags.division_by_zero);
}

#[test]
#[should_panic]
fn throw_policy_panics_on_division_by_zero() {
    use gdecimal::Throw;
    let a: Decimal<Throw> = Decimal::parse("1");
    let b: Decimal<Throw> = Decimal::parse("0");
    let _ = a / b;
}
