/*!
The rounding engine.

Given a raw unsigned coefficient and the exponent it was computed at,
reduces the coefficient to at most `precision` significant digits under a
[`RoundingMode`], adjusting the exponent and reporting which of the
`rounded`/`inexact` conditions fired. This module has no notion of sign,
`Decimal`, or policy hooks; `decimal::ops` calls in here once per
operation and wires the result into the public flags and callbacks.
*/

use crate::coefficient::Coefficient;

/// Rounding modes from the General Decimal Arithmetic model.
///
/// `Down`, `Up`, and `HalfUp` see the heaviest use in practice; the rest
/// are implemented too since the engine below only needs "how many of the
/// discarded digits were nonzero" and "what was the most significant
/// discarded digit" to decide any of the eight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundingMode {
    Down,
    #[default]
    HalfUp,
    HalfEven,
    Ceiling,
    Floor,
    HalfDown,
    Up,
    ZeroFiveUp,
}

/// Outcome of rounding a coefficient: the two flags the engine can raise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    pub rounded: bool,
    pub inexact: bool,
}

/// Rounds `coeff` (currently `digits(coeff)` significant digits, at
/// `exponent`) down to at most `precision` digits per `mode`.
///
/// `sign` is the sign of the value being rounded (needed by `Ceiling`,
/// `Floor`, and `HalfEven`'s tie-break). Returns the rounded coefficient,
/// the exponent it now applies at (always `>=` the input exponent), and
/// which flags fired.
pub fn round_coefficient<C: Coefficient>(
    coeff: C,
    exponent: i64,
    precision: u32,
    mode: RoundingMode,
    sign: bool,
) -> (C, i64, RoundOutcome) {
    let d = coeff.digits();
    if d <= precision {
        return (coeff, exponent, RoundOutcome::default());
    }

    let k = d - precision;
    let mut c = coeff;
    let mut exp = exponent;
    let mut any_nonzero = false;

    // Discard k-1 digits, tracking only whether any were nonzero; the
    // last discarded digit is decisive below and handled separately.
    for _ in 0..k - 1 {
        let (q, r) = c.div_rem_10();
        if r != 0 {
            any_nonzero = true;
        }
        c = q;
        exp += 1;
    }

    let (mut c, last) = c.div_rem_10();
    exp += 1;
    let inexact = any_nonzero || last != 0;
    let retained_last_digit = c.div_rem_10().1;

    let round_up = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => inexact,
        RoundingMode::HalfUp => last >= 5,
        RoundingMode::HalfDown => last > 5,
        RoundingMode::HalfEven => last > 5 || (last == 5 && retained_last_digit % 2 == 1),
        RoundingMode::Ceiling => inexact && !sign,
        RoundingMode::Floor => inexact && sign,
        RoundingMode::ZeroFiveUp => {
            inexact && (retained_last_digit == 0 || retained_last_digit == 5)
        }
    };

    if round_up {
        c = c
            .checked_add(&C::one())
            .expect("rounding increment overflowed coefficient backend");
        // Rounding up can itself push the digit count over `precision`
        // (e.g. 999 -> 1000 at precision 3); renormalize once more.
        if c.digits() > precision {
            let (q, _) = c.div_rem_10();
            c = q;
            exp += 1;
        }
    }

    (
        c,
        exp,
        RoundOutcome {
            rounded: true,
            inexact,
        },
    )
}
