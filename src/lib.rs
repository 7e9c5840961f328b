/*!
`gdecimal` is an exact base-10 decimal arithmetic library following the
General Decimal Arithmetic model: every value is a sign, a coefficient,
and a power-of-ten exponent, so numbers that are exact in decimal (money,
measurements, anything a human wrote down in base 10) stay exact through
arithmetic instead of picking up binary floating-point error.

Precision, rounding mode, optional exponent bounds, and what happens on
an exceptional condition are all fixed at compile time through a
[`Policy`] type parameter on [`Decimal`]. Four policies are provided,
[`Abort`], [`Throw`], [`HighPrecision`], and [`NoOp`], or implement
[`Policy`] directly for custom precision/rounding/hook combinations.

```
use gdecimal::{Decimal, Abort};

let a: Decimal<Abort> = Decimal::parse("1.23E-10");
let b: Decimal<Abort> = Decimal::parse("2.00E-10");
let diff = a - b;
assert_eq!(diff.to_string(), "-0.000000000077");
```
*/

pub mod coefficient;
pub mod decimal;
pub mod digits;
pub mod policy;
pub mod round;

pub use crate::decimal::{Decimal, Flags};
pub use crate::policy::{Abort, DecimalError, HighPrecision, NoOp, Policy, Throw};
pub use crate::round::RoundingMode;
