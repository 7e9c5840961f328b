// gdecimal: exact base-10 decimal arithmetic
// decimal/parse.rs
//
// Text grammar:
//
//   sign           = "+" | "-"
//   digits         = digit+
//   decimal-part   = digits ["." [digits]] | "." digits
//   exponent-part  = ("e"|"E") [sign] digits
//   infinity       = "Inf" | "Infinity"
//   nan            = "NaN" digits*
//   numeric-value  = decimal-part [exponent-part] | infinity
//   numeric-string = [sign] (numeric-value | nan)
//
// Any deviation from the grammar produces a positive NaN with
// `invalid_operation` set: the parsed sign, if any, is
// discarded on that path, since the grammar attaches `sign` to the whole
// `numeric-string`, not to the malformed fragment that follows it.

use crate::coefficient::Coefficient;
use crate::decimal::Decimal;
use crate::policy::Policy;

impl<P: Policy> Decimal<P> {
    /// Parses `input`. Never fails: malformed input yields a positive
    /// NaN with `invalid_operation` set rather than an error.
    pub fn parse(input: &str) -> Self {
        match try_parse::<P>(input) {
            Some(val) => val,
            None => Decimal::raw_nan(false).flag_invalid_operation(),
        }
    }
}

impl<P: Policy> std::str::FromStr for Decimal<P> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Decimal::parse(s))
    }
}

fn try_parse<P: Policy>(input: &str) -> Option<Decimal<P>> {
    let mut sign = false;
    let rest = match input.as_bytes().first() {
        Some(b'+') => &input[1..],
        Some(b'-') => {
            sign = true;
            &input[1..]
        }
        _ => input,
    };

    if rest.is_empty() {
        return None; // empty input, or a bare sign with no digits
    }

    if eq_ci(rest, "inf") || eq_ci(rest, "infinity") {
        return Some(Decimal::raw_infinity(sign));
    }

    if let Some(tail) = strip_ci_prefix(rest, "nan") {
        return if tail.bytes().all(|b| b.is_ascii_digit()) {
            // Trailing digits are accepted and discarded; no payload is
            // kept.
            Some(Decimal::raw_nan(sign))
        } else {
            None
        };
    }

    parse_numeric_value::<P>(rest, sign)
}

fn parse_numeric_value<P: Policy>(s: &str, sign: bool) -> Option<Decimal<P>> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut coeff = P::Coeff::zero();
    let mut exponent: i64 = 0;
    let mut saw_digit = false;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        coeff = coeff.push_digit(bytes[i] - b'0');
        saw_digit = true;
        i += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            coeff = coeff.push_digit(bytes[i] - b'0');
            exponent -= 1;
            saw_digit = true;
            i += 1;
        }
    }

    if !saw_digit {
        return None;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let exp_sign = match bytes.get(i) {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };

        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None; // exponent marker with no digits
        }

        let magnitude: i64 = s[exp_start..i].parse().unwrap_or(i64::MAX);
        exponent += if exp_sign { -magnitude } else { magnitude };
    }

    if i != bytes.len() {
        return None; // stray trailing character
    }

    Some(Decimal::from_coefficient(sign, coeff, exponent))
}

fn eq_ci(s: &str, expect: &str) -> bool {
    s.len() == expect.len() && s.eq_ignore_ascii_case(expect)
}

fn strip_ci_prefix<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Abort;

    type D = Decimal<Abort>;

    #[test]
    fn parses_plain_integer() {
        let v: D = D::parse("123");
        assert_eq!(v.coefficient(), &123u64);
        assert_eq!(v.exponent(), 0);
        assert!(!v.sign());
    }

    #[test]
    fn parses_fraction() {
        let v: D = D::parse("-1.23E-10");
        assert!(v.sign());
        assert_eq!(v.coefficient(), &123u64);
        assert_eq!(v.exponent(), -12);
    }

    #[test]
    fn parses_leading_dot() {
        let v: D = D::parse(".5");
        assert_eq!(v.coefficient(), &5u64);
        assert_eq!(v.exponent(), -1);
    }

    #[test]
    fn parses_infinity_case_insensitive() {
        assert!(D::parse("infinity").is_infinite());
        assert!(D::parse("-INF").is_infinite());
        assert!(D::parse("-INF").sign());
    }

    #[test]
    fn parses_nan_with_discarded_digits() {
        let v: D = D::parse("NaN123");
        assert!(v.is_nan());
        assert!(!v.flags.invalid_operation);
    }

    #[test]
    fn malformed_is_positive_nan_with_flag() {
        for bad in ["", "+", "-", "1.2.3", "1e", "1e+", "--1", "abc", "NaNx"] {
            let v: D = D::parse(bad);
            assert!(v.is_nan(), "{bad:?} should parse as NaN");
            assert!(!v.sign(), "{bad:?} should parse as a *positive* NaN");
            assert!(v.flags.invalid_operation, "{bad:?} should flag invalid_operation");
        }
    }
}
