// gdecimal: exact base-10 decimal arithmetic
// digits.rs
//
// The digit-count utility: number of decimal digits of a
// non-negative integer. Native backends get a constant-compare ladder;
// the arbitrary-precision backend falls back to a decimal-string scan.

use rug::Integer;

/// `digits(0) == 1` by General Decimal Arithmetic convention.
pub fn digits_u64(v: u64) -> u32 {
    const THRESHOLDS: [u64; 19] = [
        9,
        99,
        999,
        9_999,
        99_999,
        999_999,
        9_999_999,
        99_999_999,
        999_999_999,
        9_999_999_999,
        99_999_999_999,
        999_999_999_999,
        9_999_999_999_999,
        99_999_999_999_999,
        999_999_999_999_999,
        9_999_999_999_999_999,
        99_999_999_999_999_999,
        999_999_999_999_999_999,
        9_999_999_999_999_999_999,
    ];
    for (i, &t) in THRESHOLDS.iter().enumerate() {
        if v <= t {
            return (i + 1) as u32;
        }
    }
    20
}

pub fn digits_u128(v: u128) -> u32 {
    if let Ok(small) = u64::try_from(v) {
        return digits_u64(small);
    }
    // v has more than 19 digits; compare against precomputed powers of ten
    // up to u128's 39-digit ceiling.
    let mut threshold: u128 = 10_000_000_000_000_000_000; // 10^19
    let mut digits = 20u32;
    loop {
        match threshold.checked_mul(10) {
            Some(next) if v >= next => {
                threshold = next;
                digits += 1;
            }
            _ => return digits,
        }
    }
}

/// Log-scan via decimal string length, appropriate for an arbitrary
/// precision backend where no fixed-width compare ladder exists.
pub fn digits_big(v: &Integer) -> u32 {
    if v.cmp0() == std::cmp::Ordering::Equal {
        return 1;
    }
    v.to_string().trim_start_matches('-').len() as u32
}
