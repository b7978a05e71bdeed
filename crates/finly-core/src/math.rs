//! Numeric helpers shared by every aggregator.

use finly_domain::Amount;

/// Upper bound for the salary commitment percentage.
pub const COMMITMENT_PERCENT_CAP: u32 = 999;
/// Upper bound for progress percentages and bar widths.
pub const PROGRESS_PERCENT_CAP: u32 = 100;

/// Bounds `value` to `[min, max]`. Callers guarantee `min <= max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let raised = if value < min { min } else { value };
    if raised > max {
        max
    } else {
        raised
    }
}

/// `numerator / denominator * 100` rounded half away from zero; `0` when the denominator is zero.
pub fn percent_of(numerator: Amount, denominator: Amount) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let numerator = u128::from(numerator);
    let denominator = u128::from(denominator);
    let rounded = (numerator * 200 + denominator) / (denominator * 2);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Rounded percentage saturated to `[0, cap]`.
pub fn capped_percent(numerator: Amount, denominator: Amount, cap: u32) -> u32 {
    let percent = clamp(percent_of(numerator, denominator), 0, u64::from(cap));
    u32::try_from(percent).unwrap_or(cap)
}

/// Progress percentage in `[0, 100]`.
pub fn progress_percent(numerator: Amount, denominator: Amount) -> u32 {
    capped_percent(numerator, denominator, PROGRESS_PERCENT_CAP)
}

/// `lhs - rhs` as a signed amount, saturating at the `i64` range.
pub fn signed_difference(lhs: Amount, rhs: Amount) -> i64 {
    let difference = i128::from(lhs) - i128::from(rhs);
    i64::try_from(difference).unwrap_or(if difference < 0 { i64::MIN } else { i64::MAX })
}
