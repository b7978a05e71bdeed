//! Argument parsing and value formatting for shell commands.

use chrono::NaiveDate;
use finly_domain::Amount;

use crate::cli::core::CommandError;

const BAR_WIDTH: usize = 20;

/// Reads a money argument, ignoring every non-digit character (`1.200.000` is 1200000).
///
/// An argument without digits reads as zero so the core rejects it as non-positive.
pub fn parse_money(raw: &str) -> Result<i64, CommandError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments(format!("amount `{}` is too large", raw)))
}

/// Reads a signed whole-number count such as installments or payments.
pub fn parse_count(raw: &str, field: &str) -> Result<i64, CommandError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments(format!("{field} must be a whole number")))
}

/// Reads a 1-based list position and returns the matching 0-based index.
pub fn parse_position(raw: &str, len: usize, label: &str) -> Result<usize, CommandError> {
    let position = raw
        .trim()
        .trim_start_matches('#')
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidArguments(format!("{label} index must be numeric")))?;
    if position == 0 || position > len {
        return Err(CommandError::InvalidArguments(format!(
            "no {label} #{position} (have {len})"
        )));
    }
    Ok(position - 1)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("date `{}` must use YYYY-MM-DD", raw.trim()))
    })
}

/// Whole-unit currency with digit grouping, e.g. `$1.200.000`.
pub fn format_amount(amount: Amount, separator: char) -> String {
    format!("${}", group_digits(amount, separator))
}

pub fn format_signed(amount: i64, separator: char) -> String {
    let formatted = format_amount(amount.unsigned_abs(), separator);
    if amount < 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

fn group_digits(amount: Amount, separator: char) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Fixed-width progress bar for a percentage in `[0, 100]`.
pub fn progress_bar(percent: u32) -> String {
    let percent = usize::try_from(percent.min(100)).unwrap_or(100);
    let filled = (percent * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_money_strips_grouping() {
        assert_eq!(parse_money("1.200.000").unwrap(), 1_200_000);
        assert_eq!(parse_money("$ 45,000").unwrap(), 45_000);
        assert_eq!(parse_money("abc").unwrap(), 0);
        assert!(parse_money("99999999999999999999999").is_err());
    }

    #[test]
    fn parse_count_keeps_sign() {
        assert_eq!(parse_count("-3", "count").unwrap(), -3);
        assert!(parse_count("two", "count").is_err());
    }

    #[test]
    fn parse_position_is_one_based() {
        assert_eq!(parse_position("1", 3, "debt").unwrap(), 0);
        assert_eq!(parse_position("#3", 3, "debt").unwrap(), 2);
        assert!(parse_position("0", 3, "debt").is_err());
        assert!(parse_position("4", 3, "debt").is_err());
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(0, '.'), "$0");
        assert_eq!(format_amount(999, '.'), "$999");
        assert_eq!(format_amount(1_200_000, '.'), "$1.200.000");
        assert_eq!(format_amount(12_345, ','), "$12,345");
        assert_eq!(format_signed(-500_000, '.'), "-$500.000");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(250), format!("[{}]", "#".repeat(20)));
    }
}
