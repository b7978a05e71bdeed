//! Recurrence frequencies and the period projector used for installment due dates.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};

const BIWEEKLY_DAYS: i64 = 15;
const SEMIANNUAL_MONTHS: i64 = 6;
const ANNUAL_MONTHS: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Enumerates the installment cadences a debt can follow.
pub enum Frequency {
    Biweekly,
    Monthly,
    Semiannual,
    #[default]
    Annual,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Semiannual,
        Frequency::Annual,
    ];

    /// Resolves a user-supplied tag, routing anything unrecognized to [`Frequency::Annual`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: FrequencyParseError| {
            tracing::warn!("{err}; falling back to annual");
            Frequency::Annual
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Semiannual => "semiannual",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "biweekly" | "quincenal" => Ok(Frequency::Biweekly),
            "monthly" | "mensual" => Ok(Frequency::Monthly),
            "semiannual" | "semestral" => Ok(Frequency::Semiannual),
            "annual" | "yearly" | "anual" => Ok(Frequency::Annual),
            _ => Err(FrequencyParseError(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised by the strict [`FromStr`] parser for unknown frequency tags.
pub struct FrequencyParseError(pub String);

impl fmt::Display for FrequencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frequency `{}`", self.0)
    }
}

impl std::error::Error for FrequencyParseError {}

/// Returns the date of the occurrence `steps` periods after `start`.
///
/// Month-based cadences keep the day of month and let overflow roll into the
/// following month (Jan 31 + 1 month is Mar 3 in a non-leap year, Feb 29 + 1
/// year is Mar 1). Dates beyond the calendar range saturate at [`NaiveDate::MAX`].
pub fn project_period(start: NaiveDate, frequency: Frequency, steps: u32) -> NaiveDate {
    if steps == 0 {
        return start;
    }
    let steps = i64::from(steps);
    let projected = match frequency {
        Frequency::Biweekly => start.checked_add_signed(Duration::days(BIWEEKLY_DAYS * steps)),
        Frequency::Monthly => roll_months(start, steps),
        Frequency::Semiannual => roll_months(start, SEMIANNUAL_MONTHS * steps),
        Frequency::Annual => roll_months(start, ANNUAL_MONTHS * steps),
    };
    projected.unwrap_or(NaiveDate::MAX)
}

fn roll_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let index = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(date.day0())))
}
