//! Installment debts and their creation drafts.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    common::*,
    period::{project_period, Frequency},
    validation::{required_text, ValidationError},
};

/// A recurring installment obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    installment_amount: Amount,
    total_installments: u32,
    paid_installments: u32,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
}

impl Debt {
    pub fn installment_amount(&self) -> Amount {
        self.installment_amount
    }

    pub fn total_installments(&self) -> u32 {
        self.total_installments
    }

    pub fn paid_installments(&self) -> u32 {
        self.paid_installments
    }

    pub fn remaining_installments(&self) -> u32 {
        self.total_installments.saturating_sub(self.paid_installments)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_installments >= self.total_installments
    }

    pub fn total_amount(&self) -> Amount {
        self.installment_amount
            .saturating_mul(Amount::from(self.total_installments))
    }

    pub fn paid_amount(&self) -> Amount {
        self.installment_amount
            .saturating_mul(Amount::from(self.paid_installments))
    }

    /// Next unpaid occurrence, or [`DueStatus::Settled`] once every installment is paid.
    pub fn next_due(&self) -> DueStatus {
        if self.is_settled() {
            DueStatus::Settled
        } else {
            DueStatus::Due(project_period(
                self.start_date,
                self.frequency,
                self.paid_installments,
            ))
        }
    }

    /// Registers `count` installments, saturating within `[0, total_installments]`.
    ///
    /// Negative counts are treated as zero so the paid tally never decreases.
    pub fn apply_payment(&mut self, count: i64) -> u32 {
        let current = i64::from(self.paid_installments);
        let next = current
            .saturating_add(count.max(0))
            .clamp(0, i64::from(self.total_installments));
        self.paid_installments = u32::try_from(next).unwrap_or(self.total_installments);
        self.paid_installments
    }
}

impl Amounted for Debt {
    fn amount(&self) -> Amount {
        self.total_amount()
    }
}

impl Displayable for Debt {
    fn display_label(&self) -> String {
        format!(
            "{} ({} / {} {})",
            self.name, self.paid_installments, self.total_installments, self.frequency
        )
    }
}

/// Either the next installment date or the terminal settled marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Due(NaiveDate),
    Settled,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::Due(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DueStatus::Settled => f.write_str("settled"),
        }
    }
}

/// Raw inputs collected for a new debt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtDraft {
    pub name: String,
    pub installment_amount: i64,
    pub total_installments: i64,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
}

impl DebtDraft {
    /// Builds a debt with no paid installments, or names the field that rejected it.
    pub fn validate(self) -> Result<Debt, ValidationError> {
        let name = required_text(&self.name, ValidationError::BlankName)?;
        let installment_amount = Amount::try_from(self.installment_amount)
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or(ValidationError::NonPositiveAmount)?;
        let total_installments = u32::try_from(self.total_installments)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(ValidationError::NoInstallments)?;
        Ok(Debt {
            id: Uuid::new_v4(),
            name,
            installment_amount,
            total_installments,
            paid_installments: 0,
            start_date: self.start_date,
            frequency: self.frequency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DebtDraft {
        DebtDraft {
            name: "  Car loan ".into(),
            installment_amount: 100_000,
            total_installments: 12,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            frequency: Frequency::Monthly,
        }
    }

    #[test]
    fn validate_trims_name_and_starts_unpaid() {
        let debt = draft().validate().expect("valid draft");
        assert_eq!(debt.name, "Car loan");
        assert_eq!(debt.paid_installments(), 0);
        assert_eq!(debt.total_amount(), 1_200_000);
        assert_eq!(debt.next_due(), DueStatus::Due(debt.start_date));
    }

    #[test]
    fn validate_rejects_blank_and_non_positive_fields() {
        let mut blank = draft();
        blank.name = "   ".into();
        assert_eq!(blank.validate(), Err(ValidationError::BlankName));

        let mut zero_amount = draft();
        zero_amount.installment_amount = 0;
        assert_eq!(zero_amount.validate(), Err(ValidationError::NonPositiveAmount));

        let mut negative_count = draft();
        negative_count.total_installments = -3;
        assert_eq!(negative_count.validate(), Err(ValidationError::NoInstallments));
    }

    #[test]
    fn apply_payment_saturates_at_both_bounds() {
        let mut debt = draft().validate().unwrap();
        assert_eq!(debt.apply_payment(-5), 0);
        assert_eq!(debt.apply_payment(3), 3);
        assert_eq!(debt.apply_payment(i64::MIN), 3);
        assert_eq!(debt.apply_payment(i64::MAX), 12);
        assert!(debt.is_settled());
        assert_eq!(debt.next_due(), DueStatus::Settled);
        assert_eq!(debt.remaining_installments(), 0);
    }

    #[test]
    fn next_due_projects_paid_installments_forward() {
        let mut debt = draft().validate().unwrap();
        debt.apply_payment(2);
        assert_eq!(
            debt.next_due(),
            DueStatus::Due(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(debt.next_due().to_string(), "2024-03-15");
        assert_eq!(DueStatus::Settled.to_string(), "settled");
    }

    #[test]
    fn paid_tally_stays_within_total_after_repeated_payments() {
        let mut debt = draft().validate().unwrap();
        for count in [4, 4, 4, 4, -2, 7] {
            let paid = debt.apply_payment(count);
            assert!(paid <= debt.total_installments());
            assert_eq!(paid, debt.paid_installments());
        }
        assert_eq!(debt.paid_installments(), 12);
        assert_eq!(debt.paid_amount(), debt.total_amount());
        assert_eq!(debt.installment_amount(), 100_000);
    }
}
