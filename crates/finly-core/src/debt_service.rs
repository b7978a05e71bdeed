//! Debt aggregation and payment registration.

use finly_domain::{Amount, Debt, DebtDraft, DueStatus, Session};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    math::{percent_of, progress_percent},
    CoreError,
};

/// Derived figures for a single debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtSummary {
    pub total_amount: Amount,
    pub paid_amount: Amount,
    pub remaining_amount: Amount,
    pub progress_percent: u32,
    pub next_due: DueStatus,
}

/// Totals across every tracked debt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebtPortfolio {
    pub total_debt: Amount,
    pub total_paid: Amount,
    pub total_pending: Amount,
    pub overall_progress_percent: u32,
}

pub struct DebtService;

impl DebtService {
    pub fn summarize(debt: &Debt) -> DebtSummary {
        let total_amount = debt.total_amount();
        let paid_amount = debt.paid_amount();
        DebtSummary {
            total_amount,
            paid_amount,
            remaining_amount: total_amount.saturating_sub(paid_amount),
            progress_percent: progress_percent(paid_amount, total_amount),
            next_due: debt.next_due(),
        }
    }

    /// Sums totals across `debts`; an empty slice yields all zeros.
    pub fn summarize_portfolio(debts: &[Debt]) -> DebtPortfolio {
        let mut total_debt: Amount = 0;
        let mut total_paid: Amount = 0;
        for debt in debts {
            total_debt = total_debt.saturating_add(debt.total_amount());
            total_paid = total_paid.saturating_add(debt.paid_amount());
        }
        let overall = percent_of(total_paid, total_debt);
        DebtPortfolio {
            total_debt,
            total_paid,
            total_pending: total_debt.saturating_sub(total_paid),
            overall_progress_percent: u32::try_from(overall).unwrap_or(u32::MAX),
        }
    }

    /// Validates and stores a new debt. A rejected draft leaves the session untouched.
    pub fn register(session: &mut Session, draft: DebtDraft) -> Result<Uuid, CoreError> {
        let debt = draft.validate().map_err(|err| {
            warn!("debt rejected: {err}");
            CoreError::from(err)
        })?;
        debug!(name = %debt.name, total = debt.total_amount(), "debt registered");
        Ok(session.add_debt(debt))
    }

    /// Registers `count` installments on the debt, returning the new paid tally.
    pub fn apply_payment(session: &mut Session, id: Uuid, count: i64) -> Result<u32, CoreError> {
        let debt = session.debt_mut(id).ok_or(CoreError::DebtNotFound(id))?;
        let before = debt.paid_installments();
        let paid = debt.apply_payment(count);
        debug!(%id, before, paid, "payment applied");
        session.touch();
        Ok(paid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finly_domain::Frequency;

    fn debt(installment: i64, total: i64, paid: i64) -> Debt {
        let mut debt = DebtDraft {
            name: "Loan".into(),
            installment_amount: installment,
            total_installments: total,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            frequency: Frequency::Monthly,
        }
        .validate()
        .unwrap();
        debt.apply_payment(paid);
        debt
    }

    #[test]
    fn fresh_monthly_debt_summary() {
        let summary = DebtService::summarize(&debt(100_000, 12, 0));
        assert_eq!(summary.total_amount, 1_200_000);
        assert_eq!(summary.paid_amount, 0);
        assert_eq!(summary.remaining_amount, 1_200_000);
        assert_eq!(summary.progress_percent, 0);
        assert_eq!(
            summary.next_due,
            DueStatus::Due(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let summary = DebtService::summarize(&debt(100, 3, 2));
        assert_eq!(summary.progress_percent, 67);
        assert_eq!(summary.remaining_amount, 100);
    }

    #[test]
    fn settled_debt_reports_marker() {
        let summary = DebtService::summarize(&debt(100, 4, 4));
        assert_eq!(summary.progress_percent, 100);
        assert_eq!(summary.remaining_amount, 0);
        assert_eq!(summary.next_due, DueStatus::Settled);
    }

    #[test]
    fn empty_portfolio_is_all_zeros() {
        assert_eq!(DebtService::summarize_portfolio(&[]), DebtPortfolio::default());
    }

    #[test]
    fn portfolio_blends_by_amount_not_by_debt() {
        let debts = vec![debt(1_000, 10, 10), debt(100, 10, 0)];
        let portfolio = DebtService::summarize_portfolio(&debts);
        assert_eq!(portfolio.total_debt, 11_000);
        assert_eq!(portfolio.total_paid, 10_000);
        assert_eq!(portfolio.total_pending, 1_000);
        assert_eq!(portfolio.overall_progress_percent, 91);
    }

    #[test]
    fn register_rejects_invalid_draft_without_state_change() {
        let mut session = Session::new();
        let draft = DebtDraft {
            name: "".into(),
            installment_amount: 10,
            total_installments: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            frequency: Frequency::Annual,
        };
        let err = DebtService::register(&mut session, draft).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(session.debts.is_empty());
    }

    #[test]
    fn apply_payment_on_unknown_debt_fails() {
        let mut session = Session::new();
        let id = Uuid::new_v4();
        assert_eq!(
            DebtService::apply_payment(&mut session, id, 1),
            Err(CoreError::DebtNotFound(id))
        );
    }
}
