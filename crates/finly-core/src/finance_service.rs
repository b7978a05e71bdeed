//! Monthly income versus outflow reconciliation.

use std::cmp::Reverse;

use finly_domain::{
    total_amount, Amount, ExtraExpense, ExtraExpenseDraft, FinanceSnapshot, Responsibility,
    ResponsibilityDraft, Session,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    math::{capped_percent, clamp, signed_difference, COMMITMENT_PERCENT_CAP, PROGRESS_PERCENT_CAP},
    CoreError,
};

/// Reconciled monthly figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinanceSummary {
    pub salary: Amount,
    pub base_expenses: Amount,
    pub total_responsibilities: Amount,
    pub total_extra_expenses: Amount,
    pub total_income: Amount,
    pub total_outflow: Amount,
    /// Negative when outflow exceeds income.
    pub available: i64,
    /// Outflow as a share of salary, allowed past 100 up to 999.
    pub salary_spent_percent: u32,
    /// The same share bounded to 100 for progress-bar widths.
    pub salary_bar_percent: u32,
}

impl FinanceSummary {
    pub fn has_salary(&self) -> bool {
        self.salary > 0
    }

    pub fn is_overspent(&self) -> bool {
        self.available < 0
    }
}

pub struct FinanceService;

impl FinanceService {
    pub fn summarize(
        snapshot: &FinanceSnapshot,
        responsibilities: &[Responsibility],
        extra_expenses: &[ExtraExpense],
    ) -> FinanceSummary {
        let total_responsibilities = total_amount(responsibilities);
        let total_extra_expenses = total_amount(extra_expenses);
        let total_income = snapshot.salary.saturating_add(snapshot.extra_income);
        let total_outflow = snapshot
            .expenses
            .saturating_add(total_responsibilities)
            .saturating_add(total_extra_expenses);
        let salary_spent_percent =
            capped_percent(total_outflow, snapshot.salary, COMMITMENT_PERCENT_CAP);
        FinanceSummary {
            salary: snapshot.salary,
            base_expenses: snapshot.expenses,
            total_responsibilities,
            total_extra_expenses,
            total_income,
            total_outflow,
            available: signed_difference(total_income, total_outflow),
            salary_spent_percent,
            salary_bar_percent: clamp(salary_spent_percent, 0, PROGRESS_PERCENT_CAP),
        }
    }

    pub fn summarize_session(session: &Session) -> FinanceSummary {
        Self::summarize(
            &session.finance,
            &session.responsibilities,
            &session.extra_expenses,
        )
    }

    /// Most recent first; entries sharing a date keep their insertion order.
    pub fn expenses_newest_first(expenses: &[ExtraExpense]) -> Vec<&ExtraExpense> {
        let mut ordered: Vec<&ExtraExpense> = expenses.iter().collect();
        ordered.sort_by_key(|expense| Reverse(expense.date));
        ordered
    }

    /// Replaces the declared monthly figures wholesale.
    pub fn declare(session: &mut Session, snapshot: FinanceSnapshot) {
        debug!(
            salary = snapshot.salary,
            extra_income = snapshot.extra_income,
            expenses = snapshot.expenses,
            "finance snapshot declared"
        );
        session.set_finance(snapshot);
    }

    pub fn add_responsibility(
        session: &mut Session,
        draft: ResponsibilityDraft,
    ) -> Result<Uuid, CoreError> {
        let responsibility = draft.validate().map_err(|err| {
            warn!("responsibility rejected: {err}");
            CoreError::from(err)
        })?;
        debug!(name = %responsibility.name, amount = responsibility.amount, "responsibility added");
        Ok(session.add_responsibility(responsibility))
    }

    pub fn add_extra_expense(
        session: &mut Session,
        draft: ExtraExpenseDraft,
    ) -> Result<Uuid, CoreError> {
        let expense = draft.validate().map_err(|err| {
            warn!("extra expense rejected: {err}");
            CoreError::from(err)
        })?;
        debug!(category = %expense.category, amount = expense.amount, "extra expense added");
        Ok(session.add_extra_expense(expense))
    }
}
