//! One-shot view model rebuilt after every session mutation.

use finly_domain::{Debt, ExtraExpense, Responsibility, SavingsGoal, Session};

use crate::{
    debt_service::{DebtPortfolio, DebtService, DebtSummary},
    finance_service::{FinanceService, FinanceSummary},
    savings_service::{GoalSummary, SavingsOverview, SavingsService},
};

#[derive(Debug, Clone)]
pub struct DebtLine<'a> {
    pub debt: &'a Debt,
    pub summary: DebtSummary,
}

#[derive(Debug, Clone)]
pub struct GoalLine<'a> {
    pub goal: &'a SavingsGoal,
    pub summary: GoalSummary,
}

/// Everything a renderer needs to paint the current session.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub debts: Vec<DebtLine<'a>>,
    pub debt_portfolio: DebtPortfolio,
    pub goals: Vec<GoalLine<'a>>,
    pub savings: SavingsOverview,
    pub finance: FinanceSummary,
    pub responsibilities: &'a [Responsibility],
    pub extra_expenses: Vec<&'a ExtraExpense>,
}

impl<'a> Dashboard<'a> {
    pub fn build(session: &'a Session) -> Self {
        let debts = session
            .debts
            .iter()
            .map(|debt| DebtLine {
                debt,
                summary: DebtService::summarize(debt),
            })
            .collect();
        let goals = session
            .savings
            .iter()
            .map(|goal| GoalLine {
                goal,
                summary: SavingsService::summarize(goal),
            })
            .collect();
        Self {
            debts,
            debt_portfolio: DebtService::summarize_portfolio(&session.debts),
            goals,
            savings: SavingsService::summarize_portfolio(&session.savings),
            finance: FinanceService::summarize_session(session),
            responsibilities: &session.responsibilities,
            extra_expenses: FinanceService::expenses_newest_first(&session.extra_expenses),
        }
    }
}
