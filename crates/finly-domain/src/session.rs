//! Session-wide state container owning every tracked collection.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    debt::Debt,
    finance::{ExtraExpense, FinanceSnapshot, Responsibility},
    savings::SavingsGoal,
};

/// In-memory state for one running instance. Entities are appended, never removed.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub debts: Vec<Debt>,
    pub savings: Vec<SavingsGoal>,
    pub responsibilities: Vec<Responsibility>,
    pub extra_expenses: Vec<ExtraExpense>,
    pub finance: FinanceSnapshot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            debts: Vec::new(),
            savings: Vec::new(),
            responsibilities: Vec::new(),
            extra_expenses: Vec::new(),
            finance: FinanceSnapshot::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_debt(&mut self, debt: Debt) -> Uuid {
        let id = debt.id;
        self.debts.push(debt);
        self.touch();
        id
    }

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> Uuid {
        let id = goal.id;
        self.savings.push(goal);
        self.touch();
        id
    }

    pub fn add_responsibility(&mut self, responsibility: Responsibility) -> Uuid {
        let id = responsibility.id;
        self.responsibilities.push(responsibility);
        self.touch();
        id
    }

    pub fn add_extra_expense(&mut self, expense: ExtraExpense) -> Uuid {
        let id = expense.id;
        self.extra_expenses.push(expense);
        self.touch();
        id
    }

    pub fn set_finance(&mut self, snapshot: FinanceSnapshot) {
        self.finance = snapshot;
        self.touch();
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == id)
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|debt| debt.id == id)
    }

    pub fn savings_goal(&self, id: Uuid) -> Option<&SavingsGoal> {
        self.savings.iter().find(|goal| goal.id == id)
    }

    pub fn savings_goal_mut(&mut self, id: Uuid) -> Option<&mut SavingsGoal> {
        self.savings.iter_mut().find(|goal| goal.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
            && self.savings.is_empty()
            && self.responsibilities.is_empty()
            && self.extra_expenses.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
