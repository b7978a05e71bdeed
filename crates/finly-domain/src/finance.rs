//! Monthly income and outflow records.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    common::*,
    validation::{required_text, ValidationError},
};

/// Latest declared monthly figures. Replaced wholesale on every declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinanceSnapshot {
    pub salary: Amount,
    pub extra_income: Amount,
    pub expenses: Amount,
}

impl FinanceSnapshot {
    pub fn new(salary: Amount, extra_income: Amount, expenses: Amount) -> Self {
        Self {
            salary,
            extra_income,
            expenses,
        }
    }
}

/// A fixed recurring monthly obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsibility {
    pub id: Uuid,
    pub name: String,
    pub amount: Amount,
}

impl Amounted for Responsibility {
    fn amount(&self) -> Amount {
        self.amount
    }
}

/// Raw inputs collected for a new responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsibilityDraft {
    pub name: String,
    pub amount: i64,
}

impl ResponsibilityDraft {
    pub fn validate(self) -> Result<Responsibility, ValidationError> {
        let name = required_text(&self.name, ValidationError::BlankName)?;
        let amount = positive_amount(self.amount)?;
        Ok(Responsibility {
            id: Uuid::new_v4(),
            name,
            amount,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Fixed set of buckets an extra expense can be filed under.
pub enum ExpenseCategory {
    Food,
    Transport,
    Home,
    Health,
    Education,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Home,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Home => "home",
            ExpenseCategory::Health => "health",
            ExpenseCategory::Education => "education",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.label() == needle)
            .ok_or_else(|| format!("unknown expense category `{}`", value.trim()))
    }
}

/// An ad hoc dated expense entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraExpense {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub note: String,
    pub date: NaiveDate,
    pub amount: Amount,
}

impl Amounted for ExtraExpense {
    fn amount(&self) -> Amount {
        self.amount
    }
}

impl Displayable for ExtraExpense {
    fn display_label(&self) -> String {
        format!("{} [{}] {}", self.date.format("%Y-%m-%d"), self.category, self.note)
    }
}

/// Raw inputs collected for a new extra expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraExpenseDraft {
    pub category: ExpenseCategory,
    pub note: String,
    pub date: NaiveDate,
    pub amount: i64,
}

impl ExtraExpenseDraft {
    pub fn validate(self) -> Result<ExtraExpense, ValidationError> {
        let note = required_text(&self.note, ValidationError::BlankNote)?;
        let amount = positive_amount(self.amount)?;
        Ok(ExtraExpense {
            id: Uuid::new_v4(),
            category: self.category,
            note,
            date: self.date,
            amount,
        })
    }
}

fn positive_amount(value: i64) -> Result<Amount, ValidationError> {
    Amount::try_from(value)
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or(ValidationError::NonPositiveAmount)
}
