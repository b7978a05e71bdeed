//! Savings goals and their creation drafts.

use uuid::Uuid;

use crate::{
    common::*,
    validation::{required_text, ValidationError},
};

/// A target amount accumulated over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    goal: Amount,
    saved: Amount,
}

impl SavingsGoal {
    pub fn goal(&self) -> Amount {
        self.goal
    }

    pub fn saved(&self) -> Amount {
        self.saved
    }

    pub fn remaining(&self) -> Amount {
        self.goal.saturating_sub(self.saved)
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.goal
    }

    /// Adds a positive contribution, capping the saved total at the goal.
    ///
    /// Returns `false` without touching the goal when `amount` is not positive.
    pub fn apply_contribution(&mut self, amount: i64) -> bool {
        let Some(amount) = Amount::try_from(amount).ok().filter(|value| *value > 0) else {
            return false;
        };
        self.saved = self.saved.saturating_add(amount).min(self.goal);
        true
    }
}

impl Displayable for SavingsGoal {
    fn display_label(&self) -> String {
        format!("{} ({} / {})", self.name, self.saved, self.goal)
    }
}

/// Raw inputs collected for a new savings goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoalDraft {
    pub name: String,
    pub goal: i64,
    pub saved: i64,
}

impl SavingsGoalDraft {
    /// Builds a goal whose opening balance is clamped into `[0, goal]`.
    pub fn validate(self) -> Result<SavingsGoal, ValidationError> {
        let name = required_text(&self.name, ValidationError::BlankName)?;
        let goal = Amount::try_from(self.goal)
            .ok()
            .filter(|goal| *goal > 0)
            .ok_or(ValidationError::NonPositiveGoal)?;
        let saved = Amount::try_from(self.saved.max(0))
            .unwrap_or_default()
            .min(goal);
        Ok(SavingsGoal {
            id: Uuid::new_v4(),
            name,
            goal,
            saved,
        })
    }
}
