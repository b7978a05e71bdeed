//! Savings goal aggregation and contribution handling.

use finly_domain::{Amount, SavingsGoal, SavingsGoalDraft, Session};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    math::{percent_of, progress_percent},
    CoreError,
};

/// Derived figures for a single goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSummary {
    pub remaining: Amount,
    pub progress_percent: u32,
}

/// Totals across a non-empty set of goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsTotals {
    pub count: usize,
    pub total_goal: Amount,
    pub total_saved: Amount,
    pub total_pending: Amount,
    pub overall_progress_percent: u32,
}

/// Portfolio view that keeps "nothing registered yet" apart from zero progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsOverview {
    NoGoals,
    Tracking(SavingsTotals),
}

impl SavingsOverview {
    /// Flattened totals; the empty state reports a zero count and zero amounts.
    pub fn totals(&self) -> SavingsTotals {
        match self {
            SavingsOverview::NoGoals => SavingsTotals {
                count: 0,
                total_goal: 0,
                total_saved: 0,
                total_pending: 0,
                overall_progress_percent: 0,
            },
            SavingsOverview::Tracking(totals) => *totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SavingsOverview::NoGoals)
    }
}

pub struct SavingsService;

impl SavingsService {
    pub fn summarize(goal: &SavingsGoal) -> GoalSummary {
        GoalSummary {
            remaining: goal.remaining(),
            progress_percent: progress_percent(goal.saved(), goal.goal()),
        }
    }

    pub fn summarize_portfolio(goals: &[SavingsGoal]) -> SavingsOverview {
        if goals.is_empty() {
            return SavingsOverview::NoGoals;
        }
        let mut total_goal: Amount = 0;
        let mut total_saved: Amount = 0;
        for goal in goals {
            total_goal = total_goal.saturating_add(goal.goal());
            total_saved = total_saved.saturating_add(goal.saved());
        }
        SavingsOverview::Tracking(SavingsTotals {
            count: goals.len(),
            total_goal,
            total_saved,
            total_pending: total_goal.saturating_sub(total_saved),
            overall_progress_percent: u32::try_from(percent_of(total_saved, total_goal))
                .unwrap_or(u32::MAX),
        })
    }

    /// Validates and stores a new goal. A rejected draft leaves the session untouched.
    pub fn register(session: &mut Session, draft: SavingsGoalDraft) -> Result<Uuid, CoreError> {
        let goal = draft.validate().map_err(|err| {
            warn!("savings goal rejected: {err}");
            CoreError::from(err)
        })?;
        debug!(name = %goal.name, goal = goal.goal(), saved = goal.saved(), "savings goal registered");
        Ok(session.add_savings_goal(goal))
    }

    /// Adds `amount` to the goal. Returns whether the contribution was applied.
    pub fn apply_contribution(
        session: &mut Session,
        id: Uuid,
        amount: i64,
    ) -> Result<bool, CoreError> {
        let goal = session
            .savings_goal_mut(id)
            .ok_or(CoreError::GoalNotFound(id))?;
        if !goal.apply_contribution(amount) {
            debug!(%id, amount, "non-positive contribution ignored");
            return Ok(false);
        }
        debug!(%id, amount, saved = goal.saved(), "contribution applied");
        session.touch();
        Ok(true)
    }
}
