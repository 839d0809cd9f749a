use crate::goal::{Goal, GoalStatus};

/// Completion numbers derived from a goal list. Holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_goals(goals: &[Goal]) -> Self {
        Self {
            completed: goals
                .iter()
                .filter(|goal| goal.status == GoalStatus::Completed)
                .count(),
            total: goals.len(),
        }
    }

    /// In `[0, 100]`; exactly 0 for an empty list.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }

    pub fn summary(&self) -> String {
        format!("{} of {} goals completed", self.completed, self.total)
    }
}
