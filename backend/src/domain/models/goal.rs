//! Domain model for the three savings goals.
use serde::{Deserialize, Serialize};

/// The goal table always holds exactly this many rows, ids `1..=GOAL_COUNT`.
pub const GOAL_COUNT: u32 = 3;

pub const DEFAULT_GOAL_TARGET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    pub id: u32,
    pub name: String,
    pub target: f64,
    pub balance: f64,
}

impl SavingsGoal {
    /// Placeholder row used when the goal table is missing or short
    pub fn placeholder(id: u32) -> Self {
        Self {
            id,
            name: format!("Goal {}", id),
            target: DEFAULT_GOAL_TARGET,
            balance: 0.0,
        }
    }

    /// Fraction saved, between 0.0 and 1.0
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.balance / self.target).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0.0 && self.balance >= self.target
    }

    pub fn to_progress(&self) -> shared::GoalProgress {
        shared::GoalProgress {
            id: self.id,
            name: self.name.clone(),
            target: self.target,
            balance: self.balance,
            progress: self.progress(),
            is_complete: self.is_complete(),
        }
    }
}

/// A goal that has been cashed out and is waiting for its new name and target.
///
/// Persisted in `global_config.yaml` so the rename step survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRecycle {
    pub goal_id: u32,
    /// Balance moved back to available cash when the recycle started
    pub withdrawn: f64,
    pub started_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_capped() {
        let goal = SavingsGoal { id: 1, name: "Bike".to_string(), target: 50.0, balance: 80.0 };
        assert_eq!(goal.progress(), 1.0);
        assert!(goal.is_complete());
    }

    #[test]
    fn test_zero_target_never_completes() {
        let goal = SavingsGoal { id: 2, name: "Nothing".to_string(), target: 0.0, balance: 10.0 };
        assert_eq!(goal.progress(), 0.0);
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_partial_progress() {
        let goal = SavingsGoal { id: 3, name: "Concert".to_string(), target: 40.0, balance: 10.0 };
        assert!((goal.progress() - 0.25).abs() < f64::EPSILON);
        assert!(!goal.to_progress().is_complete);
    }
}
