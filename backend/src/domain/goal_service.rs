//! Savings goal domain logic.
//!
//! The goal table always has three rows. Goals are renamed and retargeted in
//! place; a completed goal is "recycled" in two steps:
//!
//! 1. [`GoalService::start_recycle`] cashes the balance out to available cash
//!    and persists a [`PendingRecycle`]
//! 2. [`GoalService::finish_recycle`] gives the goal its new name and target
//!
//! The pending value lives in `global_config.yaml`, so a restart between the
//! two steps does not lose track of which goal is being recycled.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::commission::round_to_cents;
use crate::domain::ledger_service::now_stamp;
use crate::domain::models::{BankError, PendingRecycle, SavingsGoal};
use crate::storage::csv::goal_repository::normalize_goals;
use crate::storage::csv::{CsvConnection, GlobalConfigRepository, GoalRepository};
use crate::storage::traits::{GlobalConfigStorage, GoalStorage};
use shared::{
    FinishRecycleRequest, FinishRecycleResponse, GoalProgress, StartRecycleRequest,
    StartRecycleResponse, UpdateGoalRequest,
};

#[derive(Clone)]
pub struct GoalService {
    goal_repository: GoalRepository,
    config_repository: GlobalConfigRepository,
}

impl GoalService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            goal_repository: GoalRepository::new((*connection).clone()),
            config_repository: GlobalConfigRepository::new((*connection).clone()),
        }
    }

    pub fn list_goals(&self) -> Result<Vec<GoalProgress>> {
        Ok(self
            .goal_repository
            .load_goals()?
            .iter()
            .map(SavingsGoal::to_progress)
            .collect())
    }

    pub fn get_goal(&self, goal_id: u32) -> Result<SavingsGoal> {
        self.goal_repository
            .get_goal(goal_id)?
            .ok_or_else(|| BankError::UnknownGoal(goal_id).into())
    }

    /// Sum of every goal balance
    pub fn total_saved(&self) -> Result<f64> {
        Ok(self
            .goal_repository
            .load_goals()?
            .iter()
            .map(|goal| goal.balance)
            .sum())
    }

    /// Rename and retarget a goal, keeping whatever it has saved
    pub fn update_goal(&self, request: UpdateGoalRequest) -> Result<GoalProgress> {
        let name = validate_goal_fields(&request.name, request.target)?;
        let mut goal = self.get_goal(request.goal_id)?;

        goal.name = name;
        goal.target = request.target;
        self.store(&goal)?;

        info!("Updated goal {}: {} / {:.2}", goal.id, goal.name, goal.target);
        Ok(goal.to_progress())
    }

    /// Add `delta` to a goal's balance and persist it
    pub(crate) fn adjust_balance(&self, goal_id: u32, delta: f64) -> Result<SavingsGoal> {
        let mut goal = self.get_goal(goal_id)?;
        goal.balance = round_to_cents(goal.balance + delta);
        self.store(&goal)?;
        Ok(goal)
    }

    pub fn start_recycle(&self, request: StartRecycleRequest) -> Result<StartRecycleResponse> {
        if let Some(pending) = self.pending_recycle()? {
            return Err(BankError::RecycleAlreadyPending(pending.goal_id).into());
        }

        let mut goal = self.get_goal(request.goal_id)?;
        if !goal.is_complete() {
            return Err(BankError::GoalNotComplete(goal.id).into());
        }

        let withdrawn = goal.balance;
        goal.balance = 0.0;
        self.store(&goal)?;

        self.config_repository.set_pending_recycle(Some(PendingRecycle {
            goal_id: goal.id,
            withdrawn,
            started_at: now_stamp(),
        }))?;

        info!("Goal {} ({}) cashed out {:.2} for recycling", goal.id, goal.name, withdrawn);
        Ok(StartRecycleResponse {
            goal_id: goal.id,
            withdrawn,
            success_message: format!("{} complete! Pick your next goal.", goal.name),
        })
    }

    pub fn finish_recycle(&self, request: FinishRecycleRequest) -> Result<FinishRecycleResponse> {
        let pending = self.pending_recycle()?.ok_or(BankError::NoPendingRecycle)?;
        let name = validate_goal_fields(&request.new_name, request.new_target)?;

        let mut goal = self.get_goal(pending.goal_id)?;
        goal.name = name;
        goal.target = request.new_target;
        goal.balance = 0.0;
        self.store(&goal)?;

        self.config_repository.set_pending_recycle(None)?;

        info!("Goal {} recycled as {} ({:.2})", goal.id, goal.name, goal.target);
        Ok(FinishRecycleResponse {
            success_message: format!("New goal set: {}", goal.name),
            goal: goal.to_progress(),
        })
    }

    /// Forget the pending recycle. The cashed-out balance stays in available cash.
    pub fn cancel_recycle(&self) -> Result<()> {
        self.config_repository.set_pending_recycle(None)
    }

    pub fn pending_recycle(&self) -> Result<Option<PendingRecycle>> {
        Ok(self.config_repository.get_global_config()?.pending_recycle)
    }

    pub fn load_goals(&self) -> Result<Vec<SavingsGoal>> {
        self.goal_repository.load_goals()
    }

    /// Table editor: rows are forced back into the fixed three-goal shape
    pub fn replace_goals(&self, goals: Vec<SavingsGoal>) -> Result<Vec<SavingsGoal>> {
        let goals = normalize_goals(goals);
        self.goal_repository.save_goals(&goals)?;
        info!("Replaced goal table");
        Ok(goals)
    }

    fn store(&self, goal: &SavingsGoal) -> Result<()> {
        if self.goal_repository.update_goal(goal)? {
            Ok(())
        } else {
            Err(BankError::UnknownGoal(goal.id).into())
        }
    }
}

fn validate_goal_fields(name: &str, target: f64) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BankError::EmptyGoalName.into());
    }
    if !target.is_finite() || target <= 0.0 {
        return Err(BankError::NonPositiveTarget.into());
    }
    Ok(name.to_string())
}
