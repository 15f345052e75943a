//! # Storage Traits
//!
//! Storage abstractions used by the domain services. All operations are
//! synchronous: there is exactly one writer and every call runs to completion.

use anyhow::Result;
use crate::domain::models::{
    ClientTransaction, ContentEntry, PendingRecycle, PersonalTransaction, PigImageTier,
    SavingsGoal,
};
use super::csv::GlobalConfig;

/// Client ledger storage
pub trait LedgerStorage: Send + Sync {
    /// Load the whole ledger in file order. A missing file is an empty ledger.
    fn load_ledger(&self) -> Result<Vec<ClientTransaction>>;

    /// Replace the whole ledger with `transactions`
    fn save_ledger(&self, transactions: &[ClientTransaction]) -> Result<()>;

    /// Load, append one row and rewrite
    fn append_transaction(&self, transaction: &ClientTransaction) -> Result<()>;

    /// Last row recorded for `client_name`, if any
    fn latest_for_client(&self, client_name: &str) -> Result<Option<ClientTransaction>>;
}

/// Personal budget storage
pub trait BudgetStorage: Send + Sync {
    fn load_budget(&self) -> Result<Vec<PersonalTransaction>>;

    fn save_budget(&self, entries: &[PersonalTransaction]) -> Result<()>;

    fn append_entry(&self, entry: &PersonalTransaction) -> Result<()>;
}

/// Savings goal storage. The table is fixed-size and mutated in place.
pub trait GoalStorage: Send + Sync {
    /// Always returns `GOAL_COUNT` goals sorted by id
    fn load_goals(&self) -> Result<Vec<SavingsGoal>>;

    fn save_goals(&self, goals: &[SavingsGoal]) -> Result<()>;

    fn get_goal(&self, goal_id: u32) -> Result<Option<SavingsGoal>>;

    /// Overwrite the row with the same id. Returns false if no such row exists.
    fn update_goal(&self, goal: &SavingsGoal) -> Result<bool>;
}

/// Read-mostly reference tables
pub trait ReferenceStorage: Send + Sync {
    fn load_daily_content(&self) -> Result<Vec<ContentEntry>>;

    fn save_daily_content(&self, entries: &[ContentEntry]) -> Result<()>;

    fn load_pig_images(&self) -> Result<Vec<PigImageTier>>;

    fn save_pig_images(&self, tiers: &[PigImageTier]) -> Result<()>;
}

/// Global configuration and persisted pending actions
pub trait GlobalConfigStorage: Send + Sync {
    /// Load the config, creating it with defaults on first use
    fn get_global_config(&self) -> Result<GlobalConfig>;

    fn update_global_config(&self, config: &GlobalConfig) -> Result<()>;

    fn set_pending_recycle(&self, pending: Option<PendingRecycle>) -> Result<()>;
}
