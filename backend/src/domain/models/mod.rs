//! Domain models for the family bank.
//!
//! These types are what the services and repositories pass around; each one
//! converts into its `shared` DTO with `From`.

pub mod budget;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod reference;

pub use budget::{BudgetCategory, PersonalTransaction};
pub use error::BankError;
pub use goal::{PendingRecycle, SavingsGoal, DEFAULT_GOAL_TARGET, GOAL_COUNT};
pub use ledger::{ClientTransaction, ClientTransactionType};
pub use reference::{ContentEntry, PigImageTier};
