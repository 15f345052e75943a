//! # CSV Storage Module
//!
//! File-based storage for the family bank. All files live directly in the
//! data directory:
//!
//! ```text
//! data/
//! ├── global_config.yaml
//! ├── ledger.csv          Date,Client,Type,Amount,Note,Savings_Balance,Niece_Earnings
//! ├── budget.csv          Date,Category,Item,Amount,Sass
//! ├── goals.csv           ID,Name,Target,Balance
//! ├── daily_content.csv   Type,Content
//! └── pig_images.csv      Threshold,Image
//! ```
//!
//! Columns are matched by header name, so files written by older versions
//! with fewer columns still load; missing optional columns and empty numeric
//! cells are default-filled. A cell that is present but not a number is an error.
//! Only header names are trimmed; cell text is kept exactly as written.

pub mod budget_repository;
pub mod connection;
pub mod global_config_repository;
pub mod goal_repository;
pub mod ledger_repository;
pub mod reference_repository;
mod table;

#[cfg(test)]
pub mod test_utils;

pub use budget_repository::BudgetRepository;
pub use connection::CsvConnection;
pub use global_config_repository::{GlobalConfig, GlobalConfigRepository};
pub use goal_repository::GoalRepository;
pub use ledger_repository::LedgerRepository;
pub use reference_repository::ReferenceRepository;
