//! # Storage Module
//!
//! Handles all data persistence for the family bank.
//!
//! Every table is a flat file that is read in full and rewritten in full on
//! each mutation. The domain layer talks to the traits in [`traits`]; the
//! only implementation is the CSV/YAML one in [`csv`].

pub mod csv;
pub mod traits;

pub use self::csv::{
    BudgetRepository, CsvConnection, GlobalConfig, GlobalConfigRepository, GoalRepository,
    LedgerRepository, ReferenceRepository,
};
pub use traits::{BudgetStorage, GlobalConfigStorage, GoalStorage, LedgerStorage, ReferenceStorage};
