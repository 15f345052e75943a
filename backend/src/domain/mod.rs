//! Business rules and services for the family bank.
//!
//! Services hold their repositories directly and compose each other by value.

pub mod budget_service;
pub mod commission;
pub mod content_service;
pub mod dashboard_service;
pub mod formatting;
pub mod goal_service;
pub mod ledger_service;
pub mod models;
pub mod sass;

pub use budget_service::BudgetService;
pub use content_service::ContentService;
pub use dashboard_service::DashboardService;
pub use goal_service::GoalService;
pub use ledger_service::LedgerService;
