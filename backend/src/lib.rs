//! # Family Bank backend
//!
//! Direct, synchronous access to the family bank's domain services and their
//! CSV storage:
//! - client ledger with the commission split, loans and late penalties
//! - personal budget and the three savings goals
//! - daily content and piggy bank image lookups
//!
//! Any presentation layer talks to [`Backend`] and the DTOs in `shared`.

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that wires every service over one data directory
pub struct Backend {
    pub ledger_service: domain::LedgerService,
    pub budget_service: domain::BudgetService,
    pub goal_service: domain::GoalService,
    pub content_service: domain::ContentService,
    pub dashboard_service: domain::DashboardService,
}

impl Backend {
    pub fn new(connection: CsvConnection) -> Self {
        let csv_conn = Arc::new(connection);

        let ledger_service = domain::LedgerService::new(csv_conn.clone());
        let goal_service = domain::GoalService::new(csv_conn.clone());
        let budget_service = domain::BudgetService::new(
            csv_conn.clone(),
            ledger_service.clone(),
            goal_service.clone(),
        );
        let content_service = domain::ContentService::new(csv_conn);
        let dashboard_service = domain::DashboardService::new(
            ledger_service.clone(),
            budget_service.clone(),
            content_service.clone(),
        );

        Backend {
            ledger_service,
            budget_service,
            goal_service,
            content_service,
            dashboard_service,
        }
    }

    /// Backend over `FAMILY_BANK_DATA_DIR` or the default data directory
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(CsvConnection::new_default()?))
    }
}
