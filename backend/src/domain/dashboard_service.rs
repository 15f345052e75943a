//! One-call snapshot of everything the home screen shows.

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::domain::budget_service::BudgetService;
use crate::domain::content_service::ContentService;
use crate::domain::ledger_service::LedgerService;
use shared::DashboardSummary;

#[derive(Clone)]
pub struct DashboardService {
    ledger_service: LedgerService,
    budget_service: BudgetService,
    content_service: ContentService,
}

impl DashboardService {
    pub fn new(
        ledger_service: LedgerService,
        budget_service: BudgetService,
        content_service: ContentService,
    ) -> Self {
        Self {
            ledger_service,
            budget_service,
            content_service,
        }
    }

    /// Dashboard as of `date`; the date only picks the daily content row
    pub fn dashboard(&self, date: NaiveDate) -> Result<DashboardSummary> {
        let budget = self.budget_service.budget_summary()?;
        let pig_image = self.content_service.pig_image(budget.saved_in_goals);
        debug!("Building dashboard for {}", date);

        Ok(DashboardSummary {
            total_earnings: budget.total_earned,
            clients: self.ledger_service.client_summaries()?,
            daily_content: self.content_service.daily_content(date),
            pig_image,
            budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goal_service::GoalService;
    use crate::storage::csv::test_utils::TestEnvironment;
    use shared::{DepositRequest, MoveFundsRequest, MoveKind, OpenAccountRequest};
    use std::sync::Arc;

    #[test]
    fn test_dashboard_pulls_everything_together() {
        let env = TestEnvironment::new().unwrap();
        env.write_file("pig_images.csv", "Threshold,Image\n0,pig_empty.gif\n10,pig_happy.gif\n").unwrap();
        env.write_file("daily_content.csv", "Type,Content\nfact,Pigs are smart.\n").unwrap();

        let connection = Arc::new(env.connection.clone());
        let ledger = LedgerService::new(connection.clone());
        let goals = GoalService::new(connection.clone());
        let budget = BudgetService::new(connection.clone(), ledger.clone(), goals);
        let content = ContentService::new(connection);
        let dashboard = DashboardService::new(ledger.clone(), budget.clone(), content);

        ledger.open_account(OpenAccountRequest { client_name: "Mom".to_string() }).unwrap();
        ledger
            .deposit(DepositRequest { client_name: "Mom".to_string(), amount: 100.0, commission_guess: None })
            .unwrap();
        budget
            .move_funds(MoveFundsRequest { kind: MoveKind::Save, amount: 12.0, item: String::new(), goal_id: Some(1) })
            .unwrap();

        let summary = dashboard.dashboard(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap();

        assert_eq!(summary.total_earnings, 15.0);
        assert_eq!(summary.clients.len(), 1);
        assert_eq!(summary.clients[0].balance, 85.0);
        assert_eq!(summary.budget.available_cash, 3.0);
        assert_eq!(summary.budget.saved_in_goals, 12.0);
        assert_eq!(summary.pig_image, "pig_happy.gif");
        assert_eq!(summary.daily_content.text, "Pigs are smart.");
    }
}
