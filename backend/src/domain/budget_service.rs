//! Personal budget domain logic.
//!
//! Available cash is everything the accountant has earned in commission, plus
//! personal income, minus personal spending, minus what sits in the goals:
//!
//! ```text
//! available_cash = total_earned + Σ budget amounts − Σ goal balances
//! ```
//!
//! Earn/Spend moves append a budget row. Save/Withdraw moves only shift money
//! between available cash and a goal, so they touch the goal table alone.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::commission::{exceeds_cents, round_to_cents};
use crate::domain::formatting::format_currency;
use crate::domain::goal_service::GoalService;
use crate::domain::ledger_service::{now_stamp, LedgerService};
use crate::domain::models::{BankError, BudgetCategory, PersonalTransaction, SavingsGoal};
use crate::domain::sass::sass_for;
use crate::storage::csv::{BudgetRepository, CsvConnection, GlobalConfigRepository};
use crate::storage::traits::{BudgetStorage, GlobalConfigStorage};
use shared::{BudgetEntry, BudgetSummary, MoveFundsRequest, MoveFundsResponse, MoveKind};

#[derive(Clone)]
pub struct BudgetService {
    budget_repository: BudgetRepository,
    config_repository: GlobalConfigRepository,
    ledger_service: LedgerService,
    goal_service: GoalService,
}

impl BudgetService {
    pub fn new(
        connection: Arc<CsvConnection>,
        ledger_service: LedgerService,
        goal_service: GoalService,
    ) -> Self {
        Self {
            budget_repository: BudgetRepository::new((*connection).clone()),
            config_repository: GlobalConfigRepository::new((*connection).clone()),
            ledger_service,
            goal_service,
        }
    }

    /// Sum of signed personal amounts (income minus spending)
    pub fn personal_net(&self) -> Result<f64> {
        Ok(self
            .budget_repository
            .load_budget()?
            .iter()
            .map(|entry| entry.amount)
            .sum())
    }

    pub fn available_cash(&self) -> Result<f64> {
        let total_earned = self.ledger_service.total_earnings()?;
        let personal_net = self.personal_net()?;
        let saved_in_goals = self.goal_service.total_saved()?;
        Ok(round_to_cents(total_earned + personal_net - saved_in_goals))
    }

    pub fn budget_summary(&self) -> Result<BudgetSummary> {
        let total_earned = self.ledger_service.total_earnings()?;
        let personal_net = self.personal_net()?;
        let goals = self.goal_service.list_goals()?;
        let saved_in_goals: f64 = goals.iter().map(|goal| goal.balance).sum();

        Ok(BudgetSummary {
            total_earned,
            personal_net,
            saved_in_goals,
            available_cash: round_to_cents(total_earned + personal_net - saved_in_goals),
            goals,
        })
    }

    /// Check-then-act: the balance check and the write are separate file operations.
    pub fn move_funds(&self, request: MoveFundsRequest) -> Result<MoveFundsResponse> {
        if !request.amount.is_finite() {
            return Err(BankError::InvalidAmount.into());
        }
        if request.amount <= 0.0 {
            return Err(BankError::NonPositiveAmount.into());
        }

        let symbol = self.config_repository.get_global_config()?.currency_symbol;
        let amount_text = format_currency(request.amount, &symbol);
        let sass = sass_for(request.kind, request.amount).to_string();

        let (goal, success_message) = match request.kind {
            MoveKind::Earn => {
                self.append(BudgetCategory::Income, &request.item, request.amount, &sass)?;
                (None, format!("Earned {}!", amount_text))
            }
            MoveKind::Spend => {
                self.require_cash(request.amount)?;
                self.append(BudgetCategory::Spending, &request.item, -request.amount, &sass)?;
                (None, format!("Spent {} on {}.", amount_text, item_or_default(&request.item)))
            }
            MoveKind::Save => {
                let goal = self.require_goal(request.goal_id)?;
                self.require_cash(request.amount)?;
                let goal = self.goal_service.adjust_balance(goal.id, request.amount)?;
                let message = format!("Saved {} toward {}.", amount_text, goal.name);
                (Some(goal.to_progress()), message)
            }
            MoveKind::Withdraw => {
                let goal = self.require_goal(request.goal_id)?;
                if exceeds_cents(request.amount, goal.balance) {
                    return Err(BankError::InsufficientFunds {
                        requested: request.amount,
                        available: goal.balance,
                    }
                    .into());
                }
                let goal = self.goal_service.adjust_balance(goal.id, -request.amount)?;
                let message = format!("Took {} out of {}.", amount_text, goal.name);
                (Some(goal.to_progress()), message)
            }
        };

        info!("Budget move: {} {:.2}", request.kind, request.amount);
        Ok(MoveFundsResponse {
            available_cash: self.available_cash()?,
            goal,
            sass,
            success_message,
        })
    }

    /// Budget rows, most recent first
    pub fn history(&self) -> Result<Vec<BudgetEntry>> {
        Ok(self
            .budget_repository
            .load_budget()?
            .iter()
            .rev()
            .map(BudgetEntry::from)
            .collect())
    }

    pub fn load_budget(&self) -> Result<Vec<PersonalTransaction>> {
        self.budget_repository.load_budget()
    }

    /// Table editor: overwrite the budget exactly as given
    pub fn replace_budget(&self, entries: Vec<PersonalTransaction>) -> Result<()> {
        info!("Replacing budget with {} edited rows", entries.len());
        self.budget_repository.save_budget(&entries)
    }

    fn append(&self, category: BudgetCategory, item: &str, amount: f64, sass: &str) -> Result<()> {
        self.budget_repository.append_entry(&PersonalTransaction {
            date: now_stamp(),
            category,
            item: item.trim().to_string(),
            amount,
            sass: sass.to_string(),
        })
    }

    fn require_cash(&self, amount: f64) -> Result<()> {
        let available = self.available_cash()?;
        if exceeds_cents(amount, available) {
            return Err(BankError::InsufficientFunds { requested: amount, available }.into());
        }
        Ok(())
    }

    fn require_goal(&self, goal_id: Option<u32>) -> Result<SavingsGoal> {
        let goal_id = goal_id.ok_or(BankError::GoalRequired)?;
        self.goal_service.get_goal(goal_id)
    }
}

fn item_or_default(item: &str) -> &str {
    match item.trim() {
        "" => "something",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use shared::{DepositRequest, OpenAccountRequest, StartRecycleRequest};

    struct Fixture {
        budget: BudgetService,
        ledger: LedgerService,
        goals: GoalService,
        _env: TestEnvironment,
    }

    fn setup() -> Fixture {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let connection = Arc::new(env.connection.clone());
        let ledger = LedgerService::new(connection.clone());
        let goals = GoalService::new(connection.clone());
        let budget = BudgetService::new(connection, ledger.clone(), goals.clone());
        Fixture { budget, ledger, goals, _env: env }
    }

    fn request(kind: MoveKind, amount: f64, goal_id: Option<u32>) -> MoveFundsRequest {
        MoveFundsRequest { kind, amount, item: "Snacks".to_string(), goal_id }
    }

    fn bank_error(err: &anyhow::Error) -> &BankError {
        err.downcast_ref::<BankError>().expect("expected a BankError")
    }

    #[test]
    fn test_commission_counts_as_cash() {
        let f = setup();
        f.ledger
            .open_account(OpenAccountRequest { client_name: "Mom".to_string() })
            .unwrap();
        f.ledger
            .deposit(DepositRequest { client_name: "Mom".to_string(), amount: 100.0, commission_guess: None })
            .unwrap();

        assert_eq!(f.budget.available_cash().unwrap(), 15.0);
    }

    #[test]
    fn test_earn_spend_save_withdraw() {
        let f = setup();

        let earned = f.budget.move_funds(request(MoveKind::Earn, 40.0, None)).unwrap();
        assert_eq!(earned.available_cash, 40.0);
        assert!(earned.goal.is_none());

        let spent = f.budget.move_funds(request(MoveKind::Spend, 10.0, None)).unwrap();
        assert_eq!(spent.available_cash, 30.0);
        assert_eq!(spent.success_message, "Spent $10.00 on Snacks.");

        let saved = f.budget.move_funds(request(MoveKind::Save, 25.0, Some(2))).unwrap();
        assert_eq!(saved.available_cash, 5.0);
        assert_eq!(saved.goal.unwrap().balance, 25.0);

        let withdrawn = f.budget.move_funds(request(MoveKind::Withdraw, 5.0, Some(2))).unwrap();
        assert_eq!(withdrawn.available_cash, 10.0);
        assert_eq!(withdrawn.goal.unwrap().balance, 20.0);

        let history = f.budget.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].category, "Spending");
        assert_eq!(history[0].amount, -10.0);
        assert_eq!(history[1].category, "Income");
        assert_eq!(history[1].sass, sass_for(MoveKind::Earn, 40.0));
    }

    #[test]
    fn test_moves_never_take_cash_negative() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 10.0, None)).unwrap();

        let err = f.budget.move_funds(request(MoveKind::Spend, 10.5, None)).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::InsufficientFunds { requested: 10.5, available: 10.0 });

        let err = f.budget.move_funds(request(MoveKind::Save, 11.0, Some(1))).unwrap_err();
        assert!(matches!(bank_error(&err), BankError::InsufficientFunds { .. }));

        assert_eq!(f.budget.available_cash().unwrap(), 10.0);
        assert_eq!(f.goals.total_saved().unwrap(), 0.0);
    }

    #[test]
    fn test_withdraw_limited_to_goal_balance() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 50.0, None)).unwrap();
        f.budget.move_funds(request(MoveKind::Save, 20.0, Some(3))).unwrap();

        let err = f.budget.move_funds(request(MoveKind::Withdraw, 20.01, Some(3))).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::InsufficientFunds { requested: 20.01, available: 20.0 });
    }

    #[test]
    fn test_goal_moves_need_a_goal() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 50.0, None)).unwrap();

        let err = f.budget.move_funds(request(MoveKind::Save, 5.0, None)).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::GoalRequired);

        let err = f.budget.move_funds(request(MoveKind::Save, 5.0, Some(4))).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::UnknownGoal(4));
    }

    #[test]
    fn test_amount_must_be_positive() {
        let f = setup();

        let err = f.budget.move_funds(request(MoveKind::Earn, 0.0, None)).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::NonPositiveAmount);
        assert!(f.budget.history().unwrap().is_empty());
    }

    #[test]
    fn test_recycle_returns_money_to_cash() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 150.0, None)).unwrap();
        f.budget.move_funds(request(MoveKind::Save, 100.0, Some(1))).unwrap();
        assert_eq!(f.budget.available_cash().unwrap(), 50.0);

        f.goals.start_recycle(StartRecycleRequest { goal_id: 1 }).unwrap();

        let summary = f.budget.budget_summary().unwrap();
        assert_eq!(summary.available_cash, 150.0);
        assert_eq!(summary.saved_in_goals, 0.0);
        assert_eq!(summary.goals.len(), 3);
    }

    #[test]
    fn test_can_spend_the_last_cents() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 0.3, None)).unwrap();
        let spent = f.budget.move_funds(request(MoveKind::Spend, 0.1, None)).unwrap();
        assert_eq!(spent.available_cash, 0.2);

        let spent = f.budget.move_funds(request(MoveKind::Spend, 0.2, None)).unwrap();

        assert_eq!(spent.available_cash, 0.0);
        let err = f.budget.move_funds(request(MoveKind::Spend, 0.01, None)).unwrap_err();
        assert!(matches!(bank_error(&err), BankError::InsufficientFunds { .. }));
    }

    #[test]
    fn test_can_withdraw_the_last_cents() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 1.0, None)).unwrap();
        f.budget.move_funds(request(MoveKind::Save, 0.3, Some(1))).unwrap();
        f.budget.move_funds(request(MoveKind::Withdraw, 0.1, Some(1))).unwrap();

        let withdrawn = f.budget.move_funds(request(MoveKind::Withdraw, 0.2, Some(1))).unwrap();

        assert_eq!(withdrawn.goal.unwrap().balance, 0.0);
        assert_eq!(withdrawn.available_cash, 1.0);
    }

    #[test]
    fn test_nan_amount_never_reaches_the_file() {
        let f = setup();

        let err = f.budget.move_funds(request(MoveKind::Earn, f64::NAN, None)).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::InvalidAmount);

        let err = f.budget.move_funds(request(MoveKind::Save, f64::NAN, Some(1))).unwrap_err();
        assert_eq!(bank_error(&err), &BankError::InvalidAmount);

        assert!(f.budget.history().unwrap().is_empty());
        assert_eq!(f.budget.available_cash().unwrap(), 0.0);
    }

    #[test]
    fn test_replace_budget_changes_cash() {
        let f = setup();
        f.budget.move_funds(request(MoveKind::Earn, 30.0, None)).unwrap();

        let mut rows = f.budget.load_budget().unwrap();
        rows[0].amount = 12.0;
        f.budget.replace_budget(rows).unwrap();

        assert_eq!(f.budget.available_cash().unwrap(), 12.0);
    }
}
