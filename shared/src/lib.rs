use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a client's ledger, as shown in the history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Local timestamp, `YYYY-MM-DD HH:MM`
    pub date: String,
    pub client_name: String,
    /// Display label of the transaction type ("Deposit", "Loan", ...)
    pub transaction_type: String,
    pub amount: f64,
    pub note: String,
    /// Client savings balance after this row
    pub savings_balance: f64,
    /// Commission kept by the accountant on this row
    pub commission: f64,
}

/// Current balance of one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountRequest {
    pub client_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub client_name: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub client_name: String,
    pub amount: f64,
    /// The accountant's answer to the commission pop quiz, if they gave one
    pub commission_guess: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositResponse {
    pub commission: f64,
    /// Amount credited to the client after commission
    pub net_deposit: f64,
    pub new_balance: f64,
    /// None when no guess was submitted
    pub guess_correct: Option<bool>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub client_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRequest {
    pub client_name: String,
    pub amount: f64,
}

/// Response for ledger mutations that only move the client balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerUpdateResponse {
    pub new_balance: f64,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRequest {
    pub client_name: String,
    pub days_late: u32,
    pub penalty_guess: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyResponse {
    pub penalty: f64,
    pub guess_correct: Option<bool>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientHistoryResponse {
    pub client_name: String,
    pub balance: f64,
    /// Most recent first
    pub entries: Vec<LedgerEntry>,
}

/// Direction of a personal budget move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Money coming in (allowance, gifts)
    Earn,
    /// Money leaving available cash for good
    Spend,
    /// Available cash into a goal
    Save,
    /// Goal back into available cash
    Withdraw,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoveKind::Earn => "earn",
            MoveKind::Spend => "spend",
            MoveKind::Save => "save",
            MoveKind::Withdraw => "withdraw",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFundsRequest {
    pub kind: MoveKind,
    pub amount: f64,
    /// What the money was for; used as the budget row's item
    pub item: String,
    /// Required for Save and Withdraw
    pub goal_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFundsResponse {
    pub available_cash: f64,
    /// The goal touched by a Save or Withdraw
    pub goal: Option<GoalProgress>,
    pub sass: String,
    pub success_message: String,
}

/// One row of the personal budget history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub date: String,
    pub category: String,
    pub item: String,
    /// Signed: positive for income, negative for spending
    pub amount: f64,
    pub sass: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub id: u32,
    pub name: String,
    pub target: f64,
    pub balance: f64,
    /// balance / target, capped at 1.0
    pub progress: f64,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub goal_id: u32,
    pub name: String,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartRecycleRequest {
    pub goal_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartRecycleResponse {
    pub goal_id: u32,
    /// Amount moved from the goal back into available cash
    pub withdrawn: f64,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishRecycleRequest {
    pub new_name: String,
    pub new_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishRecycleResponse {
    pub goal: GoalProgress,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Commission earned across all clients
    pub total_earned: f64,
    /// Sum of the signed personal budget amounts
    pub personal_net: f64,
    /// Sum of all goal balances
    pub saved_in_goals: f64,
    pub available_cash: f64,
    pub goals: Vec<GoalProgress>,
}

/// A quote or fact of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyContent {
    pub kind: String,
    pub text: String,
}

/// Everything the landing screen shows at a glance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_earnings: f64,
    pub clients: Vec<ClientSummary>,
    pub budget: BudgetSummary,
    pub daily_content: DailyContent,
    pub pig_image: String,
}
