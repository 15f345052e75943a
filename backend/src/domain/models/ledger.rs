//! Domain model for a client ledger row.
use std::fmt;

/// Kind of ledger row. Labels match what is written to the `Type` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientTransactionType {
    AccountOpen,
    Deposit,
    Loan,
    Repayment,
    Penalty,
    /// Anything typed in by hand through the table editor
    Other(String),
}

impl ClientTransactionType {
    pub fn as_label(&self) -> &str {
        match self {
            ClientTransactionType::AccountOpen => "Account Open",
            ClientTransactionType::Deposit => "Deposit",
            ClientTransactionType::Loan => "Loan",
            ClientTransactionType::Repayment => "Repayment",
            ClientTransactionType::Penalty => "Penalty",
            ClientTransactionType::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Account Open" => ClientTransactionType::AccountOpen,
            "Deposit" => ClientTransactionType::Deposit,
            "Loan" => ClientTransactionType::Loan,
            "Repayment" => ClientTransactionType::Repayment,
            "Penalty" => ClientTransactionType::Penalty,
            other => ClientTransactionType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ClientTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientTransaction {
    pub date: String,
    pub client_name: String,
    pub transaction_type: ClientTransactionType,
    pub amount: f64,
    pub note: String,
    /// Running savings balance of `client_name` after this row
    pub savings_balance: f64,
    /// Commission the accountant earned on this row
    pub commission: f64,
}

impl From<&ClientTransaction> for shared::LedgerEntry {
    fn from(tx: &ClientTransaction) -> Self {
        shared::LedgerEntry {
            date: tx.date.clone(),
            client_name: tx.client_name.clone(),
            transaction_type: tx.transaction_type.to_string(),
            amount: tx.amount,
            note: tx.note.clone(),
            savings_balance: tx.savings_balance,
            commission: tx.commission,
        }
    }
}
