//! Domain model for a personal budget row.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetCategory {
    Income,
    Spending,
    Other(String),
}

impl BudgetCategory {
    pub fn as_label(&self) -> &str {
        match self {
            BudgetCategory::Income => "Income",
            BudgetCategory::Spending => "Spending",
            BudgetCategory::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Income" => BudgetCategory::Income,
            "Spending" => BudgetCategory::Spending,
            other => BudgetCategory::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalTransaction {
    pub date: String,
    pub category: BudgetCategory,
    pub item: String,
    /// Positive for money in, negative for money out
    pub amount: f64,
    pub sass: String,
}

impl From<&PersonalTransaction> for shared::BudgetEntry {
    fn from(tx: &PersonalTransaction) -> Self {
        shared::BudgetEntry {
            date: tx.date.clone(),
            category: tx.category.to_string(),
            item: tx.item.clone(),
            amount: tx.amount,
            sass: tx.sass.clone(),
        }
    }
}
