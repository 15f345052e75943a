//! Business rule violations.
//!
//! Services return `anyhow::Result`; these errors travel inside it so the
//! presentation layer can `downcast_ref::<BankError>()` and show the message.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BankError {
    #[error("Client name cannot be empty")]
    EmptyClientName,
    #[error("An account for {0} already exists")]
    ClientAlreadyExists(String),
    #[error("No account found for {0}")]
    UnknownClient(String),
    #[error("Amount must be a number")]
    InvalidAmount,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Days late must be at least 1")]
    InvalidDaysLate,
    #[error("Insufficient funds: requested ${requested:.2} but only ${available:.2} is available")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("No goal with id {0}")]
    UnknownGoal(u32),
    #[error("Pick a goal for this move")]
    GoalRequired,
    #[error("Goal {0} has not reached its target yet")]
    GoalNotComplete(u32),
    #[error("Goal name cannot be empty")]
    EmptyGoalName,
    #[error("Goal target must be greater than 0")]
    NonPositiveTarget,
    #[error("Goal {0} is already waiting for a new name")]
    RecycleAlreadyPending(u32),
    #[error("No goal is waiting to be recycled")]
    NoPendingRecycle,
}
