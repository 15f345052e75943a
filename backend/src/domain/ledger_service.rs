//! Client ledger domain logic.
//!
//! Every client operation funnels through [`LedgerService::record_client_transaction`]:
//! find the client's last row, add the balance delta, append the new row.
//!
//! ## Business Rules
//!
//! - Deposits: the accountant keeps `round(amount * rate, 2)`, the client gets the rest
//! - Loans cannot exceed the client's current balance
//! - Penalties are `days_late * penalty_per_day`, paid to the accountant, and
//!   leave the client's balance untouched
//! - Client names are unique and non-empty

use anyhow::Result;
use chrono::Local;
use log::info;
use std::sync::Arc;

use crate::domain::commission::{
    calculate_penalty, exceeds_cents, guess_matches, round_to_cents, split_deposit,
};
use crate::domain::formatting::format_currency;
use crate::domain::models::{BankError, ClientTransaction, ClientTransactionType};
use crate::storage::csv::{CsvConnection, GlobalConfigRepository, LedgerRepository};
use crate::storage::traits::{GlobalConfigStorage, LedgerStorage};
use shared::{
    ClientHistoryResponse, ClientSummary, DepositRequest, DepositResponse, LedgerEntry,
    LedgerUpdateResponse, LoanRequest, OpenAccountRequest, OpenAccountResponse, PenaltyRequest,
    PenaltyResponse, RepaymentRequest,
};

/// Timestamp format used in every ledger file
pub const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn now_stamp() -> String {
    Local::now().format(LEDGER_DATE_FORMAT).to_string()
}

#[derive(Clone)]
pub struct LedgerService {
    ledger_repository: LedgerRepository,
    config_repository: GlobalConfigRepository,
}

impl LedgerService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            ledger_repository: LedgerRepository::new((*connection).clone()),
            config_repository: GlobalConfigRepository::new((*connection).clone()),
        }
    }

    /// Append a row for `client_name` and return their new running balance.
    ///
    /// The previous balance is the client's last row, or 0.0 if they have none.
    pub fn record_client_transaction(
        &self,
        client_name: &str,
        transaction_type: ClientTransactionType,
        amount: f64,
        note: &str,
        balance_delta: f64,
        commission_delta: f64,
    ) -> Result<f64> {
        if !amount.is_finite() || !balance_delta.is_finite() || !commission_delta.is_finite() {
            return Err(BankError::InvalidAmount.into());
        }

        let current_balance = self
            .ledger_repository
            .latest_for_client(client_name)?
            .map(|tx| tx.savings_balance)
            .unwrap_or(0.0);

        let new_balance = round_to_cents(current_balance + balance_delta);

        let transaction = ClientTransaction {
            date: now_stamp(),
            client_name: client_name.to_string(),
            transaction_type,
            amount,
            note: note.to_string(),
            savings_balance: new_balance,
            commission: commission_delta,
        };
        self.ledger_repository.append_transaction(&transaction)?;

        Ok(new_balance)
    }

    pub fn open_account(&self, request: OpenAccountRequest) -> Result<OpenAccountResponse> {
        let client_name = request.client_name.trim().to_string();
        if client_name.is_empty() {
            return Err(BankError::EmptyClientName.into());
        }
        if self.list_clients()?.contains(&client_name) {
            return Err(BankError::ClientAlreadyExists(client_name).into());
        }

        self.record_client_transaction(
            &client_name,
            ClientTransactionType::AccountOpen,
            0.0,
            "Account Created",
            0.0,
            0.0,
        )?;

        info!("Opened account for {}", client_name);
        Ok(OpenAccountResponse {
            success_message: format!("Account for {} created!", client_name),
            client_name,
        })
    }

    /// Client names in the order their accounts first appear in the ledger
    pub fn list_clients(&self) -> Result<Vec<String>> {
        let mut clients: Vec<String> = Vec::new();
        for tx in self.ledger_repository.load_ledger()? {
            if !clients.contains(&tx.client_name) {
                clients.push(tx.client_name);
            }
        }
        Ok(clients)
    }

    pub fn client_summaries(&self) -> Result<Vec<ClientSummary>> {
        let ledger = self.ledger_repository.load_ledger()?;
        let mut summaries: Vec<ClientSummary> = Vec::new();

        for tx in &ledger {
            match summaries.iter_mut().find(|s| s.name == tx.client_name) {
                Some(summary) => summary.balance = tx.savings_balance,
                None => summaries.push(ClientSummary {
                    name: tx.client_name.clone(),
                    balance: tx.savings_balance,
                }),
            }
        }

        Ok(summaries)
    }

    /// Last stored running balance for the client, 0.0 if they have no rows
    pub fn client_balance(&self, client_name: &str) -> Result<f64> {
        Ok(self
            .ledger_repository
            .latest_for_client(client_name)?
            .map(|tx| tx.savings_balance)
            .unwrap_or(0.0))
    }

    pub fn client_history(&self, client_name: &str) -> Result<ClientHistoryResponse> {
        let ledger = self.ledger_repository.load_ledger()?;
        let entries: Vec<LedgerEntry> = ledger
            .iter()
            .rev()
            .filter(|tx| tx.client_name == client_name)
            .map(LedgerEntry::from)
            .collect();

        Ok(ClientHistoryResponse {
            client_name: client_name.to_string(),
            balance: entries.first().map(|e| e.savings_balance).unwrap_or(0.0),
            entries,
        })
    }

    /// Commission earned across every client
    pub fn total_earnings(&self) -> Result<f64> {
        Ok(self
            .ledger_repository
            .load_ledger()?
            .iter()
            .map(|tx| tx.commission)
            .sum())
    }

    pub fn deposit(&self, request: DepositRequest) -> Result<DepositResponse> {
        self.require_client(&request.client_name)?;
        validate_amount(request.amount)?;

        let config = self.config_repository.get_global_config()?;
        let split = split_deposit(request.amount, config.commission_rate);
        let guess_correct = request
            .commission_guess
            .map(|guess| guess_matches(guess, split.commission));

        let note = match guess_correct {
            Some(true) => "Regular Deposit (Math Correct)",
            Some(false) => "Regular Deposit (Math Correction)",
            None => "Regular Deposit",
        };

        let new_balance = self.record_client_transaction(
            &request.client_name,
            ClientTransactionType::Deposit,
            request.amount,
            note,
            split.net,
            split.commission,
        )?;

        Ok(DepositResponse {
            commission: split.commission,
            net_deposit: split.net,
            new_balance,
            guess_correct,
            success_message: format!(
                "Added {} to {}'s savings.",
                format_currency(split.net, &config.currency_symbol),
                request.client_name
            ),
        })
    }

    pub fn borrow(&self, request: LoanRequest) -> Result<LedgerUpdateResponse> {
        let balance = self.require_client(&request.client_name)?;
        validate_amount(request.amount)?;
        if exceeds_cents(request.amount, balance) {
            return Err(BankError::InsufficientFunds {
                requested: request.amount,
                available: balance,
            }
            .into());
        }

        let new_balance = self.record_client_transaction(
            &request.client_name,
            ClientTransactionType::Loan,
            request.amount,
            "Client Borrowed Money",
            -request.amount,
            0.0,
        )?;

        let symbol = self.config_repository.get_global_config()?.currency_symbol;
        Ok(LedgerUpdateResponse {
            new_balance,
            success_message: format!(
                "Loan of {} processed for {}.",
                format_currency(request.amount, &symbol),
                request.client_name
            ),
        })
    }

    pub fn repay(&self, request: RepaymentRequest) -> Result<LedgerUpdateResponse> {
        self.require_client(&request.client_name)?;
        validate_amount(request.amount)?;

        let new_balance = self.record_client_transaction(
            &request.client_name,
            ClientTransactionType::Repayment,
            request.amount,
            "Loan Repayment",
            request.amount,
            0.0,
        )?;

        Ok(LedgerUpdateResponse {
            new_balance,
            success_message: format!("Loan Repaid by {}!", request.client_name),
        })
    }

    pub fn charge_penalty(&self, request: PenaltyRequest) -> Result<PenaltyResponse> {
        self.require_client(&request.client_name)?;
        if request.days_late < 1 {
            return Err(BankError::InvalidDaysLate.into());
        }

        let config = self.config_repository.get_global_config()?;
        let penalty = calculate_penalty(request.days_late, config.penalty_per_day);
        let guess_correct = request
            .penalty_guess
            .map(|guess| guess_matches(guess, penalty));

        self.record_client_transaction(
            &request.client_name,
            ClientTransactionType::Penalty,
            penalty,
            &format!("Late Fee ({} days)", request.days_late),
            0.0,
            penalty,
        )?;

        Ok(PenaltyResponse {
            penalty,
            guess_correct,
            success_message: format!(
                "Penalty of {} charged to {}.",
                format_currency(penalty, &config.currency_symbol),
                request.client_name
            ),
        })
    }

    pub fn load_ledger(&self) -> Result<Vec<ClientTransaction>> {
        self.ledger_repository.load_ledger()
    }

    /// Table editor: overwrite the ledger exactly as given. Balances are not
    /// recomputed; whatever the editor typed is what later rows build on.
    pub fn replace_ledger(&self, transactions: Vec<ClientTransaction>) -> Result<()> {
        info!("Replacing ledger with {} edited rows", transactions.len());
        self.ledger_repository.save_ledger(&transactions)
    }

    /// Current balance of an existing client
    fn require_client(&self, client_name: &str) -> Result<f64> {
        match self.ledger_repository.latest_for_client(client_name)? {
            Some(tx) => Ok(tx.savings_balance),
            None => Err(BankError::UnknownClient(client_name.to_string()).into()),
        }
    }
}

/// Client amounts may be zero but never negative or non-finite
fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(BankError::InvalidAmount.into());
    }
    if amount < 0.0 {
        return Err(BankError::NegativeAmount.into());
    }
    Ok(())
}
