//! # CSV Ledger Repository
//!
//! Stores every client's transactions in a single `ledger.csv`, one row per
//! transaction, in the order they were recorded.
//!
//! ```csv
//! Date,Client,Type,Amount,Note,Savings_Balance,Niece_Earnings
//! 2025-12-25 09:00,Mom,Account Open,0.0,Account Created,0.0,0.0
//! 2025-12-25 09:05,Mom,Deposit,100.0,Regular Deposit (Math Correct),85.0,15.0
//! ```

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use crate::domain::models::{ClientTransaction, ClientTransactionType};
use crate::storage::traits::LedgerStorage;
use super::connection::CsvConnection;
use super::table::{read_table, write_table};

const LEDGER_HEADER: [&str; 7] = [
    "Date",
    "Client",
    "Type",
    "Amount",
    "Note",
    "Savings_Balance",
    "Niece_Earnings",
];

/// CSV record structure for a ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerRecord {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Client")]
    client: String,
    #[serde(rename = "Type", default)]
    transaction_type: String,
    #[serde(rename = "Amount", default)]
    amount: Option<f64>,
    #[serde(rename = "Note", default)]
    note: String,
    #[serde(rename = "Savings_Balance", default)]
    savings_balance: Option<f64>,
    #[serde(rename = "Niece_Earnings", default)]
    niece_earnings: Option<f64>,
}

impl From<&ClientTransaction> for LedgerRecord {
    fn from(tx: &ClientTransaction) -> Self {
        LedgerRecord {
            date: tx.date.clone(),
            client: tx.client_name.clone(),
            transaction_type: tx.transaction_type.to_string(),
            amount: Some(tx.amount),
            note: tx.note.clone(),
            savings_balance: Some(tx.savings_balance),
            niece_earnings: Some(tx.commission),
        }
    }
}

impl From<LedgerRecord> for ClientTransaction {
    fn from(record: LedgerRecord) -> Self {
        ClientTransaction {
            date: record.date,
            client_name: record.client,
            transaction_type: ClientTransactionType::from_label(&record.transaction_type),
            amount: record.amount.unwrap_or(0.0),
            note: record.note,
            savings_balance: record.savings_balance.unwrap_or(0.0),
            commission: record.niece_earnings.unwrap_or(0.0),
        }
    }
}

/// CSV-based client ledger repository
#[derive(Clone)]
pub struct LedgerRepository {
    connection: CsvConnection,
}

impl LedgerRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl LedgerStorage for LedgerRepository {
    fn load_ledger(&self) -> Result<Vec<ClientTransaction>> {
        let records: Vec<LedgerRecord> = read_table(&self.connection.ledger_file_path())?;
        Ok(records.into_iter().map(ClientTransaction::from).collect())
    }

    fn save_ledger(&self, transactions: &[ClientTransaction]) -> Result<()> {
        let records: Vec<LedgerRecord> = transactions.iter().map(LedgerRecord::from).collect();
        write_table(&self.connection.ledger_file_path(), &LEDGER_HEADER, &records)
    }

    fn append_transaction(&self, transaction: &ClientTransaction) -> Result<()> {
        let mut transactions = self.load_ledger()?;
        transactions.push(transaction.clone());
        self.save_ledger(&transactions)?;

        info!(
            "Recorded {} for {}: amount={:.2} balance={:.2} commission={:.2}",
            transaction.transaction_type,
            transaction.client_name,
            transaction.amount,
            transaction.savings_balance,
            transaction.commission
        );
        Ok(())
    }

    fn latest_for_client(&self, client_name: &str) -> Result<Option<ClientTransaction>> {
        let transactions = self.load_ledger()?;
        Ok(transactions
            .into_iter()
            .rev()
            .find(|tx| tx.client_name == client_name))
    }
}
