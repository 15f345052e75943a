//! # CSV Budget Repository
//!
//! The accountant's personal budget lives in `budget.csv`. Amounts are signed:
//! income is positive, spending is negative.

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use crate::domain::models::{BudgetCategory, PersonalTransaction};
use crate::storage::traits::BudgetStorage;
use super::connection::CsvConnection;
use super::table::{read_table, write_table};

const BUDGET_HEADER: [&str; 5] = ["Date", "Category", "Item", "Amount", "Sass"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetRecord {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Item", default)]
    item: String,
    #[serde(rename = "Amount", default)]
    amount: Option<f64>,
    #[serde(rename = "Sass", default)]
    sass: String,
}

impl From<&PersonalTransaction> for BudgetRecord {
    fn from(entry: &PersonalTransaction) -> Self {
        BudgetRecord {
            date: entry.date.clone(),
            category: entry.category.to_string(),
            item: entry.item.clone(),
            amount: Some(entry.amount),
            sass: entry.sass.clone(),
        }
    }
}

impl From<BudgetRecord> for PersonalTransaction {
    fn from(record: BudgetRecord) -> Self {
        PersonalTransaction {
            date: record.date,
            category: BudgetCategory::from_label(&record.category),
            item: record.item,
            amount: record.amount.unwrap_or(0.0),
            sass: record.sass,
        }
    }
}

#[derive(Clone)]
pub struct BudgetRepository {
    connection: CsvConnection,
}

impl BudgetRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl BudgetStorage for BudgetRepository {
    fn load_budget(&self) -> Result<Vec<PersonalTransaction>> {
        let records: Vec<BudgetRecord> = read_table(&self.connection.budget_file_path())?;
        Ok(records.into_iter().map(PersonalTransaction::from).collect())
    }

    fn save_budget(&self, entries: &[PersonalTransaction]) -> Result<()> {
        let records: Vec<BudgetRecord> = entries.iter().map(BudgetRecord::from).collect();
        write_table(&self.connection.budget_file_path(), &BUDGET_HEADER, &records)
    }

    fn append_entry(&self, entry: &PersonalTransaction) -> Result<()> {
        let mut entries = self.load_budget()?;
        entries.push(entry.clone());
        self.save_budget(&entries)?;

        info!("Recorded personal {} '{}': {:.2}", entry.category, entry.item, entry.amount);
        Ok(())
    }
}
