//! # CSV Reference Repository
//!
//! Read-mostly lookup tables: `daily_content.csv` (quotes and facts) and
//! `pig_images.csv` (which piggy bank picture to show for a savings level).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use crate::domain::models::{ContentEntry, PigImageTier};
use crate::storage::traits::ReferenceStorage;
use super::connection::CsvConnection;
use super::table::{read_table, write_table};

const DAILY_CONTENT_HEADER: [&str; 2] = ["Type", "Content"];
const PIG_IMAGES_HEADER: [&str; 2] = ["Threshold", "Image"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentRecord {
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Content")]
    content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PigImageRecord {
    #[serde(rename = "Threshold")]
    threshold: f64,
    #[serde(rename = "Image")]
    image: String,
}

#[derive(Clone)]
pub struct ReferenceRepository {
    connection: CsvConnection,
}

impl ReferenceRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl ReferenceStorage for ReferenceRepository {
    fn load_daily_content(&self) -> Result<Vec<ContentEntry>> {
        let records: Vec<ContentRecord> = read_table(&self.connection.daily_content_file_path())?;
        Ok(records
            .into_iter()
            .map(|record| ContentEntry {
                kind: record.kind,
                text: record.content,
            })
            .collect())
    }

    fn save_daily_content(&self, entries: &[ContentEntry]) -> Result<()> {
        let records: Vec<ContentRecord> = entries
            .iter()
            .map(|entry| ContentRecord {
                kind: entry.kind.clone(),
                content: entry.text.clone(),
            })
            .collect();
        write_table(&self.connection.daily_content_file_path(), &DAILY_CONTENT_HEADER, &records)
    }

    fn load_pig_images(&self) -> Result<Vec<PigImageTier>> {
        let records: Vec<PigImageRecord> = read_table(&self.connection.pig_images_file_path())?;
        Ok(records
            .into_iter()
            .map(|record| PigImageTier {
                threshold: record.threshold,
                image: record.image,
            })
            .collect())
    }

    fn save_pig_images(&self, tiers: &[PigImageTier]) -> Result<()> {
        let records: Vec<PigImageRecord> = tiers
            .iter()
            .map(|tier| PigImageRecord {
                threshold: tier.threshold,
                image: tier.image.clone(),
            })
            .collect();
        write_table(&self.connection.pig_images_file_path(), &PIG_IMAGES_HEADER, &records)
    }
}
