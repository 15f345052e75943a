//! Daily quotes/facts and the piggy bank image.
//!
//! Both lookups are pure functions of their input and the reference tables.
//! They never fail: a missing, empty or unreadable table falls back to a
//! built-in default and the problem is logged at `warn`.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::warn;
use std::sync::Arc;

use crate::domain::models::{ContentEntry, PigImageTier};
use crate::storage::csv::{CsvConnection, ReferenceRepository};
use crate::storage::traits::ReferenceStorage;
use shared::DailyContent;

pub const DEFAULT_CONTENT_KIND: &str = "quote";
pub const DEFAULT_CONTENT_TEXT: &str = "Every penny counts. Save a little, grow a lot.";
pub const DEFAULT_PIG_IMAGE: &str = "pig_default.gif";

#[derive(Clone)]
pub struct ContentService {
    reference_repository: ReferenceRepository,
}

impl ContentService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            reference_repository: ReferenceRepository::new((*connection).clone()),
        }
    }

    /// Row `ordinal(date) % len` of the content table
    pub fn daily_content(&self, date: NaiveDate) -> DailyContent {
        let entries = self.content_or_empty();
        pick_for_date(&entries, date)
    }

    /// Same rotation, restricted to rows whose `Type` matches `kind` (case-insensitive)
    pub fn daily_content_of_kind(&self, kind: &str, date: NaiveDate) -> DailyContent {
        let entries: Vec<ContentEntry> = self
            .content_or_empty()
            .into_iter()
            .filter(|entry| entry.kind.trim().eq_ignore_ascii_case(kind.trim()))
            .collect();
        pick_for_date(&entries, date)
    }

    pub fn today_content(&self) -> DailyContent {
        self.daily_content(Local::now().date_naive())
    }

    /// Image for the highest threshold not above `total_saved`
    pub fn pig_image(&self, total_saved: f64) -> String {
        let tiers = match self.reference_repository.load_pig_images() {
            Ok(tiers) => tiers,
            Err(e) => {
                warn!("Failed to load pig images, using default: {:#}", e);
                Vec::new()
            }
        };

        tiers
            .iter()
            .filter(|tier| tier.threshold <= total_saved)
            .max_by(|a, b| a.threshold.total_cmp(&b.threshold))
            .map(|tier| tier.image.clone())
            .unwrap_or_else(|| DEFAULT_PIG_IMAGE.to_string())
    }

    pub fn load_daily_content(&self) -> Result<Vec<ContentEntry>> {
        self.reference_repository.load_daily_content()
    }

    pub fn replace_daily_content(&self, entries: Vec<ContentEntry>) -> Result<()> {
        self.reference_repository.save_daily_content(&entries)
    }

    pub fn load_pig_images(&self) -> Result<Vec<PigImageTier>> {
        self.reference_repository.load_pig_images()
    }

    pub fn replace_pig_images(&self, tiers: Vec<PigImageTier>) -> Result<()> {
        self.reference_repository.save_pig_images(&tiers)
    }

    fn content_or_empty(&self) -> Vec<ContentEntry> {
        match self.reference_repository.load_daily_content() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to load daily content, using default: {:#}", e);
                Vec::new()
            }
        }
    }
}

fn pick_for_date(entries: &[ContentEntry], date: NaiveDate) -> DailyContent {
    if entries.is_empty() {
        return DailyContent {
            kind: DEFAULT_CONTENT_KIND.to_string(),
            text: DEFAULT_CONTENT_TEXT.to_string(),
        };
    }
    let index = date.ordinal() as usize % entries.len();
    DailyContent::from(&entries[index])
}
