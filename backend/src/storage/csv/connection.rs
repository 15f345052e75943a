use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FAMILY_BANK_DATA_DIR";

const DEFAULT_DIR_NAME: &str = "Family Bank";

/// CsvConnection knows where every table file lives
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Could not create data directory {}", base_path.display())
            })?;
            info!("Created data directory {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// Uses `$FAMILY_BANK_DATA_DIR` when set, otherwise `~/Documents/Family Bank`,
    /// falling back to `./family_bank_data` when no documents folder is known.
    pub fn new_default() -> Result<Self> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => {
                info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
                PathBuf::from(dir.trim())
            }
            _ => match dirs::document_dir() {
                Some(documents) => documents.join(DEFAULT_DIR_NAME),
                None => PathBuf::from("family_bank_data"),
            },
        };

        info!("Family bank data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn ledger_file_path(&self) -> PathBuf {
        self.base_directory.join("ledger.csv")
    }

    pub fn budget_file_path(&self) -> PathBuf {
        self.base_directory.join("budget.csv")
    }

    pub fn goals_file_path(&self) -> PathBuf {
        self.base_directory.join("goals.csv")
    }

    pub fn daily_content_file_path(&self) -> PathBuf {
        self.base_directory.join("daily_content.csv")
    }

    pub fn pig_images_file_path(&self) -> PathBuf {
        self.base_directory.join("pig_images.csv")
    }

    pub fn global_config_path(&self) -> PathBuf {
        self.base_directory.join("global_config.yaml")
    }
}
