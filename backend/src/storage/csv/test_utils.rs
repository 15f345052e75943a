/// Test utilities: a temporary data directory that is removed on drop,
/// even if the test panics.

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;
use super::connection::CsvConnection;

pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Write a raw file into the data directory, for legacy-format tests
    pub fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::write(self.base_path.join(name), contents)?;
        Ok(())
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.base_path.join(name))?)
    }
}
