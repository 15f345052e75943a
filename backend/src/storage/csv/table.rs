//! Whole-table read and write helpers shared by the CSV repositories.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read every row of a CSV table. A missing file reads as an empty table.
pub(crate) fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!("{} does not exist yet, treating as empty", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row: T = result
            .with_context(|| format!("Malformed row {} in {}", index + 1, path.display()))?;
        rows.push(row);
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Rewrite a CSV table through a temp file so a crash never leaves half a file.
pub(crate) fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("csv.tmp");
    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        // Header is written by hand so empty tables still get one
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }

    fs::rename(&temp_path, path)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
