use csv::QuoteStyle;
use serde::Serialize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::app::FilterError;

pub const TRIPS_FILENAME: &str = "trips.csv";
pub const CONNECTIONS_FILENAME: &str = "connections.csv";
pub const LEGS_FILENAME: &str = "legs.csv";
pub const LOG_FILENAME: &str = "log.txt";

/// writes `rows` as a CSV table with a header row into `directory`.
///
/// returns the path written, or `None` when the file already exists and
/// `overwrite` is false.
pub fn write_table<T: Serialize>(
    directory: &Path,
    filename: &str,
    rows: &[T],
    overwrite: bool,
) -> Result<Option<PathBuf>, FilterError> {
    let filepath = directory.join(filename);
    let mut writer = match create_writer(&filepath, QuoteStyle::Necessary, overwrite)? {
        Some(writer) => writer,
        None => return Ok(None),
    };
    for row in rows.iter() {
        writer.serialize(row).map_err(|e| {
            FilterError::Write(format!(
                "Failed to write to file {}: {}",
                filepath.display(),
                e
            ))
        })?;
    }
    writer.flush().map_err(|e| {
        FilterError::Write(format!("Failed to flush file {}: {}", filepath.display(), e))
    })?;
    Ok(Some(filepath))
}

/// helper function to build a filewriter for an output table while
/// respecting the user's overwrite preferences.
fn create_writer(
    filepath: &Path,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<File>>, FilterError> {
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(filepath).map_err(|e| {
        FilterError::Write(format!("Failed to create file {}: {}", filepath.display(), e))
    })?;
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(quote_style)
        .from_writer(file);
    Ok(Some(writer))
}
