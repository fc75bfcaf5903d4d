//! Screening record persistence
//!
//! Records are stored as a single JSON array, camelCase fields and ISO
//! dates, matching the shape the presentation layer fetches.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use toblerone_core::{Error, Result, Screening};

/// Write screening records as a JSON array
pub fn write_screenings<P: AsRef<Path>>(screenings: &[Screening], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, screenings)
        .map_err(|e| Error::InvalidData(format!("Failed to serialize screenings: {}", e)))?;
    writer.flush()?;
    Ok(())
}

/// Read screening records back from a JSON array
pub fn read_screenings<P: AsRef<Path>>(path: P) -> Result<Vec<Screening>> {
    let file = File::open(path.as_ref())?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::InvalidData(format!("Failed to parse screenings: {}", e)))
}
