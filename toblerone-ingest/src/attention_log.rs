//! Attention-log CSV format support
//!
//! Screening logs are comma-separated files with a fixed 17-column layout
//! and a header row: Seconds, Attention, Scene, SceneCombination, Primary,
//! SceneLength, ScenePrimaryLength, SceneSecondaryLength, ScenePrimaryRatio,
//! SceneCuts, Screening, TimeDay, TimeMonth, TimeYear, TimeHour, TimeMinute,
//! TimeSecond. One row is logged per second of screen time.

use crate::aggregate::SceneAggregator;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use toblerone_core::{Error, Result, Screening};

/// Number of positional columns in an attention log row
pub const LOG_COLUMNS: usize = 17;

// column positions of the fields the aggregation consumes
const COL_SCENE_COMBINATION: usize = 3;
const COL_SCENE_LENGTH: usize = 5;
const COL_PRIMARY_LENGTH: usize = 6;
const COL_SECONDARY_LENGTH: usize = 7;
const COL_CUTS: usize = 9;
const COL_SCREENING: usize = 10;
const COL_DAY: usize = 11;
const COL_MONTH: usize = 12;
const COL_YEAR: usize = 13;

/// One raw per-second sample from an attention log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// Two-character thread combination code; decoded only for retained
    /// rows, since padding rows carry placeholder codes
    pub scene_combination: String,
    /// Scene length in deciseconds; non-positive marks a padding row
    pub scene_length: i64,
    pub primary_length: u32,
    pub secondary_length: u32,
    pub cuts: u32,
    pub screening: u32,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl LogRow {
    /// Parse one comma-separated data line
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(',').map(|part| part.trim()).collect();
        if parts.len() < LOG_COLUMNS {
            return Err(Error::InvalidData(format!(
                "Expected {} columns, found {}",
                LOG_COLUMNS,
                parts.len()
            )));
        }

        Ok(Self {
            scene_combination: parts[COL_SCENE_COMBINATION].to_string(),
            scene_length: field(&parts, COL_SCENE_LENGTH, "SceneLength")?,
            primary_length: field(&parts, COL_PRIMARY_LENGTH, "ScenePrimaryLength")?,
            secondary_length: field(&parts, COL_SECONDARY_LENGTH, "SceneSecondaryLength")?,
            cuts: field(&parts, COL_CUTS, "SceneCuts")?,
            screening: field(&parts, COL_SCREENING, "Screening")?,
            day: field(&parts, COL_DAY, "TimeDay")?,
            month: field(&parts, COL_MONTH, "TimeMonth")?,
            year: field(&parts, COL_YEAR, "TimeYear")?,
        })
    }
}

fn field<T: std::str::FromStr>(parts: &[&str], index: usize, name: &str) -> Result<T> {
    parts[index]
        .parse()
        .map_err(|_| Error::InvalidData(format!("Invalid {} value: {:?}", name, parts[index])))
}

/// Read one attention log into a screening record.
///
/// The header row is skipped, padding rows contribute nothing but the
/// screening id, and the thread percentages are derived on completion.
pub fn read_log<P: AsRef<Path>>(path: P) -> Result<Screening> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut aggregator = SceneAggregator::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        aggregator.push(&LogRow::parse(&line)?)?;
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_line() {
        let row =
            LogRow::parse("1,0.82,1,12,1,10,6,4,0.6,2,3,21,3,2017,18,30,0").unwrap();
        assert_eq!(row.scene_combination, "12");
        assert_eq!(row.scene_length, 10);
        assert_eq!(row.primary_length, 6);
        assert_eq!(row.secondary_length, 4);
        assert_eq!(row.cuts, 2);
        assert_eq!(row.screening, 3);
        assert_eq!((row.day, row.month, row.year), (21, 3, 2017));
    }

    #[test]
    fn test_parse_padding_row() {
        let row = LogRow::parse("5,0.0,0,00,0,0,0,0,0,0,3,21,3,2017,18,30,4").unwrap();
        assert_eq!(row.scene_length, 0);
        assert_eq!(row.scene_combination, "00");
    }

    #[test]
    fn test_short_line_rejected() {
        let result = LogRow::parse("1,2,3");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_malformed_numeric_rejected() {
        let result = LogRow::parse("1,0.82,1,12,1,ten,6,4,0.6,2,3,21,3,2017,18,30,0");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let row =
            LogRow::parse(" 1, 0.82, 1, 12, 1, 10, 6, 4, 0.6, 2, 3, 21, 3, 2017, 18, 30, 0")
                .unwrap();
        assert_eq!(row.scene_length, 10);
    }
}
