//! Screening records and scene segments

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the three parallel narrative threads a screening can emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ThreadId {
    One = 0,
    Two = 1,
    Three = 2,
}

impl ThreadId {
    /// All threads, in index order
    pub const ALL: [ThreadId; 3] = [ThreadId::One, ThreadId::Two, ThreadId::Three];

    /// Zero-based index of this thread
    pub fn index(self) -> usize {
        self as usize
    }

    /// Thread occupying the next side-edge around the prism
    pub fn next(self) -> ThreadId {
        Self::ALL[(self.index() + 1) % 3]
    }

    /// Parse a single-character log code ('1', '2' or '3')
    pub fn from_log_code(code: char) -> Result<Self> {
        match code {
            '1' => Ok(ThreadId::One),
            '2' => Ok(ThreadId::Two),
            '3' => Ok(ThreadId::Three),
            other => Err(Error::InvalidThreadLabel(other)),
        }
    }
}

impl TryFrom<u8> for ThreadId {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(ThreadId::One),
            1 => Ok(ThreadId::Two),
            2 => Ok(ThreadId::Three),
            other => Err(Error::InvalidData(format!(
                "Thread index {} out of range 0..3",
                other
            ))),
        }
    }
}

impl From<ThreadId> for u8 {
    fn from(thread: ThreadId) -> u8 {
        thread as u8
    }
}

/// A contiguous span of screening time with one dominant and one secondary
/// narrative thread. Lengths are in deciseconds of screen time and are always
/// positive; zero-length rows are dropped during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub length: u32,
    pub primary: ThreadId,
    pub secondary: ThreadId,
}

impl Scene {
    pub fn new(length: u32, primary: ThreadId, secondary: ThreadId) -> Self {
        Self {
            length,
            primary,
            secondary,
        }
    }
}

/// One recorded cinema screening: the ordered scene segments plus the rolled
/// up per-thread attention percentages. Built once per attention log and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: u32,
    /// Source video reference; records aggregated straight from logs leave
    /// this empty until assigned
    #[serde(default)]
    pub video: String,
    pub scenes: Vec<Scene>,
    pub date: NaiveDate,
    pub total_cuts: u32,
    /// Percentage of total attention per thread, sums to 100 +/- 1 rounding drift
    pub threads: [u32; 3],
}

impl Screening {
    /// Total screen time across all scene segments, in deciseconds
    pub fn total_length(&self) -> u32 {
        total_length(&self.scenes)
    }
}

/// Sum of segment lengths in deciseconds
pub fn total_length(scenes: &[Scene]) -> u32 {
    scenes.iter().map(|scene| scene.length).sum()
}
