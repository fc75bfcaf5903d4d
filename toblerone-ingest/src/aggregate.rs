//! Scene aggregation over raw log samples

use crate::attention_log::LogRow;
use chrono::NaiveDate;
use toblerone_core::{Error, Result, Scene, Screening, ThreadId};

/// Folds ordered log samples into a screening record.
///
/// One scene segment is emitted per retained sample, in input order.
/// Attention lengths accumulate per thread and are normalized to
/// percentages when the aggregation is closed.
#[derive(Debug, Default)]
pub struct SceneAggregator {
    id: u32,
    date: Option<NaiveDate>,
    scenes: Vec<Scene>,
    threads: [u64; 3],
    total_cuts: u32,
}

impl SceneAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample. Padding rows (non-positive scene length) contribute
    /// nothing but the screening id.
    pub fn push(&mut self, row: &LogRow) -> Result<()> {
        self.id = row.screening;
        if row.scene_length <= 0 {
            return Ok(());
        }

        let scene = decode_scene(row)?;
        if self.date.is_none() {
            self.date = Some(sample_date(row)?);
        }

        self.threads[scene.primary.index()] += u64::from(row.primary_length);
        self.threads[scene.secondary.index()] += u64::from(row.secondary_length);
        self.total_cuts += row.cuts;
        self.scenes.push(scene);
        Ok(())
    }

    /// Number of scene segments retained so far
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Close the aggregation, normalizing the per-thread attention to
    /// percentages of the grand total (rounded half away from zero).
    pub fn finish(self) -> Result<Screening> {
        if self.scenes.is_empty() {
            return Err(Error::EmptyScreening);
        }
        let total: u64 = self.threads.iter().sum();
        if total == 0 {
            return Err(Error::ZeroAttentionTotal);
        }

        let mut threads = [0u32; 3];
        for (percent, attention) in threads.iter_mut().zip(&self.threads) {
            *percent = (*attention as f64 / total as f64 * 100.0).round() as u32;
        }

        Ok(Screening {
            id: self.id,
            video: String::new(),
            scenes: self.scenes,
            date: self.date.expect("set with the first retained sample"),
            total_cuts: self.total_cuts,
            threads,
        })
    }
}

fn decode_scene(row: &LogRow) -> Result<Scene> {
    let mut code = row.scene_combination.chars();
    let mut next_label = || {
        code.next().ok_or_else(|| {
            Error::InvalidData(format!(
                "SceneCombination code too short: {:?}",
                row.scene_combination
            ))
        })
    };
    let primary = ThreadId::from_log_code(next_label()?)?;
    let secondary = ThreadId::from_log_code(next_label()?)?;
    Ok(Scene::new(row.scene_length as u32, primary, secondary))
}

fn sample_date(row: &LogRow) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(row.year, row.month, row.day).ok_or_else(|| {
        Error::InvalidData(format!(
            "Invalid sample date {:04}-{:02}-{:02}",
            row.year, row.month, row.day
        ))
    })
}
