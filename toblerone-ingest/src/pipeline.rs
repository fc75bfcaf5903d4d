//! Directory-level ingestion pipeline

use crate::attention_log::read_log;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use toblerone_core::{Error, Result, Screening};

/// Outcome of ingesting a log directory. Failures are isolated per file so
/// one unreadable log cannot sink its siblings.
#[derive(Debug)]
pub struct DirIngest {
    pub screenings: Vec<Screening>,
    pub failures: Vec<(PathBuf, Error)>,
}

/// Ingest every `*.csv` log in a directory.
///
/// Files are independent and processed concurrently; all of them are joined
/// before the result is returned. Output order follows the sorted file
/// names, so repeated runs over the same directory are deterministic.
pub fn read_log_dir<P: AsRef<Path>>(dir: P) -> Result<DirIngest> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("csv"))
        .collect();
    paths.sort();

    let results: Vec<(PathBuf, Result<Screening>)> = paths
        .into_par_iter()
        .map(|path| {
            log::info!("ingesting {}", path.display());
            let outcome = read_log(&path);
            (path, outcome)
        })
        .collect();

    let mut ingest = DirIngest {
        screenings: Vec::new(),
        failures: Vec::new(),
    };
    for (path, outcome) in results {
        match outcome {
            Ok(screening) => ingest.screenings.push(screening),
            Err(error) => {
                log::warn!("skipping {}: {}", path.display(), error);
                ingest.failures.push((path, error));
            }
        }
    }
    Ok(ingest)
}
