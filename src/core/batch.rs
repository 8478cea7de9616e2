/// Batch check: run the in-process pipeline over every file in a directory
/// and collect the ones it cannot handle.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::pipeline::{PipelineError, ReportEngine};
use crate::core::realizer::Realizer;
use crate::schema::feed::RawMatch;

/// More failing files than this is a "many failures" verdict.
pub const MANY_FAILURES: usize = 50;
/// More failing files than this is a "moderate failures" verdict.
pub const MODERATE_FAILURES: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub checked: usize,
    pub files_to_fix: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchVerdict<'a> {
    Many { count: usize, first: &'a Path },
    Moderate { first: &'a Path },
    Few(&'a [PathBuf]),
}

impl BatchReport {
    pub fn verdict(&self) -> BatchVerdict<'_> {
        match self.files_to_fix.as_slice() {
            [first, ..] if self.files_to_fix.len() > MANY_FAILURES => BatchVerdict::Many {
                count: self.files_to_fix.len(),
                first,
            },
            [first, ..] if self.files_to_fix.len() > MODERATE_FAILURES => {
                BatchVerdict::Moderate { first }
            }
            files => BatchVerdict::Few(files),
        }
    }
}

impl fmt::Display for BatchVerdict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Many { count, first } => {
                write!(f, "many failures: {} files\n{}", count, first.display())
            }
            Self::Moderate { first } => write!(f, "moderate failures\n{}", first.display()),
            Self::Few([]) => write!(f, "no failing files"),
            Self::Few(files) => {
                let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
                write!(f, "{}", names.join("\n"))
            }
        }
    }
}

/// Generate a report for every regular file in `dir`. Pipeline failures
/// are logged and tallied; only failing to read the directory is an error.
///
/// With a `realizer` every file goes through the full pipeline including
/// the realizer call. Without one the check stops after lexicalization and
/// makes no network requests.
pub fn scan_directory(
    engine: &ReportEngine,
    dir: &Path,
    realizer: Option<&dyn Realizer>,
) -> io::Result<BatchReport> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut report = BatchReport::default();
    for path in paths {
        report.checked += 1;
        if let Err(e) = check_file(engine, &path, realizer) {
            tracing::warn!(path = %path.display(), error = %e, "match file cannot be reported");
            report.files_to_fix.push(path);
        }
    }

    tracing::info!(
        checked = report.checked,
        failing = report.files_to_fix.len(),
        dir = %dir.display(),
        "batch check finished"
    );
    Ok(report)
}

fn check_file(
    engine: &ReportEngine,
    path: &Path,
    realizer: Option<&dyn Realizer>,
) -> Result<(), PipelineError> {
    match realizer {
        Some(realizer) => {
            let raw = RawMatch::load(path)?;
            engine.realize(&raw, realizer).map(drop)
        }
        None => engine.generate_file(path).map(drop),
    }
}
