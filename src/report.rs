//! JSON solve reports.
//!
//! The CLIs can persist what they printed: which puzzle, which strategy,
//! what was found and how much work it took. Reports are plain serde
//! structs so other tooling can consume them; the core search types stay
//! serialization-free.

use std::fmt;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::search::SearchOutcome;

/// Serialized form of one path entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub vehicle: usize,
    pub step: i32,
}

/// One strategy run on one puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub puzzle: String,
    pub strategy: String,
    pub solved: bool,
    /// Move count of the found path; absent when the search exhausted.
    pub moves: Option<usize>,
    pub path: Vec<MoveRecord>,
    pub expanded: u64,
    pub generated: u64,
    pub elapsed_secs: f64,
}

impl SolveReport {
    pub fn from_outcome(
        puzzle: &str,
        strategy: &str,
        outcome: &SearchOutcome,
        elapsed_secs: f64,
    ) -> SolveReport {
        let path: Vec<MoveRecord> = outcome
            .path
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|m| MoveRecord {
                vehicle: m.vehicle,
                step: m.step,
            })
            .collect();

        SolveReport {
            puzzle: puzzle.to_string(),
            strategy: strategy.to_string(),
            solved: outcome.path.is_some(),
            moves: outcome.move_count(),
            path,
            expanded: outcome.expanded,
            generated: outcome.generated,
            elapsed_secs,
        }
    }
}

#[derive(Debug)]
pub enum ReportError {
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Write reports as pretty JSON.
pub fn write_reports(path: &Path, reports: &[SolveReport]) -> Result<(), ReportError> {
    let f = fs::File::create(path).map_err(|e| ReportError::Io {
        stage: "report_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, reports).map_err(|e| ReportError::Io {
        stage: "report_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| ReportError::Io {
        stage: "report_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

pub fn read_reports(path: &Path) -> Result<Vec<SolveReport>, ReportError> {
    let f = fs::File::open(path).map_err(|e| ReportError::Io {
        stage: "report_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).map_err(|e| ReportError::Io {
        stage: "report_parse",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}
