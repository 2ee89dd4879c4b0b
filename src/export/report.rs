use std::path::PathBuf;

use serde::Serialize;

/// One table persisted during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenTable {
    pub path: PathBuf,
    pub rows: usize,
}

/// An image left out under `DecodeErrorPolicy::CollectErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Summary of a finished export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Files matched by the source pattern.
    pub matched: usize,
    /// Images that became rows.
    pub converted: usize,
    /// Tables in the order they were written.
    pub tables: Vec<WrittenTable>,
    /// Only filled under `DecodeErrorPolicy::CollectErrors`.
    pub failures: Vec<DecodeFailure>,
    /// `true` if `max_shards` ended the run before every file was visited.
    pub stopped_early: bool,
    pub elapsed_ms: u64,
}

impl ExportReport {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }
}
