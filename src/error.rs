use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while validating an `ExportConfig`, before any file is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("pyramid downsample needs at least one iteration")]
    ZeroPyramidIterations,

    #[error("crop range [{start}, {end}) is empty or inverted")]
    EmptyCrop { start: u32, end: u32 },

    #[error("shard size must be at least 1")]
    ZeroShardSize,

    #[error("max_shards must be at least 1 when set")]
    ZeroMaxShards,

    #[error("progress_every must be at least 1 when set")]
    ZeroProgressInterval,

    #[error("sharded output pattern '{0}' has no {{shard}} placeholder")]
    MissingShardPlaceholder(String),

    #[error("malformed output pattern '{pattern}': {reason}")]
    BadOutputPattern { pattern: String, reason: String },

    #[error("invalid source pattern '{pattern}': {reason}")]
    BadSourcePattern { pattern: String, reason: String },
}

/// Fatal failures during an export run.
///
/// Tables flushed before the failure stay on disk; the batch being built
/// at the time is lost.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("crop rows [{start}, {end}) out of bounds for {path} (height {height})")]
    CropOutOfBounds {
        path: PathBuf,
        start: u32,
        end: u32,
        height: u32,
    },

    #[error("row for {path} has {found} fields, earlier rows have {expected}")]
    RowLengthMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("failed to enumerate source files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors returned by `ExportConfig::load_json` / `save_json`.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Error initializing the logger.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("logger initialization error: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
