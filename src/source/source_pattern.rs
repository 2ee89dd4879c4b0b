use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ExportError};

/// A glob resolved against a base directory, e.g. `lfw/**/*.jpg` under `../Data`.
///
/// `**` matches any number of directory levels, including none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePattern {
    pub base_dir: PathBuf,
    pub pattern: String,
}

impl SourcePattern {
    pub fn new(base_dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        SourcePattern { base_dir: base_dir.into(), pattern: pattern.into() }
    }

    /// The full pattern handed to the matcher. Metacharacters in `base_dir`
    /// are escaped so only `pattern` is interpreted.
    pub fn full_pattern(&self) -> String {
        let base = glob::Pattern::escape(&self.base_dir.to_string_lossy());
        if base.is_empty() {
            return self.pattern.clone();
        }
        Path::new(&base).join(&self.pattern).to_string_lossy().into_owned()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        glob::Pattern::new(&self.full_pattern())
            .map(|_| ())
            .map_err(|e| ConfigError::BadSourcePattern {
                pattern: self.pattern.clone(),
                reason: e.msg.to_string(),
            })
    }

    /// Expands the pattern once into a fixed list of regular files.
    ///
    /// The order is the matcher's iteration order. A missing base directory
    /// yields an empty list rather than an error.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ExportError> {
        let full = self.full_pattern();
        let paths = glob::glob(&full).map_err(|e| {
            ExportError::Config(ConfigError::BadSourcePattern {
                pattern: self.pattern.clone(),
                reason: e.msg.to_string(),
            })
        })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        log::debug!("pattern {} matched {} file(s)", full, files.len());
        Ok(files)
    }
}
