use serde::{Deserialize, Serialize};

/// Progress notice emitted every `progress_every` files.
///
/// Purely observational: dropping the receiver does not affect the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportProgress {
    /// 1-based position of the file just handled.
    pub current: usize,
    /// Number of files matched by the source pattern.
    pub total: usize,
}

impl std::fmt::Display for ExportProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Converted {}/{}", self.current, self.total)
    }
}
