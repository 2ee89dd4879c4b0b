use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigFileError};
use crate::output::OutputPattern;
use crate::source::SourcePattern;
use crate::transform::TransformConfig;

/// Splits the output into tables of `shard_size` rows.
///
/// With `max_shards` set, the run stops right after that many full tables
/// have been written; the remaining files are never opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sharding {
    pub shard_size: usize,
    #[serde(default)]
    pub max_shards: Option<usize>,
}

/// What to do when an image cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecodeErrorPolicy {
    /// Fail the whole run on the first bad image.
    #[default]
    Abort,
    /// Log a warning and leave the image out.
    SkipAndContinue,
    /// Leave the image out and list it in `ExportReport::failures`.
    CollectErrors,
}

/// Everything one export run needs.
///
/// # Fields
/// - `source`          — which files to read
/// - `transform`       — how one image becomes one row
/// - `sharding`        — optional table splitting; `None` writes a single table
/// - `output`          — destination template (see `OutputPattern`)
/// - `progress_every`  — report progress every N files; `None` is silent
/// - `on_decode_error` — policy for undecodable images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub source: SourcePattern,
    pub transform: TransformConfig,
    #[serde(default)]
    pub sharding: Option<Sharding>,
    pub output: OutputPattern,
    #[serde(default)]
    pub progress_every: Option<usize>,
    #[serde(default)]
    pub on_decode_error: DecodeErrorPolicy,
}

impl ExportConfig {
    /// Creates an unsharded, silent, abort-on-error config.
    pub fn new(source: SourcePattern, transform: TransformConfig, output: OutputPattern) -> Self {
        ExportConfig {
            source,
            transform,
            sharding: None,
            output,
            progress_every: None,
            on_decode_error: DecodeErrorPolicy::Abort,
        }
    }

    pub fn with_sharding(mut self, shard_size: usize, max_shards: Option<usize>) -> Self {
        self.sharding = Some(Sharding { shard_size, max_shards });
        self
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = Some(every);
        self
    }

    pub fn with_decode_error_policy(mut self, policy: DecodeErrorPolicy) -> Self {
        self.on_decode_error = policy;
        self
    }

    /// Checks every setting that can be checked without touching the disk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.transform.validate()?;
        self.source.validate()?;

        let template = self.output.parse()?;
        if let Some(sharding) = self.sharding {
            if sharding.shard_size == 0 {
                return Err(ConfigError::ZeroShardSize);
            }
            if sharding.max_shards == Some(0) {
                return Err(ConfigError::ZeroMaxShards);
            }
            if !template.has_placeholder() {
                return Err(ConfigError::MissingShardPlaceholder(self.output.template.clone()));
            }
        }
        if self.progress_every == Some(0) {
            return Err(ConfigError::ZeroProgressInterval);
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigFileError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<ExportConfig, ConfigFileError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: ExportConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Interpolation, ResizeStrategy};

    fn base() -> ExportConfig {
        ExportConfig::new(
            SourcePattern::new("data", "*.jpg"),
            TransformConfig::new(ResizeStrategy::FixedSize {
                width: 8,
                height: 8,
                interpolation: Interpolation::Area,
            }),
            OutputPattern::new("out/part_{shard:02}.csv"),
        )
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(base().validate(), Ok(()));
        assert_eq!(base().with_sharding(10, Some(3)).validate(), Ok(()));
    }

    #[test]
    fn sharding_limits_are_checked() {
        assert_eq!(base().with_sharding(0, None).validate(), Err(ConfigError::ZeroShardSize));
        assert_eq!(base().with_sharding(5, Some(0)).validate(), Err(ConfigError::ZeroMaxShards));
        assert_eq!(base().with_progress_every(0).validate(), Err(ConfigError::ZeroProgressInterval));
    }

    #[test]
    fn sharded_output_needs_placeholder() {
        let mut config = base().with_sharding(4, None);
        config.output = OutputPattern::new("out/all.csv");
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingShardPlaceholder("out/all.csv".into()))
        );
    }

    #[test]
    fn json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let config = base()
            .with_sharding(16277, Some(10))
            .with_progress_every(100)
            .with_decode_error_policy(DecodeErrorPolicy::CollectErrors);
        config.save_json(&path).unwrap();
        assert_eq!(ExportConfig::load_json(&path).unwrap(), config);
    }

    #[test]
    fn load_json_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{
                "source": { "base_dir": "data", "pattern": "*.jpg" },
                "transform": { "grayscale": true, "resize": { "type": "PyramidDownsample", "iterations": 0 } },
                "output": "out.csv"
            }"#,
        )
        .unwrap();
        assert!(matches!(
            ExportConfig::load_json(&path),
            Err(ConfigFileError::Invalid(ConfigError::ZeroPyramidIterations))
        ));
    }
}
