use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Half-open row range `[start, end)` kept by the crop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    pub fn new(start: u32, end: u32) -> Self {
        RowRange { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resampling kernel for `ResizeStrategy::FixedSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Pixel-area averaging. Falls back to `Triangle` on any axis that grows.
    #[default]
    Area,
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

/// How the (possibly cropped) image is brought to its final resolution.
///
/// The two strategies produce different resolutions for the same source and
/// cannot be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResizeStrategy {
    /// Scale to exactly `width × height`.
    FixedSize {
        width: u32,
        height: u32,
        #[serde(default)]
        interpolation: Interpolation,
    },
    /// Blur-and-halve `iterations` times; each pass maps `w × h` to
    /// `⌈w/2⌉ × ⌈h/2⌉`.
    PyramidDownsample { iterations: u32 },
}

impl ResizeStrategy {
    /// Output `(width, height)` for a source of the given size.
    pub fn output_size(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ResizeStrategy::FixedSize { width, height, .. } => (width, height),
            ResizeStrategy::PyramidDownsample { iterations } => {
                (0..iterations).fold((width, height), |(w, h), _| (w.div_ceil(2), h.div_ceil(2)))
            }
        }
    }
}

/// Describes how one decoded image becomes one fixed-length row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    pub grayscale: bool,
    #[serde(default)]
    pub crop_rows: Option<RowRange>,
    pub resize: ResizeStrategy,
    #[serde(default)]
    pub include_source_path: bool,
}

impl TransformConfig {
    /// Grayscale, no crop, no path column.
    pub fn new(resize: ResizeStrategy) -> Self {
        TransformConfig {
            grayscale: true,
            crop_rows: None,
            resize,
            include_source_path: false,
        }
    }

    pub fn with_crop_rows(mut self, start: u32, end: u32) -> Self {
        self.crop_rows = Some(RowRange::new(start, end));
        self
    }

    pub fn with_source_path(mut self) -> Self {
        self.include_source_path = true;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.resize {
            ResizeStrategy::FixedSize { width, height, .. } if width == 0 || height == 0 => {
                return Err(ConfigError::ZeroResolution { width, height });
            }
            ResizeStrategy::PyramidDownsample { iterations: 0 } => {
                return Err(ConfigError::ZeroPyramidIterations);
            }
            _ => {}
        }
        if let Some(range) = self.crop_rows {
            if range.is_empty() {
                return Err(ConfigError::EmptyCrop { start: range.start, end: range.end });
            }
        }
        Ok(())
    }
}
