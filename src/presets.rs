//! Ready-made configs for the CelebA and LFW face datasets.
//!
//! Each preset takes the dataset root (the directory holding
//! `img_align_celeba/` and `lfw/`) and writes its tables next to the inputs.
//! Source images are assumed to be the aligned releases: 178×218 for CelebA
//! and 250×250 for LFW.

use std::path::Path;

use crate::export::ExportConfig;
use crate::output::OutputPattern;
use crate::source::SourcePattern;
use crate::transform::{Interpolation, ResizeStrategy, TransformConfig};

/// Images per CelebA shard; ten shards cover 162,770 of the 202,599 images.
pub const CELEBA_SHARD_SIZE: usize = 16277;
pub const CELEBA_MAX_SHARDS: usize = 10;
pub const PROGRESS_EVERY: usize = 100;

/// CelebA → 32×32 grayscale, rows 20..198 only, sharded `train_NN.csv`.
///
/// The row crop drops the band above and below the face before the
/// area resize.
pub fn celeba_grayscale_32(data_dir: &Path) -> ExportConfig {
    let transform = TransformConfig::new(ResizeStrategy::FixedSize {
        width: 32,
        height: 32,
        interpolation: Interpolation::Area,
    })
    .with_crop_rows(20, 198);

    ExportConfig::new(
        SourcePattern::new(data_dir, "img_align_celeba/*.jpg"),
        transform,
        OutputPattern::in_dir(data_dir, "celeba_grayscale_32/train_{shard:02}.csv"),
    )
    .with_sharding(CELEBA_SHARD_SIZE, Some(CELEBA_MAX_SHARDS))
    .with_progress_every(PROGRESS_EVERY)
}

/// LFW → 64×64 grayscale with the source path as the first column.
pub fn lfw_grayscale_64(data_dir: &Path) -> ExportConfig {
    let transform = TransformConfig::new(ResizeStrategy::FixedSize {
        width: 64,
        height: 64,
        interpolation: Interpolation::Area,
    })
    .with_source_path();

    ExportConfig::new(
        SourcePattern::new(data_dir, "lfw/**/*.jpg"),
        transform,
        OutputPattern::in_dir(data_dir, "lfw_grayscale_64.csv"),
    )
    .with_progress_every(PROGRESS_EVERY)
}

/// LFW → three pyramid levels (250×250 becomes 32×32) with the source path.
pub fn lfw_grayscale_pyramid(data_dir: &Path) -> ExportConfig {
    let transform =
        TransformConfig::new(ResizeStrategy::PyramidDownsample { iterations: 3 }).with_source_path();

    ExportConfig::new(
        SourcePattern::new(data_dir, "lfw/**/*.jpg"),
        transform,
        OutputPattern::in_dir(data_dir, "lfw_grayscale_32.csv"),
    )
}

/// All presets, in the order the binary runs them.
pub fn all(data_dir: &Path) -> Vec<(&'static str, ExportConfig)> {
    vec![
        ("celeba_grayscale_32", celeba_grayscale_32(data_dir)),
        ("lfw_grayscale_64", lfw_grayscale_64(data_dir)),
        ("lfw_grayscale_pyramid", lfw_grayscale_pyramid(data_dir)),
    ]
}
