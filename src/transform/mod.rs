pub mod transform_config;
pub mod grayscale;
pub mod crop;
pub mod resize;
pub mod pyramid;

use std::path::Path;

use crate::error::ExportError;
use crate::pixels::PixelGrid;

pub use grayscale::ChannelOrder;
pub use transform_config::{Interpolation, ResizeStrategy, RowRange, TransformConfig};

/// Runs grayscale → crop → resize on a decoded image, in that order.
///
/// `order` is the channel layout the decoder produced `grid` in. `path` is
/// only used to label a crop error.
pub fn apply(
    grid: PixelGrid,
    order: ChannelOrder,
    config: &TransformConfig,
    path: &Path,
) -> Result<PixelGrid, ExportError> {
    let mut grid = if config.grayscale {
        grayscale::to_grayscale(grid, order)
    } else {
        grid
    };

    if let Some(range) = config.crop_rows {
        let height = grid.height;
        grid = crop::crop_rows(grid, range).ok_or_else(|| ExportError::CropOutOfBounds {
            path: path.to_path_buf(),
            start: range.start,
            end: range.end,
            height,
        })?;
    }

    Ok(match config.resize {
        ResizeStrategy::FixedSize { width, height, interpolation } => {
            resize::resize(&grid, width, height, interpolation)
        }
        ResizeStrategy::PyramidDownsample { iterations } => pyramid::downsample(grid, iterations),
    })
}
