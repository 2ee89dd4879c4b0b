use crate::pixels::PixelGrid;
use crate::transform::transform_config::RowRange;

/// Keeps rows `[range.start, range.end)` of `grid`.
///
/// Returns `None` when the range reaches past the last row; bounds are
/// never clamped.
pub fn crop_rows(grid: PixelGrid, range: RowRange) -> Option<PixelGrid> {
    if range.is_empty() || range.end > grid.height {
        return None;
    }
    let row_len = grid.width as usize * grid.channels;
    let start = range.start as usize * row_len;
    let end = range.end as usize * row_len;
    let mut data = grid.data;
    data.truncate(end);
    data.drain(..start);
    Some(PixelGrid::from_data(grid.width, range.len(), grid.channels, data))
}
