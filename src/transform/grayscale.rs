use crate::pixels::PixelGrid;

/// Channel layout of a decoded 3-channel buffer.
///
/// The luma weights are tied to colours, not positions, so the grayscale
/// conversion has to know which slot holds red and which holds blue. The
/// layout is a property of the decoder that produced the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Red, green, blue. What the `image` decoders produce.
    #[default]
    Rgb,
    /// Blue, green, red.
    Bgr,
}

impl ChannelOrder {
    /// Buffer positions of the (red, green, blue) samples.
    pub fn rgb_indices(self) -> (usize, usize, usize) {
        match self {
            ChannelOrder::Rgb => (0, 1, 2),
            ChannelOrder::Bgr => (2, 1, 0),
        }
    }
}

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14.
const RED_WEIGHT: u32 = 4899;
const GREEN_WEIGHT: u32 = 9617;
const BLUE_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// Intensity of one colour pixel, `round(0.299 R + 0.587 G + 0.114 B)`.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * RED_WEIGHT + g as u32 * GREEN_WEIGHT + b as u32 * BLUE_WEIGHT;
    ((sum + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

/// Collapses a 3-channel grid to one intensity channel.
///
/// `order` names the layout of `grid`; a grid that already has a single
/// channel is returned unchanged.
pub fn to_grayscale(grid: PixelGrid, order: ChannelOrder) -> PixelGrid {
    if grid.channels == 1 {
        return grid;
    }
    let (ri, gi, bi) = order.rgb_indices();
    let data = grid
        .data
        .chunks_exact(grid.channels)
        .map(|px| luma(px[ri], px[gi], px[bi]))
        .collect();
    PixelGrid::from_data(grid.width, grid.height, 1, data)
}
