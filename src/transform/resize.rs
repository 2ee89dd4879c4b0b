//! Fixed-resolution resizing.
//!
//! `Interpolation::Area` is computed here: each output pixel is the mean of
//! the source pixels it covers, with partially covered pixels weighted by the
//! covered fraction. Every other kernel is delegated to
//! `image::imageops::resize`.

use image::imageops::{self, FilterType};

use crate::pixels::PixelGrid;
use crate::transform::transform_config::Interpolation;

/// Scales `grid` to exactly `width × height`.
pub fn resize(grid: &PixelGrid, width: u32, height: u32, interpolation: Interpolation) -> PixelGrid {
    if grid.width == width && grid.height == height {
        return grid.clone();
    }
    match interpolation {
        Interpolation::Area if width <= grid.width && height <= grid.height => {
            resize_area(grid, width, height)
        }
        Interpolation::Area => resize_filtered(grid, width, height, FilterType::Triangle),
        Interpolation::Nearest => resize_filtered(grid, width, height, FilterType::Nearest),
        Interpolation::Triangle => resize_filtered(grid, width, height, FilterType::Triangle),
        Interpolation::CatmullRom => resize_filtered(grid, width, height, FilterType::CatmullRom),
        Interpolation::Gaussian => resize_filtered(grid, width, height, FilterType::Gaussian),
        Interpolation::Lanczos3 => resize_filtered(grid, width, height, FilterType::Lanczos3),
    }
}

fn resize_filtered(grid: &PixelGrid, width: u32, height: u32, filter: FilterType) -> PixelGrid {
    if let Some(gray) = grid.to_gray_image() {
        return PixelGrid::from(imageops::resize(&gray, width, height, filter));
    }
    if let Some(rgb) = grid.to_rgb_image() {
        return PixelGrid::from(imageops::resize(&rgb, width, height, filter));
    }
    // Only 1- and 3-channel grids come out of the decoder.
    unreachable!("unsupported channel count {}", grid.channels)
}

/// One source index and the fraction of the destination cell it covers.
type Tap = (usize, f64);

/// Per-destination-index taps for shrinking an axis of length `src` to `dst`.
fn area_taps(src: u32, dst: u32) -> Vec<Vec<Tap>> {
    let scale = src as f64 / dst as f64;
    (0..dst)
        .map(|d| {
            let lo = d as f64 * scale;
            let hi = (lo + scale).min(src as f64);
            let mut taps = Vec::new();
            let mut s = lo.floor() as usize;
            while (s as f64) < hi && s < src as usize {
                let covered = hi.min(s as f64 + 1.0) - lo.max(s as f64);
                if covered > 1e-9 {
                    taps.push((s, covered / scale));
                }
                s += 1;
            }
            taps
        })
        .collect()
}

fn resize_area(grid: &PixelGrid, width: u32, height: u32) -> PixelGrid {
    let ch = grid.channels;
    let col_taps = area_taps(grid.width, width);
    let row_taps = area_taps(grid.height, height);

    // Horizontal pass: source rows × destination columns.
    let mut horizontal = vec![0.0f64; grid.height as usize * width as usize * ch];
    for r in 0..grid.height as usize {
        let src_row = &grid.data[r * grid.width as usize * ch..(r + 1) * grid.width as usize * ch];
        for (dc, taps) in col_taps.iter().enumerate() {
            let out = (r * width as usize + dc) * ch;
            for &(sc, w) in taps {
                for k in 0..ch {
                    horizontal[out + k] += src_row[sc * ch + k] as f64 * w;
                }
            }
        }
    }

    // Vertical pass.
    let mut out = PixelGrid::zeros(width, height, ch);
    let row_len = width as usize * ch;
    for (dr, taps) in row_taps.iter().enumerate() {
        for i in 0..row_len {
            let v: f64 = taps.iter().map(|&(sr, w)| horizontal[sr * row_len + i] * w).sum();
            out.data[dr * row_len + i] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
