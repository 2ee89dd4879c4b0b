use crate::pixels::PixelGrid;

/// 5-tap binomial kernel; the 2-D kernel is its outer product and sums to 256.
const KERNEL: [u32; 5] = [1, 4, 6, 4, 1];

/// Reflect-101 border: `-1 -> 1`, `n -> n - 2`. The edge sample is not repeated.
fn reflect_101(i: i64, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as i64;
    let period = 2 * (n - 1);
    let mut i = i.rem_euclid(period);
    if i >= n {
        i = period - i;
    }
    i as usize
}

/// One pyramid level down: Gaussian blur then drop every other row and
/// column. A `w × h` grid becomes `⌈w/2⌉ × ⌈h/2⌉`.
pub fn pyr_down(grid: &PixelGrid) -> PixelGrid {
    let ch = grid.channels;
    let (sw, sh) = (grid.width as usize, grid.height as usize);
    let (dw, dh) = (sw.div_ceil(2), sh.div_ceil(2));

    // Horizontal pass over every source row, evaluated at even columns only.
    let mut rows = vec![0u32; sh * dw * ch];
    for r in 0..sh {
        for dc in 0..dw {
            for k in 0..ch {
                let mut acc = 0;
                for (t, &w) in KERNEL.iter().enumerate() {
                    let sc = reflect_101(2 * dc as i64 + t as i64 - 2, sw);
                    acc += w * grid.data[(r * sw + sc) * ch + k] as u32;
                }
                rows[(r * dw + dc) * ch + k] = acc;
            }
        }
    }

    // Vertical pass at even rows, then normalize by 256 with rounding.
    let mut out = PixelGrid::zeros(dw as u32, dh as u32, ch);
    let row_len = dw * ch;
    for dr in 0..dh {
        for i in 0..row_len {
            let mut acc = 0;
            for (t, &w) in KERNEL.iter().enumerate() {
                let sr = reflect_101(2 * dr as i64 + t as i64 - 2, sh);
                acc += w * rows[sr * row_len + i];
            }
            out.data[dr * row_len + i] = ((acc + 128) >> 8) as u8;
        }
    }
    out
}

/// Applies `pyr_down` `iterations` times.
pub fn downsample(grid: PixelGrid, iterations: u32) -> PixelGrid {
    (0..iterations).fold(grid, |g, _| pyr_down(&g))
}
