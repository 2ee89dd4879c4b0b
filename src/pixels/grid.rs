use image::{GrayImage, RgbImage};

/// An 8-bit image held as a row-major, channel-interleaved buffer.
///
/// The sample for channel `k` of the pixel at `(row, col)` lives at
/// `(row * width + col) * channels + k`. Only 1-channel (intensity) and
/// 3-channel (colour) grids are produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub data: Vec<u8>,
}

impl PixelGrid {
    pub fn zeros(width: u32, height: u32, channels: usize) -> PixelGrid {
        PixelGrid {
            width,
            height,
            channels,
            data: vec![0; width as usize * height as usize * channels],
        }
    }

    /// Wraps an existing buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: usize, data: Vec<u8>) -> PixelGrid {
        assert_eq!(
            data.len(),
            width as usize * height as usize * channels,
            "buffer length does not match {}x{}x{}",
            width,
            height,
            channels
        );
        PixelGrid { width, height, channels, data }
    }

    /// Builds a 1-channel grid by evaluating `f(row, col)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> PixelGrid
    where
        F: Fn(u32, u32) -> u8,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        PixelGrid { width, height, channels: 1, data }
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * self.channels
    }

    /// All channel samples of the pixel at `(row, col)`.
    pub fn pixel(&self, row: u32, col: u32) -> &[u8] {
        let at = self.offset(row, col);
        &self.data[at..at + self.channels]
    }

    pub fn pixel_mut(&mut self, row: u32, col: u32) -> &mut [u8] {
        let at = self.offset(row, col);
        let channels = self.channels;
        &mut self.data[at..at + channels]
    }

    /// Row-major flattening: rows top to bottom, left to right within each
    /// row, channels interleaved per pixel.
    pub fn flatten(self) -> Vec<u8> {
        self.data
    }

    pub fn to_gray_image(&self) -> Option<GrayImage> {
        if self.channels != 1 {
            return None;
        }
        GrayImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        if self.channels != 3 {
            return None;
        }
        RgbImage::from_raw(self.width, self.height, self.data.clone())
    }
}

impl From<GrayImage> for PixelGrid {
    fn from(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid { width, height, channels: 1, data: img.into_raw() }
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid { width, height, channels: 3, data: img.into_raw() }
    }
}
