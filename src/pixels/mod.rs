pub mod grid;

pub use grid::PixelGrid;
