pub mod error;
pub mod pixels;
pub mod transform;
pub mod source;
pub mod output;
pub mod export;
pub mod presets;
pub mod logging;

// Convenience re-exports
pub use error::{ConfigError, ConfigFileError, ExportError};
pub use pixels::PixelGrid;
pub use transform::{ChannelOrder, Interpolation, ResizeStrategy, RowRange, TransformConfig};
pub use source::SourcePattern;
pub use output::{OutputPattern, Row};
pub use export::{
    export, DecodeErrorPolicy, ExportConfig, ExportProgress, ExportReport, Exporter, Sharding,
    WrittenTable,
};
