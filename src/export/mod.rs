pub mod export_config;
pub mod exporter;
pub mod progress;
pub mod report;

pub use export_config::{DecodeErrorPolicy, ExportConfig, Sharding};
pub use exporter::{export, Exporter};
pub use progress::ExportProgress;
pub use report::{DecodeFailure, ExportReport, WrittenTable};
