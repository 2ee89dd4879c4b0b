pub mod source_pattern;

pub use source_pattern::SourcePattern;
