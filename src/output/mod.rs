pub mod output_pattern;
pub mod row;
pub mod table;

pub use output_pattern::{escape, OutputPattern, ShardTemplate};
pub use row::Row;
pub use table::write_table;
