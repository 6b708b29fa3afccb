pub mod data_file_stats;
pub use data_file_stats::*;

pub mod data_file;
pub use data_file::*;
