pub mod operations;

pub use operations::{diff_stats, unified_diff, DiffStats};
