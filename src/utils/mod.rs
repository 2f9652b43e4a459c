pub mod fs;
pub mod paths;

pub use fs::{backup_file, file_exists, read_file_to_string, write_file_sync};
pub use paths::{file_label, normalize_root};
