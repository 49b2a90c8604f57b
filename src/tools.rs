pub mod file_tools;

pub use file_tools::{file_tools, list_dir, read_file, write_file};
