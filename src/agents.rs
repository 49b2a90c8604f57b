pub mod file_agent;

pub use file_agent::FileAgent;
