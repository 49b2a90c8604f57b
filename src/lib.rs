pub mod agent;
pub mod agents;
pub mod call_logger;
pub mod config;
pub mod errors;
pub mod providers;
pub mod tools;
