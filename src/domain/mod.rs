// Domain module - Configuration and error types
pub mod config;
pub mod error;

pub use config::{BoardComConfig, BoardConfig, GlobalConfig};
pub use error::{BoardComError, BoardComResult};
