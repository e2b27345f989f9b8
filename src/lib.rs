//! BoardCom Library
//!
//! Memory bus debug tool library for hardware board bring-up, dispatching
//! register read/write and scan-data retrieval requests to an external
//! debugger process and returning structured responses.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::dispatch::{BusCommand, Dispatcher, Header, Mode, Request, Response};
pub use crate::domain::config::{BoardComConfig, BoardConfig, GlobalConfig};
pub use crate::domain::error::{BoardComError, BoardComResult};
pub use crate::infrastructure::process::{ProcessOutput, ProcessRunner, SystemRunner};
