// Core module - Bus dispatch logic
pub mod dispatch;

pub use dispatch::{BusCommand, Dispatcher, Header, Mode, Request, Response};
