// Dispatch module - Bus request dispatching
pub mod command;
pub mod dispatcher;
pub mod request;

pub use command::BusCommand;
pub use dispatcher::Dispatcher;
pub use request::{Header, Mode, Request, Response};
