use thiserror::Error;

/// BoardCom unified error type
#[derive(Error, Debug)]
pub enum BoardComError {
    #[error("Debugger process error: {0}")]
    Process(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unrecognized dispatch mode: {0}")]
    UnrecognizedMode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Board '{0}' not found in configuration")]
    UnknownBoard(String),

    #[error("Bus transaction timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type BoardComResult<T> = Result<T, BoardComError>;
