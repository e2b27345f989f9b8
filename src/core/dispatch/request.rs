use crate::domain::error::BoardComError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bus operation selected by a request header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Write offset/value pairs to the register window
    #[serde(rename = "write")]
    Write,
    /// Read a value back for each offset
    #[serde(rename = "read")]
    Read,
    /// Retrieve captured scan data
    #[serde(rename = "get scan data")]
    GetScanData,
}

impl FromStr for Mode {
    type Err = BoardComError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write" => Ok(Mode::Write),
            "read" => Ok(Mode::Read),
            "get scan data" => Ok(Mode::GetScanData),
            other => Err(BoardComError::UnrecognizedMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Write => write!(f, "write"),
            Mode::Read => write!(f, "read"),
            Mode::GetScanData => write!(f, "get scan data"),
        }
    }
}

/// Request header carrying the dispatch mode and its options.
///
/// Option fields default off so wire headers may omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub mode: Mode,
    /// Short-circuit without touching the board; callers use this to
    /// validate request shape and transport.
    #[serde(default)]
    pub debug: bool,
    /// Echo each constructed command line before execution
    #[serde(default)]
    pub print: bool,
    /// Scan mode only: reset the capture before collecting
    #[serde(default)]
    pub reset: bool,
    /// Scan mode only: number of samples to retrieve
    #[serde(default, rename = "numSamples")]
    pub num_samples: u32,
}

impl Header {
    pub fn write() -> Self {
        Self::with_mode(Mode::Write)
    }

    pub fn read() -> Self {
        Self::with_mode(Mode::Read)
    }

    pub fn scan(reset: bool, num_samples: u32) -> Self {
        Self {
            reset,
            num_samples,
            ..Self::with_mode(Mode::GetScanData)
        }
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            debug: false,
            print: false,
            reset: false,
            num_samples: 0,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }
}

/// Bus transaction request: a flat operand sequence plus its header.
///
/// Write mode reads `data` as offset/value pairs, read mode as plain
/// offsets, scan mode ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub data: Vec<u32>,
    pub header: Header,
}

impl Request {
    pub fn new(data: Vec<u32>, header: Header) -> Self {
        Self { data, header }
    }

    /// Build a write request from offset/value pairs.
    pub fn write_pairs(pairs: &[(u32, u32)], header: Header) -> Self {
        let data = pairs
            .iter()
            .flat_map(|&(offset, value)| [offset, value])
            .collect();
        Self { data, header }
    }
}

/// Bus transaction response returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub err: bool,
    #[serde(rename = "errMsg")]
    pub err_msg: String,
    pub data: Vec<String>,
}

impl Response {
    /// Successful transaction with collected debugger output
    pub fn success(data: Vec<String>) -> Self {
        Self {
            err: false,
            err_msg: String::new(),
            data,
        }
    }

    /// Canned failure for any failed debugger invocation
    pub fn bus_error() -> Self {
        Self {
            err: true,
            err_msg: "Bus error".to_string(),
            data: Vec::new(),
        }
    }

    /// Canned acknowledgement for the debug short-circuit
    pub fn debug_ack() -> Self {
        Self {
            err: false,
            err_msg: "Message received".to_string(),
            data: Vec::new(),
        }
    }
}
