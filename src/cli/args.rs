use crate::domain::error::{BoardComError, BoardComResult};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for BoardCom
#[derive(Parser, Debug)]
#[command(
    name = "boardcom",
    version = env!("CARGO_PKG_VERSION"),
    about = "Memory Bus Debug Tool for Board Bring-Up",
    long_about = "A memory bus debug tool for hardware board bring-up: issues register read/write and scan-data retrieval commands to a board through an external debugger executable and reports structured results."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Board profile to target
    #[arg(short, long, global = true)]
    pub board: Option<String>,

    /// Validate request handling without touching the board
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Echo each debugger command before it runs
    #[arg(short, long, global = true)]
    pub echo: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write values to board registers
    Write(WriteArgs),
    /// Read values back from board registers
    Read(ReadArgs),
    /// Retrieve captured scan data from the board
    Scan(ScanArgs),
    /// Configuration management commands
    Config(ConfigArgs),
    /// Display version information
    Version,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
    /// CSV output
    Csv,
}

/// Register write arguments
#[derive(ClapArgs, Debug, Clone)]
pub struct WriteArgs {
    /// Register writes as offset=value pairs (decimal or 0x hex)
    #[arg(required = true)]
    pub pairs: Vec<String>,
}

/// Register read arguments
#[derive(ClapArgs, Debug, Clone)]
pub struct ReadArgs {
    /// Register offsets to read (decimal or 0x hex)
    #[arg(required = true)]
    pub offsets: Vec<String>,
}

/// Scan data retrieval arguments
#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// Number of samples to retrieve
    #[arg(short, long, default_value = "100")]
    pub samples: u32,

    /// Reset the capture before collecting
    #[arg(short, long)]
    pub reset: bool,

    /// Write retrieved samples to a file instead of stdout
    #[arg(short = 'f', long)]
    pub output_file: Option<String>,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration
    Validate {
        /// Configuration file path
        file: Option<String>,
    },
    /// Create default configuration
    Init {
        /// Output directory path
        #[arg(short, long)]
        output: Option<String>,
        /// Initialize the global configuration instead
        #[arg(short, long)]
        global: bool,
    },
    /// List board profiles
    Boards,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse a register operand in decimal or 0x-prefixed hexadecimal.
pub fn parse_operand(literal: &str) -> BoardComResult<u32> {
    let parsed = if let Some(hex) = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        literal.parse::<u32>()
    };

    parsed.map_err(|_| BoardComError::InvalidInput(format!("invalid operand '{}'", literal)))
}

/// Parse an offset=value write pair.
pub fn parse_write_pair(pair: &str) -> BoardComResult<(u32, u32)> {
    let (offset, value) = pair.split_once('=').ok_or_else(|| {
        BoardComError::InvalidInput(format!("expected offset=value, got '{}'", pair))
    })?;

    Ok((parse_operand(offset)?, parse_operand(value)?))
}
