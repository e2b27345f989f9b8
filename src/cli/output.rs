use crate::cli::args::OutputFormat;
use crate::core::dispatch::Response;
use crate::domain::config::{BoardComConfig, BoardConfig};
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_response(&self, response: &Response) -> Result<(), OutputError>;
    fn write_config(&self, config: &BoardComConfig) -> Result<(), OutputError>;
    fn write_boards(&self, boards: &[BoardConfig]) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl From<OutputError> for crate::domain::error::BoardComError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_response(&self, response: &Response) -> Result<(), OutputError> {
        if response.err {
            return self.write_error(&response.err_msg);
        }

        match self.format {
            OutputFormat::Text => {
                if !response.err_msg.is_empty() {
                    println!("{}", response.err_msg);
                }
                for line in &response.data {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(response)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !response.data.is_empty() {
                    let table_data: Vec<ResponseTableRow> = response
                        .data
                        .iter()
                        .enumerate()
                        .map(|(index, line)| ResponseTableRow {
                            index,
                            output: line.clone(),
                        })
                        .collect();
                    let table = Table::new(table_data);
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("index,output");
                for (index, line) in response.data.iter().enumerate() {
                    println!("{},{}", index, line);
                }
            }
        }
        Ok(())
    }

    fn write_config(&self, config: &BoardComConfig) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("BoardCom Configuration:");
                println!("  Log level: {}", config.global.log_level);
                println!("  Timeout: {}ms", config.global.timeout_ms);
                println!("  Echo commands: {}", config.global.echo_commands);

                if !config.boards.is_empty() {
                    println!("  Boards:");
                    for board in &config.boards {
                        let desc = if board.description.is_empty() {
                            "No description"
                        } else {
                            &board.description
                        };
                        println!("    {}: {}", board.name, desc);
                    }
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(config)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !config.boards.is_empty() {
                    let table_data: Vec<BoardTableRow> =
                        config.boards.iter().map(BoardTableRow::from).collect();
                    let table = Table::new(table_data);
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("name,description,base_address,monitor_cmd,scan_cmd");
                for board in &config.boards {
                    println!(
                        "{},{},0x{:08x},{},{}",
                        board.name,
                        board.description,
                        board.base_address,
                        board.monitor_cmd,
                        board.scan_cmd
                    );
                }
            }
        }
        Ok(())
    }

    fn write_boards(&self, boards: &[BoardConfig]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                for board in boards {
                    println!("Board: {}", board.name);
                    let desc = if board.description.is_empty() {
                        "No description"
                    } else {
                        &board.description
                    };
                    println!("  Description: {}", desc);
                    println!("  Base address: 0x{:08x}", board.base_address);
                    println!("  Monitor: {}", board.monitor_cmd);
                    println!("  Scan tool: {}", board.scan_cmd);
                    println!();
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(boards)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !boards.is_empty() {
                    let table_data: Vec<BoardTableRow> =
                        boards.iter().map(BoardTableRow::from).collect();
                    let table = Table::new(table_data);
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("name,description,base_address,monitor_cmd,scan_cmd");
                for board in boards {
                    println!(
                        "{},{},0x{:08x},{},{}",
                        board.name,
                        board.description,
                        board.base_address,
                        board.monitor_cmd,
                        board.scan_cmd
                    );
                }
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// Table row for response output lines
#[derive(Tabled)]
struct ResponseTableRow {
    index: usize,
    output: String,
}

/// Table row for board profiles
#[derive(Tabled)]
struct BoardTableRow {
    name: String,
    description: String,
    base_address: String,
    monitor: String,
    scan: String,
}

impl From<&BoardConfig> for BoardTableRow {
    fn from(board: &BoardConfig) -> Self {
        Self {
            name: board.name.clone(),
            description: board.description.clone(),
            base_address: format!("0x{:08x}", board.base_address),
            monitor: board.monitor_cmd.clone(),
            scan: board.scan_cmd.clone(),
        }
    }
}

/// File output writer, used to persist retrieved scan data
pub struct FileWriter {
    path: String,
    format: OutputFormat,
}

impl FileWriter {
    pub fn new(path: String, format: OutputFormat) -> Self {
        Self { path, format }
    }

    fn write_to_file(&self, content: &str) -> Result<(), OutputError> {
        let mut file = std::fs::File::create(&self.path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl OutputWriter for FileWriter {
    fn write_response(&self, response: &Response) -> Result<(), OutputError> {
        let content = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(response)?,
            OutputFormat::Text | OutputFormat::Table => {
                let mut lines = response.data.join("\n");
                if !lines.is_empty() {
                    lines.push('\n');
                }
                lines
            }
            OutputFormat::Csv => {
                let mut csv = "index,output\n".to_string();
                for (index, line) in response.data.iter().enumerate() {
                    csv.push_str(&format!("{},{}\n", index, line));
                }
                csv
            }
        };
        self.write_to_file(&content)
    }

    fn write_config(&self, config: &BoardComConfig) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => self.write_to_file(&serde_json::to_string_pretty(config)?),
            _ => Err(OutputError::UnsupportedFormat(
                "file output only supports JSON for configuration".to_string(),
            )),
        }
    }

    fn write_boards(&self, boards: &[BoardConfig]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => self.write_to_file(&serde_json::to_string_pretty(boards)?),
            _ => Err(OutputError::UnsupportedFormat(
                "file output only supports JSON for board profiles".to_string(),
            )),
        }
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        self.write_to_file(message)
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        self.write_to_file(&format!("Error: {}", error))
    }
}
