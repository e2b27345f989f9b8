use crate::cli::args::{
    parse_operand, parse_write_pair, Args, Command, ConfigCommand, ReadArgs, ScanArgs, WriteArgs,
};
use crate::cli::output::{ConsoleWriter, FileWriter, OutputWriter};
use crate::core::dispatch::{Dispatcher, Header, Request, Response};
use crate::domain::config::{BoardComConfig, BoardConfig};
use crate::domain::error::{BoardComError, BoardComResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::setup_logging;
use crate::infrastructure::process::SystemRunner;
use std::sync::Arc;
use std::time::Duration;

/// Execute CLI command
pub async fn execute_command(args: Args) -> BoardComResult<()> {
    let writer = ConsoleWriter::new(args.output.clone());

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(config_path.as_ref())?
    } else {
        config_manager.load_config()?
    };

    // Initialize logging
    if !args.quiet {
        setup_logging(&config.global, args.verbose)?;
    }

    match &args.command {
        Command::Write(write_args) => {
            execute_write_command(write_args.clone(), &args, &writer, &config).await
        }
        Command::Read(read_args) => {
            execute_read_command(read_args.clone(), &args, &writer, &config).await
        }
        Command::Scan(scan_args) => {
            execute_scan_command(scan_args.clone(), &args, &writer, &config).await
        }
        Command::Config(config_args) => {
            execute_config_command(config_args.command.clone(), &writer, &config, &config_manager)
                .await
        }
        Command::Version => {
            writer.write_message(&format!("boardcom {}", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        }
    }
}

async fn execute_write_command(
    write_args: WriteArgs,
    args: &Args,
    writer: &ConsoleWriter,
    config: &BoardComConfig,
) -> BoardComResult<()> {
    let pairs = write_args
        .pairs
        .iter()
        .map(|p| parse_write_pair(p))
        .collect::<BoardComResult<Vec<_>>>()?;

    let header = Header::write()
        .with_debug(args.dry_run)
        .with_print(args.echo || config.global.echo_commands);
    let request = Request::write_pairs(&pairs, header);

    let dispatcher = build_dispatcher(config, args.board.as_deref())?;
    let response = run_request(&dispatcher, &request, config.global.timeout_ms).await?;
    writer.write_response(&response)?;
    Ok(())
}

async fn execute_read_command(
    read_args: ReadArgs,
    args: &Args,
    writer: &ConsoleWriter,
    config: &BoardComConfig,
) -> BoardComResult<()> {
    let offsets = read_args
        .offsets
        .iter()
        .map(|o| parse_operand(o))
        .collect::<BoardComResult<Vec<_>>>()?;

    let header = Header::read()
        .with_debug(args.dry_run)
        .with_print(args.echo || config.global.echo_commands);
    let request = Request::new(offsets, header);

    let dispatcher = build_dispatcher(config, args.board.as_deref())?;
    let response = run_request(&dispatcher, &request, config.global.timeout_ms).await?;
    writer.write_response(&response)?;
    Ok(())
}

async fn execute_scan_command(
    scan_args: ScanArgs,
    args: &Args,
    writer: &ConsoleWriter,
    config: &BoardComConfig,
) -> BoardComResult<()> {
    let header = Header::scan(scan_args.reset, scan_args.samples)
        .with_debug(args.dry_run)
        .with_print(args.echo || config.global.echo_commands);
    let request = Request::new(Vec::new(), header);

    let dispatcher = build_dispatcher(config, args.board.as_deref())?;
    let response = run_request(&dispatcher, &request, config.global.timeout_ms).await?;

    match scan_args.output_file {
        Some(path) if !response.err => {
            let file_writer = FileWriter::new(path.clone(), args.output.clone());
            file_writer.write_response(&response)?;
            writer.write_message(&format!(
                "Saved {} scan lines to '{}'",
                response.data.len(),
                path
            ))?;
        }
        _ => {
            writer.write_response(&response)?;
        }
    }
    Ok(())
}

async fn execute_config_command(
    command: ConfigCommand,
    writer: &ConsoleWriter,
    config: &BoardComConfig,
    config_manager: &ConfigManager,
) -> BoardComResult<()> {
    match command {
        ConfigCommand::Show => {
            writer.write_config(config)?;
            Ok(())
        }
        ConfigCommand::Validate { file } => {
            if let Some(config_path) = file {
                match config_manager.load_config_from_path(config_path.as_ref()) {
                    Ok(_) => writer
                        .write_message(&format!("Configuration file '{}' is valid", config_path))?,
                    Err(e) => {
                        writer.write_error(&format!("Configuration validation failed: {}", e))?
                    }
                }
            } else {
                match config_manager.load_config() {
                    Ok(_) => writer.write_message("Current configuration is valid")?,
                    Err(e) => {
                        writer.write_error(&format!("Configuration validation failed: {}", e))?
                    }
                }
            }
            Ok(())
        }
        ConfigCommand::Init { output, global } => {
            if global {
                let global_path = config_manager.get_global_config_path_ref();
                let default_config = BoardComConfig::default();
                config_manager.save_config_to_path(global_path, &default_config)?;
                writer.write_message(&format!(
                    "Global configuration initialized at '{}'",
                    global_path.display()
                ))?;
            } else if let Some(output_path) = output {
                config_manager.init_project_config(output_path.as_ref())?;
                writer.write_message(&format!(
                    "Project configuration initialized at '{}'",
                    output_path
                ))?;
            } else {
                let current_dir = std::env::current_dir().map_err(|e| BoardComError::Config {
                    message: format!("Failed to get current directory: {}", e),
                })?;
                config_manager.init_project_config(&current_dir)?;
                writer.write_message("Project configuration initialized in current directory")?;
            }
            Ok(())
        }
        ConfigCommand::Boards => {
            writer.write_boards(&config.boards)?;
            Ok(())
        }
    }
}

/// Select the board profile and wire it to a real process runner.
fn build_dispatcher(config: &BoardComConfig, board: Option<&str>) -> BoardComResult<Dispatcher> {
    let board_config = select_board(config, board)?;
    Ok(Dispatcher::new(board_config, Arc::new(SystemRunner)))
}

fn select_board(config: &BoardComConfig, name: Option<&str>) -> BoardComResult<BoardConfig> {
    match name {
        Some(n) => config
            .boards
            .iter()
            .find(|b| b.name == n)
            .cloned()
            .ok_or_else(|| BoardComError::UnknownBoard(n.to_string())),
        None => Ok(config.boards.first().cloned().unwrap_or_default()),
    }
}

/// The dispatcher itself never times out; the caller bounds the whole
/// transaction when the configuration asks for it.
async fn run_request(
    dispatcher: &Dispatcher,
    request: &Request,
    timeout_ms: u64,
) -> BoardComResult<Response> {
    if timeout_ms > 0 {
        tokio::time::timeout(Duration::from_millis(timeout_ms), dispatcher.dispatch(request))
            .await
            .map_err(|_| BoardComError::Timeout)?
    } else {
        dispatcher.dispatch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_board_by_name() {
        let config = BoardComConfig {
            global: Default::default(),
            boards: vec![
                BoardConfig {
                    name: "rev-a".to_string(),
                    ..BoardConfig::default()
                },
                BoardConfig {
                    name: "rev-b".to_string(),
                    base_address: 0x4100_0000,
                    ..BoardConfig::default()
                },
            ],
        };

        let board = select_board(&config, Some("rev-b")).unwrap();
        assert_eq!(board.base_address, 0x4100_0000);
    }

    #[test]
    fn test_select_board_unknown_name_is_error() {
        let config = BoardComConfig::default();
        let err = select_board(&config, Some("missing")).unwrap_err();
        assert!(matches!(err, BoardComError::UnknownBoard(_)));
    }

    #[test]
    fn test_select_board_falls_back_to_default_profile() {
        let config = BoardComConfig::default();
        let board = select_board(&config, None).unwrap();
        assert_eq!(board.name, "default");
        assert_eq!(board.base_address, 0x4000_0000);
    }

    #[test]
    fn test_select_board_prefers_first_configured_profile() {
        let config = BoardComConfig {
            global: Default::default(),
            boards: vec![BoardConfig {
                name: "bench".to_string(),
                ..BoardConfig::default()
            }],
        };

        let board = select_board(&config, None).unwrap();
        assert_eq!(board.name, "bench");
    }
}
