use crate::core::dispatch::command::BusCommand;
use crate::core::dispatch::request::{Header, Mode, Request, Response};
use crate::domain::config::BoardConfig;
use crate::domain::error::{BoardComError, BoardComResult};
use crate::infrastructure::process::{ProcessOutput, ProcessRunner};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Command Dispatcher: translates bus requests into debugger invocations
/// and collects their output into a uniform response.
///
/// Invocations run strictly one after another; the first failure stops
/// the transaction and collapses into the canned bus error. Collaborator
/// failure never surfaces as an `Err` here - `Err` is reserved for
/// malformed requests.
pub struct Dispatcher {
    board: BoardConfig,
    runner: Arc<dyn ProcessRunner>,
}

impl Dispatcher {
    pub fn new(board: BoardConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { board, runner }
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Dispatch one bus transaction.
    pub async fn dispatch(&self, request: &Request) -> BoardComResult<Response> {
        if request.header.debug {
            return Ok(Response::debug_ack());
        }

        let txn = Uuid::new_v4();
        debug!(
            %txn,
            mode = %request.header.mode,
            board = %self.board.name,
            operands = request.data.len(),
            "dispatching bus request"
        );

        match request.header.mode {
            Mode::Write => self.dispatch_write(request).await,
            Mode::Read => self.dispatch_read(request).await,
            Mode::GetScanData => self.dispatch_scan(&request.header).await,
        }
    }

    async fn dispatch_write(&self, request: &Request) -> BoardComResult<Response> {
        if request.data.len() % 2 != 0 {
            return Err(BoardComError::InvalidRequest(format!(
                "write data must be offset/value pairs, got {} operands",
                request.data.len()
            )));
        }

        let mut collected = Vec::new();
        let mut stdout_bytes = 0;
        for pair in request.data.chunks_exact(2) {
            let addr = self.board.base_address + u64::from(pair[0]);
            let cmd = BusCommand::write(&self.board.monitor_cmd, addr, pair[1]);
            match self.invoke(&request.header, &cmd).await {
                Some(output) => {
                    stdout_bytes += output.stdout.len();
                    collected.push(output.stdout.trim_end().to_string());
                }
                None => return Ok(Response::bus_error()),
            }
        }

        Ok(Self::assemble(collected, stdout_bytes))
    }

    async fn dispatch_read(&self, request: &Request) -> BoardComResult<Response> {
        let mut collected = Vec::new();
        let mut stdout_bytes = 0;
        for &offset in &request.data {
            let addr = self.board.base_address + u64::from(offset);
            let cmd = BusCommand::read(&self.board.monitor_cmd, addr);
            match self.invoke(&request.header, &cmd).await {
                Some(output) => {
                    stdout_bytes += output.stdout.len();
                    collected.push(output.stdout.trim_end().to_string());
                }
                None => return Ok(Response::bus_error()),
            }
        }

        Ok(Self::assemble(collected, stdout_bytes))
    }

    async fn dispatch_scan(&self, header: &Header) -> BoardComResult<Response> {
        let cmd = BusCommand::scan(&self.board.scan_cmd, header.reset, header.num_samples);
        match self.invoke(header, &cmd).await {
            Some(output) if output.stdout.is_empty() => Ok(Response::success(Vec::new())),
            Some(output) => Ok(Response::success(
                output
                    .stdout
                    .trim_end()
                    .split('\n')
                    .map(str::to_string)
                    .collect(),
            )),
            None => Ok(Response::bus_error()),
        }
    }

    /// Run one debugger command. Returns `None` for any failure - spawn
    /// error or non-zero exit - with no distinction preserved.
    async fn invoke(&self, header: &Header, cmd: &BusCommand) -> Option<ProcessOutput> {
        if header.print {
            info!(command = %cmd, "issuing debugger command");
        }

        match self.runner.run(&cmd.program, &cmd.args).await {
            Ok(output) if output.success => Some(output),
            Ok(_) | Err(_) => None,
        }
    }

    /// A transaction whose invocations produced no stdout at all reports
    /// an empty data sequence rather than a run of empty strings.
    fn assemble(collected: Vec<String>, stdout_bytes: usize) -> Response {
        if stdout_bytes == 0 {
            Response::success(Vec::new())
        } else {
            Response::success(collected)
        }
    }
}
