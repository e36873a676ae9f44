//! Tool launchers
//!
//! `ProcessLauncher` spawns the tool as a child process and tees its stdout
//! and stderr line by line into the run log (and the console when echo is
//! on). Arguments go straight to the process; no shell is involved.

use std::process::{ExitStatus, Stdio};

use contracts::{PipelineError, StageId, ToolCommand};
use observability::RunLog;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

/// Result of one tool execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    pub success: bool,
    /// Exit code, `None` when the tool was killed by a signal
    pub code: Option<i32>,
    /// Human-readable status, e.g. `exit status: 1`
    pub status: String,
}

impl ExitReport {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
            status: "exit status: 0".to_string(),
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            status: format!("exit status: {code}"),
        }
    }

    /// Killed by `signal` before exiting
    pub fn killed(signal: i32) -> Self {
        Self {
            success: false,
            code: None,
            status: format!("signal: {signal}"),
        }
    }
}

impl From<ExitStatus> for ExitReport {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
            status: status.to_string(),
        }
    }
}

/// Tool launcher trait
///
/// Runs a command to completion. Implementations must not return before
/// the tool has exited.
#[trait_variant::make(ToolLauncher: Send)]
pub trait LocalToolLauncher {
    /// Run `command` for `stage` and report how it exited
    ///
    /// # Errors
    /// `Launch` when the program cannot be started. A non-zero exit is
    /// not an error at this level.
    async fn launch(
        &self,
        stage: StageId,
        command: &ToolCommand,
    ) -> Result<ExitReport, PipelineError>;
}

/// Launches tools as child processes
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    run_log: RunLog,
    echo: bool,
}

impl ProcessLauncher {
    /// `echo` also prints tool output to the console
    pub fn new(run_log: RunLog, echo: bool) -> Self {
        Self { run_log, echo }
    }
}

#[derive(Debug, Clone, Copy)]
enum OutputStream {
    Stdout,
    Stderr,
}

impl ToolLauncher for ProcessLauncher {
    async fn launch(
        &self,
        stage: StageId,
        command: &ToolCommand,
    ) -> Result<ExitReport, PipelineError> {
        let mut child = Command::new(command.program())
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // an interrupted run must not leave the tool behind
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PipelineError::Launch {
                stage,
                program: command.program.clone(),
                source,
            })?;

        debug!(stage = %stage, pid = ?child.id(), "tool started");

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (status, _, _) = tokio::join!(
            child.wait(),
            tee(stdout, &self.run_log, self.echo, OutputStream::Stdout),
            tee(stderr, &self.run_log, self.echo, OutputStream::Stderr),
        );

        let report = ExitReport::from(status?);
        debug!(stage = %stage, status = %report.status, "tool exited");
        Ok(report)
    }
}

async fn tee<R>(reader: Option<R>, run_log: &RunLog, echo: bool, stream: OutputStream)
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return;
    };
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&buf);
                let line = text.trim_end_matches(['\n', '\r']);
                if echo {
                    match stream {
                        OutputStream::Stdout => println!("{line}"),
                        OutputStream::Stderr => eprintln!("{line}"),
                    }
                }
                if let Err(e) = run_log.append_line(line) {
                    warn!(error = %e, "failed to write tool output to the log");
                }
            }
            Err(e) => {
                warn!(stream = ?stream, error = %e, "failed to read tool output");
                break;
            }
        }
    }
}
