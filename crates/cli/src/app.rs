//! Top-level run loop.
//!
//! Resolves the configuration, prepares the output directory and log file,
//! then runs the pipeline on its own task so that an interrupt or a panic
//! can be turned into a clean exit.

use std::any::Any;
use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use config_loader::{ConfigLoader, ToolchainConfig};
use contracts::{PipelineError, RunSettings};
use observability::RunLog;
use stages::ProcessLauncher;
use tracing::{debug, error, info, warn};

use crate::cli::{Cli, LogFormat};
use crate::error::{CliError, Result};
use crate::pipeline::{log_main_files, render_summary, Pipeline, PipelineReport};

/// Run IgSimulator with parsed arguments
///
/// Installs logging, executes the run and logs how it ended. The returned
/// error carries the exit code.
pub async fn run(cli: Cli) -> Result<()> {
    let run_log = RunLog::detached();
    observability::init_logging(&cli.logging_config(), run_log.clone())?;

    let result = execute(&cli, &run_log, shutdown_signal()).await;

    match &result {
        Ok(()) => info!("Thank you for using IgSimulator!"),
        Err(CliError::Interrupted) => info!("IgSimulator was interrupted!"),
        Err(CliError::Internal { message }) => {
            error!("IgSimulator finished abnormally due to an internal error: {message}");
            match run_log.path() {
                Some(path) => error!(
                    "Please send the log file {} to the developers",
                    path.display()
                ),
                None => error!("Please report this problem to the developers"),
            }
        }
        Err(CliError::Pipeline(e)) => {
            error!(class = ?e.class(), "{e}");
            error!("IgSimulator finished abnormally");
        }
        Err(e) => {
            error!("{e}");
            error!("IgSimulator finished abnormally");
        }
    }

    if let Some(path) = run_log.path() {
        info!("Log was written to {}", path.display());
    }
    result
}

/// Resolve the run, prepare its output and run the pipeline until it ends
/// or `shutdown` resolves
///
/// The output directory is only touched once the configuration and every
/// tool binary have been checked. `run_log` is attached to
/// `<output>/ig_simulator.log` before the first stage.
pub async fn execute<S>(cli: &Cli, run_log: &RunLog, shutdown: S) -> Result<()>
where
    S: Future<Output = ()>,
{
    let toolchain = load_toolchain(cli)?;
    let settings = config_loader::resolve(cli.run_options(), &toolchain)?;
    toolchain.check_binaries(settings.technology)?;

    config_loader::prepare_output_dir(&settings.output_dir)?;
    run_log
        .open(&settings.log_path())
        .with_context(|| format!("Failed to open log file {}", settings.log_path().display()))?;

    info!("Command line: {}", command_line());
    log_input_parameters(&settings);

    let launcher = ProcessLauncher::new(run_log.clone(), !cli.quiet);
    let mut pipeline = Pipeline::new(settings, toolchain.tools, launcher);
    let report = supervise(async move { pipeline.run().await }, shutdown).await?;

    log_main_files(&report.output);
    match cli.log_format {
        LogFormat::Json => {
            let json = serde_json::to_string_pretty(&report.output)
                .context("Failed to serialize run summary")?;
            println!("{json}");
        }
        LogFormat::Pretty | LogFormat::Compact => {
            println!("{}", render_summary(&report.output, &report.timings));
        }
    }
    Ok(())
}

/// How long a tool killed by a signal waits for the matching shutdown
const SIGNAL_GRACE: Duration = Duration::from_millis(250);

/// Run `pipeline` on its own task, racing it against `shutdown`
///
/// A pending shutdown wins over a pipeline that finished in the same poll.
/// A stage whose tool died from a signal counts as interrupted when
/// `shutdown` fires within [`SIGNAL_GRACE`]; the tool usually receives
/// Ctrl+C before this process does. A panic becomes `CliError::Internal`.
pub async fn supervise<F, S>(pipeline: F, shutdown: S) -> Result<PipelineReport>
where
    F: Future<Output = std::result::Result<PipelineReport, PipelineError>> + Send + 'static,
    S: Future<Output = ()>,
{
    let mut task = tokio::spawn(pipeline);
    tokio::pin!(shutdown);

    let joined = tokio::select! {
        biased;
        () = &mut shutdown => {
            task.abort();
            // the aborted task drops the running tool, which kills it
            let _ = task.await;
            return Err(CliError::Interrupted);
        }
        joined = &mut task => joined,
    };

    match joined {
        Ok(Ok(report)) => Ok(report),
        Ok(Err(e)) if e.killed_by_signal() => {
            match tokio::time::timeout(SIGNAL_GRACE, &mut shutdown).await {
                Ok(()) => Err(CliError::Interrupted),
                Err(_) => Err(e.into()),
            }
        }
        Ok(Err(e)) => Err(e.into()),
        Err(e) if e.is_panic() => Err(CliError::internal(panic_message(e.into_panic()))),
        Err(e) => Err(CliError::internal(e.to_string())),
    }
}

/// Toolchain from `--tools` or the built-in layout, rooted at `--home`
fn load_toolchain(cli: &Cli) -> Result<ToolchainConfig> {
    let toolchain = match &cli.tools {
        Some(path) => {
            info!(path = %path.display(), "Loading toolchain configuration");
            ConfigLoader::load_from_path(path)?
        }
        None => ToolchainConfig::default(),
    };
    let toolchain = toolchain.rooted_at(&cli.home);
    debug!(?toolchain, "Toolchain resolved");
    Ok(toolchain)
}

fn log_input_parameters(settings: &RunSettings) {
    info!("Input parameters:");
    info!("  Output directory: {}", settings.output_dir.display());
    info!("  Chain type: {}", settings.chain_type.as_str());
    info!("  Number of base sequences: {}", settings.num_bases);
    info!("  Number of mutated sequences: {}", settings.num_mutated);
    info!("  Repertoire size: {}", settings.repertoire_size);
    info!("  Expected number of reads: {}", settings.num_reads());
    info!("  Minimal overlap: {}", settings.merge.min_overlap);
    info!("  Maximal mismatch: {}", settings.merge.max_mismatch);
    info!("  Sequencing technology: {}", settings.technology.as_str());
    for path in settings.gene_databases.ordered() {
        debug!("  Germline database: {}", path.display());
    }
}

fn command_line() -> String {
    std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "pipeline task panicked".to_string()
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
