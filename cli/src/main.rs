//! CLI entrypoint for jobshift
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use jobshift_application::{AnalyzeJobUseCase, NoProgress, ProgressNotifier};
use jobshift_domain::{ExecutionMode, OutputFormat};
use jobshift_infrastructure::{ConfigLoader, FileConfig, LenientJsonRepair, build_transport};
use jobshift_presentation::{Cli, ConsoleFormatter, JobRepl, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // `.env` values behave like real environment variables
    let dotenv = dotenvy::dotenv();

    let _log_guard = init_logging(&cli)?;

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut config)?;

    let analysis = config
        .to_analysis_config()
        .context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let output: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    info!(
        provider = %config.provider,
        model = %analysis.inference.model_id,
        mode = %analysis.mode,
        "Starting jobshift"
    );

    // === Dependency Injection ===
    let transport = build_transport(&config).await?;
    let repair = Arc::new(LenientJsonRepair);

    match cli.job_title.as_deref() {
        Some(title) => {
            let cancel = CancellationToken::new();
            spawn_ctrl_c_handler(cancel.clone());

            let use_case =
                AnalyzeJobUseCase::from_config(transport, repair, &analysis).with_cancellation(cancel);

            let show_progress = !cli.quiet && output == OutputFormat::Full;
            let progress: Box<dyn ProgressNotifier> = if !show_progress {
                Box::new(NoProgress)
            } else if std::io::stderr().is_terminal() {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(SimpleProgress::new())
            };

            let report = use_case
                .execute_with_progress(title, progress.as_ref())
                .await?;

            println!("{}", ConsoleFormatter::render(&report, output));
        }
        None => {
            let use_case = AnalyzeJobUseCase::from_config(transport, repair, &analysis);

            let mut repl = JobRepl::new(use_case)
                .with_model_info(
                    config.provider.clone(),
                    analysis.inference.model_id.clone(),
                    analysis.inference.temperature,
                )
                .with_progress(config.repl.show_progress)
                .with_output(output);

            if let Some(path) = history_path(&config) {
                repl = repl.with_history(path, config.repl.history_size);
            }

            repl.run().await?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// With `--log-file`, records go through a non-blocking file writer so they
/// never interleave with the spinners; the returned guard flushes on drop.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();

            Ok(None)
        }
    }
}

/// CLI flags take precedence over every configuration source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) -> Result<()> {
    if let Some(provider) = &cli.provider {
        config.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.set_model(model.clone())?;
    }
    if let Some(temperature) = cli.temperature {
        config.inference.temperature = temperature;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.inference.max_tokens = max_tokens;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.retry.max_attempts = max_attempts;
    }
    if cli.concurrent {
        config.inference.mode = ExecutionMode::Concurrent;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }

    if let Some(title) = &cli.job_title {
        if title.trim().is_empty() {
            bail!("Job title cannot be empty. Omit it to start interactive mode.");
        }
    }

    Ok(())
}

/// Configured history file with `~` expanded, or the platform data dir
fn history_path(config: &FileConfig) -> Option<PathBuf> {
    match config.repl.history_file.as_deref() {
        Some(path) => match path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(path)),
        },
        None => dirs::data_dir().map(|dir| dir.join("jobshift").join("history.txt")),
    }
}

/// Cancel the run on the first Ctrl-C
fn spawn_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupted, cancelling analysis");
                cancel.cancel();
            }
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });
}
