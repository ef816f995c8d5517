//! CLI entry point for wayfinder.
//!
//! Parses arguments with clap, runs the requested engine, renders the result
//! to stdout and maps failures to a non-zero exit code. Logging is
//! initialised first so every later step can emit diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use wayfinder_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, graph_code) = err
            .downcast_ref::<CliError>()
            .map_or((None, None), |cli_error| match cli_error {
                CliError::Core(core) => (Some(core.code().as_str()), None),
                CliError::EdgeList(edge_list) => (
                    Some(edge_list.code().as_str()),
                    edge_list.graph_error().map(|graph| graph.code().as_str()),
                ),
                CliError::Io { .. } => (None, None),
            });

        let message = format!("{err:#}");
        error!(
            error = %message,
            code = code.map(field::display),
            graph_code = graph_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
