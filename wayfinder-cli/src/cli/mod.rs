//! Command-line interface orchestration for wayfinder.
//!
//! Each command loads a graph (the bundled dataset or an edge-list file), runs
//! one engine against it and hands back an [`ExecutionSummary`] for
//! rendering.

mod commands;

pub use commands::{
    Cli, CliError, Command, Dataset, DatasetArgs, ExecutionSummary, FileArgs, GraphSource,
    KruskalCommand, PrimCommand, Report, ShortestPathCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
