//! Command implementations and argument parsing for the wayfinder CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};
use wayfinder_core::{
    GraphError, Node, PathEntry, ShortestPaths, SpanningForest, kruskal, prim, shortest_paths,
};
use wayfinder_providers_edgelist::{EdgeListError, EdgeListSource};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wayfinder",
    about = "Shortest paths and minimum spanning trees over weighted undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the cheapest path from one node to every other node (Dijkstra).
    ShortestPath(ShortestPathCommand),
    /// Compute a minimum spanning forest of the whole graph (Kruskal).
    Kruskal(KruskalCommand),
    /// Grow a minimum spanning tree from a start node (Prim).
    Prim(PrimCommand),
}

/// Options accepted by the `shortest-path` command.
#[derive(Debug, Args, Clone)]
pub struct ShortestPathCommand {
    /// Node the paths start from.
    #[arg(long)]
    pub source: String,

    /// Graph to load.
    #[command(subcommand)]
    pub input: GraphSource,
}

/// Options accepted by the `kruskal` command.
#[derive(Debug, Args, Clone)]
pub struct KruskalCommand {
    /// Graph to load.
    #[command(subcommand)]
    pub input: GraphSource,
}

/// Options accepted by the `prim` command.
#[derive(Debug, Args, Clone)]
pub struct PrimCommand {
    /// Node the tree grows from.
    #[arg(long)]
    pub start: String,

    /// Graph to load.
    #[command(subcommand)]
    pub input: GraphSource,
}

/// Where the graph comes from.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Use a graph bundled with the binary.
    Dataset(DatasetArgs),
    /// Load an edge-list text file.
    File(FileArgs),
}

/// Built-in dataset selection.
#[derive(Debug, Args, Clone)]
pub struct DatasetArgs {
    /// Dataset to load.
    #[arg(long, value_enum, default_value_t = Dataset::SouthAmerica)]
    pub name: Dataset,
}

/// Bundled datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Road distances in kilometres between twelve South American countries.
    SouthAmerica,
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list loading failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// An engine rejected the request.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Result of a single command.
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `shortest-path`.
    ShortestPaths(ShortestPaths),
    /// Output of `kruskal`.
    Kruskal(SpanningForest),
    /// Output of `prim`.
    Prim(SpanningForest),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded graph.
    pub data_source: String,
    /// Algorithm output.
    pub report: Report,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or the engine rejects
/// the request.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{Cli, Command, FileArgs, GraphSource, KruskalCommand, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 1\nb c 2\na c 4\n")?;
/// let cli = Cli {
///     command: Command::Kruskal(KruskalCommand {
///         input: GraphSource::File(FileArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Report::Kruskal(forest) = summary.report else {
///     unreachable!("kruskal produces a forest");
/// };
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::ShortestPath(command) => {
            span.record("command", field::display("shortest-path"));
            run_shortest_path(command)?
        }
        Command::Kruskal(command) => {
            span.record("command", field::display("kruskal"));
            run_kruskal(command)?
        }
        Command::Prim(command) => {
            span.record("command", field::display("prim"));
            run_prim(command)?
        }
    };
    info!(data_source = summary.data_source.as_str(), "command completed");
    Ok(summary)
}

#[instrument(name = "cli.shortest_path", err, skip(command), fields(source = %command.source))]
pub(super) fn run_shortest_path(
    command: ShortestPathCommand,
) -> Result<ExecutionSummary, CliError> {
    let loaded = load_graph(command.input)?;
    let paths = shortest_paths(loaded.graph(), &Node::from(command.source.trim()))?;
    info!(
        data_source = loaded.name(),
        reachable = paths.reachable_count(),
        nodes = paths.len(),
        "shortest paths computed"
    );
    Ok(summarise(loaded, Report::ShortestPaths(paths)))
}

#[instrument(name = "cli.kruskal", err, skip(command))]
pub(super) fn run_kruskal(command: KruskalCommand) -> Result<ExecutionSummary, CliError> {
    let loaded = load_graph(command.input)?;
    let forest = kruskal(loaded.graph());
    if forest.component_count() > 1 {
        info!(
            components = forest.component_count(),
            "graph is disconnected; reporting a spanning forest"
        );
    }
    Ok(summarise(loaded, Report::Kruskal(forest)))
}

#[instrument(name = "cli.prim", err, skip(command), fields(start = %command.start))]
pub(super) fn run_prim(command: PrimCommand) -> Result<ExecutionSummary, CliError> {
    let loaded = load_graph(command.input)?;
    let tree = prim(loaded.graph(), &Node::from(command.start.trim()))?;
    if !tree.is_spanning() {
        warn!(
            reached = tree.nodes_reached(),
            nodes = tree.node_count(),
            "prim did not reach every node; the graph is disconnected"
        );
    }
    Ok(summarise(loaded, Report::Prim(tree)))
}

fn summarise(loaded: EdgeListSource, report: Report) -> ExecutionSummary {
    ExecutionSummary {
        data_source: loaded.name().to_owned(),
        report,
    }
}

#[instrument(
    name = "cli.load_graph",
    err,
    skip(input),
    fields(source = field::Empty, path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_graph(input: GraphSource) -> Result<EdgeListSource, CliError> {
    let span = Span::current();
    let loaded = match input {
        GraphSource::Dataset(DatasetArgs { name }) => {
            span.record("source", field::display("dataset"));
            match name {
                Dataset::SouthAmerica => EdgeListSource::south_america()?,
            }
        }
        GraphSource::File(FileArgs { path, name }) => {
            span.record("source", field::display("file"));
            span.record("path", field::display(path.display()));
            span.record(
                "override_name",
                field::display(name.as_deref().unwrap_or("<derived>")),
            );
            let chosen_name = derive_data_source_name(&path, name.as_deref());
            let reader = open_edge_list_reader(&path)?;
            EdgeListSource::try_from_reader(chosen_name, reader)?
        }
    };
    info!(
        data_source = loaded.name(),
        nodes = loaded.graph().node_count(),
        edges = loaded.graph().edge_count(),
        "graph loaded"
    );
    Ok(loaded)
}

#[instrument(name = "cli.open_edge_list_reader", err, fields(path = field::Empty))]
pub(super) fn open_edge_list_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Shortest paths are printed as a table ordered by ascending cost with
/// unreachable nodes last; spanning forests as one `a -- b == w` line per edge
/// followed by totals.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{ExecutionSummary, Report, render_summary};
/// # use wayfinder_core::{Graph, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::new(["A", "B"], [("A", "B", 2.5)])?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     report: Report::Kruskal(kruskal(&graph)),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\nalgorithm: kruskal\nA -- B == 2.5\ntotal weight: 2.5\n\
///      reached: 2 of 2 nodes\ncomponents: 1\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    match &summary.report {
        Report::ShortestPaths(paths) => render_paths(paths, &mut writer),
        Report::Kruskal(forest) => render_forest("kruskal", forest, &mut writer),
        Report::Prim(tree) => render_forest("prim", tree, &mut writer),
    }
}

const NODE_HEADER: &str = "Node";
const COST_HEADER: &str = "Cost";
const PREDECESSOR_HEADER: &str = "Predecessor";
const UNREACHABLE: &str = "unreachable";
const NO_PREDECESSOR: &str = "-";
const COLUMN_GAP: usize = 2;

fn render_paths(paths: &ShortestPaths, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "shortest paths from {}", paths.source())?;
    let rows: Vec<[String; 3]> = paths.sorted_by_cost().into_iter().map(table_row).collect();

    let node_width = column_width(NODE_HEADER, rows.iter().map(|row| &row[0]));
    let cost_width = column_width(COST_HEADER, rows.iter().map(|row| &row[1]));
    writeln!(
        writer,
        "{NODE_HEADER:<node_width$}{COST_HEADER:<cost_width$}{PREDECESSOR_HEADER}"
    )?;
    for [node, cost, predecessor] in &rows {
        writeln!(writer, "{node:<node_width$}{cost:<cost_width$}{predecessor}")?;
    }
    Ok(())
}

fn table_row(entry: &PathEntry) -> [String; 3] {
    [
        entry.node().to_string(),
        entry
            .cost()
            .map_or_else(|| UNREACHABLE.to_owned(), |cost| cost.to_string()),
        entry
            .predecessor()
            .map_or_else(|| NO_PREDECESSOR.to_owned(), ToString::to_string),
    ]
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a String>) -> usize {
    values
        .map(|value| value.chars().count())
        .fold(header.chars().count(), usize::max)
        + COLUMN_GAP
}

fn render_forest(
    algorithm: &str,
    forest: &SpanningForest,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "algorithm: {algorithm}")?;
    for edge in forest.edges() {
        writeln!(writer, "{edge}")?;
    }
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(
        writer,
        "reached: {} of {} nodes",
        forest.nodes_reached(),
        forest.node_count()
    )?;
    writeln!(writer, "components: {}", forest.component_count())
}
