//! Command implementations and argument parsing for the `hakimi` binary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use hakimi_core::{
    DegreeSequence, DegreeSequenceError, NodeId, OrderMode, RealizeError, RealizerBuilder,
    UelError, Validation, read_uel_file, write_uel_file,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hakimi",
    version,
    about = "Realize degree sequences as simple undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a graph with exactly the requested degrees and write it as a uel file.
    Realize(RealizeCommand),
    /// Report whether a degree sequence is graphical without building it.
    Check(CheckCommand),
    /// Confirm that a uel file realizes a degree sequence.
    Verify(VerifyCommand),
}

/// Where the degree sequence comes from. Exactly one source must be given.
#[derive(Debug, Args, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct DegreeInput {
    /// Degrees listed on the command line, separated by spaces or commas.
    #[arg(long = "degree-sequence", num_args = 1.., value_delimiter = ',', value_name = "D")]
    pub degree_sequence: Vec<usize>,

    /// File holding whitespace- or comma-separated degrees; `#` starts a comment.
    #[arg(long = "degree-file", value_name = "PATH")]
    pub degree_file: Option<PathBuf>,
}

/// Options accepted by the `realize` command.
#[derive(Debug, Args, Clone)]
pub struct RealizeCommand {
    /// Degree sequence to realize.
    #[command(flatten)]
    pub input: DegreeInput,

    /// Node order: 0 smallest-first, 1 largest-first, anything else randomized.
    #[arg(long, allow_negative_numbers = true, value_name = "INT")]
    pub order: i64,

    /// Destination of the uel edge list; replaced if it exists.
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: PathBuf,

    /// Seed for the randomized order; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// When to reject sequences that cannot be realized.
    #[arg(long, value_enum, default_value_t = ValidationArg::Upfront)]
    pub validation: ValidationArg,
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Degree sequence to check.
    #[command(flatten)]
    pub input: DegreeInput,
}

/// Options accepted by the `verify` command.
#[derive(Debug, Args, Clone)]
pub struct VerifyCommand {
    /// uel edge list to verify.
    #[arg(value_name = "UEL")]
    pub edge_file: PathBuf,

    /// Degree sequence the edge list must realize.
    #[command(flatten)]
    pub input: DegreeInput,
}

/// Command-line spelling of [`Validation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValidationArg {
    /// Reject non-graphical sequences before building anything.
    #[default]
    Upfront,
    /// Detect infeasibility only inside the reduction loop.
    DuringReduction,
}

impl From<ValidationArg> for Validation {
    fn from(value: ValidationArg) -> Self {
        match value {
            ValidationArg::Upfront => Self::Upfront,
            ValidationArg::DuringReduction => Self::DuringReduction,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading a degree file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A degree file contained something other than non-negative integers.
    #[error("invalid degree file `{path}`: {source}")]
    DegreeFile {
        /// Path of the degree file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: DegreeSequenceError,
    },
    /// The sequence could not be realized.
    #[error(transparent)]
    Realize(#[from] RealizeError),
    /// Writing or reading a uel file failed.
    #[error(transparent)]
    Uel(#[from] UelError),
    /// An edge list names a node outside the sequence.
    #[error("edge list mentions node {node} but the sequence has only {nodes} nodes")]
    NodeOutOfRange {
        /// Offending node.
        node: NodeId,
        /// Number of nodes in the sequence.
        nodes: usize,
    },
    /// An edge list gives a node a different degree than requested.
    #[error("node {node} has degree {actual} in the edge list but {expected} was requested")]
    DegreeMismatch {
        /// Node whose degree differs.
        node: NodeId,
        /// Requested degree.
        expected: usize,
        /// Degree found in the edge list.
        actual: usize,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::DegreeFile { source, .. } => source.code().as_str(),
            Self::Realize(err) => err.code().as_str(),
            Self::Uel(err) => err.code().as_str(),
            Self::NodeOutOfRange { .. } => "CLI_NODE_OUT_OF_RANGE",
            Self::DegreeMismatch { .. } => "CLI_DEGREE_MISMATCH",
        }
    }
}

/// Outcome of a successful `realize` command.
#[derive(Debug, Clone)]
pub struct RealizeSummary {
    /// Number of nodes in the sequence.
    pub nodes: usize,
    /// Number of edges written.
    pub edges: usize,
    /// Order mode the reduction used.
    pub order_mode: OrderMode,
    /// Path of the written edge list.
    pub output_file: PathBuf,
    /// Wall-clock time spent realizing and writing.
    pub elapsed: Duration,
}

/// Outcome of a `check` command.
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Number of nodes in the sequence.
    pub nodes: usize,
    /// Sum of the requested degrees.
    pub degree_sum: u128,
    /// `Ok` when graphical, otherwise the first violated condition.
    pub verdict: Result<(), RealizeError>,
}

/// Outcome of a successful `verify` command.
#[derive(Debug, Clone)]
pub struct VerifySummary {
    /// Path of the verified edge list.
    pub edge_file: PathBuf,
    /// Number of nodes in the sequence.
    pub nodes: usize,
    /// Number of edges read.
    pub edges: usize,
}

/// Summary of any executed command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// `realize` finished.
    Realized(RealizeSummary),
    /// `check` finished.
    Checked(CheckSummary),
    /// `verify` finished.
    Verified(VerifySummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading input, realizing, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hakimi_cli::cli::{Cli, Command, DegreeInput, ExecutionSummary, RealizeCommand, ValidationArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output_file = dir.path().join("k4.uel");
/// let cli = Cli {
///     command: Command::Realize(RealizeCommand {
///         input: DegreeInput {
///             degree_sequence: vec![3, 3, 3, 3],
///             degree_file: None,
///         },
///         order: 1,
///         output_file: output_file.clone(),
///         seed: None,
///         validation: ValidationArg::Upfront,
///     }),
/// };
/// let ExecutionSummary::Realized(summary) = run_cli(cli)? else {
///     unreachable!("realize yields a realize summary");
/// };
/// assert_eq!(summary.edges, 6);
/// assert_eq!(std::fs::read_to_string(output_file)?.lines().count(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Realize(command) => {
            span.record("command", "realize");
            run_realize(command).map(ExecutionSummary::Realized)
        }
        Command::Check(command) => {
            span.record("command", "check");
            run_check(&command).map(ExecutionSummary::Checked)
        }
        Command::Verify(command) => {
            span.record("command", "verify");
            run_verify(&command).map(ExecutionSummary::Verified)
        }
    }
}

#[instrument(
    name = "cli.realize",
    err,
    skip(command),
    fields(
        order = command.order,
        output_file = %command.output_file.display(),
        nodes = field::Empty,
    ),
)]
pub(super) fn run_realize(command: RealizeCommand) -> Result<RealizeSummary, CliError> {
    let sequence = load_degrees(&command.input)?;
    Span::current().record("nodes", sequence.len());

    let order_mode = OrderMode::from_selector(command.order);
    let mut builder = RealizerBuilder::new()
        .with_order_mode(order_mode)
        .with_validation(command.validation.into());
    if let Some(seed) = command.seed {
        builder = builder.with_rng_seed(seed);
    }
    let realizer = builder.build();

    let started = Instant::now();
    let graph = realizer.realize(&sequence)?;
    let edges = write_uel_file(&graph, &command.output_file)?;
    let elapsed = started.elapsed();

    info!(
        nodes = sequence.len(),
        edges,
        order = %order_mode,
        elapsed_secs = elapsed.as_secs_f64(),
        "edge list written"
    );
    Ok(RealizeSummary {
        nodes: sequence.len(),
        edges,
        order_mode,
        output_file: command.output_file,
        elapsed,
    })
}

#[instrument(name = "cli.check", err, skip(command))]
pub(super) fn run_check(command: &CheckCommand) -> Result<CheckSummary, CliError> {
    let sequence = load_degrees(&command.input)?;
    let verdict = sequence.check_graphical();
    if let Err(reason) = &verdict {
        warn!(code = reason.code().as_str(), %reason, "sequence is not graphical");
    }
    Ok(CheckSummary {
        nodes: sequence.len(),
        degree_sum: sequence.degree_sum(),
        verdict,
    })
}

#[instrument(
    name = "cli.verify",
    err,
    skip(command),
    fields(edge_file = %command.edge_file.display()),
)]
pub(super) fn run_verify(command: &VerifyCommand) -> Result<VerifySummary, CliError> {
    let sequence = load_degrees(&command.input)?;
    let edges = read_uel_file(&command.edge_file)?;
    let nodes = sequence.len();

    let mut actual = vec![0usize; nodes];
    for edge in &edges {
        for node in [edge.u(), edge.v()] {
            let slot = actual
                .get_mut(node.get())
                .ok_or(CliError::NodeOutOfRange { node, nodes })?;
            *slot = slot.saturating_add(1);
        }
    }
    if let Some((index, (&expected, &found))) = sequence
        .as_slice()
        .iter()
        .zip(&actual)
        .enumerate()
        .find(|(_, (expected, found))| expected != found)
    {
        return Err(CliError::DegreeMismatch {
            node: NodeId::new(index),
            expected,
            actual: found,
        });
    }

    info!(nodes, edges = edges.len(), "edge list verified");
    Ok(VerifySummary {
        edge_file: command.edge_file.clone(),
        nodes,
        edges: edges.len(),
    })
}

/// Reads the degree sequence from the command line or a degree file.
#[instrument(name = "cli.load_degrees", err, skip(input), fields(source = field::Empty))]
pub(super) fn load_degrees(input: &DegreeInput) -> Result<DegreeSequence, CliError> {
    let span = Span::current();
    match &input.degree_file {
        Some(path) => {
            span.record("source", field::display(path.display()));
            read_degree_file(path)
        }
        None => {
            span.record("source", "command-line");
            Ok(DegreeSequence::new(input.degree_sequence.clone()))
        }
    }
}

fn read_degree_file(path: &Path) -> Result<DegreeSequence, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DegreeSequence::parse(&text).map_err(|source| CliError::DegreeFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hakimi_cli::cli::{CheckSummary, ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Checked(CheckSummary {
///     nodes: 2,
///     degree_sum: 2,
///     verdict: Ok(()),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "nodes: 2\ndegree sum: 2\ngraphical: yes\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Realized(realized) => {
            writeln!(writer, "nodes: {}", realized.nodes)?;
            writeln!(writer, "edges: {}", realized.edges)?;
            writeln!(writer, "order: {}", realized.order_mode)?;
            writeln!(writer, "output: {}", realized.output_file.display())?;
            writeln!(
                writer,
                "elapsed: {:.6} s ({:.9} h)",
                realized.elapsed.as_secs_f64(),
                (realized.elapsed / 3600).as_secs_f64()
            )?;
        }
        ExecutionSummary::Checked(checked) => {
            writeln!(writer, "nodes: {}", checked.nodes)?;
            writeln!(writer, "degree sum: {}", checked.degree_sum)?;
            match &checked.verdict {
                Ok(()) => writeln!(writer, "graphical: yes")?,
                Err(reason) => writeln!(writer, "graphical: no ({}: {reason})", reason.code())?,
            }
        }
        ExecutionSummary::Verified(verified) => {
            writeln!(writer, "verified: {}", verified.edge_file.display())?;
            writeln!(writer, "nodes: {}", verified.nodes)?;
            writeln!(writer, "edges: {}", verified.edges)?;
        }
    }
    Ok(())
}
