//! Command-line interface for realizing, checking, and verifying degree
//! sequences.
//!
//! `realize` builds a graph and writes it as a uel edge list, `check` reports
//! graphicality without building anything, and `verify` confirms that an
//! existing edge list realizes a sequence.

mod commands;

pub use commands::{
    CheckCommand, CheckSummary, Cli, CliError, Command, DegreeInput, ExecutionSummary,
    RealizeCommand, RealizeSummary, ValidationArg, VerifyCommand, VerifySummary, render_summary,
    run_cli,
};
