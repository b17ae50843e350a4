//! Support library for the `hakimi` binary.
//!
//! Exposes argument parsing, command execution, and logging setup so tests
//! and doctests can drive the commands without spawning a process.

pub mod cli;
pub mod logging;
