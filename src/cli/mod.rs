//! Command line interface for Verba.
//!
//! Three subcommands: `query` evaluates a word-frequency query against the
//! chosen index, `stats` reports diagnostics (optionally the in-order AVL
//! dump), and `bench` times the same query against both structures.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Command, IndexChoice, OutputFormat, VerbaArgs};
pub use commands::execute_command;
