//! Command line argument parsing for the Verba CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Verba - dual-structure word frequency index
#[derive(Parser, Debug, Clone)]
#[command(name = "verba")]
#[command(about = "Index text documents and answer word frequency queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VerbaArgs {
    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text lines
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index documents and evaluate a query
    Query(QueryArgs),

    /// Show index statistics and diagnostics
    Stats(StatsArgs),

    /// Time the query against both structures
    Bench(BenchArgs),
}

/// Which index structure answers a query.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexChoice {
    /// The AVL tree
    Avl,
    /// The hash table
    Hash,
    /// Both, one after the other
    Both,
}

/// Arguments for evaluating a query
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Input document files
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Whitespace-separated query words
    #[arg(short, long, value_name = "WORDS")]
    pub query: String,

    /// Index structure to query
    #[arg(short, long, value_enum, default_value = "avl")]
    pub index: IndexChoice,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input document files
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Dump the in-order AVL traversal (word, height, balance factor, documents)
    #[arg(long)]
    pub dump: bool,
}

/// Arguments for the timing comparison
#[derive(Parser, Debug, Clone)]
pub struct BenchArgs {
    /// Input document files
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Whitespace-separated query words
    #[arg(short, long, value_name = "WORDS")]
    pub query: String,

    /// Number of repetitions to average over
    #[arg(short, long, default_value_t = 20)]
    pub iterations: u32,
}
