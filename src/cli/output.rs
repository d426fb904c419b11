//! Output formatting for CLI commands.
//!
//! Every command builds a serializable report; human output prints the exact
//! line shapes the query and benchmark contracts define, JSON output prints
//! the report structure itself.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::query::{QueryOutcome, render_lines};

/// Diagnostics printed after ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessStats {
    pub unique_words: usize,
    pub load_ratio: f64,
}

impl PreprocessStats {
    /// The diagnostics line: unique word count and hash table load ratio.
    pub fn render(&self) -> String {
        format!(
            "After preprocessing, the unique word count is {}. Current load ratio is {:.2}.",
            self.unique_words, self.load_ratio
        )
    }
}

/// Result structure for the query command.
#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub stats: PreprocessStats,
    pub avl: Option<Vec<QueryOutcome>>,
    pub hash: Option<Vec<QueryOutcome>>,
}

/// One node of the AVL diagnostic dump.
#[derive(Debug, Serialize)]
pub struct DumpEntry {
    pub word: String,
    pub height: u32,
    pub balance_factor: i32,
    pub documents: Vec<(String, u64)>,
}

impl DumpEntry {
    pub fn render(&self) -> String {
        let documents: Vec<String> = self
            .documents
            .iter()
            .map(|(doc, count)| format!("{{{doc}, {count}}}"))
            .collect();
        format!(
            "Word: {} | Height: {} | Balance Factor: {} | Documents: {}",
            self.word,
            self.height,
            self.balance_factor,
            documents.join(" ")
        )
    }
}

/// Result structure for the stats command.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub stats: PreprocessStats,
    pub capacity: usize,
    pub avl_height: u32,
    pub dump: Option<Vec<DumpEntry>>,
}

/// Result structure for the bench command.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub stats: PreprocessStats,
    pub iterations: u32,
    pub avl_nanos: u128,
    pub hash_nanos: u128,
    pub speedup: f64,
}

impl BenchReport {
    /// The three benchmark lines.
    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Time (BST): {} nanoseconds", self.avl_nanos),
            format!("Time (HashTable): {} nanoseconds", self.hash_nanos),
            format!("Speed Up (HashTable over BST): {:.2}x", self.speedup),
        ]
    }
}

/// Print a query report in the requested format.
pub fn print_query_report(report: &QueryReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", report.stats.render());
            if let Some(outcomes) = &report.avl {
                for line in render_lines(outcomes) {
                    println!("{line}");
                }
            }
            if let Some(outcomes) = &report.hash {
                for line in render_lines(outcomes) {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Print a stats report in the requested format.
pub fn print_stats_report(report: &StatsReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", report.stats.render());
            println!("Hash table capacity: {}", report.capacity);
            println!("AVL tree height: {}", report.avl_height);
            if let Some(entries) = &report.dump {
                for entry in entries {
                    println!("{}", entry.render());
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Print a bench report in the requested format.
pub fn print_bench_report(report: &BenchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", report.stats.render());
            for line in report.render() {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
