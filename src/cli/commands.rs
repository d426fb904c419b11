//! Command implementations for the Verba CLI.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::{AvlIndex, HashIndex};
use crate::ingest::Ingestor;
use crate::query::QueryEvaluator;

/// Execute a CLI command.
pub fn execute_command(args: VerbaArgs) -> Result<()> {
    match &args.command {
        Command::Query(query_args) => run_query(query_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Bench(bench_args) => run_bench(bench_args.clone(), &args),
    }
}

/// Ingest every input file into a fresh pair of indexes.
///
/// An unreadable file is reported on stderr and skipped; the indexes simply
/// receive no postings for it.
fn build_indexes(files: &[PathBuf]) -> (AvlIndex, HashIndex) {
    let ingestor = Ingestor::new();
    let mut avl = AvlIndex::new();
    let mut hash = HashIndex::new();

    for file in files {
        if let Err(e) = ingestor.ingest_file(file, &mut avl, &mut hash) {
            eprintln!("Warning: skipping {}: {e}", file.display());
        }
    }

    (avl, hash)
}

fn preprocess_stats(hash: &HashIndex) -> PreprocessStats {
    PreprocessStats {
        unique_words: hash.len(),
        load_ratio: hash.load_ratio(),
    }
}

/// Index the input files and evaluate the query against the chosen structure.
fn run_query(args: QueryArgs, cli_args: &VerbaArgs) -> Result<()> {
    let (avl, hash) = build_indexes(&args.files);
    let evaluator = QueryEvaluator::new();

    let report = QueryReport {
        stats: preprocess_stats(&hash),
        avl: matches!(args.index, IndexChoice::Avl | IndexChoice::Both)
            .then(|| evaluator.evaluate_avl(&avl, &args.query)),
        hash: matches!(args.index, IndexChoice::Hash | IndexChoice::Both)
            .then(|| evaluator.evaluate_hash(&hash, &args.query)),
    };

    print_query_report(&report, cli_args.output_format)
}

/// Show index statistics, optionally with the in-order AVL dump.
fn show_stats(args: StatsArgs, cli_args: &VerbaArgs) -> Result<()> {
    let (avl, hash) = build_indexes(&args.files);

    let dump = args.dump.then(|| {
        avl.entries()
            .map(|entry| DumpEntry {
                word: entry.posting.word.clone(),
                height: entry.height,
                balance_factor: entry.balance_factor,
                documents: entry
                    .posting
                    .documents
                    .iter()
                    .map(|d| (d.document.clone(), d.count))
                    .collect(),
            })
            .collect()
    });

    let report = StatsReport {
        stats: preprocess_stats(&hash),
        capacity: hash.capacity(),
        avl_height: avl.height(),
        dump,
    };

    print_stats_report(&report, cli_args.output_format)
}

/// Time the query against both structures, averaged over N repetitions.
fn run_bench(args: BenchArgs, cli_args: &VerbaArgs) -> Result<()> {
    let (avl, hash) = build_indexes(&args.files);
    let evaluator = QueryEvaluator::new();
    let iterations = args.iterations.max(1);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(evaluator.evaluate_avl(&avl, &args.query));
    }
    let avl_nanos = start.elapsed().as_nanos() / u128::from(iterations);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(evaluator.evaluate_hash(&hash, &args.query));
    }
    let hash_nanos = start.elapsed().as_nanos() / u128::from(iterations);

    let report = BenchReport {
        stats: preprocess_stats(&hash),
        iterations,
        avl_nanos,
        hash_nanos,
        speedup: avl_nanos as f64 / hash_nanos.max(1) as f64,
    };

    print_bench_report(&report, cli_args.output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_build_indexes_from_files() {
        let doc1 = write_temp("the cat sat");
        let doc2 = write_temp("the dog ran");

        let (avl, hash) = build_indexes(&[doc1.path().into(), doc2.path().into()]);

        assert_eq!(avl.len(), 5);
        assert_eq!(hash.len(), 5);
        assert_eq!(avl.search("the").unwrap().documents.len(), 2);
    }

    #[test]
    fn test_build_indexes_skips_unreadable_file() {
        let doc = write_temp("cat");
        let missing = PathBuf::from("/no/such/file.txt");

        let (avl, hash) = build_indexes(&[missing, doc.path().into()]);

        // The readable file still gets indexed.
        assert_eq!(avl.len(), 1);
        assert_eq!(hash.len(), 1);
    }

    #[test]
    fn test_preprocess_stats() {
        let doc = write_temp("a b c d");
        let (_, hash) = build_indexes(&[doc.path().into()]);

        let stats = preprocess_stats(&hash);
        assert_eq!(stats.unique_words, 4);
        assert!((stats.load_ratio - 4.0 / 53.0).abs() < 1e-9);
    }
}
