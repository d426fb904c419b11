//! # Verba
//!
//! An in-memory inverted index over small sets of text documents, built twice
//! from the same input: once as a height-balanced AVL tree and once as a
//! separate-chaining hash table with dynamic growth. Multi-word frequency
//! queries ("how many times does word W appear, and in which documents?") run
//! against either structure so their latency can be compared.
//!
//! ## Components
//!
//! - [`posting`] — the word-to-document-counts record stored by both indexes
//! - [`index`] — the AVL tree and the chained hash table
//! - [`analysis`] — word normalization shared by ingest and query
//! - [`ingest`] — feeds `(word, document)` pairs into both indexes
//! - [`query`] — per-word lookups and exact-format result rendering
//! - [`cli`] — command line interface including the timing harness

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod ingest;
pub mod posting;
pub mod query;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
