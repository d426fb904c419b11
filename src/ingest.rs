//! Document ingestion: turn raw text into postings and feed both indexes.
//!
//! Each normalized word becomes a single-document posting with count 1 which
//! is inserted into the AVL index and the hash index alike, so the two
//! structures always hold the same merged contents.

use std::fs;
use std::path::Path;

use crate::analysis::WordTokenizer;
use crate::error::Result;
use crate::index::{AvlIndex, HashIndex};
use crate::posting::Posting;

/// Statistics for one ingested document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Document name the postings were recorded under.
    pub document: String,
    /// Number of words fed to the indexes (after normalization).
    pub tokens: usize,
}

/// Feeds `(word, document)` pairs into both index structures.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    tokenizer: WordTokenizer,
}

impl Ingestor {
    /// Create a new ingestor.
    pub fn new() -> Self {
        Ingestor {
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Ingest raw text under a document name.
    pub fn ingest_text(
        &self,
        document: &str,
        text: &str,
        avl: &mut AvlIndex,
        hash: &mut HashIndex,
    ) -> IngestStats {
        let mut tokens = 0;
        for word in self.tokenizer.tokenize(text) {
            let posting = Posting::single(word, document, 1);
            avl.insert(posting.clone());
            hash.insert(posting);
            tokens += 1;
        }
        IngestStats {
            document: document.to_string(),
            tokens,
        }
    }

    /// Read a file and ingest its contents, using the path as the document
    /// name. An unreadable file is an error for the caller to report; the
    /// indexes simply receive no postings for it.
    pub fn ingest_file<P: AsRef<Path>>(
        &self,
        path: P,
        avl: &mut AvlIndex,
        hash: &mut HashIndex,
    ) -> Result<IngestStats> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(self.ingest_text(&path.display().to_string(), &text, avl, hash))
    }
}
