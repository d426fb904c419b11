//! Posting records mapping a word to its per-document occurrence counts.
//!
//! A [`Posting`] is the unit stored by both index structures. Postings for the
//! same word are merged rather than duplicated: counts for a document already
//! present are summed, new documents are appended.

use serde::Serialize;

/// How many times a word occurred in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCount {
    /// Name of the document (the file path for file-based ingestion).
    pub document: String,
    /// Total occurrences of the word seen so far in this document.
    pub count: u64,
}

impl DocumentCount {
    /// Create a new document count.
    pub fn new<S: Into<String>>(document: S, count: u64) -> Self {
        DocumentCount {
            document: document.into(),
            count,
        }
    }
}

/// One word and the documents it appears in.
///
/// Invariant: document names within `documents` are unique; insertion order of
/// first appearance is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    /// The indexed word (already case-normalized by the analysis layer).
    pub word: String,
    /// Per-document occurrence counts.
    pub documents: Vec<DocumentCount>,
}

impl Posting {
    /// Create a posting with no document counts yet.
    pub fn new<S: Into<String>>(word: S) -> Self {
        Posting {
            word: word.into(),
            documents: Vec::new(),
        }
    }

    /// Create a posting recording `count` occurrences in a single document.
    pub fn single<W, D>(word: W, document: D, count: u64) -> Self
    where
        W: Into<String>,
        D: Into<String>,
    {
        let mut posting = Posting::new(word);
        posting.add_document(document, count);
        posting
    }

    /// Add `count` occurrences in `document`, summing with an existing entry
    /// for the same document name or appending a new one.
    pub fn add_document<D: Into<String>>(&mut self, document: D, count: u64) {
        let document = document.into();
        match self.documents.iter_mut().find(|d| d.document == document) {
            Some(existing) => existing.count += count,
            None => self.documents.push(DocumentCount::new(document, count)),
        }
    }

    /// Merge another posting for the same word into this one.
    ///
    /// Every incoming document count is added via [`Posting::add_document`],
    /// so the uniqueness invariant holds afterwards.
    pub fn merge(&mut self, other: &Posting) {
        debug_assert_eq!(self.word, other.word);
        for doc in &other.documents {
            self.add_document(doc.document.clone(), doc.count);
        }
    }

    /// Total occurrences of the word across all documents.
    pub fn total_count(&self) -> u64 {
        self.documents.iter().map(|d| d.count).sum()
    }

    /// Look up the count for one document, if present.
    pub fn count_for(&self, document: &str) -> Option<u64> {
        self.documents
            .iter()
            .find(|d| d.document == document)
            .map(|d| d.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_document_appends_new() {
        let mut posting = Posting::new("cat");
        posting.add_document("doc1", 1);
        posting.add_document("doc2", 3);

        assert_eq!(posting.documents.len(), 2);
        assert_eq!(posting.count_for("doc1"), Some(1));
        assert_eq!(posting.count_for("doc2"), Some(3));
    }

    #[test]
    fn test_add_document_sums_existing() {
        let mut posting = Posting::new("cat");
        posting.add_document("doc1", 2);
        posting.add_document("doc1", 5);

        assert_eq!(posting.documents.len(), 1);
        assert_eq!(posting.count_for("doc1"), Some(7));
    }

    #[test]
    fn test_merge() {
        let mut left = Posting::single("dog", "a.txt", 2);
        left.add_document("b.txt", 1);

        let mut right = Posting::single("dog", "b.txt", 4);
        right.add_document("c.txt", 1);

        left.merge(&right);

        assert_eq!(left.documents.len(), 3);
        assert_eq!(left.count_for("a.txt"), Some(2));
        assert_eq!(left.count_for("b.txt"), Some(5));
        assert_eq!(left.count_for("c.txt"), Some(1));
        assert_eq!(left.total_count(), 8);
    }

    #[test]
    fn test_count_for_absent_document() {
        let posting = Posting::single("cat", "doc1", 1);
        assert_eq!(posting.count_for("doc2"), None);
    }
}
