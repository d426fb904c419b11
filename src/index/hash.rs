//! Separate-chaining hash index with load-factor-triggered growth.
//!
//! Words are placed by a polynomial rolling hash; collisions go into the
//! bucket's chain. Inserting a posting for a word already present merges
//! document counts in place. When the load ratio exceeds 0.75 after an insert
//! the table doubles its capacity and reinserts every posting under the new
//! bucket count, so insertion stays O(1) amortized.

use crate::posting::Posting;

/// Default number of buckets for a new table.
pub const DEFAULT_CAPACITY: usize = 53;

/// Rehash once the element count exceeds this fraction of the capacity.
pub const MAX_LOAD_RATIO: f64 = 0.75;

/// Base of the polynomial rolling hash.
const HASH_BASE: u64 = 31;

/// Large prime modulus applied to the intermediate sum before the final
/// reduction mod capacity.
const HASH_MODULUS: u64 = 1_000_000_009;

/// A chained hash table keyed by word.
#[derive(Debug, Clone)]
pub struct HashIndex {
    buckets: Vec<Vec<Posting>>,
    len: usize,
}

impl HashIndex {
    /// Create a table with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with a given number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        HashIndex {
            buckets: vec![Vec::new(); capacity],
            len: 0,
        }
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Element count divided by capacity.
    pub fn load_ratio(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Insert a posting, merging document counts if the word already exists.
    pub fn insert(&mut self, posting: Posting) {
        let index = self.bucket_of(&posting.word);

        match self.buckets[index]
            .iter_mut()
            .find(|p| p.word == posting.word)
        {
            Some(existing) => existing.merge(&posting),
            None => {
                self.buckets[index].push(posting);
                self.len += 1;
            }
        }

        if self.load_ratio() > MAX_LOAD_RATIO {
            self.rehash();
        }
    }

    /// Look up a word, returning only the matching posting.
    ///
    /// Other postings sharing the bucket are never exposed, so colliding
    /// words cannot contribute counts to each other.
    pub fn find(&self, word: &str) -> Option<&Posting> {
        let index = self.bucket_of(word);
        self.buckets[index].iter().find(|p| p.word == word)
    }

    /// In-order-of-bucket iterator over all postings.
    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.buckets.iter().flatten()
    }

    /// Polynomial rolling hash reduced to a bucket index.
    ///
    /// `h = sum((byte - 'a' + 1) * 31^i) mod 1e9+9`, then mod capacity.
    /// Ingested words are lowercase alphabetic; wrapping arithmetic keeps the
    /// function total and deterministic for any other byte.
    fn bucket_of(&self, word: &str) -> usize {
        let mut hash: u64 = 0;
        let mut power: u64 = 1;
        for byte in word.bytes() {
            let value = u64::from(byte)
                .wrapping_sub(u64::from(b'a'))
                .wrapping_add(1)
                % HASH_MODULUS;
            hash = (hash + value * power) % HASH_MODULUS;
            power = (power * HASH_BASE) % HASH_MODULUS;
        }
        (hash % self.capacity() as u64) as usize
    }

    /// Double the capacity and reinsert every posting under the new bucket
    /// count. No entries are lost or duplicated.
    fn rehash(&mut self) {
        let new_capacity = self.capacity() * 2;
        let old_buckets = std::mem::replace(&mut self.buckets, vec![Vec::new(); new_capacity]);
        self.len = 0;

        for bucket in old_buckets {
            for posting in bucket {
                let index = self.bucket_of(&posting.word);
                self.buckets[index].push(posting);
                self.len += 1;
            }
        }
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}
