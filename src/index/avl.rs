//! AVL-tree-backed word index.
//!
//! Ordered index keyed by word, one node per distinct word. Inserting a posting
//! for a word already present merges document counts instead of adding a node,
//! so rebalancing only happens on structural changes. Lookups are an iterative
//! descent; in-order traversal yields postings in ascending word order.
//!
//! Every node owns its children exclusively; the tree owns the root. After any
//! insert or delete completes, each node's balance factor (left height minus
//! right height) is in `{-1, 0, 1}`.

use std::cmp::Ordering;

use crate::posting::Posting;

/// A single tree node holding one word's posting.
#[derive(Debug, Clone)]
struct AvlNode {
    posting: Posting,
    height: u32,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
}

impl AvlNode {
    fn leaf(posting: Posting) -> Self {
        AvlNode {
            posting,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

fn height(node: &Option<Box<AvlNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// One entry of the diagnostic in-order traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct AvlEntry<'a> {
    /// The posting stored at this node.
    pub posting: &'a Posting,
    /// Height of the node (leaf = 1).
    pub height: u32,
    /// Left subtree height minus right subtree height.
    pub balance_factor: i32,
}

/// An ordered word index backed by an AVL tree.
#[derive(Debug, Clone, Default)]
pub struct AvlIndex {
    root: Option<Box<AvlNode>>,
    len: usize,
}

impl AvlIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        AvlIndex { root: None, len: 0 }
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 when empty).
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Insert a posting, merging document counts if the word already exists.
    pub fn insert(&mut self, posting: Posting) {
        let word = posting.word.clone();
        let mut added = false;
        self.root = Some(Self::insert_node(self.root.take(), &word, posting, &mut added));
        if added {
            self.len += 1;
        }
    }

    /// Look up a word. Absence is a normal outcome, not an error.
    pub fn search(&self, word: &str) -> Option<&Posting> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match word.cmp(&node.posting.word) {
                Ordering::Equal => return Some(&node.posting),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Remove a word. Returns true if it was present.
    pub fn delete(&mut self, word: &str) -> bool {
        let mut removed = false;
        self.root = Self::delete_node(self.root.take(), word, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// In-order iterator over postings, ascending by word.
    ///
    /// The iterator is lazy and restartable; calling `iter` again starts a
    /// fresh traversal.
    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        NodeIter::new(self.root.as_deref()).map(|node| &node.posting)
    }

    /// Diagnostic in-order traversal including per-node height and balance
    /// factor.
    pub fn entries(&self) -> impl Iterator<Item = AvlEntry<'_>> {
        NodeIter::new(self.root.as_deref()).map(|node| AvlEntry {
            posting: &node.posting,
            height: node.height,
            balance_factor: node.balance_factor(),
        })
    }

    fn insert_node(
        node: Option<Box<AvlNode>>,
        word: &str,
        posting: Posting,
        added: &mut bool,
    ) -> Box<AvlNode> {
        let mut node = match node {
            None => {
                *added = true;
                return Box::new(AvlNode::leaf(posting));
            }
            Some(node) => node,
        };

        match word.cmp(&node.posting.word) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), word, posting, added));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), word, posting, added));
            }
            Ordering::Equal => {
                // Merge into the existing node; no structural change, so the
                // ancestors need no height update or rebalancing.
                node.posting.merge(&posting);
                return node;
            }
        }

        node.update_height();

        // The four rebalancing cases, distinguished by where the inserted
        // word went relative to the heavy child.
        let balance = node.balance_factor();
        if balance > 1 {
            let straight = {
                let left = node
                    .left
                    .as_ref()
                    .expect("left child exists when left-heavy");
                word < left.posting.word.as_str()
            };
            if !straight {
                // Left-Right: rotate the left child left first.
                let left = node.left.take().expect("left child exists when left-heavy");
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }
        if balance < -1 {
            let straight = {
                let right = node
                    .right
                    .as_ref()
                    .expect("right child exists when right-heavy");
                word > right.posting.word.as_str()
            };
            if !straight {
                // Right-Left: rotate the right child right first.
                let right = node
                    .right
                    .take()
                    .expect("right child exists when right-heavy");
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    fn delete_node(
        node: Option<Box<AvlNode>>,
        word: &str,
        removed: &mut bool,
    ) -> Option<Box<AvlNode>> {
        let mut node = node?;

        match word.cmp(&node.posting.word) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), word, removed);
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), word, removed);
            }
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    // A single child is spliced into the removed node's place.
                    (Some(child), None) | (None, Some(child)) => return Some(child),
                    (Some(left), Some(right)) => {
                        node.left = Some(left);
                        node.right = Some(right);
                        // Replace with the in-order predecessor if the left
                        // subtree is taller, else the successor, then delete
                        // that node from its original position.
                        if height(&node.left) > height(&node.right) {
                            let replacement = Self::rightmost(
                                node.left.as_deref().expect("left subtree present"),
                            )
                            .posting
                            .clone();
                            node.left =
                                Self::delete_node(node.left.take(), &replacement.word, removed);
                            node.posting = replacement;
                        } else {
                            let replacement = Self::leftmost(
                                node.right.as_deref().expect("right subtree present"),
                            )
                            .posting
                            .clone();
                            node.right =
                                Self::delete_node(node.right.take(), &replacement.word, removed);
                            node.posting = replacement;
                        }
                    }
                }
            }
        }

        node.update_height();
        Some(Self::rebalance_after_delete(node))
    }

    /// Rebalancing after delete selects the rotation by the heavy child's
    /// balance factor, since the deleted word tells us nothing about shape.
    fn rebalance_after_delete(mut node: Box<AvlNode>) -> Box<AvlNode> {
        let balance = node.balance_factor();
        if balance > 1 {
            let left_balance = node
                .left
                .as_ref()
                .expect("left child exists when left-heavy")
                .balance_factor();
            if left_balance < 0 {
                let left = node.left.take().expect("left child exists when left-heavy");
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }
        if balance < -1 {
            let right_balance = node
                .right
                .as_ref()
                .expect("right child exists when right-heavy")
                .balance_factor();
            if right_balance > 0 {
                let right = node
                    .right
                    .take()
                    .expect("right child exists when right-heavy");
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }
        node
    }

    /// Right rotation: the left child becomes the subtree root.
    fn rotate_right(mut node: Box<AvlNode>) -> Box<AvlNode> {
        let mut pivot = node
            .left
            .take()
            .expect("left child exists during right rotation");
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }

    /// Left rotation: the right child becomes the subtree root.
    fn rotate_left(mut node: Box<AvlNode>) -> Box<AvlNode> {
        let mut pivot = node
            .right
            .take()
            .expect("right child exists during left rotation");
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }

    fn rightmost(mut node: &AvlNode) -> &AvlNode {
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    fn leftmost(mut node: &AvlNode) -> &AvlNode {
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }
}

/// In-order traversal over nodes using an explicit stack.
struct NodeIter<'a> {
    stack: Vec<&'a AvlNode>,
}

impl<'a> NodeIter<'a> {
    fn new(root: Option<&'a AvlNode>) -> Self {
        let mut iter = NodeIter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a AvlNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a AvlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_word(index: &mut AvlIndex, word: &str) {
        index.insert(Posting::single(word, "doc", 1));
    }

    /// Recursively verify the AVL invariants: correct stored heights and
    /// balance factors in {-1, 0, 1} at every node.
    fn assert_balanced(node: &Option<Box<AvlNode>>) -> u32 {
        match node {
            None => 0,
            Some(n) => {
                let left = assert_balanced(&n.left);
                let right = assert_balanced(&n.right);
                assert_eq!(n.height, 1 + left.max(right), "stale height at {}", n.posting.word);
                let balance = left as i32 - right as i32;
                assert!(
                    (-1..=1).contains(&balance),
                    "balance factor {} at {}",
                    balance,
                    n.posting.word
                );
                n.height
            }
        }
    }

    fn words_in_order(index: &AvlIndex) -> Vec<String> {
        index.iter().map(|p| p.word.clone()).collect()
    }

    #[test]
    fn test_insert_and_search() {
        let mut index = AvlIndex::new();
        index.insert(Posting::single("cat", "doc1", 1));
        index.insert(Posting::single("dog", "doc1", 2));

        assert_eq!(index.len(), 2);
        assert_eq!(index.search("cat").unwrap().count_for("doc1"), Some(1));
        assert_eq!(index.search("dog").unwrap().count_for("doc1"), Some(2));
        assert!(index.search("bird").is_none());
    }

    #[test]
    fn test_insert_merges_same_word() {
        let mut index = AvlIndex::new();
        index.insert(Posting::single("cat", "doc1", 1));
        index.insert(Posting::single("cat", "doc1", 1));
        index.insert(Posting::single("cat", "doc2", 1));

        assert_eq!(index.len(), 1);
        let posting = index.search("cat").unwrap();
        assert_eq!(posting.count_for("doc1"), Some(2));
        assert_eq!(posting.count_for("doc2"), Some(1));
    }

    #[test]
    fn test_ascending_insert_stays_balanced() {
        let mut index = AvlIndex::new();
        for word in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            insert_word(&mut index, word);
            assert_balanced(&index.root);
        }
        assert_eq!(index.len(), 8);
        // A degenerate BST would have height 8.
        assert!(index.height() <= 4);
    }

    #[test]
    fn test_rotation_cases() {
        // LL: descending inserts.
        let mut index = AvlIndex::new();
        for word in ["c", "b", "a"] {
            insert_word(&mut index, word);
        }
        assert_balanced(&index.root);
        assert_eq!(words_in_order(&index), ["a", "b", "c"]);

        // RR: ascending inserts.
        let mut index = AvlIndex::new();
        for word in ["a", "b", "c"] {
            insert_word(&mut index, word);
        }
        assert_balanced(&index.root);
        assert_eq!(words_in_order(&index), ["a", "b", "c"]);

        // LR: left then zig-zag.
        let mut index = AvlIndex::new();
        for word in ["c", "a", "b"] {
            insert_word(&mut index, word);
        }
        assert_balanced(&index.root);
        assert_eq!(words_in_order(&index), ["a", "b", "c"]);

        // RL: right then zig-zag.
        let mut index = AvlIndex::new();
        for word in ["a", "c", "b"] {
            insert_word(&mut index, word);
        }
        assert_balanced(&index.root);
        assert_eq!(words_in_order(&index), ["a", "b", "c"]);
    }

    #[test]
    fn test_in_order_traversal_sorted() {
        let mut index = AvlIndex::new();
        for word in ["m", "c", "f", "a", "z", "b"] {
            insert_word(&mut index, word);
        }

        let words = words_in_order(&index);
        assert_eq!(words, ["a", "b", "c", "f", "m", "z"]);

        // Restartable: a second traversal yields the same sequence.
        assert_eq!(words_in_order(&index), words);
    }

    #[test]
    fn test_height_bound_for_six_words() {
        let mut index = AvlIndex::new();
        for word in ["m", "c", "f", "a", "z", "b"] {
            insert_word(&mut index, word);
        }
        assert_balanced(&index.root);
        // ceil(1.44 * log2(6 + 2)) = 5; six balanced nodes actually fit in 3.
        assert!(index.height() <= 5);
    }

    #[test]
    fn test_delete_leaf() {
        let mut index = AvlIndex::new();
        for word in ["b", "a", "c"] {
            insert_word(&mut index, word);
        }

        assert!(index.delete("a"));
        assert_eq!(index.len(), 2);
        assert!(index.search("a").is_none());
        assert_balanced(&index.root);
    }

    #[test]
    fn test_delete_single_child_node() {
        // "b" has only the left child "a".
        let mut index = AvlIndex::new();
        for word in ["c", "b", "e", "a"] {
            insert_word(&mut index, word);
        }

        assert!(index.delete("b"));
        assert_eq!(index.len(), 3);
        assert!(index.search("b").is_none());
        assert_eq!(index.search("a").unwrap().word, "a");
        assert_eq!(words_in_order(&index), ["a", "c", "e"]);
        assert_balanced(&index.root);
    }

    #[test]
    fn test_delete_two_children_node() {
        let mut index = AvlIndex::new();
        for word in ["m", "c", "t", "a", "f", "p", "z"] {
            insert_word(&mut index, word);
        }

        assert!(index.delete("m"));
        assert_eq!(index.len(), 6);
        assert!(index.search("m").is_none());
        assert_eq!(words_in_order(&index), ["a", "c", "f", "p", "t", "z"]);
        assert_balanced(&index.root);
    }

    #[test]
    fn test_delete_rebalances() {
        // Removing from the shallow side forces a rotation.
        let mut index = AvlIndex::new();
        for word in ["d", "b", "f", "a", "c", "e", "g", "h"] {
            insert_word(&mut index, word);
        }

        for word in ["a", "c", "b"] {
            assert!(index.delete(word));
            assert_balanced(&index.root);
        }
        assert_eq!(words_in_order(&index), ["d", "e", "f", "g", "h"]);
    }

    #[test]
    fn test_delete_absent_word_is_noop() {
        let mut index = AvlIndex::new();
        insert_word(&mut index, "cat");

        assert!(!index.delete("dog"));
        assert_eq!(index.len(), 1);
        assert!(index.search("cat").is_some());
    }

    #[test]
    fn test_delete_until_empty() {
        let mut index = AvlIndex::new();
        let words = ["m", "c", "f", "a", "z", "b"];
        for word in words {
            insert_word(&mut index, word);
        }

        for word in words {
            assert!(index.delete(word));
            assert_balanced(&index.root);
        }
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
    }

    #[test]
    fn test_permutation_independence() {
        let orders = [
            ["cat", "dog", "ant", "bee", "fox"],
            ["fox", "bee", "ant", "dog", "cat"],
            ["ant", "fox", "cat", "bee", "dog"],
        ];

        let mut results = Vec::new();
        for order in orders {
            let mut index = AvlIndex::new();
            for (i, word) in order.iter().enumerate() {
                index.insert(Posting::single(*word, format!("doc{}", i % 2), 1));
                index.insert(Posting::single(*word, "doc0", 1));
            }
            let contents: Vec<Posting> = index.iter().cloned().collect();
            results.push(
                contents
                    .iter()
                    .map(|p| (p.word.clone(), p.total_count()))
                    .collect::<Vec<_>>(),
            );
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[test]
    fn test_entries_diagnostics() {
        let mut index = AvlIndex::new();
        for word in ["b", "a", "c"] {
            insert_word(&mut index, word);
        }

        let entries: Vec<_> = index.entries().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].posting.word, "b");
        assert_eq!(entries[1].height, 2);
        assert_eq!(entries[1].balance_factor, 0);
        assert_eq!(entries[0].height, 1);
    }
}
