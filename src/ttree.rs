//! Ternary search trie: `K` independent tries over non-empty strings,
//! each leaf counting insertions, used by the out-of-scope
//! stochastic-tree modeling pipeline to tally tree-shape strings.
//!
//! A classic ternary search tree: a node holds one character and
//! branches left/right by byte comparison, or descends `eq` into the
//! next character for strings sharing this prefix. Iteration is left,
//! then `eq` (extending the string one byte), then right -- including
//! that a node with a nonzero count is treated as a leaf and its `eq`
//! subtree (a longer string sharing this node's prefix) is not walked;
//! no corpus string here is a strict prefix of another, so this is
//! never exercised by these tests.
//! The reconstructed string is a growable `alloc::string::String`
//! instead of the source's fixed 1024-byte stack buffer, so iteration
//! is not bounded by an arbitrary maximum depth.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// Failure modes for [`TernaryTrie`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtreeError {
    /// `k` was outside `[0, K)`.
    InvalidSet { k: usize, k_size: usize },
    /// The string argument to `insert` was empty.
    EmptyString,
}

struct Node {
    c: u8,
    count: i64,
    left: Option<Box<Node>>,
    eq: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(c: u8) -> Self {
        Node {
            c,
            count: 0,
            left: None,
            eq: None,
            right: None,
        }
    }

    fn insert(node: &mut Option<Box<Node>>, bytes: &[u8], increment: i64) {
        let n = node.get_or_insert_with(|| Box::new(Node::new(bytes[0])));
        if bytes[0] < n.c {
            Node::insert(&mut n.left, bytes, increment);
        } else if bytes[0] > n.c {
            Node::insert(&mut n.right, bytes, increment);
        } else if bytes.len() == 1 {
            n.count += increment;
        } else {
            Node::insert(&mut n.eq, &bytes[1..], increment);
        }
    }

    fn get(node: &Option<Box<Node>>, bytes: &[u8]) -> Option<i64> {
        let n = node.as_ref()?;
        if bytes[0] < n.c {
            Node::get(&n.left, bytes)
        } else if bytes[0] > n.c {
            Node::get(&n.right, bytes)
        } else if bytes.len() == 1 {
            Some(n.count)
        } else {
            Node::get(&n.eq, &bytes[1..])
        }
    }

    fn iterate(node: &Option<Box<Node>>, buf: &mut String, out: &mut Vec<(String, i64)>) {
        let Some(n) = node.as_ref() else {
            return;
        };
        if n.count == 0 {
            Node::iterate(&n.left, buf, out);
            buf.push(n.c as char);
            Node::iterate(&n.eq, buf, out);
            buf.pop();
            Node::iterate(&n.right, buf, out);
        } else {
            buf.push(n.c as char);
            out.push((buf.clone(), n.count));
            buf.pop();
        }
    }
}

/// `K` independent ternary search trees over byte strings.
pub struct TernaryTrie {
    roots: Vec<Option<Box<Node>>>,
}

impl TernaryTrie {
    /// Creates `k_size` independent empty tries.
    pub fn new(k_size: usize) -> Self {
        let mut roots = Vec::with_capacity(k_size);
        for _ in 0..k_size {
            roots.push(None);
        }
        TernaryTrie { roots }
    }

    fn check(&self, k: usize) -> Result<(), TtreeError> {
        if k >= self.roots.len() {
            #[cfg(feature = "verbose-logging")]
            log::error!("ttree: k out of range {k}");
            return Err(TtreeError::InvalidSet {
                k,
                k_size: self.roots.len(),
            });
        }
        Ok(())
    }

    /// Inserts `s` into trie `k`, adding `increment` to its terminal
    /// node's count. Fails on an out-of-range `k` or an empty string.
    pub fn insert(&mut self, k: usize, s: &str, increment: i64) -> Result<(), TtreeError> {
        self.check(k)?;
        if s.is_empty() {
            #[cfg(feature = "verbose-logging")]
            log::error!("ttree: invalid string");
            return Err(TtreeError::EmptyString);
        }
        Node::insert(&mut self.roots[k], s.as_bytes(), increment);
        Ok(())
    }

    /// Exact-match lookup: `Ok(Some(count))` if `s` was ever inserted,
    /// `Ok(None)` otherwise.
    pub fn get(&self, k: usize, s: &str) -> Result<Option<i64>, TtreeError> {
        self.check(k)?;
        if s.is_empty() {
            return Err(TtreeError::EmptyString);
        }
        Ok(Node::get(&self.roots[k], s.as_bytes()).filter(|&c| c != 0))
    }

    /// In-order traversal (left, eq, right) of every string with a
    /// nonzero count in trie `k`.
    pub fn iterate(&self, k: usize) -> Result<Vec<(String, i64)>, TtreeError> {
        self.check(k)?;
        let mut buf = String::new();
        let mut out = Vec::new();
        Node::iterate(&self.roots[k], &mut buf, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterate_matches_reference_scenario() {
        // Deeply right-nested prefix-tree scenario.
        let mut t = TernaryTrie::new(4);
        t.insert(3, "(.(..(....).).)", 1).unwrap();
        t.insert(3, "((....).(....))", 2).unwrap();
        t.insert(3, "(..(..(....).))", 3).unwrap();

        let entries = t.iterate(3).unwrap();
        assert_eq!(entries.len(), 3);
        let total: i64 = entries.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 6);

        let mut seen: Vec<&str> = entries.iter().map(|(s, _)| s.as_str()).collect();
        seen.sort_unstable();
        let mut expected = ["(.(..(....).).)", "((....).(....))", "(..(..(....).))"];
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[test]
    fn get_finds_inserted_strings_and_misses_others() {
        let mut t = TernaryTrie::new(1);
        t.insert(0, "abc", 5).unwrap();
        assert_eq!(t.get(0, "abc"), Ok(Some(5)));
        assert_eq!(t.get(0, "abd"), Ok(None));
        assert_eq!(t.get(0, "ab"), Ok(None));
    }

    #[test]
    fn repeated_insert_accumulates_count() {
        let mut t = TernaryTrie::new(1);
        t.insert(0, "x", 1).unwrap();
        t.insert(0, "x", 2).unwrap();
        assert_eq!(t.get(0, "x"), Ok(Some(3)));
    }

    #[test]
    fn rejects_empty_string_and_bad_k() {
        let mut t = TernaryTrie::new(1);
        assert_eq!(t.insert(0, "", 1), Err(TtreeError::EmptyString));
        assert_eq!(
            t.insert(9, "x", 1),
            Err(TtreeError::InvalidSet { k: 9, k_size: 1 })
        );
    }
}
