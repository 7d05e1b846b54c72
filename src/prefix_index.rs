use crate::error::Error;
use crate::letter::{translate_word, Letter};
use crate::utilities::{ALPHABET_LENGTH, MIN_WORD_LENGTH};
use std::collections::HashSet;
use std::num::NonZeroU32;

/// handle to a node of a [`PrefixIndex`]. only meaningful for the index that produced it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NodeId(u32);

/// the root sits at slot 0 and is never anybody's child, so child slots can use a
/// niche-optimised `NonZeroU32` and stay four bytes wide.
#[derive(Clone, Default)]
struct Node {
    children: [Option<NonZeroU32>; ALPHABET_LENGTH],
    terminal: bool,
}

/// node ids are u32, so this is the most nodes an index can hold
const MAX_NODES: usize = u32::MAX as usize;

/// a 26-way trie over upper case english words, stored as an arena of nodes
/// with dense child arrays for O(1) descent per letter.
#[derive(Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    word_count: usize,
    node_limit: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// an index with only a root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
            node_limit: MAX_NODES,
        }
    }

    #[cfg(test)]
    fn with_node_limit(node_limit: usize) -> Self {
        Self {
            node_limit,
            ..Self::new()
        }
    }

    /// build an index from a word list, failing on the first malformed word
    pub fn from_words<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref())?;
        }
        Ok(index)
    }

    /// store a word. inserting a word twice is a no-op.
    // the whole word is translated before any node is created, so a malformed
    // word never leaves a dangling path behind.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        let letters = translate_word(word)?;
        self.insert_letters(&letters)
    }

    fn insert_letters(&mut self, letters: &[Letter]) -> Result<(), Error> {
        // count the nodes the word still needs before creating any, so a rejected
        // word never leaves a partial path behind
        let mut shared = 0;
        let mut cursor = self.root();
        while let Some(next) = letters.get(shared).and_then(|l| self.child(cursor, *l)) {
            cursor = next;
            shared += 1;
        }
        if self.nodes.len() + (letters.len() - shared) > self.node_limit {
            return Err(Error::DictionaryFull {
                limit: self.node_limit,
            });
        }

        let mut node = 0usize;
        for letter in letters {
            let slot = usize::from(*letter);
            node = match self.nodes[node].children[slot] {
                Some(child) => child.get() as usize,
                None => {
                    let child = self.push_node()?;
                    self.nodes[node].children[slot] = Some(child);
                    child.get() as usize
                }
            };
        }

        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.word_count += 1;
        }
        Ok(())
    }

    fn push_node(&mut self) -> Result<NonZeroU32, Error> {
        let id = u32::try_from(self.nodes.len())
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(Error::DictionaryFull {
                limit: self.node_limit,
            })?;
        self.nodes.push(Node::default());
        Ok(id)
    }

    /// true iff some stored word equals or extends `prefix`. the empty prefix always holds.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// true iff `s` itself was stored
    pub fn is_word(&self, s: &str) -> bool {
        self.find(s).is_some_and(|node| self.is_terminal(node))
    }

    /// the exact-match query of a word game: `{pattern}` when `pattern` is a stored word
    /// at least three letters long, nothing otherwise.
    pub fn exact_matches_of_length_at_least_3(&self, pattern: &str) -> HashSet<String> {
        let mut matches = HashSet::new();
        if pattern.len() >= MIN_WORD_LENGTH && self.is_word(pattern) {
            matches.insert(pattern.to_owned());
        }
        matches
    }

    /// number of distinct stored words
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// step from `node` along a single letter
    #[inline(always)]
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node.0 as usize].children[usize::from(letter)].map(|child| NodeId(child.get()))
    }

    /// step from `node` along every letter in turn
    #[inline(always)]
    pub fn descend(&self, node: NodeId, letters: &[Letter]) -> Option<NodeId> {
        letters
            .iter()
            .try_fold(node, |cur, letter| self.child(cur, *letter))
    }

    #[inline(always)]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// walk the trie along a string. anything outside A-Z has no node.
    fn find(&self, s: &str) -> Option<NodeId> {
        s.chars().try_fold(self.root(), |cur, c| {
            let letter = Letter::try_from(c).ok()?;
            self.child(cur, letter)
        })
    }
}
