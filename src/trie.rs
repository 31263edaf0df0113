//! Provides a prefix tree backed set for storing keys composed of
//! sequences of atoms.
//!
//! Atoms must support the TrieAtom trait. The key type handed back by the
//! iterators must support the TrieKey trait, which is anything that can be
//! collected from atoms.
//!
//! The interface relies on iterators to add, remove and check for existence
//! of keys. The most common use is a set of strings, for which the
//! [`StringSet`] alias is provided, but any granularity of atom works:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!  - numbers
//!
//! Example 1
//! ```
//! use groundwork::trie::StringSet;
//!
//! let mut set = StringSet::new();
//! assert!(set.add("abcdef".chars()));
//! assert!(!set.add("abcdef".chars()));
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our set
//! assert!(set.contains("abcdef".chars()));
//! assert!(set.contains(['a', 'b', 'c', 'd', 'e', 'f']));
//! assert!(!set.contains("abc".chars()));
//! assert!(set.contains_prefix("abc".chars()));
//! assert!(set.remove("abcdef".chars()));
//! assert!(!set.contains("abcdef".chars()));
//! assert_eq!(set.len(), 0);
//! ```
//!
//! Example 2
//! ```
//! use groundwork::trie::PrefixSet;
//!
//! // Keys made of words, reassembled into a String when iterating
//! let mut set: PrefixSet<String, &str> = PrefixSet::new();
//! set.add("the quick brown fox".split_whitespace());
//! assert!(set.contains(["the", "quick", "brown", "fox"]));
//! assert_eq!(set.iter().collect::<Vec<String>>(), vec!["thequickbrownfox"]);
//! ```
//!
//! Removal only unmarks the node which terminates a key. The path leading to
//! it stays in the tree and is reused by any later key sharing it.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::iterator::{PrefixSetCursor, PrefixSetIter};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a PrefixSet must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Ord {}

/// Keys produced by iterating a PrefixSet must implement TrieKey.
pub trait TrieKey<A>: FromIterator<A> {}

impl<K, A> TrieKey<A> for K where K: FromIterator<A> {}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        bound(
            serialize = "A: Serialize",
            deserialize = "A: Deserialize<'de> + Ord"
        )
    )
)]
pub(crate) struct Node<A: Ord> {
    pub(crate) children: BTreeMap<A, Node<A>>,
    pub(crate) terminal: bool,
}

impl<A: Ord> Default for Node<A> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            terminal: false,
        }
    }
}

/// A set of keys, stored as a tree of atoms.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        bound(
            serialize = "A: Serialize",
            deserialize = "A: Deserialize<'de> + Ord"
        )
    )
)]
pub struct PrefixSet<K, A: Ord> {
    pub(crate) root: Node<A>,
    count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    _key: PhantomData<K>,
}

/// A set of Strings, stored one char per node.
pub type StringSet = PrefixSet<String, char>;

/// A set of keys which are plain vectors of atoms.
pub type VecSet<A> = PrefixSet<Vec<A>, A>;

impl<K, A: Ord> Default for PrefixSet<K, A> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            count: 0,
            _key: PhantomData,
        }
    }
}

impl<K: TrieKey<A>, A: TrieAtom> PrefixSet<K, A> {
    /// Create a new, empty PrefixSet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the set, releasing every node.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.count = 0;
    }

    /// Does the set contain the supplied key?
    pub fn contains<I: IntoIterator<Item = A>>(&self, key: I) -> bool {
        self.find_node(key).map_or(false, |n| n.terminal)
    }

    /// Is the supplied prefix a path in the tree?
    ///
    /// Paths left behind by removed keys still count.
    pub fn contains_prefix<I: IntoIterator<Item = A>>(&self, prefix: I) -> bool {
        self.find_node(prefix).is_some()
    }

    /// How many keys does the set contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Add the key to the set. Returns true if the key was not already
    /// present.
    pub fn add<I: IntoIterator<Item = A>>(&mut self, key: I) -> bool {
        let mut node = &mut self.root;
        for atom in key {
            node = node.children.entry(atom).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.count += 1;
        true
    }

    /// Remove the key from the set. Returns true if the key was present.
    ///
    /// Nodes on the path to the key are kept.
    pub fn remove<I: IntoIterator<Item = A>>(&mut self, key: I) -> bool {
        match self.find_node_mut(key) {
            Some(node) if node.terminal => {
                node.terminal = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Create an iterator over the set.
    ///
    /// Every key is collected when the iterator is created, so the order is
    /// fixed by the shape of the tree at that point. It is not sorted.
    pub fn iter(&self) -> PrefixSetIter<K, A> {
        PrefixSetIter::new(self.worklist())
    }

    /// Create a cursor over the set which can remove the keys it returns.
    pub fn cursor_mut(&mut self) -> PrefixSetCursor<'_, K, A> {
        let worklist = self.worklist();
        PrefixSetCursor::new(self, worklist)
    }

    fn find_node<I: IntoIterator<Item = A>>(&self, key: I) -> Option<&Node<A>> {
        let mut node = &self.root;
        for atom in key {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }

    fn find_node_mut<I: IntoIterator<Item = A>>(&mut self, key: I) -> Option<&mut Node<A>> {
        let mut node = &mut self.root;
        for atom in key {
            node = node.children.get_mut(&atom)?;
        }
        Some(node)
    }
}

impl<K: TrieKey<A>, A: TrieAtom, I: IntoIterator<Item = A>> FromIterator<I> for PrefixSet<K, A> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: TrieKey<A>, A: TrieAtom, I: IntoIterator<Item = A>> Extend<I> for PrefixSet<K, A> {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        for key in iter {
            self.add(key);
        }
    }
}
