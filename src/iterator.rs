//! Provides PrefixSet iterators.
//!
//! Both iterators walk the whole tree when they are created and keep every
//! key on a LIFO worklist. Keys come back in reverse pre-order of the tree
//! (children visited in ascending atom order), which is stable for a given
//! tree shape but not sorted.
//!
//! ```
//! use groundwork::trie::StringSet;
//!
//! let mut set = StringSet::new();
//! for word in ["ab", "a", "b"] {
//!     set.add(word.chars());
//! }
//! let mut cursor = set.cursor_mut();
//! while let Some(word) = cursor.next() {
//!     if word.starts_with('a') {
//!         cursor.remove().expect("after next()");
//!     }
//! }
//! assert_eq!(set.iter().collect::<Vec<String>>(), vec!["b"]);
//! ```
use std::marker::PhantomData;

use crate::error::SetError;
use crate::trie::{Node, PrefixSet, TrieAtom, TrieKey};

/// Iterator over a snapshot of a PrefixSet.
#[derive(Clone, Debug)]
pub struct PrefixSetIter<K, A> {
    worklist: Vec<Vec<A>>,
    _key: PhantomData<K>,
}

impl<K: TrieKey<A>, A: TrieAtom> PrefixSetIter<K, A> {
    pub(crate) fn new(worklist: Vec<Vec<A>>) -> Self {
        Self {
            worklist,
            _key: PhantomData,
        }
    }
}

impl<K: TrieKey<A>, A: TrieAtom> Iterator for PrefixSetIter<K, A> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.worklist.pop().map(|atoms| atoms.into_iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.worklist.len(), Some(self.worklist.len()))
    }
}

impl<K: TrieKey<A>, A: TrieAtom> ExactSizeIterator for PrefixSetIter<K, A> {}

impl<K: TrieKey<A>, A: TrieAtom> IntoIterator for &PrefixSet<K, A> {
    type Item = K;
    type IntoIter = PrefixSetIter<K, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: TrieKey<A>, A: TrieAtom> IntoIterator for PrefixSet<K, A> {
    type Item = K;
    type IntoIter = PrefixSetIter<K, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a PrefixSet which may remove the key it last returned.
#[derive(Debug)]
pub struct PrefixSetCursor<'a, K, A: Ord> {
    set: &'a mut PrefixSet<K, A>,
    worklist: Vec<Vec<A>>,
    last: Option<Vec<A>>,
}

impl<'a, K: TrieKey<A>, A: TrieAtom> PrefixSetCursor<'a, K, A> {
    pub(crate) fn new(set: &'a mut PrefixSet<K, A>, worklist: Vec<Vec<A>>) -> Self {
        Self {
            set,
            worklist,
            last: None,
        }
    }

    /// Are there keys left to return?
    pub fn has_next(&self) -> bool {
        !self.worklist.is_empty()
    }

    /// Like `next()`, but running out of keys is an error.
    pub fn try_next(&mut self) -> Result<K, SetError> {
        self.next().ok_or(SetError::Exhausted)
    }

    /// Remove the key most recently returned by `next()` from the set.
    pub fn remove(&mut self) -> Result<(), SetError> {
        let atoms = self.last.take().ok_or(SetError::IllegalState)?;
        self.set.remove(atoms);
        Ok(())
    }
}

impl<K: TrieKey<A>, A: TrieAtom> Iterator for PrefixSetCursor<'_, K, A> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let atoms = self.worklist.pop()?;
        let key = atoms.iter().copied().collect();
        self.last = Some(atoms);
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.worklist.len(), Some(self.worklist.len()))
    }
}

// Useful utility functions for building iterator output
impl<K: TrieKey<A>, A: TrieAtom> PrefixSet<K, A> {
    /// Walk the tree depth first and record the path of every terminal node,
    /// a node before its children and children in ascending order.
    pub(crate) fn worklist(&self) -> Vec<Vec<A>> {
        let mut results = Vec::with_capacity(self.len());
        let mut stack: Vec<(&Node<A>, Vec<A>)> = vec![(&self.root, vec![])];
        while let Some((node, path)) = stack.pop() {
            if node.terminal {
                results.push(path.clone());
            }
            // Reversed so that the smallest child is visited first
            for (atom, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(*atom);
                stack.push((child, child_path));
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::StringSet;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use std::collections::HashSet;

    fn populate(words: &[&str]) -> StringSet {
        words.iter().map(|w| w.chars()).collect()
    }

    #[test]
    fn it_iterates_over_empty_set() {
        let set = StringSet::new();
        assert_eq!(0, set.iter().count());
        let mut set = set;
        let mut cursor = set.cursor_mut();
        assert!(!cursor.has_next());
        assert_eq!(Err(SetError::Exhausted), cursor.try_next());
    }

    #[test]
    fn it_iterates_in_reverse_pre_order() {
        let set = populate(&["b", "ab", "a", "abc", "ac"]);
        let words: Vec<String> = set.iter().collect();
        assert_eq!(vec!["b", "ac", "abc", "ab", "a"], words);
    }

    #[test]
    fn it_iterates_over_populated_set() {
        let input = ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"];
        let set = populate(&input);
        let words: HashSet<String> = set.iter().collect();
        assert_eq!(input.len(), words.len());
        for word in input {
            assert!(words.contains(word));
        }
    }

    #[test]
    fn it_skips_removed_keys() {
        let mut set = populate(&["abc", "abcd", "x"]);
        set.remove("abc".chars());
        let words: Vec<String> = set.iter().collect();
        assert_eq!(vec!["x", "abcd"], words);
        assert_eq!(2, set.iter().len());
    }

    #[test]
    fn it_repeats_the_same_order_for_an_unmodified_set() {
        let mut set = StringSet::new();
        for _i in 0..100 {
            let entry: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=16))
                .map(char::from)
                .collect();
            set.add(entry.chars());
        }
        let first: Vec<String> = set.iter().collect();
        let second: Vec<String> = (&set).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(set.len(), first.len());
    }

    #[test]
    fn it_finds_in_populated_set() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut set = StringSet::new();
        let mut searches: Vec<String> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            set.add(entry.chars());
        }
        let found: HashSet<String> = set.into_iter().collect();
        for entry in &searches {
            assert!(found.contains(entry));
        }
    }

    #[test]
    fn it_removes_through_the_cursor() {
        let mut set = populate(&["abc", "abd", "b"]);
        let mut cursor = set.cursor_mut();
        while cursor.has_next() {
            let word = cursor.try_next().expect("has_next");
            if word.starts_with("ab") {
                cursor.remove().expect("after next");
            }
        }
        assert_eq!(1, set.len());
        assert!(set.contains("b".chars()));
        assert!(!set.contains("abc".chars()));
    }

    #[test]
    fn it_rejects_cursor_remove_without_next() {
        let mut set = populate(&["abc"]);
        let mut cursor = set.cursor_mut();
        assert_eq!(Err(SetError::IllegalState), cursor.remove());
        assert_eq!(Some("abc".to_string()), cursor.next());
        assert_eq!(Ok(()), cursor.remove());
        assert_eq!(Err(SetError::IllegalState), cursor.remove());
        assert!(set.is_empty());
    }
}
