//! From-scratch replacements for a few standard collections, plus some
//! classic graph algorithms.
//!
//! - [`crate::trie::PrefixSet`]: a set of keys composed of atoms, stored as a
//!   prefix tree. [`crate::trie::StringSet`] covers the common case of a set
//!   of Strings.
//! - [`crate::probing::ProbingSet`]: a fixed capacity hash set using open
//!   addressing with linear probing and tombstones. It never grows.
//! - [`crate::algorithms`]: connectivity checks, Euler circuits and spanning
//!   trees over anything implementing [`crate::graph::Graph`].
//!
//! Examples:
//! * prefix set : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * probing set : [`crate::probing`]
//! * graph : [`crate::graph`]
//!
//! Optional features:
//!  - `serde`: serialization of both sets
//!  - `tracing`: emits `tracing` events for full tables and rejected graphs

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod algorithms;

pub mod error;

pub mod graph;

pub mod iterator;

pub mod paths;

pub mod probing;

pub mod trie;

pub use error::SetError;
