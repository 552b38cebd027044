//! # libfriends
//!
//! How big is a word's social network?
//!
//! Two words are *friends* when their Levenshtein distance is exactly 1: one
//! insertion, deletion, or substitution turns one into the other. A word's
//! social network is the transitive closure of that relation over a fixed
//! dictionary: its friends, their friends, and so on.
//!
//! The crate provides:
//!
//! - [`trie::Trie`]: a prefix tree with bounded fuzzy search, returning every
//!   dictionary word within an edit budget of a query
//! - [`neighbors`]: two interchangeable [`neighbors::NeighborStrategy`]
//!   implementations, trie-backed search and brute-force one-edit candidate
//!   generation against a hash set
//! - [`closure::ClosureEngine`]: breadth-first worklist expansion computing
//!   the full reachable set from a seed word
//!
//! ## Example
//!
//! ```rust
//! use libfriends::prelude::*;
//!
//! let words = ["cat", "bat", "bad", "cad", "cot"];
//! let engine = ClosureEngine::new(TrieNeighbors::from_words(words));
//!
//! assert_eq!(engine.closure_size("cat"), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod closure;
pub mod distance;
pub mod neighbors;
pub mod trie;
pub mod wordlist;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::closure::{ClosureEngine, ClosureProgress};
    pub use crate::distance::standard_distance;
    pub use crate::neighbors::{
        Alphabet, EditNeighbors, NeighborStrategy, SingleEdits, TrieNeighbors,
    };
    pub use crate::trie::Trie;
    pub use crate::wordlist::{load_words, WordListError};
}
