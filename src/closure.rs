//! Worklist expansion of the friend relation.
//!
//! Two words are friends when their edit distance is exactly 1. The
//! [`ClosureEngine`] starts from a seed word and repeatedly asks a
//! [`NeighborStrategy`] for friends, breadth-first, until no new words turn
//! up. The visited set is then the seed's whole social network: the
//! connected component of the friend graph containing the seed.
//!
//! # Example
//!
//! ```rust
//! use libfriends::closure::ClosureEngine;
//! use libfriends::neighbors::TrieNeighbors;
//!
//! let strategy = TrieNeighbors::from_words(["cat", "bat", "bad", "cad", "cot"]);
//! let engine = ClosureEngine::new(strategy);
//!
//! // All five words are mutually reachable through single substitutions.
//! assert_eq!(engine.closure_size("cat"), 5);
//! ```

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::neighbors::NeighborStrategy;

/// A snapshot of the expansion loop, handed to progress observers once per
/// dequeued word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureProgress {
    /// Words dequeued and expanded so far.
    pub expanded: usize,
    /// Words currently waiting in the worklist.
    pub queued: usize,
    /// Words discovered so far, the seed included.
    pub discovered: usize,
}

/// Breadth-first closure computation over a neighbor strategy.
///
/// The engine owns its strategy and is read-only across runs: each call to
/// [`closure`](ClosureEngine::closure) creates a fresh worklist and visited
/// set, so a single engine can serve any number of sequential (or, behind a
/// shared reference, concurrent) computations.
#[derive(Debug, Clone)]
pub struct ClosureEngine<S> {
    strategy: S,
    budget: usize,
}

impl<S: NeighborStrategy> ClosureEngine<S> {
    /// Engine over the friend relation proper: edit budget 1.
    pub fn new(strategy: S) -> Self {
        ClosureEngine {
            strategy,
            budget: 1,
        }
    }

    /// Engine with a custom edit budget per expansion step.
    ///
    /// Only meaningful with a strategy that supports the budget;
    /// [`TrieNeighbors`](crate::neighbors::TrieNeighbors) accepts any.
    pub fn with_budget(strategy: S, budget: usize) -> Self {
        ClosureEngine { strategy, budget }
    }

    /// The neighbor strategy driving this engine.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Extract the strategy, consuming the engine.
    pub fn into_inner(self) -> S {
        self.strategy
    }

    /// Compute the set of words reachable from `seed` through chains of
    /// friends.
    ///
    /// The seed is always part of the result, whether or not it is a
    /// dictionary word. Every reachable word is expanded exactly once, so
    /// the total work is bounded by the component size times the cost of one
    /// neighbor query.
    pub fn closure(&self, seed: &str) -> FxHashSet<String> {
        self.closure_observed(seed, |_| {})
    }

    /// Size of the closure; see [`closure`](ClosureEngine::closure).
    pub fn closure_size(&self, seed: &str) -> usize {
        self.closure(seed).len()
    }

    /// Like [`closure`](ClosureEngine::closure), with an observer called
    /// once per dequeued word.
    ///
    /// The observer only watches; a run with no cancellation point always
    /// completes. Use [`closure_watched`](ClosureEngine::closure_watched)
    /// when the caller needs to be able to abort.
    pub fn closure_observed<F>(&self, seed: &str, mut observer: F) -> FxHashSet<String>
    where
        F: FnMut(&ClosureProgress),
    {
        match self.closure_watched(seed, |progress| {
            observer(progress);
            true
        }) {
            Some(network) => network,
            None => unreachable!("observer never cancels"),
        }
    }

    /// Cancellable variant: the observer is called once per dequeued word
    /// and doubles as a cooperative cancellation point. Returning `false`
    /// aborts the run and yields `None`; an aborted run is discarded, not a
    /// valid partial closure.
    pub fn closure_watched<F>(&self, seed: &str, mut observer: F) -> Option<FxHashSet<String>>
    where
        F: FnMut(&ClosureProgress) -> bool,
    {
        let mut visited = FxHashSet::default();
        visited.insert(seed.to_string());
        let mut worklist = VecDeque::new();
        worklist.push_back(seed.to_string());

        let mut expanded = 0usize;
        while let Some(word) = worklist.pop_front() {
            let progress = ClosureProgress {
                expanded,
                queued: worklist.len(),
                discovered: visited.len(),
            };
            if !observer(&progress) {
                return None;
            }

            for friend in self.strategy.neighbors(&word, self.budget) {
                // Enqueued implies visited, so nothing is expanded twice.
                if !visited.contains(&friend) {
                    visited.insert(friend.clone());
                    worklist.push_back(friend);
                }
            }
            expanded += 1;
        }

        Some(visited)
    }
}
