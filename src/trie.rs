//! Prefix tree with bounded fuzzy search.
//!
//! The [`Trie`] indexes dictionary words by shared prefixes and answers two
//! kinds of queries:
//!
//! - exact membership via [`Trie::contains`]
//! - bounded fuzzy search via [`Trie::find_within_edit_distance`], which
//!   returns every indexed word within a given number of single-character
//!   insertions, deletions, or substitutions of the query
//!
//! The trie is built once by repeated insertion and treated as read-only
//! afterwards. Nodes are exclusively owned by their parents, so the structure
//! is a plain tree with recursive teardown and no reference counting.
//!
//! # Example
//!
//! ```rust
//! use libfriends::trie::Trie;
//!
//! let trie = Trie::from_words(["cat", "cats", "bat"]);
//!
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("dog"));
//!
//! let near = trie.find_within_edit_distance("cat", 1);
//! assert!(near.contains("cat"));  // distance 0
//! assert!(near.contains("cats")); // insertion
//! assert!(near.contains("bat"));  // substitution
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

/// A node in the prefix tree.
///
/// The character labelling a node lives in the parent's edge map, not in the
/// node itself. `is_word` is true iff the path from the root to this node
/// spells a complete dictionary word.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    is_word: bool,
    children: FxHashMap<char, TrieNode>,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode::default()
    }
}

/// Prefix tree over dictionary words, generic over the character set.
///
/// Keys are `char`s, so the trie handles any Unicode words the dictionary
/// throws at it; nothing here assumes a lowercase ASCII alphabet.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Build a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating nodes along its path as needed.
    ///
    /// Inserting a word that is already present has no effect. Inserting the
    /// empty string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// Exact membership test.
    ///
    /// Walks the path spelled by `word`; any missing edge means the word is
    /// absent. The empty query never consumes an edge and reports the root's
    /// word flag directly.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.children.get(&c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Return every indexed word within `max_edits` single-character edits
    /// (insertions, deletions, or substitutions) of `query`.
    ///
    /// The result is a set: many edit sequences can reach the same word, and
    /// each word is reported once. With `max_edits == 0` this degenerates to
    /// an exact-match probe.
    ///
    /// The search walks the trie and the query suffix together, spending the
    /// edit budget on the way down; the budget only ever decreases, so every
    /// branch terminates once it is exhausted. A match recorded at an
    /// interior node does not stop the search: insertions may still extend
    /// the matched prefix to reach a longer word within budget.
    pub fn find_within_edit_distance(&self, query: &str, max_edits: usize) -> FxHashSet<String> {
        let suffix: Vec<char> = query.chars().collect();
        let mut prefix = String::with_capacity(query.len() + max_edits);
        let mut found = FxHashSet::default();
        search(&self.root, &suffix, max_edits, &mut prefix, &mut found);
        found
    }
}

/// Recursive worker for [`Trie::find_within_edit_distance`].
///
/// `prefix` is a shared push/pop buffer holding the characters consumed from
/// the root down to `node`; it is restored before each return so callers
/// never see their frame's changes.
fn search(
    node: &TrieNode,
    suffix: &[char],
    budget: usize,
    prefix: &mut String,
    found: &mut FxHashSet<String>,
) {
    // The consumed path spells a word and the query is exhausted.
    if suffix.is_empty() && node.is_word {
        found.insert(prefix.clone());
    }

    // Delete: drop the leading query character and retry from the same node.
    if budget > 0 && !suffix.is_empty() {
        search(node, &suffix[1..], budget - 1, prefix, found);
    }

    for (&label, child) in &node.children {
        prefix.push(label);
        match suffix.first() {
            // No edit: the child matches the next query character.
            Some(&head) if head == label => {
                search(child, &suffix[1..], budget, prefix, found);
            }
            _ if budget > 0 => {
                // Substitute: consume a query character for a different child.
                if !suffix.is_empty() {
                    search(child, &suffix[1..], budget - 1, prefix, found);
                }
                // Insert: take the child without consuming anything.
                search(child, suffix, budget - 1, prefix, found);
            }
            _ => {}
        }
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// All strings of length `n` over `alphabet`.
    fn all_strings_of_n(alphabet: &str, n: usize) -> Vec<String> {
        let mut strings = vec![String::new()];
        for _ in 0..n {
            strings = strings
                .iter()
                .flat_map(|s| {
                    alphabet.chars().map(move |c| {
                        let mut next = s.clone();
                        next.push(c);
                        next
                    })
                })
                .collect();
        }
        strings
    }

    #[test]
    fn insert_and_contains() {
        let words = ["baz", "foo", "fob", "far", "food"];
        let trie = Trie::from_words(words);

        for w in words {
            assert!(trie.contains(w), "expected {w} in the trie");
        }
        assert!(!trie.contains("fo"));
        assert!(!trie.contains("fooz"));
        assert_eq!(trie.len(), words.len());
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("word");
        trie.insert("word");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn empty_query_reports_root() {
        let mut trie = Trie::new();
        assert!(!trie.contains(""));

        trie.insert("");
        assert!(trie.contains(""));
        assert_eq!(trie.find_within_edit_distance("", 0), set(&[""]));
    }

    #[test]
    fn zero_budget_is_exact_match() {
        let words = ["cat", "cats", "dog"];
        let trie = Trie::from_words(words);

        for w in words {
            assert_eq!(trie.find_within_edit_distance(w, 0), set(&[w]));
        }
        assert!(trie.find_within_edit_distance("cap", 0).is_empty());
    }

    #[test]
    fn single_edits_sparse() {
        let mut trie = Trie::new();
        trie.insert("pizza");
        let expected = set(&["pizza"]);

        // Substitutions
        assert_eq!(trie.find_within_edit_distance("zizza", 1), expected);
        assert_eq!(trie.find_within_edit_distance("pizaa", 1), expected);
        assert_eq!(trie.find_within_edit_distance("pizzz", 1), expected);

        // Insertions (query is missing a character)
        assert_eq!(trie.find_within_edit_distance("izza", 1), expected);
        assert_eq!(trie.find_within_edit_distance("piza", 1), expected);
        assert_eq!(trie.find_within_edit_distance("pizz", 1), expected);

        // Deletions (query has an extra character)
        assert_eq!(trie.find_within_edit_distance("ppizza", 1), expected);
        assert_eq!(trie.find_within_edit_distance("piizza", 1), expected);
        assert_eq!(trie.find_within_edit_distance("pizzaa", 1), expected);

        // Two edits away
        assert!(trie.find_within_edit_distance("zizzz", 1).is_empty());
    }

    #[test]
    fn single_edits_dense() {
        // Pack the trie with every 3-char string over an 11-letter alphabet,
        // then count matches against closed-form expectations.
        let alphabet = "abcdefghijk";
        let alpha_len = alphabet.chars().count();
        let trie = Trie::from_words(all_strings_of_n(alphabet, 3));

        // Insertions: any alphabet char at any of 3 positions; inserting 'a'
        // before or after the existing 'a' collides (same for 'b'), so two
        // duplicates drop out.
        assert_eq!(
            trie.find_within_edit_distance("ab", 1).len(),
            3 * alpha_len - 2
        );

        // Deletions: one per position of a 4-char query.
        assert_eq!(trie.find_within_edit_distance("bdfg", 1).len(), 4);

        // Substitutions: a different char at each position, plus the exact match.
        assert_eq!(
            trie.find_within_edit_distance("ijk", 1).len(),
            3 * (alpha_len - 1) + 1
        );
    }

    #[test]
    fn larger_budgets_and_arbitrary_charsets() {
        let cast = [
            "Luke Skywalker",
            "Anakin Skywalker",
            "Jedi Knights",
            "Jedi",
            "force grip",
            "force push",
            "force pull",
            "force lift",
            "George Lucas",
            "george lucas",
        ];
        let trie = Trie::from_words(cast);

        // Case-sensitive: the lowercase variant is two substitutions away.
        assert_eq!(
            trie.find_within_edit_distance("George Lucas", 1),
            set(&["George Lucas"])
        );
        assert_eq!(
            trie.find_within_edit_distance("George Lucas", 2),
            set(&["George Lucas", "george lucas"])
        );

        assert_eq!(
            trie.find_within_edit_distance("Skywalker", 5),
            set(&["Luke Skywalker"])
        );
        assert_eq!(
            trie.find_within_edit_distance("force lightning", 6),
            set(&["force lift"])
        );
        assert_eq!(
            trie.find_within_edit_distance("Jedi ! Knights", 2),
            set(&["Jedi Knights"])
        );
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let trie = Trie::new();
        assert!(trie.find_within_edit_distance("", 2_000_000_000).is_empty());
        assert!(trie.find_within_edit_distance("anything", 3).is_empty());
    }

    #[test]
    fn match_does_not_stop_the_search() {
        // "cat" is a word, but the search must keep going through the
        // insertion branch to reach "cats" as well.
        let trie = Trie::from_words(["cat", "cats"]);
        assert_eq!(
            trie.find_within_edit_distance("cat", 1),
            set(&["cat", "cats"])
        );
    }

    #[test]
    fn budget_is_monotonic() {
        let trie = Trie::from_words(["cat", "bat", "bad", "cot", "coats"]);
        let mut previous = FxHashSet::default();
        for budget in 0..4 {
            let current = trie.find_within_edit_distance("cat", budget);
            assert!(
                previous.is_subset(&current),
                "budget {budget} lost matches present at budget {}",
                budget.saturating_sub(1)
            );
            previous = current;
        }
    }
}
