//! Interchangeable neighbor strategies.
//!
//! A [`NeighborStrategy`] answers one question: which dictionary words lie
//! within a given edit budget of a word? Two implementations are provided:
//!
//! - [`TrieNeighbors`] walks a [`Trie`] and prunes by budget. Works for any
//!   budget and benefits from prefix sharing in the dictionary.
//! - [`EditNeighbors`] generates every one-edit variant of the word over a
//!   fixed [`Alphabet`] and filters the candidates through a hash set. No
//!   trie at all; preferable when the alphabet is small and the budget is
//!   exactly 1.
//!
//! The closure engine is written against the trait, so the two can be
//! swapped freely.

use rustc_hash::FxHashSet;

use crate::trie::Trie;

/// Capability to enumerate the dictionary words within an edit budget of a
/// given word.
pub trait NeighborStrategy {
    /// Dictionary words whose edit distance to `word` is at most `budget`.
    ///
    /// The result is a set; `word` itself appears in it iff it is a
    /// dictionary word (distance 0 is within any budget).
    fn neighbors(&self, word: &str, budget: usize) -> FxHashSet<String>;
}

/// Neighbor strategy backed by the trie's bounded fuzzy search.
#[derive(Debug, Clone)]
pub struct TrieNeighbors {
    trie: Trie,
}

impl TrieNeighbors {
    /// Wrap an already-built trie.
    pub fn new(trie: Trie) -> Self {
        TrieNeighbors { trie }
    }

    /// Build the trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TrieNeighbors::new(Trie::from_words(words))
    }

    /// Access the underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl NeighborStrategy for TrieNeighbors {
    fn neighbors(&self, word: &str, budget: usize) -> FxHashSet<String> {
        self.trie.find_within_edit_distance(word, budget)
    }
}

/// The candidate character set used when generating edit variants.
///
/// Nothing in the core assumes lowercase ASCII; the alphabet is an explicit
/// value, either stated up front or inferred from the dictionary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The lowercase ASCII letters `a` through `z`.
    pub fn ascii_lowercase() -> Self {
        Alphabet {
            chars: ('a'..='z').collect(),
        }
    }

    /// An alphabet from an explicit character collection. Duplicates are
    /// dropped.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Alphabet { chars }
    }

    /// Infer the alphabet as the set of characters appearing in `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Alphabet::from_chars(
            words
                .into_iter()
                .flat_map(|w| w.as_ref().chars().collect::<Vec<_>>()),
        )
    }

    /// The characters in this alphabet, sorted and deduplicated.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Lazy iterator over every string exactly one edit away from a word.
///
/// Candidates are produced on demand, in two phases:
///
/// 1. for each position, each alphabet character as a replacement, plus the
///    position's removal (substitutions and the deletion);
/// 2. for each gap (including both ends), each alphabet character inserted.
///
/// For a word of length `n` over an alphabet of size `A` this emits
/// `n * (A + 1) + (n + 1) * A` candidates. Duplicates across positions are
/// expected (inserting next to an identical character reaches the same
/// string two ways) and are left for the consuming set to collapse.
///
/// The iterator is finite and non-restartable; build a new one per word.
pub struct SingleEdits<'a> {
    word: Vec<char>,
    alphabet: &'a [char],
    phase: Phase,
    pos: usize,
    alpha_idx: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Replace the char at `pos` with alphabet[alpha_idx], or remove it when
    /// alpha_idx == alphabet.len().
    Substitute,
    /// Insert alphabet[alpha_idx] before position `pos` (pos == len appends).
    Insert,
    Done,
}

impl<'a> SingleEdits<'a> {
    /// Candidates one edit away from `word`, drawing characters from
    /// `alphabet`.
    pub fn new(word: &str, alphabet: &'a [char]) -> Self {
        let word: Vec<char> = word.chars().collect();
        let phase = if word.is_empty() {
            Phase::Insert
        } else {
            Phase::Substitute
        };
        SingleEdits {
            word,
            alphabet,
            phase,
            pos: 0,
            alpha_idx: 0,
        }
    }

    fn splice(&self, replacement: Option<char>, keep_original: bool) -> String {
        let mut out = String::with_capacity(self.word.len() + 1);
        out.extend(&self.word[..self.pos]);
        out.extend(replacement);
        if keep_original {
            out.extend(&self.word[self.pos..]);
        } else {
            out.extend(&self.word[self.pos + 1..]);
        }
        out
    }
}

impl Iterator for SingleEdits<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.phase {
            Phase::Substitute => {
                // alphabet.len() acts as the empty marker encoding deletion.
                let candidate = if self.alpha_idx < self.alphabet.len() {
                    self.splice(Some(self.alphabet[self.alpha_idx]), false)
                } else {
                    self.splice(None, false)
                };

                self.alpha_idx += 1;
                if self.alpha_idx > self.alphabet.len() {
                    self.alpha_idx = 0;
                    self.pos += 1;
                    if self.pos == self.word.len() {
                        self.pos = 0;
                        self.phase = Phase::Insert;
                    }
                }
                Some(candidate)
            }
            Phase::Insert => {
                if self.alphabet.is_empty() {
                    self.phase = Phase::Done;
                    return None;
                }
                let candidate = self.splice(Some(self.alphabet[self.alpha_idx]), true);

                self.alpha_idx += 1;
                if self.alpha_idx == self.alphabet.len() {
                    self.alpha_idx = 0;
                    self.pos += 1;
                    if self.pos > self.word.len() {
                        self.phase = Phase::Done;
                    }
                }
                Some(candidate)
            }
            Phase::Done => None,
        }
    }
}

/// Brute-force neighbor strategy: generate one-edit variants, keep the ones
/// that are dictionary words.
///
/// Supports budgets 0 and 1. Budget 1 is the intended use; the generated
/// candidate set makes no sense for larger budgets, and asking for one is a
/// caller bug.
#[derive(Debug, Clone)]
pub struct EditNeighbors {
    words: FxHashSet<String>,
    alphabet: Alphabet,
}

impl EditNeighbors {
    /// Build from a word set and an explicit alphabet.
    pub fn new(words: FxHashSet<String>, alphabet: Alphabet) -> Self {
        EditNeighbors { words, alphabet }
    }

    /// Build from an iterator of words, inferring the alphabet from the
    /// words themselves.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        let alphabet = Alphabet::from_words(words.iter());
        EditNeighbors { words, alphabet }
    }

    /// Exact dictionary membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The alphabet used for candidate generation.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of words in the dictionary set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl NeighborStrategy for EditNeighbors {
    /// # Panics
    ///
    /// Panics if `budget > 1`; candidate generation only models single edits.
    fn neighbors(&self, word: &str, budget: usize) -> FxHashSet<String> {
        assert!(
            budget <= 1,
            "EditNeighbors generates single edits only (budget {budget} requested)"
        );

        let mut found = FxHashSet::default();
        if self.words.contains(word) {
            found.insert(word.to_string());
        }
        if budget == 1 {
            for candidate in SingleEdits::new(word, self.alphabet.chars()) {
                if self.words.contains(&candidate) {
                    found.insert(candidate);
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::standard_distance;

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn alphabet_inference() {
        let alphabet = Alphabet::from_words(["ab", "bc", "ca"]);
        assert_eq!(alphabet.chars(), &['a', 'b', 'c']);
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn single_edits_candidate_count() {
        // n * (A + 1) + (n + 1) * A total emissions, duplicates included.
        let alphabet: Vec<char> = "abc".chars().collect();
        let word = "ab";
        let (n, a) = (word.len(), alphabet.len());

        let emitted: Vec<String> = SingleEdits::new(word, &alphabet).collect();
        assert_eq!(emitted.len(), n * (a + 1) + (n + 1) * a);

        // Distinct candidates match a brute-force enumeration of all strings
        // at distance exactly 1, plus the word itself via same-char
        // substitution.
        let distinct: FxHashSet<String> = emitted.into_iter().collect();
        for candidate in &distinct {
            assert!(
                standard_distance(word, candidate) <= 1,
                "{candidate} is more than one edit from {word}"
            );
        }
        // "aab" is reachable by inserting 'a' at position 0 or 1; one copy
        // survives deduplication.
        assert!(distinct.contains("aab"));
    }

    #[test]
    fn single_edits_cover_every_distance_one_string() {
        let alphabet: Vec<char> = "ab".chars().collect();
        let distinct: FxHashSet<String> =
            SingleEdits::new("ab", &alphabet).collect();

        // Every string over {a, b} of length 1..=3 at distance <= 1.
        let mut expected = FxHashSet::default();
        for len in 1..=3usize {
            let mut pool = vec![String::new()];
            for _ in 0..len {
                pool = pool
                    .iter()
                    .flat_map(|s| {
                        ['a', 'b'].iter().map(move |c| {
                            let mut next = s.clone();
                            next.push(*c);
                            next
                        })
                    })
                    .collect();
            }
            for s in pool {
                if standard_distance("ab", &s) <= 1 {
                    expected.insert(s);
                }
            }
        }
        assert_eq!(distinct, expected);
    }

    #[test]
    fn single_edits_of_empty_word() {
        let alphabet: Vec<char> = "ab".chars().collect();
        let candidates: Vec<String> = SingleEdits::new("", &alphabet).collect();
        assert_eq!(candidates, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn edit_neighbors_budget_semantics() {
        let strategy = EditNeighbors::from_words(["cat", "bat", "cats", "dog"]);

        // Budget 0: membership only.
        assert_eq!(strategy.neighbors("cat", 0), set(&["cat"]));
        assert!(strategy.neighbors("cap", 0).is_empty());

        // Budget 1: one-edit friends plus the word itself.
        assert_eq!(strategy.neighbors("cat", 1), set(&["cat", "bat", "cats"]));
        // Absent seed still finds its dictionary neighbors.
        assert_eq!(strategy.neighbors("cap", 1), set(&["cat"]));
    }

    #[test]
    #[should_panic(expected = "single edits only")]
    fn edit_neighbors_reject_large_budgets() {
        let strategy = EditNeighbors::from_words(["cat"]);
        strategy.neighbors("cat", 2);
    }

    #[test]
    fn strategies_agree_at_budget_one() {
        let words = ["cat", "bat", "bad", "cad", "cot", "coat", "at"];
        let trie = TrieNeighbors::from_words(words);
        let edits = EditNeighbors::from_words(words);

        for query in ["cat", "cot", "at", "coat", "zzz", "ca"] {
            assert_eq!(
                trie.neighbors(query, 1),
                edits.neighbors(query, 1),
                "strategies disagree on {query}"
            );
        }
    }
}
