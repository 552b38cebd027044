//! Reference Levenshtein distance.
//!
//! A direct dynamic-programming implementation used as ground truth when
//! validating the trie's bounded fuzzy search. The search structures never
//! call this at query time; it exists for cross-checking and diagnostics.

use smallvec::SmallVec;

/// Standard Levenshtein distance between two strings.
///
/// Counts single-character insertions, deletions, and substitutions, at
/// `char` granularity. Space-optimized to two DP rows.
///
/// ```rust
/// use libfriends::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("cat", "cat"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source: SmallVec<[char; 32]> = source.chars().collect();
    let target: SmallVec<[char; 32]> = target.chars().collect();

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let mut previous: SmallVec<[usize; 64]> = (0..=target.len()).collect();
    let mut current: SmallVec<[usize; 64]> = SmallVec::with_capacity(target.len() + 1);

    for (i, &sc) in source.iter().enumerate() {
        current.clear();
        current.push(i + 1);
        for (j, &tc) in target.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let best = (previous[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(previous[j] + cost); // substitution
            current.push(best);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}
