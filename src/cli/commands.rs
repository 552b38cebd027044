//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;

use crate::closure::ClosureEngine;
use crate::neighbors::{EditNeighbors, NeighborStrategy, TrieNeighbors};
use crate::wordlist::load_words;

use super::args::{Cli, Strategy};

/// How often progress lines are emitted in verbose mode, in expansions.
const PROGRESS_INTERVAL: usize = 1000;

/// Load the word list and run the requested query.
pub fn run(cli: Cli) -> Result<()> {
    let words = load_words(&cli.dict)
        .with_context(|| format!("failed to load word list from {}", cli.dict.display()))?;

    if cli.verbose {
        eprintln!(
            "{} {} words from {}",
            "loaded".dimmed(),
            words.len(),
            cli.dict.display()
        );
    }

    match cli.strategy {
        Strategy::Trie => execute(TrieNeighbors::from_words(&words), &cli),
        Strategy::Edits => execute(EditNeighbors::from_words(&words), &cli),
    }
}

fn execute<S: NeighborStrategy>(strategy: S, cli: &Cli) -> Result<()> {
    if cli.neighbors {
        return print_neighbors(&strategy, &cli.word);
    }

    let engine = ClosureEngine::new(strategy);
    let network = if cli.verbose {
        engine.closure_observed(&cli.word, |progress| {
            if progress.expanded > 0 && progress.expanded % PROGRESS_INTERVAL == 0 {
                eprintln!(
                    "{} expanded {} words, {} queued, {} found",
                    "progress:".dimmed(),
                    progress.expanded,
                    progress.queued,
                    progress.discovered
                );
            }
        })
    } else {
        engine.closure(&cli.word)
    };

    println!("{}", network.len());
    Ok(())
}

/// Print the words at edit distance exactly 1 from `word`, sorted.
fn print_neighbors<S: NeighborStrategy>(strategy: &S, word: &str) -> Result<()> {
    let mut friends: Vec<String> = strategy
        .neighbors(word, 1)
        .into_iter()
        .filter(|friend| friend != word)
        .collect();
    friends.sort_unstable();

    for friend in friends {
        println!("{friend}");
    }
    Ok(())
}
