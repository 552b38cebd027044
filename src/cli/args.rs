//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `friends` binary.
#[derive(Parser)]
#[command(name = "friends")]
#[command(about = "Size of a word's social network under one-edit adjacency")]
#[command(version)]
pub struct Cli {
    /// Seed word to expand from
    pub word: String,

    /// Word list file, one word per line
    #[arg(short, long, default_value = "word.list")]
    pub dict: PathBuf,

    /// Neighbor strategy
    #[arg(short, long, default_value = "trie")]
    pub strategy: Strategy,

    /// Print the immediate friends, one per line, instead of the closure size
    #[arg(short, long)]
    pub neighbors: bool,

    /// Report progress on stderr while expanding
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which neighbor implementation answers the friend queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Trie-backed bounded fuzzy search
    Trie,
    /// Brute-force one-edit generation against a hash set
    Edits,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trie => write!(f, "trie"),
            Self::Edits => write!(f, "edits"),
        }
    }
}
