//! friends - size of a word's social network under one-edit adjacency
//!
//! Loads a word list, then either prints the closure size for the seed word
//! or, with --neighbors, its immediate friends.

use clap::Parser;
use colored::Colorize;
use std::process;

use libfriends::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
