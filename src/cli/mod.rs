//! CLI interface for libfriends
//!
//! Provides the command-line surface for word-list loading, neighbor
//! queries, and closure computation. Everything here is a thin collaborator
//! around the core: dictionary I/O and argument handling fail before any
//! search work starts.

pub mod args;
pub mod commands;

pub use args::{Cli, Strategy};
