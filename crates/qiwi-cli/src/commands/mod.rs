//! Subcommand implementations

pub mod wallet;
