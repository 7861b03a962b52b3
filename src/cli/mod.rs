//! Command-Line Interface Module
//!
//! Argument parsing and the compress/decompress file commands, including
//! the size report printed after each run.

pub mod commands;

pub use commands::{compress_file, decompress_file, Cli, Commands};
