//! Miscellaneous utility modules for lister.
//!
//! Holds the [cli] submodule, which turns the raw argument list into a [cli::CliAction].

pub mod cli;

pub use cli::{CliAction, CliArgs, parse_args};
