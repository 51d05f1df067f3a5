//! Internal library crate for lister.
//!
//! The shipped application is the `lst` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `lst` binary and is not considered a library for external use.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;
