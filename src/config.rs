//! Configuration module for lister.
//!
//! Settings are read from `lister.toml` (see [Config::default_path]) and only ever provide
//! defaults: command line flags can turn listing options on but never off.
//!
//! - [load]: the [Config] struct, file discovery, and default file generation.
//! - [general]: default listing flags.
//! - [display]: color settings.

pub mod display;
pub mod general;
pub mod load;

pub use display::Display;
pub use general::General;
pub use load::Config;
