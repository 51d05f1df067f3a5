//! Core listing logic for lister.
//!
//! - [fm]: entry snapshots, directory enumeration, and the extended metadata provider
//!   (see [browse_dir], [Entry], [ExtendedMetadataProvider]).
//! - [formatter]: hidden-file filtering, sorting, and long/compact line rendering.
//! - [color]: entry kind to ANSI color mapping.
//! - [lister]: the [Lister] that ties it together and reports errors inline.

pub mod color;
pub mod fm;
pub mod formatter;
pub mod lister;

pub use color::{Color, Palette, color_for};
pub use fm::{Entry, ExtendedMetadataProvider, ExtendedStat, NativeMetadata, browse_dir};
pub use formatter::{
    Formatter, format_attributes, format_compact, format_file_time, format_long, permission_string,
};
pub use lister::{Lister, Options};
