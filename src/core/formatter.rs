//! Filtering, sorting, and line formatting for entries in lister.
//!
//! The [Formatter] struct holds the hidden-file and ordering rules for one listing and
//! prepares each directory's entries for display. The free functions render a single
//! entry in long or compact form.

use crate::core::color::{Palette, color_for};
use crate::core::{Entry, ExtendedStat};

use chrono::{DateTime, Local};

use std::fs::Metadata;
use std::time::SystemTime;

/// Layout of the long format timestamp, e.g. `Jan  2 15:04:05`.
pub const TIMESTAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// Formatter struct to handle filtering and ordering of entries.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    show_hidden: bool,
    sort_by_time: bool,
    reverse: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool, sort_by_time: bool, reverse: bool) -> Self {
        Self {
            show_hidden,
            sort_by_time,
            reverse,
        }
    }

    /// Sorts entries in place by modification time or by name, oldest or lowest first.
    ///
    /// Both sorts are stable so ties keep their enumeration order. Reversing flips the
    /// whole sequence afterwards, ties included.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        if self.sort_by_time {
            entries.sort_by_key(|e| e.modified());
        } else {
            entries.sort_by(|a, b| a.name().cmp(b.name()));
        }
        if self.reverse {
            entries.reverse();
        }
    }

    /// Drops hidden entries unless they are shown, then sorts what is left.
    pub fn filter_entries(&self, entries: &mut Vec<Entry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }
}

/// Formats the entry type and permission bits in a unix-like format
///
/// On Unix: Returns a string like 'drwxr-xr-x' for directories and files.
/// On Windows: A read-only flag is all there is, so files read 'rw-rw-rw-' or 'r--r--r--'.
pub fn format_attributes(meta: &Metadata) -> String {
    let file_type = meta.file_type();
    let mut first = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'l'
    } else {
        '-'
    };

    #[cfg(unix)]
    let mode = {
        use std::os::unix::fs::{FileTypeExt, PermissionsExt};

        if file_type.is_fifo() {
            first = 'p';
        } else if file_type.is_socket() {
            first = 's';
        } else if file_type.is_block_device() {
            first = 'b';
        } else if file_type.is_char_device() {
            first = 'c';
        }
        meta.permissions().mode()
    };
    #[cfg(not(unix))]
    let mode: u32 = if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    };

    permission_string(first, mode)
}

/// Renders the type character and the rwx triplets of `mode`, with the setuid, setgid,
/// and sticky bits shown as `s`/`S` and `t`/`T` the way `ls` does.
pub fn permission_string(first: char, mode: u32) -> String {
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }

    // (bit, execute slot, set letter)
    let special = [(0o4000, 3, 's'), (0o2000, 6, 's'), (0o1000, 9, 't')];
    for (bit, slot, letter) in special {
        if mode & bit != 0 {
            chars[slot] = if chars[slot] == 'x' {
                letter
            } else {
                letter.to_ascii_uppercase()
            };
        }
    }
    chars.iter().collect()
}

/// Formats a modification time in local time using [TIMESTAMP_FORMAT].
pub fn format_file_time(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders one long format line, newline included.
///
/// The name is copied as raw bytes, so names that are not valid UTF-8 come out unchanged.
pub fn format_long(entry: &Entry, stat: &ExtendedStat, palette: &Palette) -> Vec<u8> {
    let mut line = format!(
        "{}{} {:>3} {:>9} {:>9} {:>12} {} ",
        palette.code(color_for(entry)),
        entry.mode(),
        stat.link_count(),
        stat.owner_id(),
        stat.group_id(),
        entry.size(),
        format_file_time(entry.modified()),
    )
    .into_bytes();
    line.extend_from_slice(entry.name().as_encoded_bytes());
    line.extend_from_slice(palette.reset().as_bytes());
    line.push(b'\n');
    line
}

/// Renders one compact item: the name and its tab separator, no newline.
pub fn format_compact(entry: &Entry, palette: &Palette) -> Vec<u8> {
    let mut item = palette.code(color_for(entry)).as_bytes().to_vec();
    item.extend_from_slice(entry.name().as_encoded_bytes());
    item.push(b'\t');
    item.extend_from_slice(palette.reset().as_bytes());
    item
}
