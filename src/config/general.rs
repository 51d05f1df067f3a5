//! The general configuration settings for lister.
//!
//! Holds the default listing flags read from the `[general]` table.

use crate::core::Options;

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    recursive: bool,
    long_format: bool,
    show_hidden: bool,
    reverse: bool,
    sort_by_time: bool,
}

impl General {
    #[inline]
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    #[inline]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn sort_by_time(&self) -> bool {
        self.sort_by_time
    }

    /// The configured defaults as listing [Options].
    pub fn options(&self) -> Options {
        Options {
            recursive: self.recursive,
            long_format: self.long_format,
            show_hidden: self.show_hidden,
            reverse: self.reverse,
            sort_by_time: self.sort_by_time,
        }
    }
}
