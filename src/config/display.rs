//! Display configuration options for lister
//!
//! Controls whether output is colored and which colors directories and symlinks get.
//! Colors accept names ("blue", "cyan", ...) or hex codes ("#RRGGBB").

use crate::core::Palette;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    color: bool,
    dir_color: String,
    symlink_color: String,
}

impl Display {
    #[inline]
    pub fn color(&self) -> bool {
        self.color
    }

    #[inline]
    pub fn dir_color(&self) -> &str {
        &self.dir_color
    }

    #[inline]
    pub fn symlink_color(&self) -> &str {
        &self.symlink_color
    }

    /// Builds the palette for these settings. `force_plain` comes from `--no-color`.
    pub fn palette(&self, force_plain: bool) -> Palette {
        if force_plain || !self.color {
            Palette::plain()
        } else {
            Palette::new(&self.dir_color, &self.symlink_color)
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            color: true,
            dir_color: "blue".to_string(),
            symlink_color: "cyan".to_string(),
        }
    }
}
