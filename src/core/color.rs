//! Entry coloring for lister.
//!
//! [color_for] picks an enumerated [Color] for an entry, and a [Palette] turns it into
//! the ANSI escape sequence that wraps every rendered line.

use crate::core::Entry;

/// Escape sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

const DEFAULT_DIR_COLOR: &str = "\x1b[1;34m";
const DEFAULT_SYMLINK_COLOR: &str = "\x1b[1;36m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Directory,
    Symlink,
    Reset,
}

/// Directory wins over symlink, everything else is uncolored.
pub fn color_for(entry: &Entry) -> Color {
    if entry.is_dir() {
        Color::Directory
    } else if entry.is_symlink() {
        Color::Symlink
    } else {
        Color::Reset
    }
}

/// Escape sequences for each [Color], or nothing at all when coloring is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    directory: String,
    symlink: String,
    enabled: bool,
}

impl Palette {
    /// Builds a palette from color names or hex codes.
    /// Values that do not parse fall back to the built in colors.
    pub fn new(directory: &str, symlink: &str) -> Self {
        let directory = parse_color(directory).unwrap_or_else(|| {
            tracing::warn!(value = directory, "unknown dir_color, using default");
            DEFAULT_DIR_COLOR.to_string()
        });
        let symlink = parse_color(symlink).unwrap_or_else(|| {
            tracing::warn!(value = symlink, "unknown symlink_color, using default");
            DEFAULT_SYMLINK_COLOR.to_string()
        });
        Palette {
            directory,
            symlink,
            enabled: true,
        }
    }

    /// A palette that emits no escape sequences.
    pub fn plain() -> Self {
        Palette {
            directory: String::new(),
            symlink: String::new(),
            enabled: false,
        }
    }

    pub fn code(&self, color: Color) -> &str {
        if !self.enabled {
            return "";
        }
        match color {
            Color::Directory => self.directory.as_str(),
            Color::Symlink => self.symlink.as_str(),
            Color::Reset => RESET,
        }
    }

    pub fn reset(&self) -> &str {
        if self.enabled { RESET } else { "" }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            directory: DEFAULT_DIR_COLOR.to_string(),
            symlink: DEFAULT_SYMLINK_COLOR.to_string(),
            enabled: true,
        }
    }
}

/// Parses a color name or hex code (#RRGGBB or #RGB) into a bold ANSI foreground sequence.
pub fn parse_color(s: &str) -> Option<String> {
    let sgr = match s.to_lowercase().as_str() {
        "default" | "reset" => "0".to_string(),
        "black" => "1;30".to_string(),
        "red" => "1;31".to_string(),
        "green" => "1;32".to_string(),
        "yellow" => "1;33".to_string(),
        "blue" => "1;34".to_string(),
        "magenta" => "1;35".to_string(),
        "cyan" => "1;36".to_string(),
        "white" => "1;37".to_string(),
        _ => {
            let hex = s.strip_prefix('#')?;
            let expanded = match hex.len() {
                6 => hex.to_string(),
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                _ => return None,
            };
            let rgb = u32::from_str_radix(&expanded, 16).ok()?;
            format!(
                "1;38;2;{};{};{}",
                (rgb >> 16) & 0xFF,
                (rgb >> 8) & 0xFF,
                rgb & 0xFF
            )
        }
    };
    Some(format!("\x1b[{}m", sgr))
}
