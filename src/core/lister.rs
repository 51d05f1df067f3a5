//! The listing routine for lister.
//!
//! [Lister] walks one directory (and its subdirectories when recursing), renders each
//! entry to its output sink, and prints every [ListError] inline on the same sink.
//! Per child metadata failures skip that child, while a missing extended stat in long
//! format aborts the whole listing call for that directory.

use crate::core::color::Palette;
use crate::core::formatter::{Formatter, format_compact, format_long};
use crate::core::{Entry, ExtendedMetadataProvider, NativeMetadata, browse_dir};
use crate::error::ListError;

use tracing::{debug, warn};

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Display options for one run. Passed unchanged into every recursive call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub recursive: bool,
    pub long_format: bool,
    pub show_hidden: bool,
    pub reverse: bool,
    pub sort_by_time: bool,
}

impl Options {
    /// Combines two option sets; a flag set in either stays set.
    pub fn union(self, other: Options) -> Options {
        Options {
            recursive: self.recursive || other.recursive,
            long_format: self.long_format || other.long_format,
            show_hidden: self.show_hidden || other.show_hidden,
            reverse: self.reverse || other.reverse,
            sort_by_time: self.sort_by_time || other.sort_by_time,
        }
    }
}

/// Lists directories and file arguments onto `W`.
pub struct Lister<W: Write, P: ExtendedMetadataProvider = NativeMetadata> {
    out: W,
    options: Options,
    formatter: Formatter,
    palette: Palette,
    provider: P,
    errors: usize,
}

impl<W: Write> Lister<W> {
    pub fn new(out: W, options: Options, palette: Palette) -> Self {
        Self::with_provider(out, options, palette, NativeMetadata)
    }
}

impl<W: Write, P: ExtendedMetadataProvider> Lister<W, P> {
    pub fn with_provider(out: W, options: Options, palette: Palette, provider: P) -> Self {
        Lister {
            out,
            options,
            formatter: Formatter::new(options.show_hidden, options.sort_by_time, options.reverse),
            palette,
            provider,
            errors: 0,
        }
    }

    /// Number of errors printed so far.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Processes each path argument in order, or the current directory if there are none.
    ///
    /// Only a failing output sink stops the run early.
    pub fn run<I, S>(&mut self, paths: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut any = false;
        for path in paths {
            any = true;
            self.list_path(path.as_ref())?;
        }
        if !any {
            self.list(Path::new("."))?;
        }
        self.out.flush()
    }

    /// Lists a single top-level argument.
    ///
    /// Directories go through [Lister::list]. Anything else is rendered as a lone entry
    /// on its own line, with no sorting and no recursion.
    pub fn list_path(&mut self, path: &Path) -> io::Result<()> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(source) => {
                return self.report(ListError::PathUnstatable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if meta.is_dir() {
            return self.list(path);
        }

        let name = display_name(path).to_os_string();
        let entry = Entry::from_metadata(name, path, &meta, &self.provider);
        if let Err(err) = self.render(path, &entry) {
            return self.report(err);
        }
        if !self.options.long_format {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Lists the directory at `path`, depth first when recursing.
    ///
    /// Every directory block ends with a newline. Subdirectories are listed right after
    /// their own line is printed, before the remaining siblings.
    pub fn list(&mut self, path: &Path) -> io::Result<()> {
        debug!(path = %path.display(), "listing directory");

        let children = match browse_dir(path, &self.provider) {
            Ok(children) => children,
            Err(err) => return self.report(err),
        };

        let mut entries = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Ok(entry) => entries.push(entry),
                Err(err) => self.report(err)?,
            }
        }
        self.formatter.filter_entries(&mut entries);

        for entry in &entries {
            let entry_path = path.join(entry.name());
            if let Err(err) = self.render(&entry_path, entry) {
                return self.report(err);
            }
            if self.options.recursive && entry.is_dir() {
                writeln!(self.out)?;
                self.list(&entry_path)?;
            }
        }
        writeln!(self.out)
    }

    fn render(&mut self, path: &Path, entry: &Entry) -> Result<(), ListError> {
        if self.options.long_format {
            let stat = entry
                .extended()
                .ok_or_else(|| ListError::PlatformStatUnavailable {
                    path: path.to_path_buf(),
                })?;
            self.out
                .write_all(&format_long(entry, stat, &self.palette))?;
        } else {
            self.out
                .write_all(&format_compact(entry, &self.palette))?;
        }
        Ok(())
    }

    /// Prints a reportable error on the sink. Output failures are handed back instead.
    fn report(&mut self, err: ListError) -> io::Result<()> {
        match err {
            ListError::Output(e) => Err(e),
            err => {
                warn!(error = %err, "listing error");
                self.errors += 1;
                writeln!(self.out, "{}", err)
            }
        }
    }
}

/// Base name used when a file argument is rendered as a lone entry.
fn display_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or_else(|| path.as_os_str())
}
