//! Directory enumeration and entry snapshots for lister.
//!
//! Provides the [Entry] struct, the read-only snapshot rendered by the
//! [Lister](crate::core::Lister), and [browse_dir] which produces them.
//! Link count, owner, and group come from an [ExtendedMetadataProvider] so that
//! platforms without them surface an error in long format instead of blank fields.

use crate::core::formatter::format_attributes;
use crate::error::ListError;

use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Link count, owner id, and group id of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedStat {
    link_count: u64,
    owner_id: u32,
    group_id: u32,
}

impl ExtendedStat {
    pub fn new(link_count: u64, owner_id: u32, group_id: u32) -> Self {
        Self {
            link_count,
            owner_id,
            group_id,
        }
    }

    #[inline]
    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    #[inline]
    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    #[inline]
    pub fn group_id(&self) -> u32 {
        self.group_id
    }
}

/// Source of per entry metadata during enumeration.
///
/// [entry_metadata](Self::entry_metadata) reads a child's own metadata without following
/// symlinks. [extended_stat](Self::extended_stat) returning `None` means the platform
/// cannot supply link count, owner, and group.
pub trait ExtendedMetadataProvider {
    fn entry_metadata(&self, dent: &DirEntry) -> io::Result<Metadata> {
        dent.metadata()
    }

    fn extended_stat(&self, path: &Path, meta: &Metadata) -> Option<ExtendedStat>;
}

impl<T: ExtendedMetadataProvider + ?Sized> ExtendedMetadataProvider for &T {
    fn entry_metadata(&self, dent: &DirEntry) -> io::Result<Metadata> {
        (**self).entry_metadata(dent)
    }

    fn extended_stat(&self, path: &Path, meta: &Metadata) -> Option<ExtendedStat> {
        (**self).extended_stat(path, meta)
    }
}

/// Provider backed by the host's native stat data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMetadata;

impl ExtendedMetadataProvider for NativeMetadata {
    #[cfg(unix)]
    fn extended_stat(&self, _path: &Path, meta: &Metadata) -> Option<ExtendedStat> {
        use std::os::unix::fs::MetadataExt;
        Some(ExtendedStat::new(meta.nlink(), meta.uid(), meta.gid()))
    }

    #[cfg(not(unix))]
    fn extended_stat(&self, _path: &Path, _meta: &Metadata) -> Option<ExtendedStat> {
        None
    }
}

/// A single directory member or standalone file argument.
/// Created by [browse_dir] or [Entry::from_metadata] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Entry {
    name: Box<OsStr>,
    flags: u8,
    size: u64,
    modified: SystemTime,
    mode: String,
    extended: Option<ExtendedStat>,
}

impl Entry {
    pub(crate) const IS_DIR: u8 = 1 << 0;
    pub(crate) const IS_SYMLINK: u8 = 1 << 1;
    pub(crate) const IS_HIDDEN: u8 = 1 << 2;

    pub(crate) fn new(name: OsString, mut flags: u8) -> Self {
        if is_hidden_name(&name) {
            flags |= Self::IS_HIDDEN;
        }
        Entry {
            name: name.into_boxed_os_str(),
            flags,
            size: 0,
            modified: UNIX_EPOCH,
            mode: String::new(),
            extended: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    /// Snapshot an entry from already fetched metadata.
    /// `path` is only handed to the provider.
    pub fn from_metadata<P>(name: OsString, path: &Path, meta: &Metadata, provider: &P) -> Self
    where
        P: ExtendedMetadataProvider + ?Sized,
    {
        let mut flags = 0u8;
        if meta.is_dir() {
            flags |= Self::IS_DIR;
        }
        if meta.file_type().is_symlink() {
            flags |= Self::IS_SYMLINK;
        }

        let mut entry = Entry::new(name, flags);
        entry.size = meta.len();
        entry.modified = meta.modified().unwrap_or(UNIX_EPOCH);
        entry.mode = format_attributes(meta);
        entry.extended = provider.extended_stat(path, meta);
        entry
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    #[inline]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[inline]
    pub fn extended(&self) -> Option<&ExtendedStat> {
        self.extended.as_ref()
    }
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Reads the direct children of `path` into entry snapshots.
///
/// Children come back in name order, which is the enumeration order that later
/// sorts fall back to on ties. Symlinks are not followed.
///
/// # Returns
/// `Err` if the directory itself cannot be enumerated, otherwise one result per child,
/// where a child whose metadata could not be read is an `Err` in place.
pub fn browse_dir<P>(path: &Path, provider: &P) -> Result<Vec<Result<Entry, ListError>>, ListError>
where
    P: ExtendedMetadataProvider + ?Sized,
{
    let unreadable = |source: io::Error| ListError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut children = Vec::with_capacity(64);
    for dent in fs::read_dir(path).map_err(unreadable)? {
        children.push(dent.map_err(unreadable)?);
    }
    children.sort_by_key(|d| d.file_name());

    let entries = children
        .into_iter()
        .map(|dent| {
            let child = dent.path();
            match provider.entry_metadata(&dent) {
                Ok(meta) => Ok(Entry::from_metadata(
                    dent.file_name(),
                    &child,
                    &meta,
                    provider,
                )),
                Err(source) => Err(ListError::EntryMetadataUnavailable {
                    path: child,
                    source,
                }),
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct NoStat;

    impl ExtendedMetadataProvider for NoStat {
        fn extended_stat(&self, _path: &Path, _meta: &Metadata) -> Option<ExtendedStat> {
            None
        }
    }

    #[test]
    fn entry_flags() {
        let file = Entry::new(OsString::from("file.txt"), 0);
        assert!(!file.is_dir());
        assert!(!file.is_hidden());
        assert_eq!(file.name(), "file.txt");

        let dir = Entry::new(OsString::from(".git"), Entry::IS_DIR);
        assert!(dir.is_dir());
        assert!(dir.is_hidden());
        assert!(!dir.is_symlink());
    }

    #[test]
    fn browse_reads_children_in_name_order() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("b.txt"))?;
        File::create(tmp.path().join("a.txt"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let entries = browse_dir(tmp.path(), &NativeMetadata)?
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let names: Vec<_> = entries.iter().map(|e| e.name().to_os_string()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "sub"]);
        assert!(entries[2].is_dir());
        Ok(())
    }

    #[test]
    fn snapshot_carries_size_and_mode() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join("data"), b"12345")?;

        let entries = browse_dir(tmp.path(), &NativeMetadata)?;
        let entry = entries.into_iter().next().ok_or("missing entry")??;
        assert_eq!(entry.size(), 5);
        assert!(entry.mode().starts_with('-'));
        assert_eq!(entry.mode().len(), 10);
        #[cfg(unix)]
        assert_eq!(entry.extended().map(|s| s.link_count()), Some(1));
        Ok(())
    }

    #[test]
    fn provider_without_stat_leaves_extended_empty() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("x"))?;

        let entries = browse_dir(tmp.path(), &NoStat)?;
        let entry = entries.into_iter().next().ok_or("missing entry")??;
        assert!(entry.extended().is_none());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("real"))?;
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link"))?;

        let entries = browse_dir(tmp.path(), &NativeMetadata)?
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let link = entries
            .iter()
            .find(|e| e.name() == "link")
            .ok_or("missing link")?;
        assert!(link.is_symlink());
        assert!(!link.is_dir());
        assert!(link.mode().starts_with('l'));
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        let result = browse_dir(&path, &NativeMetadata);
        assert!(matches!(
            result,
            Err(ListError::DirectoryUnreadable { .. })
        ));
    }
}
