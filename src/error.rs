//! Error kinds reported while listing.
//!
//! Every variant except [ListError::Output] is printed inline on the listing sink
//! and handled by the [Lister](crate::core::Lister) as either skip-and-continue or
//! abort-current-call. [ListError::Output] means the sink itself failed and ends the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    /// Enumerating a directory's children failed. The directory is abandoned.
    #[error("Error reading directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a single child could not be read. The child is skipped.
    #[error("Error getting file info for {}: {source}", .path.display())]
    EntryMetadataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Link count, owner, or group is unavailable on this platform.
    /// Aborts the whole listing call in long format.
    #[error("Error getting file stats for {}", .path.display())]
    PlatformStatUnavailable { path: PathBuf },

    /// A top-level argument could not be accessed at all.
    #[error("Error: cannot access '{}': {source}", .path.display())]
    PathUnstatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_reference_the_path() {
        let err = ListError::PathUnstatable {
            path: PathBuf::from("missing/thing"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Error: cannot access 'missing/thing': not found"
        );

        let err = ListError::PlatformStatUnavailable {
            path: PathBuf::from("d/x"),
        };
        assert_eq!(err.to_string(), "Error getting file stats for d/x");
    }

    #[test]
    fn io_errors_convert_to_output() {
        let err = ListError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, ListError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
