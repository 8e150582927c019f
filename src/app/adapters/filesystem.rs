//! Filesystem access for month files
//!
//! The report pipelines only touch storage through [`WeatherStore`], so tests
//! can substitute an in-memory store and observe exactly which files were
//! probed or opened.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

/// Source of month files
pub trait WeatherStore {
    /// Whether a month file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Open a month file for line-by-line reading
    ///
    /// The returned reader is the only handle on the file; dropping it
    /// releases the file.
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead + '_>>;
}

/// Store backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStore;

impl WeatherStore for FileSystemStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn open(&self, path: &Path) -> Result<Box<dyn BufRead + '_>> {
        trace!("Opening {}", path.display());
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open file {}", path.display()), e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
