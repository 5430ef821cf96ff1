//! Read-only access to mod archives.
//!
//! An archive is treated as an opaque key -> bytes store. Opening never
//! panics on a corrupt container; it returns an [`ArchiveError`] so callers
//! can record the failure and move on to the next archive.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;
use zip::{ZipArchive, result::ZipError};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid archive {}: {source}", .path.display())]
    Zip { path: PathBuf, source: ZipError },
}

/// An opened archive. The underlying file handle is released on drop.
pub struct Archive {
    path: PathBuf,
    zip: ZipArchive<BufReader<File>>,
}

impl Archive {
    pub fn try_open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let zip = ZipArchive::new(BufReader::new(file)).map_err(|source| ArchiveError::Zip {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            zip,
        })
    }

    /// Logical paths of every entry, in central directory order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.zip.file_names()
    }

    /// Read an entry's raw bytes.
    ///
    /// A path that is not present yields `Ok(None)`; only an unreadable
    /// entry is an error.
    pub fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>, ArchiveError> {
        let path = &self.path;
        let mut entry = match self.zip.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(source) => {
                return Err(ArchiveError::Zip {
                    path: path.clone(),
                    source,
                });
            }
        };

        // The declared size comes from the central directory and is not
        // trusted for preallocation.
        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|source| ArchiveError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Some(buf))
    }
}
