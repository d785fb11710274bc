//! Flat-file peer store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{Address, StoreError};
use crate::ports::PeerStore;

/// Default peer file name.
pub const DEFAULT_NODES_FILE: &str = "nodes.txt";

/// Known peers as a text file, one address per line.
///
/// On load, spaces are stripped from each line and blank lines are skipped.
/// A missing file loads as empty.
#[derive(Debug, Clone)]
pub struct FilePeerStore {
    path: PathBuf,
}

impl FilePeerStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for FilePeerStore {
    fn default() -> Self {
        Self::new(DEFAULT_NODES_FILE)
    }
}

impl PeerStore for FilePeerStore {
    fn load(&self) -> Result<Vec<Address>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(content
            .split(|b| *b == b'\n')
            .map(|line| {
                line.iter()
                    .copied()
                    .filter(|b| *b != b' ' && *b != b'\r')
                    .collect::<Vec<u8>>()
            })
            .filter(|line| !line.is_empty())
            .map(Address::new)
            .collect())
    }

    fn save(&self, addresses: &[Address]) -> Result<(), StoreError> {
        let mut out = Vec::new();
        for address in addresses {
            if address.as_bytes().contains(&b'\n') {
                warn!(peer = %address, "skipping address containing a newline");
                continue;
            }
            out.extend_from_slice(address.as_bytes());
            out.push(b'\n');
        }

        let mut file = fs::File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(&out).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))
    }
}
