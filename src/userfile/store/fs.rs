use super::Storage;
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Owner read-write, group read, other read.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// A backing file opened for one invocation.
///
/// The file is created if it does not exist. The handle is closed when the
/// store is dropped.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: File,
}

impl FileStore {
    /// Open `path` for reading and writing, creating it with `mode` if absent.
    ///
    /// `mode` is ignored on platforms without Unix permissions.
    pub fn open<P: AsRef<Path>>(path: P, mode: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let file = options.open(&path)?;
        debug!(path = %path.display(), "opened backing file");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStore {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut buffer = Vec::new();
        self.file.read_to_end(&mut buffer)?;
        debug!(path = %self.path.display(), bytes = buffer.len(), "read backing file");
        Ok(buffer)
    }

    fn overwrite(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(bytes)?;
        self.file.flush()?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "rewrote backing file");
        Ok(())
    }
}
