use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::StoreError;

/// Durable key-value backing for the saved set.
///
/// A write replaces the whole value for the key: a failed write must
/// never leave a partial or mixed payload visible to a later read.
pub trait DurableStore: Send {
    fn read(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
    fn write(&mut self, key: &str, value: Bytes) -> Result<(), StoreError>;
}

/// Ensure the storage directory exists; create if missing.
pub fn ensure_store_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(io_error)?;
        if !meta.is_dir() {
            return Err(StoreError::Io("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(io_error)?;
    }
    Ok(())
}

/// One file per key under a directory, replaced atomically by writing a
/// temp file then renaming.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl DurableStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    fn write(&mut self, key: &str, value: Bytes) -> Result<(), StoreError> {
        ensure_store_dir(&self.dir)?;

        let target = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_error)?;
        tmp.write_all(&value).map_err(io_error)?;
        tmp.flush().map_err(io_error)?;
        tmp.as_file_mut().sync_all().map_err(io_error)?;

        // Replace existing file if present to keep the rename portable.
        if target.exists() {
            fs::remove_file(&target).map_err(io_error)?;
        }
        tmp.persist(&target).map_err(|err| io_error(err.error))?;
        Ok(())
    }
}

fn io_error(err: io::Error) -> StoreError {
    StoreError::Io(err.to_string())
}
