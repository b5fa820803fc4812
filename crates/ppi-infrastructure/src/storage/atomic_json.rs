//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe concurrent access to the JSON files that
//! stand in for browser storage keys.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use ppi_core::PpiError;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug, thiserror::Error)]
pub enum AtomicJsonError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Content is not valid JSON for the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// File locking error.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicJsonError> for PpiError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::Io(e) => e.into(),
            AtomicJsonError::Json(e) => e.into(),
            AtomicJsonError::Lock(message) => PpiError::io(message),
        }
    }
}

/// A handle to a JSON file written with tmp file + fsync + rename under an
/// exclusive lock on a sibling `.lock` file.
///
/// Each mutation rewrites the whole file, so concurrent writers serialize on
/// the lock and the last writer wins.
#[derive(Debug, Clone)]
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        // Invalid UTF-8 surfaces as a JSON error, so it is recoverable.
        let data: T = serde_json::from_slice(&bytes)?;
        Ok(Some(data))
    }

    /// Like [`load`](Self::load), but unparseable content is logged and
    /// reported as absent instead of failing.
    pub fn load_or_recover(&self) -> Result<Option<T>, AtomicJsonError> {
        match self.load() {
            Err(AtomicJsonError::Json(e)) => {
                tracing::warn!(
                    "Ignoring unreadable content in {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
            other => other,
        }
    }

    /// Saves data atomically under the file lock.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let _lock = self.acquire_lock()?;
        self.write(data)
    }

    /// Read-modify-write under the file lock.
    ///
    /// The closure receives the current content (or `default_value` when the
    /// file is missing, empty or unreadable) and its return value is passed
    /// back once the new content has been written.
    pub fn update<F, R>(&self, default_value: T, f: F) -> Result<R, AtomicJsonError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load_or_recover()?.unwrap_or(default_value);
        let output = f(&mut data);
        self.write(&data)?;

        Ok(output)
    }

    /// Deletes the file under the lock. Missing files are not an error.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        let _lock = self.acquire_lock()?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            )
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no file name")
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicJsonError> {
        FileLock::acquire(&self.path)
    }
}

/// Exclusive lock held for the lifetime of the guard.
///
/// The `.lock` file itself is left in place; deleting it while another
/// process waits on it would let a third process lock a fresh inode.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        use fs2::FileExt;
        file.lock_exclusive()
            .map_err(|e| AtomicJsonError::Lock(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        use fs2::FileExt;
        let _ = self.file.unlock();
    }
}
