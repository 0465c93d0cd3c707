//! State persistence
//!
//! The whole [`ProgressionState`] is stored as one JSON document under the
//! `xpquest-storage` key (`<data_dir>/xpquest-storage.json`). Writes are
//! atomic (temp file + rename) and serialized across processes with an
//! exclusive lock, so a CLI run never interleaves with another.
//!
//! The engine stays free of I/O. Callers go through [`StateStore::update`],
//! which locks, loads, applies one engine operation and saves.

mod day_boundary;

pub use day_boundary::{ResetMarker, ensure_daily_reset};

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::progression::ProgressionState;

/// Fixed storage key of the state document
pub const STORAGE_KEY: &str = "xpquest-storage";

/// Default file name for exported backups
pub const EXPORT_FILE_NAME: &str = "xpquest-backup.json";

/// Current document format version
pub const DOCUMENT_VERSION: u32 = 0;

/// Error type for state storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("State document is corrupted: {path}: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Nothing to export yet: {0} does not exist")]
    NothingToExport(PathBuf),
}

/// The persisted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDocument {
    pub state: ProgressionState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedDocument {
    pub fn new(state: ProgressionState) -> Self {
        Self {
            state,
            version: DOCUMENT_VERSION,
        }
    }
}

/// File-backed store for the progression state
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Open a store rooted at `dir`. Nothing is created until the first save.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the state document
    pub fn document_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(format!("{}.lock", STORAGE_KEY))
    }

    /// Load the state. A missing document yields the fresh default state.
    pub fn load(&self) -> Result<ProgressionState> {
        let path = self.document_path();
        if !path.exists() {
            debug!(path = %path.display(), "No state document yet, starting fresh");
            return Ok(ProgressionState::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read state document: {}", path.display()))?;

        let document: PersistedDocument =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupted {
                path: path.clone(),
                source,
            })?;

        Ok(document.state)
    }

    /// Save the state under an exclusive lock
    pub fn save(&self, state: &ProgressionState) -> Result<()> {
        let _lock = self.lock()?;
        self.write_document(state)
    }

    /// Apply one operation to the stored state and persist the result.
    ///
    /// The lock is held from load to save, so concurrent callers observe
    /// either the state before or after the operation.
    pub fn update<T>(&self, op: impl FnOnce(&mut ProgressionState) -> T) -> Result<T> {
        let _lock = self.lock()?;
        let mut state = self.load()?;
        let result = op(&mut state);
        self.write_document(&state)?;
        Ok(result)
    }

    /// Like [`update`](Self::update), but the document is only rewritten
    /// when `op` succeeds. An error leaves the stored state untouched.
    pub fn try_update<T, E>(&self, op: impl FnOnce(&mut ProgressionState) -> Result<T, E>) -> Result<T>
    where
        E: Into<anyhow::Error>,
    {
        let _lock = self.lock()?;
        let mut state = self.load()?;
        let result = op(&mut state).map_err(Into::into)?;
        self.write_document(&state)?;
        Ok(result)
    }

    /// Copy the persisted document to `target` byte for byte
    pub fn export_to(&self, target: &Path) -> Result<()> {
        let source = self.document_path();
        if !source.exists() {
            return Err(StoreError::NothingToExport(source).into());
        }

        let _lock = self.lock()?;
        std::fs::copy(&source, target).with_context(|| {
            format!(
                "Failed to export {} to {}",
                source.display(),
                target.display()
            )
        })?;

        info!(target = %target.display(), "Exported state document");
        Ok(())
    }

    /// Acquire the store lock (released when the returned file is dropped)
    fn lock(&self) -> Result<File> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create data directory: {}", self.dir.display())
        })?;

        // Separate lock file so the document itself can be renamed over
        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire state lock")?;

        Ok(lock_file)
    }

    /// Atomic write; caller must hold the lock
    fn write_document(&self, state: &ProgressionState) -> Result<()> {
        let path = self.document_path();
        let document = PersistedDocument::new(state.clone());
        let content =
            serde_json::to_string(&document).with_context(|| "Failed to serialize state")?;

        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write state document")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync state document")?;

        std::fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to rename state document: {}", path.display()))?;

        debug!(path = %path.display(), "Saved state document");
        Ok(())
    }
}
