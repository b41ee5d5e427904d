//! Slot storage backends.
//!
//! Persistence is a handful of named text slots (key-value, whole-value
//! reads and writes).  [`FileStorage`] keeps one file per slot under a data
//! directory; [`MemoryStorage`] keeps them in a map for tests and
//! ephemeral embedding.  The [`WritingStore`](crate::WritingStore) takes
//! the backend by trait object so a real backend can be substituted later
//! without touching consumers.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::error::{Result, StoreError};

/// A named-slot key-value store.  Reads and writes are whole-value; there
/// is no partial update and no locking across processes.
pub trait StorageBackend: Send {
    /// Read the full contents of a slot, or `None` if it was never written.
    fn read_slot(&self, slot: &str) -> Result<Option<String>>;

    /// Overwrite a slot with the given contents.
    fn write_slot(&self, slot: &str, value: &str) -> Result<()>;
}

/// One file per slot under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (or create) the default application data directory:
    /// - Linux:   `~/.local/share/inkpost/`
    /// - macOS:   `~/Library/Application Support/io.inkpost.inkpost/`
    /// - Windows: `{FOLDERID_RoamingAppData}\inkpost\inkpost\data\`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("io", "inkpost", "inkpost").ok_or(StoreError::NoDataDir)?;

        let root = project_dirs.data_dir().to_path_buf();

        tracing::info!(path = %root.display(), "opening slot storage");

        Self::open_at(&root)
    }

    /// Open (or create) slot storage rooted at an explicit directory.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Root directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(slot)
    }
}

impl StorageBackend for FileStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, slot: &str, value: &str) -> Result<()> {
        std::fs::write(self.slot_path(slot), value)?;
        Ok(())
    }
}

/// In-memory slot storage.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
