//! The writing store: typed operations over the slot storage.

use std::path::Path;

use chrono::Utc;

use inkpost_shared::DeviceIdentity;

use crate::error::Result;
use crate::events::StoreEvents;
use crate::models::{Comment, Writing};
use crate::storage::{FileStorage, StorageBackend};

/// Slot holding the serialized array of all published writings, newest
/// first.
pub const WRITINGS_SLOT: &str = "published_writings";

/// Slot holding the raw device identity string.
pub const DEVICE_ID_SLOT: &str = "device_user_id";

/// Single source of truth for all writings on this device.
///
/// Construct one per process and pass it by reference to consumers.  Every
/// mutation reloads the full collection, applies the change in memory and
/// writes the collection back, so within one process operations always
/// observe the latest state.  Across processes there is no coordination:
/// last writer wins.
pub struct WritingStore {
    backend: Box<dyn StorageBackend>,
    events: StoreEvents,
}

impl WritingStore {
    /// Open a store over the default platform data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::with_backend(Box::new(FileStorage::new()?)))
    }

    /// Open a store rooted at an explicit directory (tests, embedding).
    pub fn open_at(root: &Path) -> Result<Self> {
        Ok(Self::with_backend(Box::new(FileStorage::open_at(root)?)))
    }

    /// Build a store over any backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            events: StoreEvents::new(),
        }
    }

    /// The change-notification registry for this store.
    pub fn events(&mut self) -> &mut StoreEvents {
        &mut self.events
    }

    /// All stored writings, most recently created first.
    ///
    /// Never fails: an absent, unreadable or unparseable slot reads as an
    /// empty collection.  The corrupt case is logged and otherwise
    /// swallowed; whatever was in the slot is abandoned on the next write.
    pub fn list_all(&self) -> Vec<Writing> {
        let raw = match self.backend.read_slot(WRITINGS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Writings slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(writings) => writings,
            Err(e) => {
                tracing::warn!(error = %e, "Writings slot corrupt, recovering as empty collection");
                Vec::new()
            }
        }
    }

    /// Look up one writing by id.
    pub fn get_by_id(&self, id: &str) -> Option<Writing> {
        self.list_all().into_iter().find(|w| w.id == id)
    }

    /// Publish a writing: prepend it to the collection and persist.
    ///
    /// The caller supplies a fully populated record (id, timestamps,
    /// zeroed rating/comment fields) — see [`Writing::new`].  Broadcasts
    /// a `writing-published` notification on success.
    pub fn create(&mut self, writing: Writing) -> Result<()> {
        let mut writings = self.list_all();
        writings.insert(0, writing.clone());
        self.persist(&writings)?;

        tracing::debug!(id = %writing.id, title = %writing.title, "writing published");
        self.events.emit_published(&writing);
        Ok(())
    }

    /// Replace the stored record with the same id wholesale.
    ///
    /// Returns `false` (leaving storage untouched) when no record has that
    /// id; an update never inserts.  Broadcasts a `writing-updated`
    /// notification on success.
    pub fn update(&mut self, writing: Writing) -> Result<bool> {
        let mut writings = self.list_all();
        let Some(existing) = writings.iter_mut().find(|w| w.id == writing.id) else {
            tracing::debug!(id = %writing.id, "update target not found");
            return Ok(false);
        };

        *existing = writing.clone();
        self.persist(&writings)?;

        self.events.emit_updated(&writing);
        Ok(true)
    }

    /// Fold one rating into a writing's running average.
    ///
    /// Ratings are 1-5 by caller convention; the store applies whatever it
    /// is given.  Returns `false` when the id is unknown.
    pub fn add_rating(&mut self, id: &str, value: u8) -> Result<bool> {
        let Some(mut writing) = self.get_by_id(id) else {
            return Ok(false);
        };

        let old_count = writing.total_ratings;
        writing.average_rating = (writing.average_rating * f64::from(old_count)
            + f64::from(value))
            / f64::from(old_count + 1);
        writing.total_ratings = old_count + 1;
        writing.updated_at = Utc::now();

        self.update(writing)
    }

    /// Append a comment to a writing.  Returns `false` when the id is
    /// unknown.
    pub fn add_comment(&mut self, id: &str, comment: Comment) -> Result<bool> {
        let Some(mut writing) = self.get_by_id(id) else {
            return Ok(false);
        };

        writing.comments.push(comment);
        writing.comments_count = writing.comments.len();
        writing.updated_at = Utc::now();

        self.update(writing)
    }

    /// The device identity, minting and persisting one on first use.
    pub fn device_identity(&self) -> Result<DeviceIdentity> {
        if let Some(id) = self.backend.read_slot(DEVICE_ID_SLOT)? {
            let id = id.trim();
            if !id.is_empty() {
                return Ok(DeviceIdentity::from_id(id));
            }
        }

        let identity = DeviceIdentity::generate();
        self.backend.write_slot(DEVICE_ID_SLOT, identity.id())?;
        tracing::info!(id = %identity, "minted new device identity");
        Ok(identity)
    }

    fn persist(&self, writings: &[Writing]) -> Result<()> {
        let raw = serde_json::to_string(writings)?;
        self.backend.write_slot(WRITINGS_SLOT, &raw)
    }
}
