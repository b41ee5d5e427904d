//! # inkpost-store
//!
//! Local storage for published writings: the single source of truth for
//! every piece on this device.  The whole collection is serialized as one
//! JSON array in a named slot of a key-value [`storage::StorageBackend`];
//! a second slot holds the lazily generated device identity.
//!
//! The crate exposes a synchronous [`WritingStore`] handle with typed
//! operations (list, get, create, update, rate, comment) and an in-process
//! event emitter that broadcasts `writing-published` / `writing-updated`
//! notifications to interested consumers.
//!
//! Every mutation is a full read-collection / mutate / write-collection
//! cycle with no locking: two processes sharing one data directory can
//! overwrite each other (last writer wins).  That matches the single-user,
//! single-device scope; anything stronger needs a real backend.

pub mod events;
pub mod models;
pub mod storage;
pub mod store;

mod error;

pub use error::StoreError;
pub use events::StoreEvents;
pub use models::{Comment, CommentAuthor, Writing};
pub use store::WritingStore;
