//! In-process change notifications.
//!
//! The store broadcasts a notification after every successful persist so
//! other parts of the application can refresh.  Payloads are the affected
//! [`Writing`] serialized as a JSON string.  Listener callbacks run on
//! background threads (the emitter's delivery model); this is the only
//! transport — there is no cross-process signal, so a second process
//! sharing the data directory only sees changes on its next read.

use event_emitter_rs::EventEmitter;

use crate::models::Writing;

pub const EVENT_WRITING_PUBLISHED: &str = "writing-published";
pub const EVENT_WRITING_UPDATED: &str = "writing-updated";

/// Listener registry for store change notifications.
pub struct StoreEvents {
    emitter: EventEmitter,
}

impl StoreEvents {
    pub fn new() -> Self {
        Self {
            emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for newly published writings.  Returns a
    /// listener id usable with [`Self::remove_listener`].
    pub fn on_published<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(EVENT_WRITING_PUBLISHED, listener)
    }

    /// Register a listener for updated writings (new rating or comment).
    pub fn on_updated<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(EVENT_WRITING_UPDATED, listener)
    }

    /// Deregister a previously registered listener.
    pub fn remove_listener(&mut self, id: &str) -> Option<String> {
        self.emitter.remove_listener(id)
    }

    pub(crate) fn emit_published(&mut self, writing: &Writing) {
        self.emit(EVENT_WRITING_PUBLISHED, writing);
    }

    pub(crate) fn emit_updated(&mut self, writing: &Writing) {
        self.emit(EVENT_WRITING_UPDATED, writing);
    }

    fn emit(&mut self, event: &str, writing: &Writing) {
        match serde_json::to_string(writing) {
            Ok(payload) => {
                self.emitter.emit(event, payload);
            }
            Err(e) => tracing::error!(event, error = %e, "Failed to emit event"),
        }
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}
