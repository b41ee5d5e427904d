use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix shared by every generated device id.
pub const DEVICE_ID_PREFIX: &str = "user_";

/// Number of random characters after the prefix.
const DEVICE_ID_SUFFIX_LEN: usize = 13;

/// A device-local pseudo-identity. No account, no verification: the id is
/// an opaque random string minted once per device and reused for every
/// writing and comment published from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    id: String,
}

impl DeviceIdentity {
    /// Mint a fresh random identity (`user_` + 13 lowercase base-36 chars).
    pub fn generate() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(DEVICE_ID_SUFFIX_LEN)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        Self {
            id: format!("{DEVICE_ID_PREFIX}{suffix}"),
        }
    }

    /// Restore an identity from a previously persisted id string.
    /// Any non-empty string is accepted; the id is opaque.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The opaque id string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name derived deterministically from the id: `Writer `
    /// followed by the first five characters after the `user_` prefix.
    pub fn display_name(&self) -> String {
        let tail = self.id.strip_prefix(DEVICE_ID_PREFIX).unwrap_or(&self.id);
        let short: String = tail.chars().take(5).collect();
        format!("Writer {short}")
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
