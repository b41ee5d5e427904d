//! # inkpost-shared
//!
//! Building blocks shared between the Inkpost store and its consumers:
//! the writing category enum, the device pseudo-identity, and the error
//! types that go with them.
//!
//! Nothing in this crate touches storage; persistence lives in
//! `inkpost-store`.

pub mod error;
pub mod identity;
pub mod types;

pub use error::ParseKindError;
pub use identity::DeviceIdentity;
pub use types::WritingKind;
