//! Command handlers, one module per page of the original app:
//! publishing, browsing/searching, reader feedback, and identity.

pub mod browse;
pub mod feedback;
pub mod identity;
pub mod publish;
