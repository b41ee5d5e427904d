use thiserror::Error;

/// Failure to parse a writing category from user input.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown writing kind '{0}' (expected poem, story, essay or other)")]
pub struct ParseKindError(pub String);
