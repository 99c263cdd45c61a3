/// Constants shared across modules.
pub(crate) mod constants;

/// Error handling and the crate-wide Result type.
pub(crate) mod error;
