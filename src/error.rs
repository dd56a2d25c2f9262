//! Error types for the gather library.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gather library.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was out of range or otherwise unusable, e.g. requesting
    /// more random entries than the collection holds.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// An extension was invoked under a name that was never registered.
    #[error("unknown operation: no extension registered under `{name}`")]
    UnknownOperation {
        /// The unregistered extension name
        name: String,
    },

    /// A key was required to be present but was not.
    #[error("missing key: `{key}` is not present in the collection")]
    MissingKey {
        /// Display form of the absent key
        key: String,
    },

    /// JSON text could not be parsed during normalization or deserialization.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
