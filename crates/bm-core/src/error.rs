use thiserror::Error;

/// Errors originating from the conversion core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A caller-supplied value is out of its domain (block size, orientation).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An image or palette source could not be read or decoded.
    #[error("Missing resource {path}: {reason}")]
    MissingResource {
        /// Path of the resource.
        path: String,
        /// What went wrong while loading it.
        reason: String,
    },

    /// The placement sink reported an error.
    #[error("Placement sink failure: {0}")]
    SinkFailure(String),
}

impl CoreError {
    /// Shorthand for a `MissingResource` built from any displayable cause.
    pub fn missing(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::MissingResource {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
