//! Error types surfaced by [`crate::get_version`].
//!
//! Per the error-handling design, only two kinds are fatal: a Git mechanism
//! failure (`GitUnavailable`) and a malformed [`crate::Config`]
//! (`InvalidConfiguration`). Every other adverse condition — no working
//! directory, no commits, unparseable tags — is absorbed by the algorithm
//! and reported through the [`crate::Logger`] instead.

use thiserror::Error;

/// Result type alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, VersionerError>;

/// Errors that can abort a [`crate::get_version`] call.
#[derive(Error, Debug)]
pub enum VersionerError {
    /// `build_metadata` could not be tokenized as SemVer build metadata, or
    /// `default_pre_release_identifiers` do not form valid SemVer
    /// pre-release identifiers. Raised at intake, before any Git work.
    #[error("configuration is invalid: {0}")]
    InvalidConfiguration(String),

    /// The Git View could not be constructed, or a query against an
    /// already-open repository failed unrecoverably (object database
    /// corruption, an unreadable pack, and the like). Distinct from
    /// `work_dir` simply not being a Git working directory, which degrades
    /// to a default version rather than erroring (§4.3 Step 1).
    #[error("git repository could not be read: {message}")]
    GitUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl VersionerError {
    pub(crate) fn git_unavailable<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        VersionerError::GitUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
