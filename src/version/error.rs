use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("versionString must not be missing")]
    MissingInput,

    #[error("versionString '{0}' is invalid")]
    Malformed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot compare a version against a missing version")]
    NullComparison,
}

/// Reasons a property source could not hand out a value.
///
/// Both are recoverable while resolving the runtime version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("Permission denied reading property: {0}")]
    PermissionDenied(String),

    #[error("Property is not valid unicode: {0}")]
    NotUnicode(String),
}
