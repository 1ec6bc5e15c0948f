use thiserror::Error;

/// Error type for location expression parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// A modifier other than `complement` or `join` was used.
    #[error("Unsupported location modifier: {0}")]
    UnsupportedModifier(String),

    /// The expression matches none of the recognized location forms.
    #[error("Unparseable location: {0:?}")]
    UnparseableLocation(String),
}

/// Result type alias for gbk-location operations.
pub type Result<T> = std::result::Result<T, LocationError>;
