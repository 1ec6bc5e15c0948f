use thiserror::Error;

/// Error type for flat-file tokenization.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlatFileError {
    /// A field line has no space separating its name from its value.
    #[error("Malformed field line {line}: no space after field name in {content:?}")]
    MalformedFieldLine { line: usize, content: String },

    /// An indented line appeared before any field it could belong to.
    #[error("Indented line {line} has no enclosing field: {content:?}")]
    OrphanLine { line: usize, content: String },
}

/// Result type alias for gbk-flatfile operations.
pub type Result<T> = std::result::Result<T, FlatFileError>;
