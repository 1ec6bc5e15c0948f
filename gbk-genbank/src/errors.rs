use thiserror::Error;

use gbk_flatfile::FlatFileError;
use gbk_location::LocationError;

#[derive(Error, Debug)]
pub enum GenbankError {
    #[error(transparent)]
    FlatFile(#[from] FlatFileError),

    #[error("Invalid location for feature `{key}`: {source}")]
    Location {
        key: String,
        #[source]
        source: LocationError,
    },
}

impl GenbankError {
    pub fn is_malformed_field_line(&self) -> bool {
        matches!(self, GenbankError::FlatFile(FlatFileError::MalformedFieldLine { .. }))
    }

    pub fn is_unsupported_modifier(&self) -> bool {
        matches!(
            self,
            GenbankError::Location { source: LocationError::UnsupportedModifier(_), .. }
        )
    }

    pub fn is_unparseable_location(&self) -> bool {
        matches!(
            self,
            GenbankError::Location { source: LocationError::UnparseableLocation(_), .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GenbankError>;
