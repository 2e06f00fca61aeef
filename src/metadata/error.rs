//! Catalog loading errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, CatalogLoadError>;

/// The catalog could not be loaded.
///
/// Always fatal to the current run: planning needs a complete catalog, so
/// there is no partial recovery.
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// A catalog document could not be read.
    #[error("failed to read catalog document '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A catalog document is not valid YAML or does not match the expected shape.
    #[error("malformed catalog document '{path}': {source}")]
    Yaml {
        /// File path, or `<string>` for in-memory input.
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but describes an impossible catalog.
    #[error("invalid catalog in '{path}': {message}")]
    Invalid { path: String, message: String },
}
