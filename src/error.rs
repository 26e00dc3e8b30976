use std::path::PathBuf;

/// Error type for the export pipeline.
///
/// Every failure is terminal: the run either produces the full output file
/// or nothing. Using `thiserror` for automatic `Error` trait implementation.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The bookmark source file does not exist or cannot be read
    #[error("Cannot read bookmark file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid JSON, or lacks the bookmark-bar tree
    #[error("Cannot parse bookmark file: {0}")]
    SourceParse(String),

    /// The rendered document could not be written to the output path
    #[error("Cannot write {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive path prompt broke down (not a cancelled prompt;
    /// cancellation falls back to the default path instead)
    #[error("Path prompt failed: {0}")]
    Picker(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;

impl From<simd_json::Error> for ExportError {
    fn from(err: simd_json::Error) -> Self {
        ExportError::SourceParse(err.to_string())
    }
}
