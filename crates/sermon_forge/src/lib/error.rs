use std::string::FromUtf8Error;

/// Failures of the transcript acquisition path. All variants carry plain
/// descriptive strings suitable for direct display.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("File is not valid UTF-8 text: {0}")]
    InvalidText(#[from] FromUtf8Error),
    #[error("Transcription failed: {0}")]
    Transcription(String),
    #[error("Document extraction failed: {0}")]
    Extraction(String),
}
