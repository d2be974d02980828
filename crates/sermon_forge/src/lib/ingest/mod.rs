use std::path::Path;

/// Word-processor media types accepted at the upload boundary.
pub const WORD_MEDIA_TYPES: [&str; 2] = [
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// An uploaded file with its declared media type, as handed over by the
/// upload boundary.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        UploadedFile {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, deriving the media type from its extension.
    /// Unknown extensions become `application/octet-stream` and are
    /// rejected downstream.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        Ok(UploadedFile {
            name,
            media_type: media_type_for_extension(extension).to_string(),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// The four media-type families the upload boundary recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    PlainText,
    Pdf,
    Word,
    Audio,
}

pub fn classify(media_type: &str) -> Option<MediaKind> {
    if media_type == "text/plain" {
        Some(MediaKind::PlainText)
    } else if media_type == "application/pdf" {
        Some(MediaKind::Pdf)
    } else if WORD_MEDIA_TYPES.contains(&media_type) {
        Some(MediaKind::Word)
    } else if media_type.starts_with("audio/") {
        Some(MediaKind::Audio)
    } else {
        None
    }
}

/// Extraction seam for PDF and Word uploads, so a real parser can be
/// substituted without touching callers.
pub trait DocumentExtractor {
    fn extract_pdf(&self, file: &UploadedFile) -> anyhow::Result<String>;

    fn extract_word(&self, file: &UploadedFile) -> anyhow::Result<String>;
}

/// Canned extraction used until a real PDF/Word parser is wired in.
/// The returned text names the uploaded file and states the limitation.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderExtractor;

impl DocumentExtractor for PlaceholderExtractor {
    fn extract_pdf(&self, file: &UploadedFile) -> anyhow::Result<String> {
        tracing::warn!(file = %file.name, "PDF parsing not implemented, returning placeholder");
        Ok(format!(
            "Simulated PDF extraction from {}\n\nThis is placeholder text. \
             A PDF parsing library is required to extract the actual content of the document.",
            file.name
        ))
    }

    fn extract_word(&self, file: &UploadedFile) -> anyhow::Result<String> {
        tracing::warn!(file = %file.name, "DOC/DOCX parsing not implemented, returning placeholder");
        Ok(format!(
            "Simulated DOC/DOCX extraction from {}\n\nThis is placeholder text. \
             A document parsing library is required to extract the actual content of the document.",
            file.name
        ))
    }
}
