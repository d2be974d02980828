mod error;
pub mod ingest;
mod llm;
mod session;
pub mod tracing;

pub use error::IngestError;
pub use ingest::{DocumentExtractor, PlaceholderExtractor, UploadedFile};
pub use llm::openai;
pub use llm::{
    generator::{BatchDriver, ContentGenerator},
    transcriber::Transcriber,
};
pub use session::{GenerationSession, TranscriptSession};
