use std::{
    fmt::{Debug, Display},
    future::Future,
};

use crate::ingest::UploadedFile;

pub trait Transcriber {
    const TRANSCRIPTION_MODEL: &'static str;

    /// Hosted speech-to-text endpoints reject larger payloads, so
    /// implementations check the size before any request is issued.
    const MAX_AUDIO_BYTES: u64 = 25 * 1024 * 1024;

    type Error: Debug + Display;

    fn transcribe(
        &self,
        file: &UploadedFile,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
