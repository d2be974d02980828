use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use sermon_state::{ContentKind, ContentResults, GenerationOptions, GenerationState, TranscriptState};

use crate::{
    error::IngestError,
    ingest::{classify, DocumentExtractor, MediaKind, PlaceholderExtractor, UploadedFile},
    llm::{
        generator::{BatchDriver, ContentGenerator},
        transcriber::Transcriber,
    },
};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Caller-owned transcript acquisition: dispatches an uploaded file by
/// media type to plain-text read, document extraction or audio
/// transcription, and tracks loading/error status in an observable state.
pub struct TranscriptSession<T, E = PlaceholderExtractor> {
    state: Arc<Mutex<TranscriptState>>,
    transcriber: T,
    extractor: E,
}

impl<T: Transcriber> TranscriptSession<T> {
    pub fn new(transcriber: T) -> Self {
        TranscriptSession {
            state: Arc::new(Mutex::new(TranscriptState::default())),
            transcriber,
            extractor: PlaceholderExtractor,
        }
    }
}

impl<T, E> TranscriptSession<T, E>
where
    T: Transcriber,
    E: DocumentExtractor,
{
    /// Swaps the document extractor, keeping state and transcriber.
    pub fn with_extractor<E2: DocumentExtractor>(self, extractor: E2) -> TranscriptSession<T, E2> {
        TranscriptSession {
            state: self.state,
            transcriber: self.transcriber,
            extractor,
        }
    }

    /// Handle to the observable state, for a UI layer to render from.
    pub fn state(&self) -> Arc<Mutex<TranscriptState>> {
        Arc::clone(&self.state)
    }

    /// Produces plain text from an uploaded file. On success the text is
    /// stored in `raw_text`; on failure the message lands in `error` and
    /// `raw_text` is left unchanged. The loading flag is cleared on every
    /// exit path.
    #[tracing::instrument(skip_all, fields(file = %file.name, media_type = %file.media_type))]
    pub async fn extract_text(&self, file: &UploadedFile) -> Result<String, IngestError> {
        {
            let mut state = lock(&self.state);
            state.is_loading = true;
            state.error = None;
        }

        let result = self.dispatch(file).await;

        let mut state = lock(&self.state);
        state.is_loading = false;
        match &result {
            Ok(text) => state.raw_text = text.clone(),
            Err(e) => state.error = Some(e.to_string()),
        }

        result
    }

    async fn dispatch(&self, file: &UploadedFile) -> Result<String, IngestError> {
        match classify(&file.media_type) {
            Some(MediaKind::PlainText) => Ok(String::from_utf8(file.bytes.clone())?),
            Some(MediaKind::Pdf) => self
                .extractor
                .extract_pdf(file)
                .map_err(|e| IngestError::Extraction(e.to_string())),
            Some(MediaKind::Word) => self
                .extractor
                .extract_word(file)
                .map_err(|e| IngestError::Extraction(e.to_string())),
            Some(MediaKind::Audio) => self
                .transcriber
                .transcribe(file)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"))
                .map_err(|e| IngestError::Transcription(e.to_string())),
            None => Err(IngestError::UnsupportedType(file.media_type.clone())),
        }
    }

    /// Copies the raw transcript into the processed slot. Currently an
    /// identity transformation reserved for future NLP passes.
    pub fn process_transcript(&self) -> String {
        lock(&self.state).process().to_string()
    }

    pub fn reset(&self) {
        lock(&self.state).reset();
    }
}

/// Caller-owned generation batch orchestration around a [`ContentGenerator`].
///
/// Runs the sequential policy via [`BatchDriver`] and mirrors every settled
/// task into an observable [`GenerationState`]. Not designed for concurrent
/// batches: starting a second batch before the first settles overwrites the
/// state.
pub struct GenerationSession<G> {
    state: Arc<Mutex<GenerationState>>,
    generator: G,
    driver: BatchDriver,
}

impl<G: ContentGenerator> GenerationSession<G> {
    pub fn new(generator: G) -> Self {
        GenerationSession {
            state: Arc::new(Mutex::new(GenerationState::default())),
            generator,
            driver: BatchDriver::default(),
        }
    }

    /// Overrides the fixed pause between consecutive generation calls.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.driver = BatchDriver::new(pause);
        self
    }

    /// Handle to the observable state, for a UI layer to render from.
    pub fn state(&self) -> Arc<Mutex<GenerationState>> {
        Arc::clone(&self.state)
    }

    /// Runs a batch with no external progress callback.
    pub async fn start_batch(
        &self,
        transcript: &str,
        options: &GenerationOptions,
    ) -> ContentResults {
        self.start_batch_with(transcript, options, |_, _| {}).await
    }

    /// Runs a batch, invoking `on_result` after each task settles with the
    /// kind and its text (or per-task error string). Per-task failures are
    /// captured in the result map and never abort sibling tasks.
    #[tracing::instrument(skip_all)]
    pub async fn start_batch_with(
        &self,
        transcript: &str,
        options: &GenerationOptions,
        mut on_result: impl FnMut(ContentKind, &str),
    ) -> ContentResults {
        lock(&self.state).begin(options.selected_kinds());

        let state = Arc::clone(&self.state);
        let results = self
            .driver
            .run(&self.generator, transcript, options, |kind, value| {
                lock(&state).record(kind, value.to_string());
                on_result(kind, value);
            })
            .await;

        lock(&self.state).settle(results.clone());
        results
    }

    /// Records a failure that happened outside any generation task, e.g.
    /// transcript acquisition or client setup. Partial results survive.
    pub fn fail(&self, message: impl Into<String>) {
        lock(&self.state).fail(message);
    }

    pub fn reset(&self) {
        lock(&self.state).reset();
    }
}
