use serde::Serialize;

use crate::{ContentKind, ContentResults};

/// Observable state of transcript acquisition.
///
/// `raw_text` holds the latest successful extraction; a failed upload
/// records its message in `error` and leaves `raw_text` untouched.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptState {
    pub raw_text: String,
    pub processed_text: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl TranscriptState {
    /// Copies the raw text into `processed_text`. Currently a no-op
    /// transformation reserved for future NLP passes.
    pub fn process(&mut self) -> &str {
        self.processed_text = self.raw_text.clone();
        &self.processed_text
    }

    pub fn reset(&mut self) {
        *self = TranscriptState::default();
    }
}

/// Observable state of one generation batch.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationState {
    pub results: ContentResults,
    pub is_generating: bool,
    pub error: Option<String>,
    pub pending_items: Vec<ContentKind>,
}

impl GenerationState {
    /// Starts a batch over `kinds`: clears previous results and error,
    /// seeds `pending_items`.
    pub fn begin(&mut self, kinds: Vec<ContentKind>) {
        self.is_generating = true;
        self.error = None;
        self.results.clear();
        self.pending_items = kinds;
    }

    /// Merges one settled task into `results` and removes the kind from
    /// `pending_items`. A kind is removed exactly once, when its result
    /// (success or failure string) lands.
    pub fn record(&mut self, kind: ContentKind, value: String) {
        self.results.insert(kind, value);
        self.pending_items.retain(|pending| *pending != kind);
    }

    /// Stores the final result map and marks the batch settled.
    pub fn settle(&mut self, results: ContentResults) {
        self.results = results;
        self.pending_items.clear();
        self.is_generating = false;
    }

    /// Records a batch-level failure. Partial results are kept as-is so a
    /// UI can still render whatever completed before the failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(error = %message, "Generation batch failed");
        self.error = Some(message);
        self.pending_items.clear();
        self.is_generating = false;
    }

    pub fn reset(&mut self) {
        *self = GenerationState::default();
    }
}
