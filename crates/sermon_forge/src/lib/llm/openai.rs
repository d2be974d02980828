use reqwest::Client;
use serde::Deserialize;
use sermon_state::ContentKind;

use crate::{ingest::UploadedFile, ContentGenerator, Transcriber};

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Audio file exceeds the 25MB size limit for transcription ({size} bytes)")]
    PayloadTooLarge { size: u64 },
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_transcribe_request(
        &self,
        file: &UploadedFile,
    ) -> Result<TranscribeResponse, OpenAIError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)?;

        let form = reqwest::multipart::Form::new()
            .text("model", <Self as Transcriber>::TRANSCRIPTION_MODEL)
            .text("language", "en")
            .part("file", part);

        let resp = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<TranscribeResponse>().await?)
    }

    pub async fn send_completion_request(
        &self,
        model: &str,
        prompt: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Transcriber for OpenAIClient {
    const TRANSCRIPTION_MODEL: &'static str = "whisper-1";
    type Error = OpenAIError;

    async fn transcribe(&self, file: &UploadedFile) -> Result<String, Self::Error> {
        if file.size() > Self::MAX_AUDIO_BYTES {
            tracing::warn!(size = file.size(), "Audio file too large to transcribe");
            return Err(OpenAIError::PayloadTooLarge { size: file.size() });
        }

        let response = self
            .send_transcribe_request(file)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"))?;

        Ok(response.text)
    }
}

impl ContentGenerator for OpenAIClient {
    const COMPLETION_MODEL: &'static str = "gpt-4o";
    type Error = OpenAIError;

    async fn generate_one(
        &self,
        kind: ContentKind,
        transcript: &str,
    ) -> Result<String, Self::Error> {
        let prompt = format!(
            "{}\n\nSERMON TRANSCRIPT:\n{transcript}",
            prompt_template(kind).trim_end()
        );

        let response = self
            .send_completion_request(
                Self::COMPLETION_MODEL,
                prompt,
                kind.temperature(),
                kind.max_output_tokens(),
            )
            .await
            .inspect_err(|e| tracing::error!(kind = %kind, error = %e, "Completion request failed"))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(OpenAIError::EmptyCompletion)
    }
}

fn prompt_template(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Critique => include_str!("./prompts/critique.txt"),
        ContentKind::PerspectiveFeedback => include_str!("./prompts/perspective_feedback.txt"),
        ContentKind::BibleStudyGuide => include_str!("./prompts/bible_study_guide.txt"),
        ContentKind::KidsFollowAlong => include_str!("./prompts/kids_follow_along.txt"),
    }
}
