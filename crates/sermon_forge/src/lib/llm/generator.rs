use std::{
    fmt::{Debug, Display},
    future::Future,
    time::Duration,
};

use sermon_state::{ContentKind, ContentResults, GenerationOptions};

pub trait ContentGenerator {
    const COMPLETION_MODEL: &'static str;

    type Error: Debug + Display;

    /// One chat-completion call producing the content for a single kind.
    fn generate_one(
        &self,
        kind: ContentKind,
        transcript: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Sequential execution policy for a generation batch.
///
/// Tasks run one at a time in canonical kind order, with a fixed pause
/// between consecutive calls to ease rate-limit pressure. A failing task
/// contributes a human-readable error entry and never aborts its siblings.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    pause: Duration,
}

impl Default for BatchDriver {
    fn default() -> Self {
        BatchDriver {
            pause: Duration::from_secs(1),
        }
    }
}

impl BatchDriver {
    pub fn new(pause: Duration) -> Self {
        BatchDriver { pause }
    }

    /// Runs every selected task to completion and returns the result map.
    /// `on_result` is invoked after each task settles, success or failure.
    pub async fn run<G, F>(
        &self,
        generator: &G,
        transcript: &str,
        options: &GenerationOptions,
        mut on_result: F,
    ) -> ContentResults
    where
        G: ContentGenerator,
        F: FnMut(ContentKind, &str),
    {
        let mut results = ContentResults::new();

        for (index, kind) in options.selected_kinds().into_iter().enumerate() {
            if index > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            tracing::info!(kind = %kind, "Generating content");
            let value = match generator.generate_one(kind, transcript).await {
                Ok(text) => {
                    tracing::info!(kind = %kind, "Completed generation");
                    text
                }
                Err(e) => {
                    tracing::error!(kind = %kind, error = %e, "Failed to generate content");
                    format!("Error generating content: {e}")
                }
            };

            on_result(kind, &value);
            results.insert(kind, value);
        }

        results
    }
}
