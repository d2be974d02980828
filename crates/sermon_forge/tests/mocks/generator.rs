use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use sermon_forge::ContentGenerator;
use sermon_state::ContentKind;

#[derive(Clone, Default)]
pub struct MockGenerator {
    pub fail_kinds: HashSet<ContentKind>,
    pub calls: Arc<Mutex<Vec<ContentKind>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(kinds: impl IntoIterator<Item = ContentKind>) -> Self {
        Self {
            fail_kinds: kinds.into_iter().collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ContentGenerator for MockGenerator {
    const COMPLETION_MODEL: &'static str = "mock-gpt";
    type Error = anyhow::Error;

    async fn generate_one(
        &self,
        kind: ContentKind,
        transcript: &str,
    ) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(kind);
        if self.fail_kinds.contains(&kind) {
            return Err(anyhow::anyhow!("rate limit exceeded"));
        }
        Ok(format!("{kind} for: {transcript}"))
    }
}
