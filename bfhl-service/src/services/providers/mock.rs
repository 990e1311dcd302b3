//! Mock provider for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::time::Duration;

enum MockBehavior {
    Reply(String),
    Fail,
}

/// Returns a canned reply (optionally after a delay) or a canned failure.
pub struct MockTextProvider {
    behavior: MockBehavior,
    delay: Option<Duration>,
}

impl MockTextProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
            delay: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail => Err(ProviderError::ApiError(
                "Mock provider failure".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
