//! One-word answers from a text provider, with a fixed fallback.
//!
//! Provider absence, errors, timeouts and unusable replies all resolve to the
//! fallback answer; nothing from the provider reaches the caller as an error.

use crate::config::AiConfig;
use crate::services::providers::TextProvider;
use std::sync::Arc;
use std::time::Duration;

const PROMPT_PREFIX: &str = "Answer in ONE WORD only: ";

pub struct AnswerService {
    provider: Option<Arc<dyn TextProvider>>,
    fallback: String,
    timeout: Duration,
}

impl AnswerService {
    pub fn new(provider: Option<Arc<dyn TextProvider>>, config: &AiConfig) -> Self {
        Self {
            provider,
            fallback: config.fallback_answer.clone(),
            timeout: config.timeout,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer `question` in a single alphabetic word.
    pub async fn answer(&self, question: &str) -> String {
        let Some(provider) = &self.provider else {
            tracing::debug!("No AI provider configured, using fallback answer");
            return self.fallback.clone();
        };

        let prompt = format!("{}{}", PROMPT_PREFIX, question);

        match tokio::time::timeout(self.timeout, provider.generate(&prompt)).await {
            Ok(Ok(text)) => match extract_one_word(&text) {
                Some(word) => word,
                None => {
                    tracing::warn!(
                        model = %provider.model(),
                        "AI reply had no alphabetic first word, using fallback answer"
                    );
                    self.fallback.clone()
                }
            },
            Ok(Err(e)) => {
                tracing::warn!(
                    model = %provider.model(),
                    error = %e,
                    "AI provider failed, using fallback answer"
                );
                self.fallback.clone()
            }
            Err(_) => {
                tracing::warn!(
                    model = %provider.model(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "AI provider timed out, using fallback answer"
                );
                self.fallback.clone()
            }
        }
    }
}

/// First whitespace-delimited token with every non-alphabetic character
/// removed, or `None` if nothing is left.
pub fn extract_one_word(text: &str) -> Option<String> {
    let word: String = text
        .split_whitespace()
        .next()?
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    (!word.is_empty()).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;

    fn service(provider: Option<MockTextProvider>, timeout: Duration) -> AnswerService {
        let config = AiConfig {
            fallback_answer: "Mumbai".to_string(),
            timeout,
        };
        AnswerService::new(
            provider.map(|p| Arc::new(p) as Arc<dyn TextProvider>),
            &config,
        )
    }

    #[test]
    fn extract_takes_first_token_and_strips_punctuation() {
        assert_eq!(extract_one_word("Mumbai."), Some("Mumbai".to_string()));
        assert_eq!(extract_one_word("  New Delhi\n"), Some("New".to_string()));
        assert_eq!(extract_one_word("**Paris**"), Some("Paris".to_string()));
        assert_eq!(extract_one_word("42nd"), Some("nd".to_string()));
    }

    #[test]
    fn extract_rejects_unusable_replies() {
        assert_eq!(extract_one_word(""), None);
        assert_eq!(extract_one_word("   \n"), None);
        assert_eq!(extract_one_word("1947 India"), None);
    }

    #[tokio::test]
    async fn no_provider_uses_fallback() {
        let svc = service(None, Duration::from_secs(1));
        assert!(!svc.has_provider());
        assert_eq!(svc.answer("Capital of Maharashtra?").await, "Mumbai");
    }

    #[tokio::test]
    async fn provider_reply_is_reduced_to_one_word() {
        let svc = service(
            Some(MockTextProvider::replying("Paris, of course.")),
            Duration::from_secs(1),
        );
        assert_eq!(svc.answer("Capital of France?").await, "Paris");
    }

    #[tokio::test]
    async fn provider_failure_uses_fallback() {
        let svc = service(Some(MockTextProvider::failing()), Duration::from_secs(1));
        assert_eq!(svc.answer("Anything?").await, "Mumbai");
    }

    #[tokio::test]
    async fn punctuation_only_reply_uses_fallback() {
        let svc = service(Some(MockTextProvider::replying("...")), Duration::from_secs(1));
        assert_eq!(svc.answer("Anything?").await, "Mumbai");
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_fallback() {
        let svc = service(
            Some(MockTextProvider::replying("Paris").with_delay(Duration::from_secs(5))),
            Duration::from_millis(50),
        );
        assert_eq!(svc.answer("Capital of France?").await, "Mumbai");
    }
}
