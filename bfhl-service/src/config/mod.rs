use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_OFFICIAL_EMAIL: &str = "bfhl@example.com";
pub const DEFAULT_FALLBACK_ANSWER: &str = "Mumbai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Upper bound for a single AI lookup before the fallback answer is used.
const DEFAULT_AI_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    /// Echoed in every successful response and in `/health`.
    pub official_email: String,
    pub ai: AiConfig,
    /// `None` when no API key is configured; every AI lookup then falls back.
    pub gemini: Option<GeminiConfig>,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub fallback_answer: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            fallback_answer: DEFAULT_FALLBACK_ANSWER.to_string(),
            timeout: Duration::from_millis(DEFAULT_AI_TIMEOUT_MS),
        }
    }
}

impl BfhlConfig {
    /// Configuration with defaults and no AI provider.
    pub fn new(official_email: impl Into<String>) -> Self {
        Self {
            common: core_config::Config::default(),
            official_email: official_email.into(),
            ai: AiConfig::default(),
            gemini: None,
        }
    }

    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let timeout = parse_timeout(env::var("AI_TIMEOUT_MS").ok().as_deref())?;

        let gemini = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key: Secret::new(api_key),
                model: get_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: get_env("GEMINI_API_BASE", GEMINI_API_BASE),
            });

        Ok(BfhlConfig {
            common: common_config,
            official_email: get_env("OFFICIAL_EMAIL", DEFAULT_OFFICIAL_EMAIL),
            ai: AiConfig {
                fallback_answer: get_env("AI_FALLBACK_ANSWER", DEFAULT_FALLBACK_ANSWER),
                timeout,
            },
            gemini,
        })
    }
}

/// `AI_TIMEOUT_MS` in milliseconds; unset or blank means the default.
fn parse_timeout(raw: Option<&str>) -> Result<Duration, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Duration::from_millis(DEFAULT_AI_TIMEOUT_MS));
    };
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid AI_TIMEOUT_MS {:?}: {}", raw, e))
        })
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
