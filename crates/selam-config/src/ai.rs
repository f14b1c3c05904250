use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Explicit configuration for the AI service wrapper.
///
/// The key lives here and travels with the config; clients receive it at
/// construction time instead of reading a process-wide cache.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl AiConfig {
    pub fn new() -> Self {
        let api_key = env::var("SELAM_AI_API_KEY").unwrap_or_default();

        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
        }
    }
}
