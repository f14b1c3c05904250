use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::content::ContentConfig;
use self::generator::GeneratorConfig;

pub mod ai;
pub mod content;
pub mod generator;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub content: ContentConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Built-in defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            ai: AiConfig::new(),
            content: ContentConfig::new(),
            generator: GeneratorConfig::new(),
        }
    }
}
