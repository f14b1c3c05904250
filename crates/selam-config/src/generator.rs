use std::env;

use serde::{Deserialize, Serialize};

fn default_practice_size() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Exercises per extracted practice set
    #[serde(default = "default_practice_size")]
    pub practice_size: usize,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let practice_size = env::var("SELAM_PRACTICE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_practice_size);

        Self { practice_size }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            practice_size: default_practice_size(),
        }
    }
}
