use serde::{Deserialize, Serialize};

/// Where supplemental vocabulary comes from
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// TSV files (`topic\tnative\tlearning`) merged after the embedded tables
    #[serde(default)]
    pub additional_vocabulary_paths: Vec<String>,
}

impl ContentConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
