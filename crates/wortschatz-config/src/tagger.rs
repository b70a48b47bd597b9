use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Base URL of the part-of-speech tagging service
    pub api_url: String,
    /// Sentences per batch request
    pub batch_size: usize,
}

impl TaggerConfig {
    pub fn new() -> Self {
        let api_url =
            env::var("TAG_API_URL").unwrap_or_else(|_| "http://localhost:8000/tag".to_string());

        let batch_size = env::var("TAG_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10); // 10 sentences default

        Self {
            api_url,
            batch_size,
        }
    }
}
