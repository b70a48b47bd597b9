use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path of the compressed dictionary file
    pub path: String,
}

impl DatasetConfig {
    pub fn new() -> Self {
        let path = env::var("DATASET_PATH").unwrap_or_else(|_| "data/words.txt".to_string());

        Self { path }
    }
}
