use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::tagger::TaggerConfig;

pub mod dataset;
pub mod tagger;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub tagger: TaggerConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dataset: DatasetConfig::new(),
            tagger: TaggerConfig::new(),
        }
    }
}
