use serde::{Deserialize, Serialize};

use crate::last_place::default_phrases;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct RankEngineOptions {
    /// Phrases attached to the lowest ranked player. Empty list disables the annotation.
    pub last_place_phrases: Vec<String>,
}

impl Default for RankEngineOptions {
    fn default() -> Self {
        Self {
            last_place_phrases: default_phrases(),
        }
    }
}
