//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_EDITOR_CANDIDATES;

/// Optional settings read from config.json. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Override for the Nautilus scripts directory (supports `~`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts_dir: Option<String>,
    /// Replacement for the built-in editor candidate list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_candidates: Option<Vec<String>>,
}

impl Config {
    /// Returns the configured editor candidates, or the built-in list
    pub fn get_editor_candidates(&self) -> Vec<String> {
        match &self.editor_candidates {
            Some(candidates) => candidates.clone(),
            None => DEFAULT_EDITOR_CANDIDATES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
