//! Engine configuration.
//!
//! A plain serde-backed struct with defaults for every field; parse from a
//! JSON string via [`StrakeConfig::from_json`]. There is no config file
//! discovery — embedders own where the JSON comes from.

use serde::{Deserialize, Serialize};

/// How members with no callable shape are classified.
///
/// `Lenient` folds them into the property sentinel, so a plain data value
/// can satisfy a property-typed abstract member. `Strict` rejects them at
/// classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignaturePolicy {
    Lenient,
    Strict,
}

impl Default for SignaturePolicy {
    fn default() -> Self {
        SignaturePolicy::Lenient
    }
}

/// Top-level strake configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrakeConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub policy: SignaturePolicy,
    /// Name given to the contract root type the engine registers at
    /// construction.
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_root_name() -> String {
    "ContractRoot".to_string()
}

impl Default for StrakeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            policy: SignaturePolicy::default(),
            root_name: default_root_name(),
        }
    }
}

impl StrakeConfig {
    /// Parse a configuration from a JSON document. Missing fields fall back
    /// to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
