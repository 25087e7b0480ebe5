//! The `skill.json` metadata manifest.
//!
//! Generated through a typed struct rather than a text template so field
//! order and string escaping are owned by the serializer.

use anyhow::Result;
use serde::Serialize;

/// Metadata written to `skill.json` at the skill root.
///
/// Field declaration order is the serialization order.
#[derive(Debug, Clone, Serialize)]
pub struct SkillManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub main: String,
    pub dependencies: serde_json::Map<String, serde_json::Value>,
}

impl SkillManifest {
    /// Default manifest for a freshly scaffolded skill.
    ///
    /// The name is taken verbatim - no normalization.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            description: format!("Description of {name}"),
            author: String::new(),
            license: "MIT".to_string(),
            main: "src/main.py".to_string(),
            dependencies: serde_json::Map::new(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
