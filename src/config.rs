use crate::{tools::{registry::ToolRegistry, ToolSpec}, validator::ValidationOptions};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "binguard.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Options for `[[binary]]` entries that do not name a tool.
    pub defaults: ValidationOptions,
    pub tool: Vec<ToolSpec>,
    pub binary: Vec<BinaryEntry>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct BinaryEntry {
    #[serde(default)]
    pub tool: Option<String>,
    /// Missing values validate as an empty path.
    #[serde(default)]
    pub path: Option<String>,
}

impl BinaryEntry {
    pub fn subject(&self) -> String {
        self.tool.clone().unwrap_or_else(|| "binary".to_string())
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for t in &self.tool {
            if t.name.trim().is_empty() { anyhow::bail!("tool name must not be empty"); }
            if !seen.insert(t.name.as_str()) { anyhow::bail!("duplicate tool name: {}", t.name); }
            if t.allowed_basenames.iter().all(|b| b.trim().is_empty()) {
                anyhow::bail!("tool {} must list at least one allowed basename", t.name);
            }
        }
        let registry = ToolRegistry::new(self);
        for (i, b) in self.binary.iter().enumerate() {
            if let Some(name) = &b.tool {
                if registry.get(name).is_none() {
                    anyhow::bail!("binary entry {} names unknown tool: {}", i + 1, name);
                }
            }
        }
        Ok(())
    }

    /// Options for one `[[binary]]` entry.
    pub fn options_for(&self, entry: &BinaryEntry, registry: &ToolRegistry) -> ValidationOptions {
        match entry.tool.as_deref().and_then(|n| registry.get(n)) {
            Some(spec) => ValidationOptions {
                require_absolute: self.defaults.require_absolute,
                ..spec.options()
            },
            None => self.defaults.clone(),
        }
    }
}
