pub mod registry;

use crate::{
    errors::ValidationResult,
    validator::{validate, ValidatedPath, ValidationOptions},
};
use serde::Deserialize;

/// External tools whose binaries the host knows how to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownTool {
    Beads,
    Backlog,
}

impl KnownTool {
    pub const ALL: [KnownTool; 2] = [KnownTool::Beads, KnownTool::Backlog];

    pub fn name(&self) -> &'static str {
        match self {
            KnownTool::Beads => "beads",
            KnownTool::Backlog => "backlog",
        }
    }

    pub fn binary_names(&self) -> &'static [&'static str] {
        match self {
            KnownTool::Beads => &["bd", "bd.exe", "bd.cmd"],
            KnownTool::Backlog => &["backlog", "backlog.exe", "backlog.cmd"],
        }
    }

    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            allowed_basenames: self.binary_names().iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn options(&self) -> ValidationOptions {
        self.spec().options()
    }

    pub fn validate(&self, input: &str) -> ValidationResult<ValidatedPath> {
        validate(input, &self.options())
    }
}

/// A tool identity: a name plus the binary names it may be launched as.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub allowed_basenames: Vec<String>,
}

impl ToolSpec {
    /// Tool binaries must exist and be runnable.
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions {
            require_absolute: false,
            check_exists: true,
            verify_executable: true,
            allowed_basenames: Some(self.allowed_basenames.clone()),
        }
    }
}

pub fn validate_beads_path(input: &str) -> ValidationResult<ValidatedPath> {
    KnownTool::Beads.validate(input)
}

pub fn validate_backlog_path(input: &str) -> ValidationResult<ValidatedPath> {
    KnownTool::Backlog.validate(input)
}
