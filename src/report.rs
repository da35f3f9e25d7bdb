use crate::{errors::ValidationError, validator::ValidatedPath};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
}

#[derive(Debug, Serialize)]
pub struct ErrorObj {
    pub code: String,
    pub message: String,
}

/// Outcome of checking one candidate path, as emitted by the CLI.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub subject: String,
    pub input: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")] pub normalized_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub error: Option<ErrorObj>,
}

impl CheckReport {
    pub fn new(subject: &str, input: &str, outcome: &Result<ValidatedPath, ValidationError>) -> Self {
        let (status, normalized_path, error) = match outcome {
            Ok(p) => (Status::Valid, Some(p.as_path().display().to_string()), None),
            Err(e) => (
                Status::Invalid,
                None,
                Some(ErrorObj { code: e.code().to_string(), message: e.message.clone() }),
            ),
        };
        Self { subject: subject.to_string(), input: input.to_string(), status, normalized_path, error }
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }

    /// One human-readable line: `✓ subject: path` or `✗ subject: message`.
    pub fn to_line(&self) -> String {
        match (&self.normalized_path, &self.error) {
            (Some(p), _) => format!("✓ {}: {}", self.subject, p),
            (None, Some(e)) => format!("✗ {}: {} ({})", self.subject, e.message, e.code),
            (None, None) => format!("✗ {}: invalid", self.subject),
        }
    }
}
