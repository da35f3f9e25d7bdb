//! The validation pipeline.
//!
//! Stages run in a fixed order and stop at the first failure. Every string
//! check completes before the probe sees the path, so a rejected string never
//! reaches a filesystem call. A successful result is advisory: the file can
//! change between validation and any later spawn.

use crate::{
    basename::{basename_allowed, final_segment},
    errors::{ErrorKind, ValidationError, ValidationResult},
    normalize::normalize,
    probe::{DynProbe, OsProbe},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Checked against the trimmed input, not the resolved path.
    pub require_absolute: bool,
    pub check_exists: bool,
    /// Only consulted when `check_exists` is set.
    pub verify_executable: bool,
    pub allowed_basenames: Option<Vec<String>>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_absolute: false,
            check_exists: true,
            verify_executable: true,
            allowed_basenames: None,
        }
    }
}

impl ValidationOptions {
    /// String-level checks only; the filesystem is never consulted.
    pub fn lexical() -> Self {
        Self { check_exists: false, verify_executable: false, ..Self::default() }
    }

    pub fn with_allowed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_basenames = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// A path that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedPath(PathBuf);

impl ValidatedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ValidatedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[derive(Clone)]
pub struct BinaryValidator {
    probe: DynProbe,
}

impl Default for BinaryValidator {
    fn default() -> Self {
        Self::new(Arc::new(OsProbe))
    }
}

impl std::fmt::Debug for BinaryValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryValidator").finish_non_exhaustive()
    }
}

impl BinaryValidator {
    pub fn new(probe: DynProbe) -> Self {
        Self { probe }
    }

    pub fn validate(&self, input: &str, opts: &ValidationOptions) -> ValidationResult<ValidatedPath> {
        let outcome = self.run(input, opts);
        match &outcome {
            Ok(p) => debug!(path = %p.as_path().display(), "binary path accepted"),
            Err(e) => debug!(
                code = e.code(),
                lexical = e.kind.is_lexical(),
                reason = %e.message,
                "binary path rejected"
            ),
        }
        outcome
    }

    fn run(&self, input: &str, opts: &ValidationOptions) -> ValidationResult<ValidatedPath> {
        let normalized = normalize(input)?;

        if opts.require_absolute && !Path::new(&normalized.trimmed).is_absolute() {
            return Err(ValidationError::new(ErrorKind::NotAbsolute, "path must be an absolute path"));
        }

        let resolved = normalized.absolute;
        if let Some(allowed) = opts.allowed_basenames.as_deref().filter(|a| !a.is_empty()) {
            let display = resolved.to_string_lossy();
            if !basename_allowed(&display, allowed) {
                return Err(ValidationError::new(
                    ErrorKind::BasenameNotAllowed,
                    format!(
                        "binary '{}' is not in the allowed list: {}",
                        final_segment(&display),
                        allowed.join(", ")
                    ),
                ));
            }
        }

        if opts.check_exists {
            let probed = self.probe.probe(&resolved);
            if !probed.exists {
                return Err(ValidationError::new(
                    ErrorKind::NotFound,
                    format!("file not found: {}", resolved.display()),
                ));
            }
            if opts.verify_executable && !probed.executable {
                return Err(ValidationError::new(
                    ErrorKind::NotExecutable,
                    format!("file is not executable: {}", resolved.display()),
                ));
            }
        }

        Ok(ValidatedPath(resolved))
    }
}

/// Validates `input` against the host filesystem.
pub fn validate(input: &str, opts: &ValidationOptions) -> ValidationResult<ValidatedPath> {
    BinaryValidator::default().validate(input, opts)
}
