use crate::{
    errors::{ErrorKind, ValidationError, ValidationResult},
    security::{contains_shell_metachar, contains_traversal},
};
use std::path::{Component, Path, PathBuf};

/// Inputs longer than this many characters are rejected before any parsing.
pub const MAX_PATH_CHARS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    /// The input with surrounding whitespace removed, otherwise untouched.
    pub trimmed: String,
    /// Lexically normalized and resolved against the working directory.
    pub absolute: PathBuf,
}

/// Runs the string checks in order, then normalizes and resolves.
///
/// Stops at the first failing step; nothing here touches the filesystem
/// apart from reading the current directory for relative inputs.
pub fn normalize(input: &str) -> ValidationResult<NormalizedPath> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(ErrorKind::EmptyPath, "path cannot be empty"));
    }
    // byte length bounds char count from above, so only count when needed
    if trimmed.len() > MAX_PATH_CHARS && trimmed.chars().count() > MAX_PATH_CHARS {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!("path exceeds maximum length ({MAX_PATH_CHARS} characters)"),
        ));
    }
    if trimmed.contains('\0') {
        return Err(ValidationError::new(
            ErrorKind::NullByte,
            "path contains invalid characters (null byte)",
        ));
    }
    if contains_traversal(trimmed) {
        return Err(ValidationError::new(
            ErrorKind::Traversal,
            "path contains directory traversal sequences (../)",
        ));
    }
    if contains_shell_metachar(trimmed) {
        return Err(ValidationError::new(
            ErrorKind::ShellInjection,
            "path contains potentially dangerous characters; use an absolute path without special characters",
        ));
    }

    let lexical = lexical_normalize(trimmed);
    if contains_traversal(&lexical.to_string_lossy()) {
        return Err(ValidationError::new(
            ErrorKind::Traversal,
            "path resolves to a directory traversal",
        ));
    }
    let absolute = resolve(&lexical).map_err(|e| {
        ValidationError::new(ErrorKind::InvalidFormat, format!("invalid path format: {e}"))
    })?;

    Ok(NormalizedPath { trimmed: trimmed.to_string(), absolute })
}

/// Collapses repeated separators and `.` segments. `..` is kept verbatim so
/// the caller can still see it.
pub fn lexical_normalize(input: &str) -> PathBuf {
    let mut out = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn resolve(lexical: &Path) -> std::io::Result<PathBuf> {
    let target = if lexical.as_os_str().is_empty() { Path::new(".") } else { lexical };
    let abs = std::path::absolute(target)?;
    Ok(dunce::simplified(&abs).to_path_buf())
}
