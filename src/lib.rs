//! Validation of user-supplied executable paths.
//!
//! Every candidate string passes string-level checks (length, NUL, traversal,
//! shell metacharacters) before it is normalized, matched against an optional
//! basename allow-list and finally probed on the filesystem. Rejections are
//! returned as [`ValidationError`] values carrying an [`ErrorKind`].

pub mod basename;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod normalize;
pub mod probe;
pub mod report;
pub mod security;
pub mod tools;
pub mod validator;


pub use errors::{ErrorKind, ValidationError, ValidationResult};
pub use probe::{DynProbe, ExecutableProbe, OsProbe, ProbeResult};
pub use tools::{validate_backlog_path, validate_beads_path, KnownTool, ToolSpec};
pub use validator::{validate, BinaryValidator, ValidatedPath, ValidationOptions};
