use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Extensions Windows treats as directly runnable.
pub const WINDOWS_EXEC_EXTENSIONS: &[&str] = &["exe", "cmd", "bat", "com", "ps1"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub exists: bool,
    pub executable: bool,
}

/// Answers "is this a regular file, and may we run it". Implementations must
/// fail closed: any error is reported as `ProbeResult::default()`.
pub trait ExecutableProbe {
    fn probe(&self, path: &Path) -> ProbeResult;
}

pub type DynProbe = Arc<dyn ExecutableProbe + Send + Sync + 'static>;

/// Probe backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl ExecutableProbe for OsProbe {
    fn probe(&self, path: &Path) -> ProbeResult {
        let meta = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ProbeResult::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "metadata probe failed");
                return ProbeResult::default();
            }
        };
        if !meta.is_file() {
            return ProbeResult::default();
        }
        ProbeResult { exists: true, executable: host_allows_exec(path) }
    }
}

#[cfg(windows)]
fn host_allows_exec(path: &Path) -> bool {
    has_windows_exec_extension(path)
}

#[cfg(unix)]
fn host_allows_exec(path: &Path) -> bool {
    use rustix::fs::{access, Access};
    match access(path, Access::EXEC_OK) {
        Ok(()) => true,
        Err(e) if e == rustix::io::Errno::ACCESS => false,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "execute permission probe failed");
            false
        }
    }
}

#[cfg(not(any(unix, windows)))]
fn host_allows_exec(_path: &Path) -> bool {
    false
}

/// Extension-based executability, the rule used on Windows hosts.
pub fn has_windows_exec_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WINDOWS_EXEC_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
