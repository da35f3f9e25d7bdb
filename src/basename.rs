use crate::security::is_separator;

const STRIPPABLE_SUFFIXES: &[&str] = &[".exe", ".cmd", ".bat", ".com"];

/// Final segment of `path`, splitting on both `/` and `\` whatever the host.
pub fn final_segment(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or("")
}

/// `name` without a trailing executable suffix, compared case-insensitively.
pub fn bare_name(name: &str) -> &str {
    for suffix in STRIPPABLE_SUFFIXES {
        if name.len() >= suffix.len() {
            let split = name.len() - suffix.len();
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(suffix) {
                return &name[..split];
            }
        }
    }
    name
}

/// An empty allow-list imposes no restriction.
pub fn basename_allowed(path: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let name = final_segment(path).to_lowercase();
    let bare = bare_name(final_segment(path)).to_lowercase();
    allowed.iter().any(|a| {
        let a = a.to_lowercase();
        a == name || a == bare
    })
}
