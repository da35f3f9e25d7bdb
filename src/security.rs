//! String-level predicates applied before a candidate path reaches the
//! filesystem. Both are pure and never fail.

/// Characters with meaning to a command interpreter. Backslash is left out
/// since it separates path segments on Windows.
pub const SHELL_METACHARS: &[char] = &[
    ';', '&', '|', '`', '$', '(', ')', '{', '}', '[', ']', '<', '>', '!', '\'', '"',
];

pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// True when `..` is followed by a separator anywhere, or when the final
/// `/`- or `\`-delimited segment is exactly `..`.
///
/// Covers a leading `../`, a trailing `/..`, an embedded `/../` with either
/// separator on either side, the bare string `..`, and names such as
/// `v1../` or `.../` that end in `..` before a separator.
pub fn contains_traversal(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let mut segments = input.split(is_separator).peekable();
    while let Some(seg) = segments.next() {
        let last = segments.peek().is_none();
        if seg == ".." || (!last && seg.ends_with("..")) {
            return true;
        }
    }
    false
}

pub fn contains_shell_metachar(input: &str) -> bool {
    input.contains(SHELL_METACHARS)
}
