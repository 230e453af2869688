use std::borrow::Cow;

pub(crate) const SEPARATOR: char = '/';
pub(crate) const WILDCARD: &str = "*";

/// The classification of a segment token in a route pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SegmentKind<'a> {
    Literal,
    Param(&'a str),
    Wildcard,
}

impl<'a> SegmentKind<'a> {
    pub(crate) fn of(token: &'a str) -> Self {
        if token == WILDCARD {
            return SegmentKind::Wildcard;
        }
        if token.len() >= 2 && token.starts_with('{') && token.ends_with('}') {
            return SegmentKind::Param(&token[1..token.len() - 1]);
        }
        SegmentKind::Literal
    }
}

/// Appends the trailing separator if the path does not end with one.
pub(crate) fn normalize(path: &str) -> Cow<'_, str> {
    if path.ends_with(SEPARATOR) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{}{}", path, SEPARATOR))
    }
}

/// Splits a path into its segment tokens, as if it had been normalized first.
///
/// The leading separator is dropped and the trailing one yields an empty
/// token, so both `"/a/b"` and `"/a/b/"` become `["a", "b", ""]`.
/// Consecutive separators produce empty tokens as well.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return vec![""];
    }
    // Only a leading separator is dropped; "a/b" keeps "a" as its first token.
    let trimmed = if path.starts_with(SEPARATOR) {
        &path[1..]
    } else {
        path
    };
    let mut tokens: Vec<&str> = trimmed.split(SEPARATOR).collect();
    if !path.ends_with(SEPARATOR) {
        tokens.push("");
    }
    tokens
}
