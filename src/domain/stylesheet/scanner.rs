//! Byte-level walking of CSS text.
//!
//! Braces, commas and semicolons inside string literals, `/* */` comments and
//! backslash escapes never count as structure. Every delimiter the scanner
//! reports is ASCII, so positions it returns are always valid `str` slice
//! boundaries.

/// Structural delimiter found while scanning a rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Boundary {
    /// `{` opening a block; the text before it is the prelude.
    Open(usize),
    /// `;` ending a statement at-rule such as `@import` or `@charset`.
    Semicolon(usize),
    /// `}` with no block open at this level.
    StrayClose(usize),
}

/// Returns the position just past the string, comment or escape starting at
/// `pos`, or `None` when `pos` starts ordinary text.
pub(super) fn skip_opaque(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes[pos] {
        b'"' | b'\'' => Some(skip_string(bytes, pos)),
        b'/' if bytes.get(pos + 1) == Some(&b'*') => Some(skip_comment(bytes, pos)),
        b'\\' => Some((pos + 2).min(bytes.len())),
        _ => None,
    }
}

/// `pos` must point at the opening quote. An unescaped newline ends the
/// string the same way browsers recover from a bad string.
fn skip_string(bytes: &[u8], pos: usize) -> usize {
    let quote = bytes[pos];
    let mut i = pos + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// `pos` must point at the `/` of `/*`. Unterminated comments run to the end.
pub(super) fn skip_comment(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

pub(super) fn next_boundary(bytes: &[u8], from: usize) -> Option<Boundary> {
    let mut parens = 0usize;
    let mut i = from;
    while i < bytes.len() {
        if let Some(next) = skip_opaque(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'(' => parens += 1,
            b')' => parens = parens.saturating_sub(1),
            b'{' => return Some(Boundary::Open(i)),
            b'}' => return Some(Boundary::StrayClose(i)),
            b';' if parens == 0 => return Some(Boundary::Semicolon(i)),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Position of the `}` closing the block opened at `open`, or `None` when the
/// input ends first.
pub(super) fn matching_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        if let Some(next) = skip_opaque(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits a prelude into leading whitespace/comments, the significant text,
/// and trailing whitespace. Concatenating the three yields the input.
pub(super) fn split_trivia(prelude: &str) -> (&str, &str, &str) {
    let bytes = prelude.as_bytes();
    let mut lead = 0;
    loop {
        while lead < bytes.len() && bytes[lead].is_ascii_whitespace() {
            lead += 1;
        }
        if bytes[lead..].starts_with(b"/*") {
            lead = skip_comment(bytes, lead);
        } else {
            break;
        }
    }

    let rest = &prelude[lead..];
    let core = rest.trim_end_matches(|c: char| c.is_ascii_whitespace());
    let trailing = &rest[core.len()..];
    (&prelude[..lead], core, trailing)
}
