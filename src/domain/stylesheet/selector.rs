//! Selector-list handling for plain rulesets.

use super::scanner::skip_opaque;

/// Splits a selector list on top-level commas. Commas inside `:is(a, b)`,
/// attribute brackets, strings or comments stay inside their branch.
pub(super) fn split_selector_list(list: &str) -> Vec<&str> {
    let bytes = list.as_bytes();
    let mut branches = Vec::new();
    let mut nesting = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if let Some(next) = skip_opaque(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'(' | b'[' => nesting += 1,
            b')' | b']' => nesting = nesting.saturating_sub(1),
            b',' if nesting == 0 => {
                branches.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    branches.push(&list[start..]);
    branches
}

/// `from`, `to` or a percentage such as `50%` / `12.5%`.
pub(super) fn is_keyframe_offset(branch: &str) -> bool {
    if branch.eq_ignore_ascii_case("from") || branch.eq_ignore_ascii_case("to") {
        return true;
    }
    branch.strip_suffix('%').is_some_and(|number| {
        number.bytes().any(|b| b.is_ascii_digit())
            && number.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    })
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || !b.is_ascii()
}

/// True when `scope` occurs in `branch` as a whole token, so `.c` matches
/// `.c h1` but not `.cat h1`.
pub(super) fn contains_scope(branch: &str, scope: &str) -> bool {
    let bytes = branch.as_bytes();
    let ends_in_ident = scope.as_bytes().last().copied().is_some_and(is_ident_byte);
    branch.match_indices(scope).any(|(pos, matched)| {
        let after = pos + matched.len();
        !ends_in_ident || bytes.get(after).is_none_or(|&b| !is_ident_byte(b))
    })
}

/// Replaces a leading `:root` pseudo-class with the scope selector.
pub(super) fn replace_root(branch: &str, scope: &str) -> Option<String> {
    const ROOT: &str = ":root";
    let head = branch.get(..ROOT.len())?;
    if !head.eq_ignore_ascii_case(ROOT) {
        return None;
    }
    let rest = &branch[ROOT.len()..];
    if rest.as_bytes().first().is_some_and(|&b| is_ident_byte(b)) {
        return None;
    }
    Some(format!("{scope}{rest}"))
}
