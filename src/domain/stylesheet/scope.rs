use super::scanner::{self, Boundary};
use super::selector::{contains_scope, is_keyframe_offset, replace_root, split_selector_list};

/// Rewrites `css` so every rule only applies inside the element matched by
/// `scope`.
///
/// - top-level `:root` becomes the scope selector itself
/// - `@keyframes` and `@font-face` blocks are copied byte for byte
/// - `@media` and `@supports` blocks are scoped recursively
/// - any other at-rule is copied unchanged
/// - every other selector branch gets `scope ` prepended, unless it already
///   contains the scope token or is a keyframe offset
///
/// Never fails. Unbalanced input is passed through from the point where the
/// structure stops making sense, so `scope_css(scope_css(x, s), s)` equals
/// `scope_css(x, s)`.
pub fn scope_css(css: &str, scope: &str) -> String {
    let scope = scope.trim();
    if scope.is_empty() {
        return css.to_string();
    }
    Scoper { scope }.rule_list(css, Level::TopLevel)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    TopLevel,
    Nested,
}

enum BlockKind {
    Verbatim,
    Conditional,
    Ruleset,
}

fn classify(prelude: &str) -> BlockKind {
    let Some(rest) = prelude.strip_prefix('@') else {
        return BlockKind::Ruleset;
    };
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    // @keyframes (vendor-prefixed too), @font-face and every other at-rule
    // carry no selector that could be scoped
    match name.as_str() {
        "media" | "supports" => BlockKind::Conditional,
        _ => BlockKind::Verbatim,
    }
}

struct Scoper<'a> {
    scope: &'a str,
}

impl Scoper<'_> {
    fn rule_list(&self, input: &str, level: Level) -> String {
        let bytes = input.as_bytes();
        let mut out = String::with_capacity(input.len() + input.len() / 4);
        let mut cursor = 0;

        while let Some(boundary) = scanner::next_boundary(bytes, cursor) {
            match boundary {
                Boundary::Semicolon(pos) | Boundary::StrayClose(pos) => {
                    out.push_str(&input[cursor..=pos]);
                    cursor = pos + 1;
                }
                Boundary::Open(open) => {
                    let Some(close) = scanner::matching_close(bytes, open) else {
                        // truncated input: keep the unterminated remainder as is
                        out.push_str(&input[cursor..]);
                        return out;
                    };
                    self.block(&mut out, &input[cursor..open], &input[open + 1..close], level);
                    cursor = close + 1;
                }
            }
        }

        out.push_str(&input[cursor..]);
        out
    }

    fn block(&self, out: &mut String, prelude: &str, body: &str, level: Level) {
        let (_, core, _) = scanner::split_trivia(prelude);
        match classify(core) {
            BlockKind::Verbatim => {
                out.push_str(prelude);
                out.push('{');
                out.push_str(body);
                out.push('}');
            }
            BlockKind::Conditional => {
                out.push_str(prelude);
                out.push('{');
                out.push_str(&self.rule_list(body, Level::Nested));
                out.push('}');
            }
            BlockKind::Ruleset => {
                self.ruleset_prelude(out, prelude, level);
                out.push('{');
                out.push_str(body);
                out.push('}');
            }
        }
    }

    fn ruleset_prelude(&self, out: &mut String, prelude: &str, level: Level) {
        let (lead, core, trail) = scanner::split_trivia(prelude);
        let branches: Vec<String> = split_selector_list(core)
            .into_iter()
            .map(str::trim)
            .filter(|branch| !branch.is_empty())
            .map(|branch| self.branch(branch, level))
            .collect();

        if branches.is_empty() {
            out.push_str(prelude);
            return;
        }

        out.push_str(lead);
        out.push_str(&branches.join(", "));
        out.push_str(trail);
    }

    fn branch(&self, branch: &str, level: Level) -> String {
        if level == Level::TopLevel
            && let Some(replaced) = replace_root(branch, self.scope)
        {
            return replaced;
        }
        if is_keyframe_offset(branch) || contains_scope(branch, self.scope) {
            return branch.to_string();
        }
        format!("{} {branch}", self.scope)
    }
}
