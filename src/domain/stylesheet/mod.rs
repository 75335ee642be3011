//! Container scoping for untrusted stylesheet text.
//!
//! Article bodies ship their own `<style>` blocks. Before those styles are
//! injected into the host page, every rule is confined to the element that
//! renders the article so nothing leaks onto the rest of the page. This is
//! best-effort isolation driven by a lightweight scanner, not a CSS parser.

mod scanner;
mod scope;
mod selector;

pub use scope::scope_css;
