use tracing::debug;

use super::fragments::{self, RawFragment};
use super::types::{InjectionHandle, RenderedArticle, ScopedStyle, ScriptFragment, ScriptSource};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleContent;
use crate::domain::stylesheet::scope_css;

#[derive(Debug, Clone)]
pub struct RenderPipeline {
    scope_selector: String,
}

impl RenderPipeline {
    pub fn new(scope_selector: impl Into<String>) -> Self {
        Self {
            scope_selector: scope_selector.into(),
        }
    }

    pub fn render(&self, content: &ArticleContent) -> ApplicationResult<RenderedArticle> {
        let extracted = fragments::extract(&content.body_html).map_err(|err| {
            ApplicationError::infrastructure(format!("failed to rewrite article markup: {err}"))
        })?;

        let mut next_handle = 0u32;
        let mut allocate = || {
            let handle = InjectionHandle(next_handle);
            next_handle = next_handle.saturating_add(1);
            handle
        };

        let styles: Vec<ScopedStyle> = extracted
            .styles
            .into_iter()
            .map(|fragment| ScopedStyle {
                handle: allocate(),
                css: scope_css(&fragment.text, &self.scope_selector),
                attributes: fragment.attributes,
            })
            .collect();

        let scripts: Vec<ScriptFragment> = extracted
            .scripts
            .into_iter()
            .map(|fragment| script_fragment(allocate(), fragment))
            .collect();

        debug!(
            styles = styles.len(),
            scripts = scripts.len(),
            "rendered article body"
        );

        Ok(RenderedArticle {
            markup: extracted.markup,
            styles,
            scripts,
            has_code_blocks: content.has_code_blocks(),
        })
    }
}

fn script_fragment(handle: InjectionHandle, fragment: RawFragment) -> ScriptFragment {
    let RawFragment {
        mut attributes,
        text,
    } = fragment;
    let src = attributes
        .iter()
        .position(|attr| attr.name.eq_ignore_ascii_case("src"))
        .map(|index| attributes.remove(index).value);

    let source = match src {
        Some(src) => ScriptSource::External { src },
        None => ScriptSource::Inline { content: text },
    };
    ScriptFragment {
        handle,
        attributes,
        source,
    }
}
