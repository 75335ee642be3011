use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentAttribute {
    pub name: String,
    pub value: String,
}

/// Identifies one element the page injects outside the article container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InjectionHandle(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedStyle {
    pub handle: InjectionHandle,
    pub attributes: Vec<FragmentAttribute>,
    pub css: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptSource {
    External { src: String },
    Inline { content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFragment {
    pub handle: InjectionHandle,
    /// Attributes other than `src`.
    pub attributes: Vec<FragmentAttribute>,
    pub source: ScriptSource,
}

/// Ordered side effect for the presentation layer to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PageEffect {
    InjectStyle { handle: InjectionHandle },
    AttachMarkup,
    AppendScript { handle: InjectionHandle },
    RemoveElement { handle: InjectionHandle },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedArticle {
    pub markup: String,
    pub styles: Vec<ScopedStyle>,
    pub scripts: Vec<ScriptFragment>,
    pub has_code_blocks: bool,
}

impl RenderedArticle {
    /// Styles first, then the markup, then scripts in document order.
    pub fn mount_plan(&self) -> Vec<PageEffect> {
        let mut plan = Vec::with_capacity(self.styles.len() + self.scripts.len() + 1);
        plan.extend(
            self.styles
                .iter()
                .map(|style| PageEffect::InjectStyle {
                    handle: style.handle,
                }),
        );
        plan.push(PageEffect::AttachMarkup);
        plan.extend(
            self.scripts
                .iter()
                .map(|script| PageEffect::AppendScript {
                    handle: script.handle,
                }),
        );
        plan
    }

    /// Removes everything [`Self::mount_plan`] injected, newest first.
    pub fn teardown_plan(&self) -> Vec<PageEffect> {
        self.injected_handles()
            .rev()
            .map(|handle| PageEffect::RemoveElement { handle })
            .collect()
    }

    fn injected_handles(&self) -> impl DoubleEndedIterator<Item = InjectionHandle> + '_ {
        self.styles
            .iter()
            .map(|style| style.handle)
            .chain(self.scripts.iter().map(|script| script.handle))
    }
}
