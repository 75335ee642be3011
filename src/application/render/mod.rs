//! Turns provider markup into something the host page can embed: styles are
//! lifted out and scoped, scripts are lifted out for ordered replay, and the
//! remaining markup is attached to the article container.

mod fragments;
mod pipeline;
mod types;

pub use pipeline::RenderPipeline;
pub use types::{
    FragmentAttribute, InjectionHandle, PageEffect, RenderedArticle, ScopedStyle,
    ScriptFragment, ScriptSource,
};
