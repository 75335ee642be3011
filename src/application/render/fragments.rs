use std::{cell::RefCell, rc::Rc};

use lol_html::errors::RewritingError;
use lol_html::html_content::Attribute;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};

use super::types::FragmentAttribute;

#[derive(Debug, Default, Clone)]
pub(super) struct RawFragment {
    pub(super) attributes: Vec<FragmentAttribute>,
    pub(super) text: String,
}

#[derive(Default, Clone)]
struct ExtractState {
    styles: Vec<RawFragment>,
    scripts: Vec<RawFragment>,
}

pub(super) struct Extracted {
    pub(super) markup: String,
    pub(super) styles: Vec<RawFragment>,
    pub(super) scripts: Vec<RawFragment>,
}

/// Removes every `<style>` and `<script>` element from `html`, keeping their
/// attributes and text in document order.
pub(super) fn extract(html: &str) -> Result<Extracted, RewritingError> {
    let state = Rc::new(RefCell::new(ExtractState::default()));

    let markup = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("style", {
                    let state = Rc::clone(&state);
                    move |el| {
                        state.borrow_mut().styles.push(RawFragment {
                            attributes: el.attributes().iter().map(to_fragment_attribute).collect(),
                            text: String::new(),
                        });
                        el.remove_and_keep_content();
                        Ok(())
                    }
                }),
                text!("style", {
                    let state = Rc::clone(&state);
                    move |t| {
                        if let Some(fragment) = state.borrow_mut().styles.last_mut() {
                            fragment.text.push_str(t.as_str());
                        }
                        t.remove();
                        Ok(())
                    }
                }),
                element!("script", {
                    let state = Rc::clone(&state);
                    move |el| {
                        state.borrow_mut().scripts.push(RawFragment {
                            attributes: el.attributes().iter().map(to_fragment_attribute).collect(),
                            text: String::new(),
                        });
                        el.remove_and_keep_content();
                        Ok(())
                    }
                }),
                text!("script", {
                    let state = Rc::clone(&state);
                    move |t| {
                        if let Some(fragment) = state.borrow_mut().scripts.last_mut() {
                            fragment.text.push_str(t.as_str());
                        }
                        t.remove();
                        Ok(())
                    }
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )?;

    let state = Rc::try_unwrap(state)
        .map(RefCell::into_inner)
        .unwrap_or_else(|rc| rc.borrow().clone());

    Ok(Extracted {
        markup,
        styles: state.styles,
        scripts: state.scripts,
    })
}

fn to_fragment_attribute(attr: &Attribute<'_>) -> FragmentAttribute {
    FragmentAttribute {
        name: attr.name(),
        value: attr.value(),
    }
}
