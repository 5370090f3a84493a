use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element, Event};

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;

pub const ACTIVE: &str = "active";
pub const VISIBLE: &str = "visible";
pub const FEATURE_ATTR: &str = "data-feature";

pub fn preview_id(key: &str) -> String {
    format!("feature-preview-{}", key)
}

/// Makes `buttons[chosen]` the only active button and shows only the preview
/// for its key. Buttons without a key are ignored.
pub fn select<T: Marked>(buttons: &[T], chosen: usize, previews: &[T]) {
    let Some(key) = buttons.get(chosen).and_then(|b| b.attribute(FEATURE_ATTR)) else {
        return;
    };

    for (i, button) in buttons.iter().enumerate() {
        button.set_class(ACTIVE, i == chosen);
    }

    let wanted = preview_id(&key);
    for preview in previews {
        preview.set_class(VISIBLE, preview.element_id() == wanted);
    }
}

struct Showcase {
    buttons: Vec<Element>,
    previews: Vec<Element>,
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let buttons = dom::query_all(document, &settings.selectors.feature_item)?;
    if buttons.is_empty() {
        debug!("showcase: no {} buttons", settings.selectors.feature_item);
        return Ok(());
    }
    let previews = dom::query_all(document, &settings.selectors.feature_preview)?;

    let showcase = Rc::new(Showcase { buttons, previews });
    for (i, button) in showcase.buttons.iter().enumerate() {
        let showcase = showcase.clone();
        dom::listen(button, "click", move |_: Event| {
            select(&showcase.buttons, i, &showcase.previews);
        })?;
    }

    debug!(
        "showcase: {} buttons, {} previews",
        showcase.buttons.len(),
        showcase.previews.len()
    );
    Ok(())
}
