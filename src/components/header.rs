use log::debug;
use web_sys::{Document, Event};

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;

pub const SCROLLED: &str = "scrolled";

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn apply<T: Marked>(header: &T, offset: f64, threshold: f64) {
    header.set_class(SCROLLED, is_scrolled(offset, threshold));
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let Some(header) = dom::query(document, &settings.selectors.header)? else {
        debug!("header: no {} element, skipping", settings.selectors.header);
        return Ok(());
    };
    let window = dom::window()?;
    let threshold = settings.scroll_threshold;

    // Pages restored mid-scroll get styled before the first scroll event.
    apply(&header, window.scroll_y().unwrap_or(0.0), threshold);

    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_: Event| {
        if let Ok(offset) = scroll_window.scroll_y() {
            apply(&header, offset, threshold);
        }
    })?;

    debug!("header: scroll styling at {}px", threshold);
    Ok(())
}
