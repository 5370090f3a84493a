use log::debug;
use web_sys::Document;

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;
use crate::observer::{ViewportWatcher, Visibility, WatchOptions};

pub const VISIBLE: &str = "visible";

/// Marks `element` visible the first time it enters. Returns true when the
/// element is done and should no longer be watched.
///
/// The ratio is not checked here: the observer threshold decides when
/// notifications arrive, and an element too tall to ever reach it is revealed
/// as soon as it starts intersecting.
pub fn on_visibility<T: Marked>(element: &T, visibility: Visibility) -> bool {
    let Visibility::Entered { ratio } = visibility else {
        return false;
    };
    debug!("reveal: entered at ratio {:.2}", ratio);
    element.set_class(VISIBLE, true);
    true
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let items = dom::query_all(document, &settings.selectors.reveal_item)?;
    if items.is_empty() {
        debug!("reveal: nothing tagged {}", settings.selectors.reveal_item);
        return Ok(());
    }

    let threshold = settings.reveal_threshold;
    let watcher = ViewportWatcher::new(
        &WatchOptions::threshold(threshold),
        move |element, visibility, subscription| {
            if on_visibility(element, visibility) {
                subscription.unwatch(element);
            }
        },
    )?;
    for item in &items {
        watcher.watch(item);
    }

    debug!("reveal: watching {} elements", items.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    #[test]
    fn exited_keeps_watching() {
        let el = FakeElement::new("");
        assert!(!on_visibility(&el, Visibility::Exited));
        assert!(!el.has_class(VISIBLE));
    }

    #[test]
    fn thin_slice_of_tall_element_reveals() {
        let el = FakeElement::new("");
        assert!(on_visibility(&el, Visibility::Entered { ratio: 0.02 }));
        assert!(el.has_class(VISIBLE));
    }

    #[test]
    fn reveal_is_one_shot_and_sticky() {
        let el = FakeElement::new("");
        assert!(on_visibility(&el, Visibility::Entered { ratio: 0.3 }));
        assert!(el.has_class(VISIBLE));

        // Scrolling away never hides it again.
        assert!(!on_visibility(&el, Visibility::Exited));
        assert!(el.has_class(VISIBLE));
    }
}
