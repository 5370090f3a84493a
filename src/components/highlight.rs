use log::debug;
use web_sys::Document;

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;
use crate::observer::{ViewportWatcher, WatchOptions};

pub const ACTIVE_LINK: &str = "active-link";

/// Substring match on `href`, so `#about-us` also matches a section `about`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.contains(section_id)
}

pub fn highlight<T: Marked>(links: &[T], section_id: &str) {
    for link in links {
        link.set_class(ACTIVE_LINK, false);
        let matches = link
            .attribute("href")
            .map(|href| link_targets(&href, section_id))
            .unwrap_or(false);
        if matches {
            link.set_class(ACTIVE_LINK, true);
        }
    }
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let sections = dom::query_all(document, &settings.selectors.scroll_section)?;
    let links = dom::query_all(document, &settings.selectors.nav_link)?;
    if sections.is_empty() || links.is_empty() {
        debug!(
            "highlight: {} sections, {} links, skipping",
            sections.len(),
            links.len()
        );
        return Ok(());
    }

    let watcher = ViewportWatcher::new(
        &WatchOptions::root_margin(&settings.highlight_root_margin),
        move |section, visibility, _| {
            if visibility.is_entered() {
                highlight(links.as_slice(), &section.id());
            }
        },
    )?;
    for section in &sections {
        watcher.watch(section);
    }

    debug!("highlight: watching {} sections", sections.len());
    Ok(())
}
