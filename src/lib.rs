//! Interactive behaviour for the marketing page: mobile menu, header styling,
//! scroll reveals, section highlighting, the feature tabs, the pricing switch
//! and the hero parallax. Markup and CSS come from the page itself.

use log::{info, warn};
use web_sys::{Document, Event};

pub mod config;
pub mod dom;
pub mod error;
pub mod observer;

pub mod components {
    pub mod header;
    pub mod highlight;
    pub mod navigation;
    pub mod parallax;
    pub mod pricing;
    pub mod reveal;
    pub mod showcase;
}

use components::{header, highlight, navigation, parallax, pricing, reveal, showcase};
use config::Settings;
use error::Result;

type Init = fn(&Document, &Settings) -> Result<()>;

const COMPONENTS: [(&str, Init); 7] = [
    ("navigation", navigation::init),
    ("header", header::init),
    ("reveal", reveal::init),
    ("highlight", highlight::init),
    ("showcase", showcase::init),
    ("pricing", pricing::init),
    ("parallax", parallax::init),
];

/// Wires every component against `document`. A component that fails to attach
/// is logged and the rest still run.
pub fn init_page(document: &Document, settings: &Settings) {
    for (name, init) in COMPONENTS {
        if let Err(e) = init(document, settings) {
            warn!("{} not wired: {}", name, e);
        }
    }
    info!("page behaviour wired");
}

/// `document.readyState` is `"loading"` until the markup has been parsed.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Runs [`init_page`] once the document structure is parsed.
pub fn start() -> Result<()> {
    let document = dom::document()?;

    if is_parsed(&document.ready_state()) {
        let settings = Settings::from_document(&document);
        init_page(&document, &settings);
        return Ok(());
    }

    let ready = document.clone();
    dom::listen(&document, "DOMContentLoaded", move |_: Event| {
        let settings = Settings::from_document(&ready);
        init_page(&ready, &settings);
    })?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_only_while_loading() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }
}
