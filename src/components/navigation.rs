use log::debug;
use web_sys::{Document, Event};

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;

pub const ACTIVE: &str = "active";
pub const MENU_OPEN: &str = "menu-open";

/// The three elements whose classes encode the open state.
pub struct MobileMenu<T> {
    pub toggle: T,
    pub wrapper: T,
    pub body: T,
}

impl<T: Marked> MobileMenu<T> {
    pub fn is_open(&self) -> bool {
        self.wrapper.has_class(ACTIVE)
    }

    pub fn set_open(&self, open: bool) {
        self.toggle.set_class(ACTIVE, open);
        self.wrapper.set_class(ACTIVE, open);
        self.body.set_class(MENU_OPEN, open);
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open());
    }

    /// Link clicks only ever close the menu.
    pub fn close(&self) {
        if self.is_open() {
            self.set_open(false);
        }
    }
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let selectors = &settings.selectors;
    let (Some(toggle), Some(wrapper)) = (
        document.get_element_by_id(&selectors.menu_toggle_id),
        dom::query(document, &selectors.menu_wrapper)?,
    ) else {
        debug!("navigation: toggle or menu wrapper missing, skipping");
        return Ok(());
    };
    let body = dom::body(document)?;

    let menu = std::rc::Rc::new(MobileMenu {
        toggle: toggle.clone(),
        wrapper,
        body: body.into(),
    });

    {
        let menu = menu.clone();
        dom::listen(&toggle, "click", move |_: Event| menu.toggle())?;
    }

    let links = dom::query_all(document, &selectors.nav_link)?;
    for link in &links {
        let menu = menu.clone();
        dom::listen(link, "click", move |_: Event| menu.close())?;
    }

    debug!("navigation: wired toggle and {} links", links.len());
    Ok(())
}
