//! Thin helpers over `web_sys` plus the [`Marked`] trait the components use
//! to read and write class membership, so their decisions can run against
//! anything that looks like an element.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::{Result, SiteError};

pub trait Marked {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, on: bool);
    fn attribute(&self, name: &str) -> Option<String>;
    fn element_id(&self) -> String;
}

impl Marked for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let list = self.class_list();
        let outcome = if on { list.add_1(class) } else { list.remove_1(class) };
        if let Err(e) = outcome {
            debug!("class {:?} not {}: {:?}", class, if on { "added" } else { "removed" }, e);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn element_id(&self) -> String {
        self.id()
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(SiteError::NoBody)
}

pub fn query(scope: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(scope.query_selector(selector)?)
}

pub fn query_all(scope: &Document, selector: &str) -> Result<Vec<Element>> {
    collect(scope.query_selector_all(selector)?)
}

pub fn query_all_within(scope: &Element, selector: &str) -> Result<Vec<Element>> {
    collect(scope.query_selector_all(selector)?)
}

fn collect(list: web_sys::NodeList) -> Result<Vec<Element>> {
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            debug!("style {}: {} not set: {:?}", property, value, e);
        }
    }
}

pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Attaches a listener that lives as long as the page does.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
