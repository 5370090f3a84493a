//! Viewport subscriptions on top of `IntersectionObserver`.
//!
//! A [`ViewportWatcher`] is created with a handler and a set of options, then
//! fed elements with [`ViewportWatcher::watch`]. The handler gets one
//! [`Visibility`] per notification and may stop watching the element it was
//! called for.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Entered { ratio: f64 },
    Exited,
}

impl Visibility {
    pub fn from_entry(is_intersecting: bool, ratio: f64) -> Self {
        if is_intersecting {
            Visibility::Entered { ratio }
        } else {
            Visibility::Exited
        }
    }

    pub fn is_entered(&self) -> bool {
        matches!(self, Visibility::Entered { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<String>,
}

impl WatchOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            ..Default::default()
        }
    }

    pub fn root_margin(margin: &str) -> Self {
        Self {
            root_margin: Some(margin.to_string()),
            ..Default::default()
        }
    }
}

/// Handle passed to the handler so it can stop watching elements.
pub struct Subscription<'a> {
    observer: &'a IntersectionObserver,
}

impl Subscription<'_> {
    pub fn unwatch(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

pub struct ViewportWatcher {
    observer: IntersectionObserver,
}

impl ViewportWatcher {
    pub fn new<F>(options: &WatchOptions, handler: F) -> Result<Self>
    where
        F: FnMut(&Element, Visibility, &Subscription) + 'static,
    {
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let subscription = Subscription { observer: &observer };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let visibility =
                    Visibility::from_entry(entry.is_intersecting(), entry.intersection_ratio());
                handler(&entry.target(), visibility, &subscription);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        // The observer keeps calling back for the rest of the page.
        callback.forget();
        Ok(Self { observer })
    }

    pub fn watch(&self, element: &Element) {
        self.observer.observe(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_intersecting_is_exited() {
        assert_eq!(Visibility::from_entry(false, 0.5), Visibility::Exited);
        assert!(!Visibility::Exited.is_entered());
    }

    #[test]
    fn intersecting_keeps_its_ratio() {
        assert_eq!(
            Visibility::from_entry(true, 0.25),
            Visibility::Entered { ratio: 0.25 }
        );
        assert!(Visibility::from_entry(true, 0.0).is_entered());
    }
}
