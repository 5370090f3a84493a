//! Pointer-driven hero parallax.
//!
//! The graphics container drifts with the pointer, and every `[data-depth]`
//! layer inside it drifts further in proportion to its depth. Both moves come
//! from the same pointer event.

use log::debug;
use web_sys::{Document, Element, MouseEvent};

use crate::config::{ParallaxSettings, Settings};
use crate::dom::{self, Marked};
use crate::error::Result;

pub const DEPTH_ATTR: &str = "data-depth";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shift {
    pub x: f64,
    pub y: f64,
}

impl Shift {
    pub fn transform(&self) -> String {
        // `+ 0.0` turns -0 into 0.
        format!("translate({}px, {}px)", self.x + 0.0, self.y + 0.0)
    }
}

/// Pointer offset from the viewport centre, or `None` on mobile widths.
pub fn pointer_offset(
    viewport: (f64, f64),
    pointer: (f64, f64),
    mobile_breakpoint: f64,
) -> Option<Shift> {
    let (width, height) = viewport;
    if width < mobile_breakpoint {
        return None;
    }
    Some(Shift {
        x: pointer.0 - width / 2.0,
        y: pointer.1 - height / 2.0,
    })
}

pub fn container_shift(offset: Shift, tuning: &ParallaxSettings) -> Shift {
    Shift {
        x: offset.x / tuning.container_divisor_x,
        y: offset.y / tuning.container_divisor_y,
    }
}

pub fn layer_shift(offset: Shift, depth: f64, tuning: &ParallaxSettings) -> Shift {
    Shift {
        x: offset.x / tuning.layer_divisor * depth,
        y: offset.y / tuning.layer_divisor * depth,
    }
}

pub fn depth_of<T: Marked>(layer: &T) -> f64 {
    layer
        .attribute(DEPTH_ATTR)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|depth| depth.is_finite())
        .unwrap_or(0.0)
}

struct Layer {
    element: Element,
    depth: f64,
}

/// The hero container and its depth layers, moved together per pointer event.
pub struct Hero {
    container: Element,
    layers: Vec<Layer>,
    tuning: ParallaxSettings,
    breakpoint: f64,
}

impl Hero {
    pub fn new(container: Element, settings: &Settings) -> Result<Self> {
        let layers = dom::query_all_within(&container, &format!("[{}]", DEPTH_ATTR))?
            .into_iter()
            .map(|element| Layer {
                depth: depth_of(&element),
                element,
            })
            .collect();
        Ok(Self {
            container,
            layers,
            tuning: settings.parallax.clone(),
            breakpoint: settings.mobile_breakpoint,
        })
    }

    /// Applies the transforms for `pointer`. Returns false on mobile widths,
    /// where nothing is touched.
    pub fn follow(&self, viewport: (f64, f64), pointer: (f64, f64)) -> bool {
        let Some(offset) = pointer_offset(viewport, pointer, self.breakpoint) else {
            return false;
        };

        dom::set_style(
            &self.container,
            "transform",
            &container_shift(offset, &self.tuning).transform(),
        );
        for layer in &self.layers {
            dom::set_style(
                &layer.element,
                "transform",
                &layer_shift(offset, layer.depth, &self.tuning).transform(),
            );
        }
        true
    }
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let Some(container) = dom::query(document, &settings.selectors.hero_graphics)? else {
        debug!("parallax: no {} container", settings.selectors.hero_graphics);
        return Ok(());
    };

    let hero = Hero::new(container, settings)?;
    let layer_count = hero.layers.len();
    let window = dom::window()?;

    let viewport_window = window.clone();
    dom::listen(&window, "mousemove", move |event: MouseEvent| {
        let Some(viewport) = dom::viewport_size(&viewport_window) else {
            return;
        };
        hero.follow(viewport, (event.client_x() as f64, event.client_y() as f64));
    })?;

    debug!("parallax: container and {} layers", layer_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    const DESKTOP: (f64, f64) = (1280.0, 800.0);

    #[test]
    fn centre_pointer_is_still() {
        let tuning = ParallaxSettings::default();
        let offset = pointer_offset(DESKTOP, (640.0, 400.0), 768.0).unwrap();
        assert_eq!(container_shift(offset, &tuning), Shift { x: 0.0, y: 0.0 });
        assert_eq!(layer_shift(offset, 3.0, &tuning), Shift { x: 0.0, y: 0.0 });
    }

    #[test]
    fn mobile_width_is_disabled() {
        assert_eq!(pointer_offset((767.0, 1024.0), (0.0, 0.0), 768.0), None);
        assert!(pointer_offset((768.0, 1024.0), (0.0, 0.0), 768.0).is_some());
    }

    #[test]
    fn container_uses_axis_divisors() {
        let tuning = ParallaxSettings::default();
        let offset = pointer_offset(DESKTOP, (1140.0, 700.0), 768.0).unwrap();
        assert_eq!(offset, Shift { x: 500.0, y: 300.0 });
        assert_eq!(container_shift(offset, &tuning), Shift { x: 10.0, y: 10.0 });
    }

    #[test]
    fn layers_scale_with_depth() {
        let tuning = ParallaxSettings::default();
        let offset = Shift { x: -200.0, y: 100.0 };
        assert_eq!(layer_shift(offset, 2.0, &tuning), Shift { x: -20.0, y: 10.0 });
        assert_eq!(layer_shift(offset, 0.0, &tuning), Shift { x: 0.0, y: 0.0 });
    }

    #[test]
    fn depth_defaults_to_zero() {
        assert_eq!(depth_of(&FakeElement::new("")), 0.0);
        assert_eq!(depth_of(&FakeElement::new("").with_attr(DEPTH_ATTR, "deep")), 0.0);
        assert_eq!(depth_of(&FakeElement::new("").with_attr(DEPTH_ATTR, " 1.5 ")), 1.5);
    }

    #[test]
    fn transform_is_css_translate() {
        assert_eq!(Shift { x: 1.5, y: -2.0 }.transform(), "translate(1.5px, -2px)");
        assert_eq!(Shift { x: -0.0, y: 0.0 }.transform(), "translate(0px, 0px)");
    }
}
