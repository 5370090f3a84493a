use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::config::Settings;
use crate::dom::{self, Marked};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    Monthly,
    Yearly,
}

impl PriceMode {
    pub fn from_switch(checked: bool) -> Self {
        if checked {
            PriceMode::Yearly
        } else {
            PriceMode::Monthly
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            PriceMode::Monthly => "data-monthly",
            PriceMode::Yearly => "data-yearly",
        }
    }
}

pub fn price_for<T: Marked>(card: &T, mode: PriceMode) -> Option<String> {
    card.attribute(mode.attribute())
}

/// Counts switch changes so a fade scheduled by an older change can tell it
/// has been superseded.
#[derive(Debug, Default)]
pub struct FadeSequence {
    latest: Cell<u64>,
}

impl FadeSequence {
    pub fn begin(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }
}

struct Fade {
    value: Element,
    text: String,
}

/// Price elements that get a new text, and those whose card has no price for
/// the mode. The latter keep their text and are shown at full opacity.
#[derive(Default)]
struct Plan {
    fades: Vec<Fade>,
    unpriced: Vec<Element>,
}

fn plan(cards: &[Element], price_value: &str, mode: PriceMode) -> Plan {
    let mut plan = Plan::default();
    for card in cards {
        // Cards without a price element (e.g. "Custom") stay as they are.
        let Some(value) = card.query_selector(price_value).ok().flatten() else {
            continue;
        };
        match price_for(card, mode) {
            Some(text) => plan.fades.push(Fade { value, text }),
            None => plan.unpriced.push(value),
        }
    }
    plan
}

pub fn init(document: &Document, settings: &Settings) -> Result<()> {
    let Some(switch) = document
        .get_element_by_id(&settings.selectors.pricing_switch_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        debug!("pricing: no #{} input", settings.selectors.pricing_switch_id);
        return Ok(());
    };

    let cards = dom::query_all(document, &settings.selectors.plan_price)?;
    let price_value = settings.selectors.price_value.clone();
    let delay = settings.fade_delay_ms;
    let sequence = Rc::new(FadeSequence::default());

    let input = switch.clone();
    dom::listen(&switch, "change", move |_: Event| {
        let mode = PriceMode::from_switch(input.checked());
        let generation = sequence.begin();
        let Plan { fades, unpriced } = plan(&cards, &price_value, mode);

        for fade in &fades {
            dom::set_style(&fade.value, "opacity", "0");
        }
        for value in &unpriced {
            dom::set_style(value, "opacity", "1");
        }

        let sequence = sequence.clone();
        Timeout::new(delay, move || {
            if !sequence.is_current(generation) {
                debug!("pricing: fade {} superseded", generation);
                return;
            }
            for fade in &fades {
                fade.value.set_text_content(Some(&fade.text));
                dom::set_style(&fade.value, "opacity", "1");
            }
        })
        .forget();
    })?;

    debug!("pricing: switch wired");
    Ok(())
}
