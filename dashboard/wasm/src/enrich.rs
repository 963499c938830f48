//! View enrichment controller.
//!
//! Orchestrates everything that happens to the server-rendered dashboard
//! once it is mounted in the browser: currency formatting of value nodes,
//! tooltip annotation, one-shot scroll reveal, and delegated click handling
//! (ripple feedback plus toolbar routing). Owns no state beyond references
//! into the mounted region and the handles needed to tear everything down.

use dashboard_leptos::format::{format_currency, parse_leading_number, DEFAULT_DECIMALS, DEFAULT_SYMBOL};
use dashboard_leptos::markers::{
    CARD_CLASS, EXPORT_CSV_CLASS, EXPORT_JSON_CLASS, LABEL_CLASS, PRINT_CLASS, REVEALED_CLASS,
    RIPPLE_CLASS, VALUE_CLASS, VARIATION_CLASS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

use crate::reader::child_text;

/// Fraction of a card that must be visible before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Lifetime of a ripple element, matching the CSS animation duration.
const RIPPLE_LIFETIME_MS: i32 = 600;

/// Lifecycle state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ControllerState {
    Unmounted,
    Mounting,
    Mounted,
}

/// Enriches a mounted dashboard region and tears the enrichment down again.
///
/// Lifecycle: `Unmounted -> Mounting -> Mounted -> Unmounted`. All steps are
/// best-effort DOM operations; the only capability-dependent one is the
/// scroll reveal, which is silently skipped when the runtime has no
/// `IntersectionObserver`.
pub struct EnrichmentController {
    state: ControllerState,
    region: Element,
    supports_visibility_observation: bool,
    observer: Option<IntersectionObserver>,
    // Closures must outlive their registrations; dropped on unmount.
    observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    click_callback: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl EnrichmentController {
    /// Create a controller for `region`. Capability detection happens once
    /// here, so mount behavior is deterministic afterwards.
    pub fn new(region: Element) -> Self {
        let supports_visibility_observation = web_sys::window()
            .map(|w| {
                js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);

        Self {
            state: ControllerState::Unmounted,
            region,
            supports_visibility_observation,
            observer: None,
            observer_callback: None,
            click_callback: None,
        }
    }

    /// Apply the full enrichment pass. No-op unless currently unmounted.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.state != ControllerState::Unmounted {
            return Ok(());
        }
        self.state = ControllerState::Mounting;

        self.apply_currency_formatting();
        self.annotate_tooltips();
        if self.supports_visibility_observation {
            self.register_reveal()?;
        }
        self.bind_delegated_clicks()?;

        self.state = ControllerState::Mounted;
        Ok(())
    }

    /// Remove all observers and handlers. Safe to call in any state;
    /// enrichment acting on a detached view is a defect, so this must run
    /// before the host throws the region away.
    pub fn unmount(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_callback = None;

        if let Some(callback) = self.click_callback.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "click",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
        self.state = ControllerState::Unmounted;
    }

    /// Rewrite every value node's text as a currency string, using the
    /// defaults. Unparsable text (already formatted, or "N/A") is left
    /// untouched.
    fn apply_currency_formatting(&self) {
        for value_node in self.select_all(VALUE_CLASS) {
            let Some(text) = value_node.text_content() else { continue };
            if let Some(formatted) = format_currency(&text, DEFAULT_SYMBOL, DEFAULT_DECIMALS) {
                value_node.set_text_content(Some(&formatted));
            }
        }
    }

    /// Set the advisory `title` attribute on each card, and override it on
    /// the variation node when the variation carries a `%`.
    fn annotate_tooltips(&self) {
        for card in self.select_all(CARD_CLASS) {
            let label = child_text(&card, LABEL_CLASS);
            let value = child_text(&card, VALUE_CLASS);
            let _ = card.set_attribute("title", &card_tooltip(&label, &value));

            if let Ok(Some(variation_node)) = card.query_selector(&format!(".{VARIATION_CLASS}")) {
                let variation = variation_node.text_content().unwrap_or_default();
                if let Some(tooltip) = variation_tooltip(&label, variation.trim()) {
                    let _ = variation_node.set_attribute("title", &tooltip);
                }
            }
        }
    }

    /// Observe each card once; the first time it is >=10% visible it gets
    /// the revealed class and is dropped from observation.
    fn register_reveal(&mut self) -> Result<(), JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for card in self.select_all(CARD_CLASS) {
            observer.observe(&card);
        }

        self.observer = Some(observer);
        self.observer_callback = Some(callback);
        Ok(())
    }

    /// One delegated click handler on the document covers any current or
    /// future card (ripple) and the toolbar buttons (export/print), without
    /// per-element rebinding. The handler is the subscription handle that
    /// `unmount` revokes.
    fn bind_delegated_clicks(&mut self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event.target() else { return };
            let Ok(target) = target.dyn_into::<Element>() else { return };

            if let Ok(Some(card)) = target.closest(&format!(".{CARD_CLASS}")) {
                if let Err(err) = spawn_ripple(&card, &event) {
                    console::warn_1(&err);
                }
            }

            // Failures are absorbed here: the user sees "nothing happens",
            // never an exception thrown into the host.
            if target.closest(&format!(".{EXPORT_JSON_CLASS}")).is_ok_and(|m| m.is_some()) {
                if let Err(err) = crate::export_dashboard_data("json") {
                    console::warn_1(&err);
                }
            } else if target.closest(&format!(".{EXPORT_CSV_CLASS}")).is_ok_and(|m| m.is_some()) {
                if let Err(err) = crate::export_dashboard_data("csv") {
                    console::warn_1(&err);
                }
            } else if target.closest(&format!(".{PRINT_CLASS}")).is_ok_and(|m| m.is_some()) {
                if let Err(err) = crate::print_dashboard() {
                    console::warn_1(&err);
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        self.click_callback = Some(callback);
        Ok(())
    }

    fn select_all(&self, class: &str) -> Vec<Element> {
        let mut elements = Vec::new();
        let Ok(nodes) = self.region.query_selector_all(&format!(".{class}")) else {
            return elements;
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
        elements
    }
}

/// Advisory tooltip for a whole card.
fn card_tooltip(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// Tooltip override for a variation node, only when the variation text
/// carries a `%`. A non-negative leading number reads as an increase;
/// anything else (including unparsable text) as a decrease, mirroring the
/// original dashboard's comparison semantics.
fn variation_tooltip(label: &str, variation: &str) -> Option<String> {
    if !variation.contains('%') {
        return None;
    }
    let increased = parse_leading_number(variation).is_some_and(|n| n >= 0.0);
    Some(if increased {
        format!("{label} increased")
    } else {
        format!("{label} decreased")
    })
}

/// Spawn a transient ripple on `card`, anchored at the click coordinates
/// relative to the card's box and sized to its larger dimension. Removed
/// after [`RIPPLE_LIFETIME_MS`]; concurrent ripples are independent.
fn spawn_ripple(card: &Element, event: &MouseEvent) -> Result<(), JsValue> {
    let document = card
        .owner_document()
        .ok_or_else(|| JsValue::from_str("card has no owner document"))?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;

    let rect = card.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    let ripple: HtmlElement = document.create_element("span")?.dyn_into()?;
    ripple.set_class_name(RIPPLE_CLASS);
    let style = ripple.style();
    style.set_property("width", &format!("{size}px"))?;
    style.set_property("height", &format!("{size}px"))?;
    style.set_property("left", &format!("{x}px"))?;
    style.set_property("top", &format!("{y}px"))?;
    card.append_child(&ripple)?;

    let remove = Closure::once_into_js(move || {
        ripple.remove();
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        RIPPLE_LIFETIME_MS,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_tooltip_joins_label_and_value() {
        assert_eq!(card_tooltip("Revenue", "$10,000.00"), "Revenue: $10,000.00");
    }

    #[test]
    fn positive_variation_reads_as_increase() {
        assert_eq!(
            variation_tooltip("Revenue", "+5%").as_deref(),
            Some("Revenue increased")
        );
        assert_eq!(
            variation_tooltip("Margin", "0%").as_deref(),
            Some("Margin increased")
        );
    }

    #[test]
    fn negative_variation_reads_as_decrease() {
        assert_eq!(
            variation_tooltip("Expenses", "-2%").as_deref(),
            Some("Expenses decreased")
        );
    }

    #[test]
    fn variation_without_percent_gets_no_tooltip() {
        assert_eq!(variation_tooltip("Revenue", "+5"), None);
        assert_eq!(variation_tooltip("Revenue", ""), None);
    }

    #[test]
    fn unparsable_percent_variation_reads_as_decrease() {
        assert_eq!(
            variation_tooltip("Runway", "n/a%").as_deref(),
            Some("Runway decreased")
        );
    }
}
