//! KPI card reader: snapshot extraction from the mounted view.
//!
//! Read-only. Cards are visited in DOM order; a missing sub-element degrades
//! to an empty string field, never an error.

use dashboard_leptos::markers::{CARD_CLASS, LABEL_CLASS, VALUE_CLASS, VARIATION_CLASS};
use dashboard_leptos::types::KpiRecord;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Extract one [`KpiRecord`] per card found under `region`, in DOM order.
///
/// Always returns a sequence (possibly empty). The result reflects what is
/// currently rendered - call it again after any view change.
pub fn extract(region: &Element) -> Vec<KpiRecord> {
    let mut records = Vec::new();
    let Ok(cards) = region.query_selector_all(&format!(".{CARD_CLASS}")) else {
        return records;
    };
    for i in 0..cards.length() {
        let Some(node) = cards.item(i) else { continue };
        let Ok(card) = node.dyn_into::<Element>() else { continue };
        records.push(KpiRecord {
            label: child_text(&card, LABEL_CLASS),
            value: child_text(&card, VALUE_CLASS),
            variation: child_text(&card, VARIATION_CLASS),
        });
    }
    records
}

/// Trimmed text of the first child matching `class`, or `""` when the
/// element is absent or empty.
pub(crate) fn child_text(card: &Element, class: &str) -> String {
    card.query_selector(&format!(".{class}"))
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
