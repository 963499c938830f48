//! # dashboard-leptos
//!
//! Leptos SSR renderer for the cashflow KPI dashboard panel, plus the pure
//! core of its export pipeline.
//!
//! This crate owns everything with a real contract and no DOM dependency:
//!
//! - [`types`] - KPI records, export payloads, and the export error taxonomy
//! - [`format`] - leading-prefix currency formatting
//! - [`export`] - JSON/CSV serialization of an export payload
//! - [`components`] - Leptos components for the static dashboard HTML
//! - [`markers`] - the DOM marker classes shared with the browser crate
//! - [`styles`] - CSS constants
//!
//! The companion `dashboard-wasm` crate consumes these canonical types and
//! adds the browser-only behavior: card extraction from the live DOM,
//! tooltips, scroll reveal, click ripple, and the file download trigger.
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_leptos::{render_dashboard, types::KpiRecord};
//!
//! let kpis = vec![KpiRecord {
//!     label: "Revenue".into(),
//!     value: "10000".into(),
//!     variation: "+5%".into(),
//! }];
//!
//! let html = render_dashboard(&kpis);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait - no reactive runtime or
//! hydration, pure static HTML generation. Interactivity is layered on
//! afterwards by the WASM crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod export;
pub mod format;
pub mod markers;
pub mod styles;
pub mod types;

use components::DashboardDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::KpiRecord;

/// Render the complete dashboard HTML document for a set of KPI records.
///
/// Values are rendered exactly as given - currency formatting happens
/// client-side on mount, so the server can pass raw numeric text.
///
/// # Example
///
/// ```rust
/// use dashboard_leptos::{render_dashboard, types::KpiRecord};
///
/// let html = render_dashboard(&[KpiRecord {
///     label: "Net Cash Flow".into(),
///     value: "2000".into(),
///     variation: String::new(),
/// }]);
/// assert!(html.contains("Net Cash Flow"));
/// ```
pub fn render_dashboard(kpis: &[KpiRecord]) -> String {
    let doc = view! {
        <DashboardDocument kpis=kpis.to_vec() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers;

    fn sample_kpis() -> Vec<KpiRecord> {
        vec![
            KpiRecord {
                label: "Revenue".into(),
                value: "10000".into(),
                variation: "+5%".into(),
            },
            KpiRecord {
                label: "Expenses".into(),
                value: "8000".into(),
                variation: "-2%".into(),
            },
            KpiRecord {
                label: "Runway".into(),
                value: "N/A".into(),
                variation: String::new(),
            },
        ]
    }

    // Attribute form, to avoid matching the class names inside the inlined CSS.
    fn class_attr(class: &str) -> String {
        format!("class=\"{class}\"")
    }

    #[test]
    fn renders_empty_dashboard() {
        let html = render_dashboard(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(markers::REGION_ID));
        assert!(!html.contains(&class_attr(markers::CARD_CLASS)));
    }

    #[test]
    fn renders_one_card_per_record_in_order() {
        let html = render_dashboard(&sample_kpis());
        assert_eq!(html.matches(&class_attr(markers::CARD_CLASS)).count(), 3);

        let revenue = html.find("Revenue").unwrap();
        let expenses = html.find("Expenses").unwrap();
        let runway = html.find("Runway").unwrap();
        assert!(revenue < expenses && expenses < runway);
    }

    #[test]
    fn cards_carry_the_marker_classes() {
        let html = render_dashboard(&sample_kpis());
        assert!(html.contains(&class_attr(markers::LABEL_CLASS)));
        assert!(html.contains(&class_attr(markers::VALUE_CLASS)));
        assert!(html.contains("class=\"kpi-variation positive\""));
    }

    #[test]
    fn empty_variation_renders_no_variation_element() {
        let html = render_dashboard(&[KpiRecord {
            label: "Runway".into(),
            value: "12".into(),
            variation: String::new(),
        }]);
        assert!(!html.contains("class=\"kpi-variation"));
    }

    #[test]
    fn variation_sign_picks_the_color_class() {
        let html = render_dashboard(&sample_kpis());
        assert!(html.contains("kpi-variation positive"));
        assert!(html.contains("kpi-variation negative"));
    }

    #[test]
    fn toolbar_buttons_are_present() {
        let html = render_dashboard(&[]);
        assert!(html.contains(markers::EXPORT_JSON_CLASS));
        assert!(html.contains(markers::EXPORT_CSV_CLASS));
        assert!(html.contains(markers::PRINT_CLASS));
    }

    #[test]
    fn styles_are_inlined() {
        let html = render_dashboard(&[]);
        assert!(html.contains("kpi-ripple"));
        assert!(html.contains("@media print"));
    }
}
