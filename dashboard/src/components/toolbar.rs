//! Export toolbar component.
//!
//! The buttons carry only marker classes; the browser-side enrichment crate
//! binds a single delegated click handler to route them, so the rendered
//! HTML stays script-free.

use crate::markers::{EXPORT_CSV_CLASS, EXPORT_JSON_CLASS, PRINT_CLASS};
use leptos::prelude::*;

/// Toolbar with export-to-JSON, export-to-CSV, and print actions.
#[component]
pub fn ExportToolbar() -> impl IntoView {
    view! {
        <div class="dashboard-toolbar">
            <button class=format!("toolbar-btn {EXPORT_JSON_CLASS}") title="Export as JSON">
                "Export JSON"
            </button>
            <button class=format!("toolbar-btn {EXPORT_CSV_CLASS}") title="Export as CSV">
                "Export CSV"
            </button>
            <button class=format!("toolbar-btn {PRINT_CLASS}") title="Print dashboard">
                "Print"
            </button>
        </div>
    }
}
