//! Root document component - the complete HTML page.

use crate::components::{ExportToolbar, KpiGrid};
use crate::markers::REGION_ID;
use crate::styles::DASHBOARD_CSS;
use crate::types::KpiRecord;
use leptos::prelude::*;

/// The complete HTML document for the dashboard panel.
///
/// Everything inside the region element (`#cashflow-dashboard`) is owned by
/// the enrichment controller once the WASM module mounts.
#[component]
pub fn DashboardDocument(kpis: Vec<KpiRecord>) -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Cashflow Dashboard"</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body>
                <div class="dashboard-shell" id=REGION_ID>
                    <header class="dashboard-header">
                        <h1>"Cash Flow Overview"</h1>
                        <ExportToolbar />
                    </header>
                    <KpiGrid kpis=kpis />
                </div>
            </body>
        </html>
    }
}
