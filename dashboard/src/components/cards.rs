//! KPI card grid and the single-card component.

use crate::markers::{CARD_CLASS, LABEL_CLASS, VALUE_CLASS, VARIATION_CLASS};
use crate::types::KpiRecord;
use leptos::prelude::*;

/// Grid of KPI cards, one per record, in input order.
#[component]
pub fn KpiGrid(kpis: Vec<KpiRecord>) -> impl IntoView {
    view! {
        <section class="kpi-grid">
            {kpis.into_iter().map(|kpi| {
                view! { <KpiCardView kpi=kpi /> }
            }).collect::<Vec<_>>()}
        </section>
    }
}

/// One KPI card: label, value, and an optional variation indicator.
///
/// The marker classes on each sub-element are the extraction contract the
/// browser-side reader depends on; a card with an empty variation simply
/// renders no variation element.
#[component]
pub fn KpiCardView(kpi: KpiRecord) -> impl IntoView {
    let variation = (!kpi.variation.is_empty()).then(|| {
        let negative = kpi.variation.trim_start().starts_with('-');
        let class = if negative {
            format!("{VARIATION_CLASS} negative")
        } else {
            format!("{VARIATION_CLASS} positive")
        };
        view! { <span class=class>{kpi.variation.clone()}</span> }
    });

    view! {
        <article class=CARD_CLASS>
            <span class=LABEL_CLASS>{kpi.label}</span>
            <span class=VALUE_CLASS>{kpi.value}</span>
            {variation}
        </article>
    }
}
