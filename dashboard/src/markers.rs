//! DOM marker classes shared between the SSR renderer and the enrichment
//! layer.
//!
//! The server-rendered template tags each element with one of these classes;
//! the browser crate locates cards, value nodes, and toolbar buttons by the
//! same names. Keeping them in one place is what makes the extraction
//! contract hold.

/// `id` of the dashboard region element the enrichment controller owns.
pub const REGION_ID: &str = "cashflow-dashboard";

/// Class marking one KPI card.
pub const CARD_CLASS: &str = "kpi-card";
/// Class marking a card's label sub-element.
pub const LABEL_CLASS: &str = "kpi-label";
/// Class marking a card's value sub-element.
pub const VALUE_CLASS: &str = "kpi-value";
/// Class marking a card's optional variation sub-element.
pub const VARIATION_CLASS: &str = "kpi-variation";

/// Class added to a card the first time it becomes sufficiently visible.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Class of the transient ripple element spawned on card click.
pub const RIPPLE_CLASS: &str = "kpi-ripple";

/// Toolbar button: export the current KPI set as JSON.
pub const EXPORT_JSON_CLASS: &str = "kpi-export-json";
/// Toolbar button: export the current KPI set as CSV.
pub const EXPORT_CSV_CLASS: &str = "kpi-export-csv";
/// Toolbar button: print the dashboard.
pub const PRINT_CLASS: &str = "kpi-print";
