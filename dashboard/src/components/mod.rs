//! Leptos UI components for the dashboard document.
//!
//! # Component Hierarchy
//!
//! ```text
//! DashboardDocument
//! ├── ExportToolbar
//! └── KpiGrid
//!     └── KpiCardView (per record)
//! ```
//!
//! Components are typically used via [`crate::render_dashboard`], but can be
//! composed directly for custom layouts.

mod cards;
mod document;
mod toolbar;

pub use cards::{KpiCardView, KpiGrid};
pub use document::DashboardDocument;
pub use toolbar::ExportToolbar;
