//! WASM module for the cashflow dashboard's client-side behavior.
//!
//! The server (or the `dashboard-leptos` SSR renderer) produces static KPI
//! cards; this module enriches them in the browser - currency formatting,
//! tooltips, scroll reveal, click ripple - and exposes the host-facing
//! commands for exporting the currently displayed KPI set to a file or to
//! print.
//!
//! Uses canonical types and the export serializer from
//! `dashboard_leptos`; nothing here computes or stores financial data.

use dashboard_leptos::markers::REGION_ID;
use dashboard_leptos::types::{ExportError, ExportFormat, ExportPayload};
use dashboard_leptos::export;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element};

mod download;
mod enrich;
mod reader;

pub use enrich::EnrichmentController;

// Single-threaded wasm: the controller for the (single) mounted region is
// parked here between mount and unmount.
thread_local! {
    static CONTROLLER: RefCell<Option<EnrichmentController>> = const { RefCell::new(None) };
}

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Mount the view enrichment over the dashboard region.
///
/// Idempotent from the host's perspective: a still-mounted previous
/// controller is torn down first, so observers and handlers never stack.
#[wasm_bindgen]
pub fn mount_dashboard() -> Result<(), JsValue> {
    let document = current_document()?;
    let region = document
        .get_element_by_id(REGION_ID)
        .ok_or_else(|| JsValue::from_str("dashboard region not found"))?;

    let mut controller = EnrichmentController::new(region);
    controller.mount()?;

    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(previous) = slot.as_mut() {
            previous.unmount();
        }
        *slot = Some(controller);
    });

    console::log_1(&"cashflow dashboard: enrichment mounted".into());
    Ok(())
}

/// Tear down all enrichment registrations. Must run before the host
/// detaches the region, so no callback ever acts on a dead view.
#[wasm_bindgen]
pub fn unmount_dashboard() {
    CONTROLLER.with(|slot| {
        if let Some(mut controller) = slot.borrow_mut().take() {
            controller.unmount();
        }
    });
}

/// Export the currently displayed KPI set as a file download.
///
/// `format` is `"json"` or `"csv"` (empty defaults to JSON); anything else
/// is rejected with an error rather than silently doing nothing. The
/// extraction is a snapshot of the rendered cards at call time, and the
/// download is triggered exactly once.
#[wasm_bindgen]
pub fn export_dashboard_data(format: &str) -> Result<(), JsValue> {
    let format: ExportFormat = if format.trim().is_empty() {
        ExportFormat::Json
    } else {
        format.parse().map_err(|e: ExportError| JsValue::from_str(&e.to_string()))?
    };

    let document = current_document()?;
    let kpis = reader::extract(&export_region(&document)?);

    let payload = ExportPayload {
        timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        kpis,
        format,
    };
    let serialized = export::serialize(&payload)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let filename = export::export_filename(format, js_sys::Date::now() as u64);

    download::trigger_download(&serialized.body, serialized.content_type, &filename)
}

/// Trigger the environment's native print dialog.
#[wasm_bindgen]
pub fn print_dashboard() -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .print()
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// The dashboard region, falling back to the document root so an export
/// still works when the host renders cards outside the standard shell.
fn export_region(document: &Document) -> Result<Element, JsValue> {
    document
        .get_element_by_id(REGION_ID)
        .or_else(|| document.document_element())
        .ok_or_else(|| JsValue::from_str("no dashboard region to extract from"))
}
