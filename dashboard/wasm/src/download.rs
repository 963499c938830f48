//! File download trigger: materializes a serialized export as a
//! client-initiated save.
//!
//! Pure environment effect. Whether the user accepts or cancels the save
//! dialog is not observable here and is not reported to the caller.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trigger a browser file save for `body` under `filename`.
///
/// Builds a Blob with the declared content type, points a transient
/// `<a download>` at its object URL, clicks it, then revokes the URL and
/// removes the anchor. Must be invoked at most once per export call.
pub fn trigger_download(body: &str, content_type: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let props = BlobPropertyBag::new();
    props.set_type(content_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body_el = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body_el.append_child(&anchor)?;
    anchor.click();
    Url::revoke_object_url(&url)?;
    anchor.remove();

    Ok(())
}
