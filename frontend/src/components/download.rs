use anyhow::{anyhow, Result};
use event_console_common::export::Export;
use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Saves the spreadsheet through a temporary anchor. The object URL is revoked when
/// `url` drops at the end of this function.
pub fn save_export(export: &Export) -> Result<()> {
    let blob = Blob::new_with_options(export.bytes.as_slice(), Some(XLSX_MIME));
    let url = ObjectUrl::from(blob);

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("not an anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(&export.filename);

    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    body.append_child(&anchor)
        .map_err(|e| anyhow!("attach anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| anyhow!("detach anchor: {:?}", e))?;
    log::debug!("Saved {}", export.filename);
    Ok(())
}
