//! Browser Downloads
//!
//! Hands generated CSV/JSON text to the browser as a file download through
//! a `Blob` object URL.

use chrono::Local;
use wasm_bindgen::{JsCast, JsValue};

use blanq_core::csv::{export, export_filename, CsvRecord};

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Trigger a download of `contents` saved as `filename`
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element expected".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("downloaded {} ({} bytes)", filename, contents.len());
    Ok(())
}

/// Export `rows` as `prefix-YYYY-MM-DD.csv`
pub fn download_csv<'a, T: CsvRecord + 'a>(prefix: &str, rows: impl IntoIterator<Item = &'a T>) {
    let filename = export_filename(prefix, Local::now().date_naive(), "csv");
    if let Err(e) = download_text(&filename, "text/csv;charset=utf-8", &export(rows)) {
        log::warn!("CSV download of {} failed: {}", filename, e);
    }
}
