//! Page Location
//!
//! Browser-side half of link sharing: reads the current address and mirrors
//! the document id into it without reloading.

use superskills_core::share;
use wasm_bindgen::JsValue;

fn href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Replace the current history entry with one carrying `document_id`
pub fn mirror_document_id(document_id: &str) {
    let Some(current) = href() else {
        return;
    };
    let Some(url) = share::mirror_document_id(&current, document_id) else {
        log::warn!("could not parse page address {}", current);
        return;
    };
    if url == current {
        return;
    }
    let history = web_sys::window().and_then(|w| w.history().ok());
    if let Some(history) = history {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            log::warn!("could not update page address: {:?}", e);
        }
    }
}

/// Shareable link for `document_id` on this origin
pub fn shareable_url(document_id: &str) -> Option<String> {
    share::shareable_url(&origin()?, document_id)
}
