use anyhow::Result;
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Document;

use crate::page::js_error;

// document.readyState is "loading" until the parser is done, then "interactive" and
// finally "complete"
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

// run `init` once the document structure has been parsed
//
// the wasm module is usually instantiated asynchronously, so by the time we get here
// DOMContentLoaded may already have fired and would never fire again
pub fn on_ready<F>(document: &Document, init: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if is_parsed(&document.ready_state()) {
        debug!("document already parsed, attaching immediately");
        init();
        return Ok(());
    }

    debug!("waiting for DOMContentLoaded");

    let callback = Closure::once_into_js(move || init());
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| js_error("failed to add DOMContentLoaded listener", err))
}
