use anyhow::Result;
use constcat::concat;
use tracing::{Level, debug, error, instrument};
use web_sys::Document;

use common::{SidebarConfig, parse_config};

use crate::page::js_error;

pub const CONFIG_SCRIPT_ID: &str = "sidebar-config";

// overrides live in an inert json script block so the server can render them inline:
//
//   <script type="application/json" id="sidebar-config">{"breakpoint": 1024}</script>
pub const CONFIG_SELECTOR: &str = concat!("script#", CONFIG_SCRIPT_ID, "[type=\"application/json\"]");

fn read_overrides(document: &Document) -> Result<Option<String>> {
    let script = document
        .query_selector(CONFIG_SELECTOR)
        .map_err(|err| js_error("failed to query config script", err))?;

    Ok(script.and_then(|script| script.text_content()))
}

// the page's sidebar config, falling back to the defaults
//
// a broken config block should not take the sidebar down with it, so parse failures are
// logged and the defaults used instead
#[instrument(level=Level::DEBUG, skip(document))]
pub fn read_config(document: &Document) -> SidebarConfig {
    let doc = match read_overrides(document) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            debug!("no config block on page, using defaults");
            return SidebarConfig::default();
        }
        Err(err) => {
            error!("{err}, using defaults");
            return SidebarConfig::default();
        }
    };

    match parse_config(&doc) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}, using defaults");
            SidebarConfig::default()
        }
    }
}
