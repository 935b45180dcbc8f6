use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const DEFAULT_SIDEBAR_ID: &str = "sidebar";
pub const DEFAULT_TOGGLE_ID: &str = "sidebar-toggle";
pub const DEFAULT_ENTRY_CLASS: &str = "submenu-item";
pub const DEFAULT_PATH_ATTRIBUTE: &str = "href";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_OPEN_CLASS: &str = "open";

// viewports at or below this width (in css pixels) get the overlay behavior
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

// sidebar configuration
//
// every field has a default matching the stock page markup, so a page only needs to
// mention what it renames.  unknown keys are rejected so that a typo shows up in the
// console instead of silently falling back to the default
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    pub sidebar_id: String,
    pub toggle_id: String,
    pub entry_class: String,
    pub path_attribute: String,
    pub active_class: String,
    pub open_class: String,
    pub breakpoint: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        SidebarConfig {
            sidebar_id: String::from(DEFAULT_SIDEBAR_ID),
            toggle_id: String::from(DEFAULT_TOGGLE_ID),
            entry_class: String::from(DEFAULT_ENTRY_CLASS),
            path_attribute: String::from(DEFAULT_PATH_ATTRIBUTE),
            active_class: String::from(DEFAULT_ACTIVE_CLASS),
            open_class: String::from(DEFAULT_OPEN_CLASS),
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl SidebarConfig {
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("sidebar_id", &self.sidebar_id),
            ("toggle_id", &self.toggle_id),
            ("entry_class", &self.entry_class),
            ("path_attribute", &self.path_attribute),
            ("active_class", &self.active_class),
            ("open_class", &self.open_class),
        ];

        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(anyhow::Error::msg(format!("{field} must not be empty")));
            }

            // classes are looked up by name and written through DOMTokenList; a space would
            // mean several classes to the former and is rejected by the latter
            if value.chars().any(char::is_whitespace) {
                return Err(anyhow::Error::msg(format!(
                    "{field} must not contain whitespace: {value:?}"
                )));
            }
        }

        if !self.breakpoint.is_finite() || self.breakpoint < 0.0 {
            return Err(anyhow::Error::msg(format!(
                "breakpoint must be a non-negative number, got {}",
                self.breakpoint
            )));
        }

        Ok(())
    }
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SidebarConfig> {
    debug!("parsing sidebar config");

    let config: SidebarConfig = serde_json::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse sidebar config: {err}")))?;

    config.validate()?;

    debug!("successfully parsed sidebar config");
    Ok(config)
}
