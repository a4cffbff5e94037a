//! Board configuration supplied by the host page.
//!
//! A page may embed
//! `<script type="application/json" id="locboard-config">{...}</script>`
//! with any subset of [`BoardConfig`] fields. A missing element means
//! defaults; an invalid document is logged and also means defaults.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use atlas::config::BoardConfig;

pub const CONFIG_ELEMENT_ID: &str = "locboard-config";

/// Resolve the config from an optional embedded JSON document.
pub fn resolve(raw: Option<&str>) -> BoardConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return BoardConfig::default();
    };
    match BoardConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            BoardConfig::default()
        }
    }
}

/// Read the embedded config from the current document.
pub fn load() -> BoardConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        resolve(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve(None)
    }
}
