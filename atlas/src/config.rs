//! Board configuration.
//!
//! Every field has a default, so a host page may override any subset by
//! embedding a JSON document. Overrides are validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL, EXPORT_FILE_NAME, EXPORT_MIME, FLY_ZOOM, MARKER_ICON_ANCHOR,
    MARKER_ICON_SIZE, MARKER_ICON_URL, MARKER_POPUP_ANCHOR, MAX_ZOOM, SEARCH_RESULT_ZOOM, STORAGE_KEY,
};
use crate::error::ConfigError;
use crate::view::ViewState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub storage_key: String,
    pub default_view: ViewState,
    pub fly_zoom: u8,
    pub tiles: TileSource,
    pub marker: MarkerIcon,
    pub search: SearchOverlay,
    pub export: ExportSettings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            default_view: ViewState::default(),
            fly_zoom: FLY_ZOOM,
            tiles: TileSource::default(),
            marker: MarkerIcon::default(),
            search: SearchOverlay::default(),
            export: ExportSettings::default(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.tiles.url.contains(placeholder) {
                return Err(ConfigError::Invalid(format!("tiles.url is missing {placeholder}")));
            }
        }
        for (name, zoom) in [
            ("fly_zoom", self.fly_zoom),
            ("default_view.zoom", self.default_view.zoom),
            ("search.zoom", self.search.zoom),
        ] {
            if zoom > MAX_ZOOM {
                return Err(ConfigError::Invalid(format!("{name} {zoom} exceeds max zoom {MAX_ZOOM}")));
            }
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export.file_name must not be empty".into()));
        }
        Ok(())
    }
}

/// Raster tile provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSource {
    /// URL template with `{z}`, `{x}`, `{y}` (and optionally `{s}`).
    pub url: String,
    /// HTML attribution shown in the map corner.
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self { url: DEFAULT_TILE_URL.to_owned(), attribution: DEFAULT_TILE_ATTRIBUTION.to_owned() }
    }
}

/// Image marker drawn at the view center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIcon {
    pub url: String,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            url: MARKER_ICON_URL.to_owned(),
            size: MARKER_ICON_SIZE,
            anchor: MARKER_ICON_ANCHOR,
            popup_anchor: MARKER_POPUP_ANCHOR,
        }
    }
}

/// Search-box overlay options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOverlay {
    pub enabled: bool,
    pub position: String,
    pub placeholder: String,
    pub show_marker: bool,
    pub zoom: u8,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            position: "topright".to_owned(),
            placeholder: "Search".to_owned(),
            show_marker: false,
            zoom: SEARCH_RESULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
    pub mime: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { file_name: EXPORT_FILE_NAME.to_owned(), mime: EXPORT_MIME.to_owned() }
    }
}
