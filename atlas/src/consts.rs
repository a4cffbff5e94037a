//! Shared constants for the atlas crate.

// ── View ────────────────────────────────────────────────────────

/// Latitude the map opens on when nothing else is known.
pub const DEFAULT_LATITUDE: f64 = 13.08;

/// Longitude the map opens on when nothing else is known.
pub const DEFAULT_LONGITUDE: f64 = 80.24;

/// Zoom level the map opens on.
pub const DEFAULT_ZOOM: u8 = 4;

/// Zoom level used for every fly-to (locate me, view saved point).
pub const FLY_ZOOM: u8 = 9;

/// Highest zoom level accepted from configuration.
pub const MAX_ZOOM: u8 = 22;

/// Decimal places kept when capturing a coordinate from a click or a fix.
pub const COORD_DECIMALS: i32 = 2;

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key holding the saved-location document.
pub const STORAGE_KEY: &str = "mapData";

// ── Export ──────────────────────────────────────────────────────

pub const EXPORT_FILE_NAME: &str = "data.csv";
pub const EXPORT_MIME: &str = "text/csv";

// ── Map chrome ──────────────────────────────────────────────────

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const MARKER_ICON_URL: &str = "/assets/marker.png";
pub const MARKER_ICON_SIZE: [u32; 2] = [40, 40];
pub const MARKER_ICON_ANCHOR: [i32; 2] = [17, 46];
pub const MARKER_POPUP_ANCHOR: [i32; 2] = [0, -46];

/// Zoom applied when a search result is picked.
pub const SEARCH_RESULT_ZOOM: u8 = 12;
