use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = BoardConfig::default();
    assert_eq!(cfg.storage_key, "mapData");
    assert_eq!(cfg.fly_zoom, 9);
    assert_eq!(cfg.default_view, ViewState::default());
    assert_eq!(cfg.marker.size, [40, 40]);
    assert_eq!(cfg.marker.anchor, [17, 46]);
    assert_eq!(cfg.marker.popup_anchor, [0, -46]);
    assert_eq!(cfg.search.position, "topright");
    assert_eq!(cfg.search.zoom, 12);
    assert!(!cfg.search.show_marker);
    assert_eq!(cfg.export.file_name, "data.csv");
    assert_eq!(cfg.export.mime, "text/csv");
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = BoardConfig::from_json("{}").unwrap();
    assert_eq!(cfg, BoardConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = BoardConfig::from_json(r#"{"fly_zoom": 11, "tiles": {"attribution": "tiles by me"}}"#).unwrap();
    assert_eq!(cfg.fly_zoom, 11);
    assert_eq!(cfg.tiles.attribution, "tiles by me");
    assert_eq!(cfg.tiles.url, DEFAULT_TILE_URL);
    assert_eq!(cfg.storage_key, "mapData");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = BoardConfig::from_json("{nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = BoardConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
    assert!(err.to_string().contains("storage_key"));
}

#[test]
fn tile_url_without_placeholders_is_rejected() {
    let err = BoardConfig::from_json(r#"{"tiles": {"url": "https://tiles.example/{z}/{x}.png"}}"#).unwrap_err();
    assert!(err.to_string().contains("{y}"));
}

#[test]
fn zoom_above_max_is_rejected() {
    let err = BoardConfig::from_json(r#"{"fly_zoom": 30}"#).unwrap_err();
    assert!(err.to_string().contains("fly_zoom 30"));
}

#[test]
fn empty_export_file_name_is_rejected() {
    let err = BoardConfig::from_json(r#"{"export": {"file_name": ""}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
