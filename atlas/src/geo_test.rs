use super::*;

#[test]
fn default_is_pending() {
    let reading = GeoReading::default();
    assert!(!reading.loaded);
    assert_eq!(reading, GeoReading::pending());
    assert_eq!(reading.fix(), Err(LocateError::Pending));
}

#[test]
fn located_reading_yields_fix() {
    let reading = GeoReading::located(13.0823, 80.2437);
    assert!(reading.is_ready());
    assert_eq!(reading.fix(), Ok(LatLng::new(13.0823, 80.2437)));
}

#[test]
fn failed_reading_carries_message() {
    let reading = GeoReading::failed("User denied Geolocation");
    assert!(reading.loaded);
    assert!(!reading.is_ready());
    assert_eq!(reading.fix(), Err(LocateError::Failed("User denied Geolocation".into())));
}

#[test]
fn error_wins_over_stale_coordinates() {
    let reading = GeoReading { loaded: true, coordinates: Some(LatLng::new(1.0, 2.0)), error: Some("timeout".into()) };
    assert_eq!(reading.fix(), Err(LocateError::Failed("timeout".into())));
}

#[test]
fn loaded_without_coordinates_is_pending() {
    let reading = GeoReading { loaded: true, coordinates: None, error: None };
    assert_eq!(reading.fix(), Err(LocateError::Pending));
}

#[test]
fn unsupported_message() {
    assert_eq!(GeoReading::unsupported().fix().unwrap_err().to_string(), "Geolocation not supported");
}
