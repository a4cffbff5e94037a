//! Current map center and zoom.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM};
use crate::coord::{Coordinate, LatLng};

/// The map's current center and zoom. Always replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub zoom: u8,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            latitude: Coordinate::new(DEFAULT_LATITUDE),
            longitude: Coordinate::new(DEFAULT_LONGITUDE),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(latitude: Coordinate, longitude: Coordinate, zoom: u8) -> Self {
        Self { latitude, longitude, zoom }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude.degrees(), self.longitude.degrees())
    }
}

/// What caused the most recent view change.
///
/// The map surface pans its camera for [`ViewOrigin::Click`]. For
/// [`ViewOrigin::Fly`] the camera is already animating toward the target, so
/// only the marker follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewOrigin {
    #[default]
    Initial,
    Click,
    Fly,
}

/// A click on the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapClick {
    pub position: LatLng,
    /// Zoom level of the map at the time of the click.
    pub zoom: u8,
}

impl MapClick {
    #[must_use]
    pub fn new(lat: f64, lng: f64, zoom: u8) -> Self {
        Self { position: LatLng::new(lat, lng), zoom }
    }

    /// The view this click selects, at display precision.
    #[must_use]
    pub fn to_view(self) -> ViewState {
        ViewState {
            latitude: Coordinate::rounded(self.position.lat),
            longitude: Coordinate::rounded(self.position.lng),
            zoom: self.zoom,
        }
    }
}
