//! The persisted saved-location record.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, LatLng};
use crate::view::ViewState;

/// A point of interest captured from a past [`ViewState`].
///
/// Field order is the storage and CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub zoom: u8,
}

impl SavedLocation {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, zoom: u8) -> Self {
        Self { latitude: Coordinate::new(latitude), longitude: Coordinate::new(longitude), zoom }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude.degrees(), self.longitude.degrees())
    }

    /// Whether `other` collides with this entry under the list's dedup rule.
    ///
    /// Only latitude is compared.
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        self.latitude == other.latitude
    }

    /// One CSV line: `latitude,longitude,zoom`.
    #[must_use]
    pub fn csv_line(&self) -> String {
        format!("{},{},{}", self.latitude, self.longitude, self.zoom)
    }
}

impl From<ViewState> for SavedLocation {
    fn from(view: ViewState) -> Self {
        Self { latitude: view.latitude, longitude: view.longitude, zoom: view.zoom }
    }
}
