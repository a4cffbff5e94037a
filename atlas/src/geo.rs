//! Geolocation reading supplied by the browser.
//!
//! The reading is owned by the geolocation collaborator and only read here.
//! The front end subscribes once and forwards each new value to
//! [`crate::controller::Controller::update_geolocation`].

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use crate::coord::LatLng;
use crate::error::LocateError;

/// Message used when the browser exposes no geolocation API.
pub const GEO_UNSUPPORTED: &str = "Geolocation not supported";

/// Latest state of the device position lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoReading {
    pub loaded: bool,
    pub coordinates: Option<LatLng>,
    pub error: Option<String>,
}

impl GeoReading {
    /// No answer from the browser yet.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn located(lat: f64, lng: f64) -> Self {
        Self { loaded: true, coordinates: Some(LatLng::new(lat, lng)), error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { loaded: true, coordinates: None, error: Some(message.into()) }
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self::failed(GEO_UNSUPPORTED)
    }

    /// The current fix, or why there is none.
    pub fn fix(&self) -> Result<LatLng, LocateError> {
        if let Some(message) = &self.error {
            return Err(LocateError::Failed(message.clone()));
        }
        match (self.loaded, self.coordinates) {
            (true, Some(position)) => Ok(position),
            _ => Err(LocateError::Pending),
        }
    }

    /// Loaded with a position and no error.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.fix().is_ok()
    }
}
