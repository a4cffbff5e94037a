//! Decimal-degree coordinates.
//!
//! Positions captured from the map or from a geolocation fix are rounded to
//! [`COORD_DECIMALS`] places before they enter the view or the saved list, so
//! the displayed value and the persisted value are always the same number.

#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::COORD_DECIMALS;

/// Round `value` to `decimals` places, halves away from zero. A result of
/// negative zero is returned as `0.0`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor + 0.0
}

/// A latitude or longitude in decimal degrees.
///
/// No range check is applied; out-of-range values are passed to the map as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Coordinate(f64);

impl Coordinate {
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Build a coordinate at display precision.
    #[must_use]
    pub fn rounded(degrees: f64) -> Self {
        Self(round_to(degrees, COORD_DECIMALS))
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl From<f64> for Coordinate {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

// Table cells, CSV, and notices all show the persisted precision.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = COORD_DECIMALS.unsigned_abs() as usize;
        write!(f, "{:.*}", decimals, round_to(self.0, COORD_DECIMALS))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

// Older documents hold coordinates as fixed-point strings ("13.08").
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CoordinateVisitor)
    }
}

struct CoordinateVisitor;

impl Visitor<'_> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("decimal degrees as a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Coordinate, E> {
        Ok(Coordinate(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Coordinate, E> {
        Ok(Coordinate(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Coordinate, E> {
        Ok(Coordinate(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Coordinate, E> {
        match v.trim().parse::<f64>() {
            Ok(degrees) if degrees.is_finite() => Ok(Coordinate(degrees)),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

/// A raw position as reported by the map or the geolocation API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
