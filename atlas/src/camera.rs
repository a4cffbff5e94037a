//! Fly-to command seam implemented by the map surface.

use crate::coord::LatLng;

/// Programmatic camera control on the rendered map.
pub trait MapCamera {
    /// Start an animated transition to `target` at `zoom`.
    fn fly_to(&mut self, target: LatLng, zoom: u8);
}
