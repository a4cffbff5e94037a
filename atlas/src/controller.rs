//! Board controller.
//!
//! ARCHITECTURE
//! ============
//! The controller exclusively owns the current [`ViewState`] and the
//! [`LocationStore`]. User actions arrive as method calls; anything that must
//! move the rendered map goes out through a [`MapCamera`] borrowed for the
//! duration of the call, so the controller itself holds no browser handles
//! and can live inside a reactive signal.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::camera::MapCamera;
use crate::config::{BoardConfig, ExportSettings};
use crate::coord::Coordinate;
use crate::error::LocateError;
use crate::export::ExportArtifact;
use crate::geo::GeoReading;
use crate::location::SavedLocation;
use crate::storage::StorageAdapter;
use crate::store::LocationStore;
use crate::table::{TableRow, rows};
use crate::view::{MapClick, ViewOrigin, ViewState};

/// Result of [`Controller::add_current`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOutcome {
    Inserted(SavedLocation),
    /// An entry with this latitude is already saved.
    Duplicate(SavedLocation),
}

impl AddOutcome {
    #[must_use]
    pub fn inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// What the map surface needs to sync its camera and marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSnapshot {
    pub view: ViewState,
    pub origin: ViewOrigin,
    /// Bumped on every view change, including changes to an identical view.
    pub seq: u64,
    pub marker_visible: bool,
}

#[derive(Debug, Clone)]
pub struct Controller<S> {
    view: ViewState,
    origin: ViewOrigin,
    view_seq: u64,
    fly_zoom: u8,
    export: ExportSettings,
    geo: GeoReading,
    store: LocationStore<S>,
}

impl<S: StorageAdapter> Controller<S> {
    /// Open the store under the configured key and start at the default view.
    pub fn new(storage: S, config: &BoardConfig) -> Self {
        Self {
            view: config.default_view,
            origin: ViewOrigin::Initial,
            view_seq: 0,
            fly_zoom: config.fly_zoom,
            export: config.export.clone(),
            geo: GeoReading::pending(),
            store: LocationStore::open(storage, config.storage_key.clone()),
        }
    }

    // --- view ---

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn origin(&self) -> ViewOrigin {
        self.origin
    }

    #[must_use]
    pub fn view_seq(&self) -> u64 {
        self.view_seq
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.view,
            origin: self.origin,
            seq: self.view_seq,
            marker_visible: self.marker_visible(),
        }
    }

    /// Replace the current view.
    pub fn set_view(&mut self, view: ViewState, origin: ViewOrigin) {
        self.view = view;
        self.origin = origin;
        self.view_seq += 1;
    }

    /// Replace the view after a fly-to has been issued.
    pub fn recenter_to(&mut self, view: ViewState) {
        self.set_view(view, ViewOrigin::Fly);
    }

    pub fn handle_click(&mut self, click: MapClick) {
        self.set_view(click.to_view(), ViewOrigin::Click);
    }

    // --- geolocation ---

    pub fn update_geolocation(&mut self, reading: GeoReading) {
        self.geo = reading;
    }

    /// The center marker is drawn only once the device position is known.
    #[must_use]
    pub fn marker_visible(&self) -> bool {
        self.geo.is_ready()
    }

    /// Fly to the device position and center the view on it.
    pub fn locate_me(&mut self, camera: &mut impl MapCamera) -> Result<ViewState, LocateError> {
        let fix = self.geo.fix()?;
        camera.fly_to(fix, self.fly_zoom);
        let view = ViewState::new(Coordinate::rounded(fix.lat), Coordinate::rounded(fix.lng), self.fly_zoom);
        self.recenter_to(view);
        Ok(view)
    }

    /// Fly to the saved entry at `index`. Independent of the geolocation
    /// reading. `None` when `index` is out of range.
    pub fn view_saved(&mut self, index: usize, camera: &mut impl MapCamera) -> Option<ViewState> {
        let location = *self.store.get(index)?;
        camera.fly_to(location.center(), self.fly_zoom);
        let view = ViewState::new(location.latitude, location.longitude, self.fly_zoom);
        self.recenter_to(view);
        Some(view)
    }

    // --- saved list ---

    /// Save the current view.
    pub fn add_current(&mut self) -> AddOutcome {
        let location = SavedLocation::from(self.view);
        if self.store.add(location) {
            log::debug!("saved {}", location.csv_line());
            AddOutcome::Inserted(location)
        } else {
            AddOutcome::Duplicate(location)
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<SavedLocation> {
        self.store.remove_at(index)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<TableRow> {
        rows(&self.store)
    }

    #[must_use]
    pub fn export(&self) -> ExportArtifact {
        ExportArtifact::csv(self.store.entries(), &self.export)
    }

    #[must_use]
    pub fn store(&self) -> &LocationStore<S> {
        &self.store
    }
}
