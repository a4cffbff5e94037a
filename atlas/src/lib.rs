//! Core model for the location board: a map view, a persisted list of saved
//! points, and the controller that ties user actions to both.
//!
//! This crate has no browser dependencies. Every browser collaborator reaches
//! it through a trait ([`storage::StorageAdapter`], [`camera::MapCamera`]) or a
//! plain value ([`geo::GeoReading`], [`view::MapClick`]), so the whole flow can
//! be exercised natively. The `locboard` front end supplies the browser
//! implementations and renders the state kept here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Wires add/locate/view/remove/export to view and store |
//! | [`store`] | Ordered saved-location list mirrored to storage |
//! | [`storage`] | Key/value storage seam and an in-memory implementation |
//! | [`location`] | The persisted `SavedLocation` record |
//! | [`view`] | Current map center/zoom and click translation |
//! | [`coord`] | Decimal-degree coordinates and rounding |
//! | [`geo`] | Geolocation reading supplied by the browser |
//! | [`camera`] | Fly-to command seam implemented by the map surface |
//! | [`table`] | Row view-models for the saved-location table |
//! | [`export`] | CSV export artifact |
//! | [`config`] | Board configuration and validation |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (zoom levels, storage key, precision) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod coord;
pub mod error;
pub mod export;
pub mod geo;
pub mod location;
pub mod storage;
pub mod store;
pub mod table;
pub mod view;
