//! # locboard
//!
//! Leptos + WASM front end for the location board: a Leaflet map, a table of
//! saved locations kept in `localStorage`, "locate me" via the browser
//! geolocation API, and CSV export.
//!
//! All board behavior lives in the `atlas` crate. This crate renders it and
//! supplies the browser side of each seam: [`util::storage::BrowserStorage`]
//! for persistence, [`components::map_surface::MapHandle`] for camera
//! commands, and [`util::geolocation`] for position readings. Browser code is
//! compiled only with the `csr` feature; without it every adapter is an inert
//! stand-in so the state modules test natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
