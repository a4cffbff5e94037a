//! Top-level pages.

pub mod location_board;
