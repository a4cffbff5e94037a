//! Browser adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser API behind a plain Rust surface so pages
//! and components never touch `web-sys` directly. Outside the `csr` build the
//! adapters degrade to inert stand-ins.

pub mod download;
pub mod error;
pub mod geolocation;
#[cfg(feature = "csr")]
pub mod js;
#[cfg(feature = "csr")]
pub mod leaflet;
pub mod page_config;
pub mod storage;
