//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `board` wraps the atlas controller (view, saved list, geolocation);
//! `notice` holds transient user-facing messages so components can report
//! outcomes without owning any chrome themselves.

pub mod board;
pub mod notice;
