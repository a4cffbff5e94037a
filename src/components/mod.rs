//! UI components composing the location board page.

pub mod action_bar;
pub mod location_table;
pub mod map_surface;
pub mod notice_banner;
