//! Map surface: the Leaflet map, tile layer, center marker, and search box.
//!
//! ARCHITECTURE
//! ============
//! The mounted map lives in a [`MapHandle`] shared by the page. The surface
//! component mounts it once its container exists and re-syncs camera and
//! marker whenever the board state changes. Other components borrow the same
//! handle as a [`MapCamera`] to issue fly-to commands through the controller.

use leptos::prelude::*;

use atlas::camera::MapCamera;
use atlas::coord::LatLng;

use crate::state::board::BoardState;
#[cfg(feature = "csr")]
use crate::util::leaflet::MountedMap;

/// Shared handle to the mounted map. Inert until [`MapSurface`] mounts it and
/// in non-browser builds.
#[derive(Clone, Copy)]
pub struct MapHandle {
    #[cfg(feature = "csr")]
    mounted: StoredValue<Option<MountedMap>, LocalStorage>,
}

impl MapHandle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            mounted: StoredValue::new_local(None),
        }
    }

    pub fn is_mounted(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.mounted.with_value(Option::is_some)
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    /// Remove the map from the page and drop its event handlers.
    pub fn unmount(&self) {
        #[cfg(feature = "csr")]
        self.mounted.set_value(None);
    }
}

impl Default for MapHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl MapCamera for MapHandle {
    fn fly_to(&mut self, target: LatLng, zoom: u8) {
        #[cfg(feature = "csr")]
        self.mounted.with_value(|mounted| {
            if let Some(map) = mounted {
                map.fly_to(target, zoom);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, zoom);
        }
    }
}

/// Map container. Clicking the map moves the view to the clicked point.
#[component]
pub fn MapSurface(handle: MapHandle) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use atlas::view::MapClick;

        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            let snapshot = board.with(|b| b.controller.snapshot());
            if !handle.is_mounted() {
                let config = board.with_untracked(|b| b.config.clone());
                let on_click = move |click: MapClick| board.update(|b| b.controller.handle_click(click));
                match MountedMap::mount(&element, &config, &snapshot, on_click) {
                    Ok(map) => handle.mounted.set_value(Some(map)),
                    Err(e) => log::warn!("map mount failed: {}", crate::util::js::error_message(&e)),
                }
                return;
            }
            handle.mounted.update_value(|mounted| {
                if let Some(map) = mounted {
                    map.sync(&snapshot);
                }
            });
        });
        on_cleanup(move || handle.unmount());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (handle, board);
    }

    view! { <div class="map-surface" node_ref=container></div> }
}
