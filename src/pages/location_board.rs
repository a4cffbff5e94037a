//! The location board page: notices, map, actions, and the saved-locations table.

use leptos::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::location_table::LocationTable;
use crate::components::map_surface::{MapHandle, MapSurface};
use crate::components::notice_banner::NoticeBanner;
use crate::state::board::BoardState;
use crate::util::geolocation::{self, GeoWatch};

/// Page layout. Starts the geolocation watch on mount and stops it on cleanup.
#[component]
pub fn LocationBoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let map = MapHandle::new();
    let watch = StoredValue::new_local(None::<GeoWatch>);

    Effect::new(move || {
        if watch.with_value(Option::is_some) {
            return;
        }
        let started = geolocation::watch(move |reading| {
            board.update(|b| b.controller.update_geolocation(reading));
        });
        log::debug!("geolocation watch active: {}", started.is_active());
        watch.set_value(Some(started));
    });
    on_cleanup(move || watch.set_value(None));

    view! {
        <div class="location-board">
            <NoticeBanner/>
            <MapSurface handle=map/>
            <ActionBar map=map/>
            <LocationTable map=map/>
        </div>
    }
}
