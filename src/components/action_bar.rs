//! Board actions: save the current view, locate me, export.

use leptos::prelude::*;

use crate::components::map_surface::MapHandle;
use crate::components::notice_banner::post;
use crate::state::board::BoardState;
use crate::state::notice::{NoticeKind, NoticeState, add_message, locate_message};
use crate::util::download::download;

#[component]
pub fn ActionBar(map: MapHandle) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_add = move |_| {
        if let Some(outcome) = board.try_update(|b| b.controller.add_current()) {
            let (kind, message) = add_message(outcome);
            post(notices, kind, message);
        }
    };

    let on_locate = move |_| {
        let mut camera = map;
        if let Some(Err(err)) = board.try_update(|b| b.controller.locate_me(&mut camera)) {
            let (kind, message) = locate_message(&err);
            post(notices, kind, message);
        }
    };

    let on_export = move |_| {
        let artifact = board.with_untracked(|b| b.controller.export());
        if let Err(e) = download(&artifact) {
            log::warn!("export failed: {e}");
            post(notices, NoticeKind::Error, format!("Export failed: {e}"));
        }
    };

    view! {
        <div class="action-bar">
            <button class="btn btn--primary" on:click=on_add>
                "Add Data"
            </button>
            <button class="btn btn--secondary" on:click=on_locate>
                "Locate Me"
            </button>
            <button class="btn btn--primary" on:click=on_export>
                "Export Data"
            </button>
        </div>
    }
}
