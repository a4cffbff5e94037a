//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::location_board::LocationBoardPage;
use crate::state::board::BoardState;
use crate::state::notice::NoticeState;
use crate::util::page_config;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Root application component.
///
/// Reads the page configuration once, loads the saved list, and provides the
/// board and notice state to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = page_config::load();
    let board = RwSignal::new(BoardState::new(config));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(board);
    provide_context(notices);

    view! {
        <Stylesheet id="leaflet" href=LEAFLET_CSS/>
        <Title text="Location Board"/>
        <LocationBoardPage/>
    }
}
