//! Table of saved locations with per-row view and delete actions.

use leptos::prelude::*;

use atlas::table::TableRow;

use crate::components::map_surface::MapHandle;
use crate::state::board::BoardState;

#[component]
pub fn LocationTable(map: MapHandle) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let rows = move || board.with(|b| b.controller.rows());
    let is_empty = move || board.with(|b| b.controller.store().is_empty());

    // Rows are keyed by (key, index) so a row whose position shifts after a
    // delete is rebuilt with its new index.
    view! {
        <div class="location-table">
            <table class="location-table__table" aria-label="Saved locations">
                <thead>
                    <tr>
                        <th class="location-table__cell--center">"Latitude"</th>
                        <th class="location-table__cell--center">"Longitude"</th>
                        <th class="location-table__cell--right">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=is_empty>
                        <tr class="location-table__empty">
                            <td colspan="3">"No saved locations"</td>
                        </tr>
                    </Show>
                    <For
                        each=rows
                        key=|row: &TableRow| (row.key, row.index)
                        children=move |row: TableRow| {
                            let index = row.index;
                            let on_view = move |_| {
                                let mut camera = map;
                                board.update(|b| {
                                    b.controller.view_saved(index, &mut camera);
                                });
                            };
                            let on_delete = move |_| {
                                board.update(|b| {
                                    b.controller.remove_at(index);
                                });
                            };
                            view! {
                                <tr class="location-table__row">
                                    <td class="location-table__cell--center">{row.latitude()}</td>
                                    <td class="location-table__cell--center">{row.longitude()}</td>
                                    <td class="location-table__cell--right">
                                        <button class="icon-btn" title="View" on:click=on_view>
                                            "\u{1F441}"
                                        </button>
                                        <button class="icon-btn icon-btn--danger" title="Delete" on:click=on_delete>
                                            "\u{1F5D1}"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
