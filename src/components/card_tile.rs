//! Card Tile Component

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::Card;
use crate::views::format_amount;

/// A single draggable card
///
/// Hovering a card during a drag targets the slot in front of it.
#[component]
pub fn CardTile(
    card: Card,
    column_id: String,
    index: usize,
    dnd: DndSignals,
) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, card.id.clone(), column_id.clone());
    let on_mouseenter = make_on_zone_mouseenter(dnd, column_id, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let id = card.id.clone();
    let tile_class = move || {
        if dnd.is_dragging(&id) { "card-tile dragging" } else { "card-tile" }
    };

    view! {
        <div
            class=tile_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <p class="card-label">{card.label}</p>
            <p class="card-value">{format_amount(card.value)}</p>
        </div>
    }
}
