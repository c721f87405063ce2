//! Kanban Column Component
//!
//! Title, a colored lane of cards with drop slots, and the column total.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::{CardTile, DropZone};
use crate::models::Column;
use crate::views::{column_total, format_total};

/// One board column
#[component]
pub fn KanbanColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let total = format_total(column_total(&column.cards));
    let end_slot = column.cards.len();
    let column_id = column.id.clone();

    let cards = column
        .cards
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, card)| {
            view! {
                // Slot in front of this card
                <DropZone dnd=dnd column_id=column_id.clone() index=index />
                <CardTile card=card column_id=column_id.clone() index=index dnd=dnd />
            }
        })
        .collect_view();

    view! {
        <section class="kanban-column">
            <h1 class="column-title">{column.title}</h1>
            <div class="column-row">
                <div class="column-lane" style=format!("background-color: {};", column.color)>
                    {cards}
                    <DropZone dnd=dnd column_id=column_id index=end_slot />
                </div>
                <div class="column-total">
                    <p>"Valor total"</p>
                    <p>{total}</p>
                </div>
            </div>
        </section>
    }
}
