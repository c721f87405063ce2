//! Drop Zone Component
//!
//! A slot between cards where a dragged card can be released.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Drop zone shown between cards to indicate drop position
#[component]
pub fn DropZone(
    dnd: DndSignals,
    /// Column the card would land in
    column_id: String,
    /// Slot index in the rendered column
    index: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, column_id.clone(), index);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.with(Option::is_some);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if dnd.is_drop_target(&column_id, index) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
