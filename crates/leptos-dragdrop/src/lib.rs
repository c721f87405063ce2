//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Draggables live in named zones (lists). A completed drag is reported as a
//! [`DragResult`]: what was dragged, where it came from, and the slot it was
//! released over, if any.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a draggable was picked up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSource {
    pub draggable_id: String,
    pub zone: String,
}

/// A slot inside a zone: insert before the element currently at `index`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropLocation {
    pub zone: String,
    pub index: usize,
}

/// Outcome of a completed drag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragResult {
    pub draggable_id: String,
    pub source_zone: String,
    /// None when released outside every slot
    pub destination: Option<DropLocation>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropLocation>>,
    pub drop_target_write: WriteSignal<Option<DropLocation>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Is this draggable the one being dragged right now?
    pub fn is_dragging(&self, draggable_id: &str) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|src| src.draggable_id == draggable_id))
    }

    /// Is this slot the one under the pointer?
    pub fn is_drop_target(&self, zone: &str, index: usize) -> bool {
        self.drop_target_read
            .with(|t| t.as_ref().is_some_and(|loc| loc.zone == zone && loc.index == index))
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Has the pointer travelled far enough from the press point to count as a drag?
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropLocation>);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(
    dnd: DndSignals,
    draggable_id: String,
    zone: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_write.set(Some(DragSource {
                draggable_id: draggable_id.clone(),
                zone: zone.clone(),
            }));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Only a pending press that hasn't turned into a drag yet
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else { return };

        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop slot
pub fn make_on_zone_mouseenter(
    dnd: DndSignals,
    zone: String,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(DropLocation {
                zone: zone.clone(),
                index,
            }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` runs once per completed drag, including drags released outside
/// every slot (`destination: None`). A plain click never reaches it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragResult) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let destination = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // If we were actually dragging (not just clicking)
        if let Some(source) = dragging {
            on_drop(DragResult {
                draggable_id: source.draggable_id,
                source_zone: source.zone,
                destination,
            });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_drag_clears_drag_state() {
        Owner::new().set();
        let dnd = create_dnd_signals();
        let source = DragSource { draggable_id: "1".to_string(), zone: "A".to_string() };
        dnd.pending_write.set(Some(source.clone()));
        dnd.dragging_write.set(Some(source));
        dnd.drop_target_write.set(Some(DropLocation { zone: "B".to_string(), index: 0 }));
        assert!(dnd.is_dragging("1"));
        assert!(dnd.is_drop_target("B", 0));

        end_drag(&dnd);

        assert_eq!(dnd.dragging_read.get_untracked(), None);
        assert_eq!(dnd.pending_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
    }

    #[test]
    fn test_small_jitter_is_a_click() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }
}
