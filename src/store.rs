//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every helper
//! computes a whole new value and writes it back in one step; nothing
//! hands out the board for in-place edits.

use im::Vector;
use leptos::prelude::*;
use leptos_dragdrop::DragResult;
use reactive_stores::Store;

use crate::board::{add_item, Board, CardIdGenerator};
use crate::drag::to_move_descriptor;
use crate::models::Column;
use crate::reorder::{apply_move, MoveDescriptor};
use crate::views::filter_columns;

/// Board state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct KanbanState {
    /// Current board snapshot
    pub board: Board,
    /// Column title filter, as typed
    pub filter_text: String,
    /// Source of IDs for "Add item"
    pub card_ids: CardIdGenerator,
}

impl KanbanState {
    pub fn new(board: Board) -> Self {
        Self {
            card_ids: CardIdGenerator::after(&board),
            filter_text: String::new(),
            board,
        }
    }
}

/// Type alias for the store
pub type KanbanStore = Store<KanbanState>;

/// Get the kanban store from context
pub fn use_kanban_store() -> KanbanStore {
    expect_context::<KanbanStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a completed drag; declined moves leave the board as it is
pub fn store_apply_move(store: &KanbanStore, mv: &MoveDescriptor) {
    match store.board().with_untracked(|board| apply_move(board, mv)) {
        Ok(next) => {
            log::debug!(
                "[DND] Moved card {} from {} to {:?}@{}",
                mv.card_id,
                mv.source_column,
                mv.destination_column,
                mv.destination_index.unwrap_or(0)
            );
            *store.board().write() = next;
        }
        Err(reason) => log::info!("[DND] Move ignored: {}", reason),
    }
}

/// Apply whatever the drag layer reports at mouseup
pub fn store_apply_drop(store: &KanbanStore, result: DragResult) {
    let mv = store.board().with_untracked(|board| to_move_descriptor(result, board));
    store_apply_move(store, &mv);
}

/// Append a new card to the first column
pub fn store_add_item(store: &KanbanStore) {
    let mut ids = store.card_ids().get_untracked();
    let result = store.board().with_untracked(|board| add_item(board, &mut ids));
    *store.card_ids().write() = ids;

    match result {
        Ok(next) => {
            if let Some(card) = next.columns().front().and_then(|column| column.cards.last()) {
                log::info!("[BOARD] Added card {} ({})", card.id, card.label);
            }
            *store.board().write() = next;
        }
        Err(e) => log::warn!("[BOARD] Add item declined: {}", e),
    }
}

/// Replace the column filter text
pub fn store_set_filter(store: &KanbanStore, text: String) {
    *store.filter_text().write() = text;
}

/// Current filter text (tracked)
pub fn filter_text(store: &KanbanStore) -> String {
    store.filter_text().get()
}

/// Columns that pass the current filter (tracked)
pub fn visible_columns(store: &KanbanStore) -> Vector<Column> {
    let filter = store.filter_text().get();
    store.board().with(|board| filter_columns(board.columns(), &filter))
}
