//! Kanban Board App
//!
//! Owns the board store and the drag-and-drop wiring.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::board::Board;
use crate::components::{BoardToolbar, KanbanColumn};
use crate::seed::initial_board;
use crate::store::{store_apply_drop, visible_columns, KanbanState};

#[component]
pub fn App() -> impl IntoView {
    let board = match initial_board() {
        Ok(board) => {
            log::info!(
                "[APP] Seeded board: {} columns, {} cards",
                board.columns().len(),
                board.card_count()
            );
            board
        }
        Err(e) => {
            log::error!("[APP] Seed board rejected, starting empty: {}", e);
            Board::empty()
        }
    };

    // Provide the store to all children
    let store = Store::new(KanbanState::new(board));
    provide_context(store);

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |result| store_apply_drop(&store, result));

    view! {
        <main class="board-page">
            <div class="board">
                <BoardToolbar />

                <For
                    each=move || visible_columns(&store)
                    // Key on the cards too so a moved card re-renders its column
                    key=|column| (column.id.clone(), column.cards.clone())
                    children=move |column| view! { <KanbanColumn column=column dnd=dnd /> }
                />
            </div>
        </main>
    }
}
