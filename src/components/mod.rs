//! UI Components
//!
//! Reusable Leptos components.

mod board_toolbar;
mod card_tile;
mod drop_zone;
mod kanban_column;

pub use board_toolbar::BoardToolbar;
pub use card_tile::CardTile;
pub use drop_zone::DropZone;
pub use kanban_column::KanbanColumn;
