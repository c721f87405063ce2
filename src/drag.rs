//! Drag Results
//!
//! Converts what the drag-and-drop layer reports into board moves.

use leptos_dragdrop::DragResult;

use crate::board::Board;
use crate::reorder::MoveDescriptor;

/// Build the move for a completed drag
///
/// Drop slots are counted in the rendered column, which still shows the
/// dragged card. Inside its own column, a slot past the card's current
/// position lands one earlier once the card is lifted out.
pub fn to_move_descriptor(result: DragResult, board: &Board) -> MoveDescriptor {
    let mv = MoveDescriptor::new(result.draggable_id, result.source_zone);
    let Some(dest) = result.destination else {
        return mv;
    };

    let index = if dest.zone == mv.source_column {
        match board.column(&dest.zone).and_then(|column| column.position_of(&mv.card_id)) {
            Some(current) if current < dest.index => dest.index - 1,
            _ => dest.index,
        }
    } else {
        dest.index
    };

    mv.to(dest.zone, index)
}
