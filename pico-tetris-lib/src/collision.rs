use crate::board::Board;
use crate::common::Dot;
use crate::shape::Shape;

/// Whether `shape` with its pivot at `at` fits on `board`.
///
/// Every move, rotation and spawn goes through here; walls and off-grid cells
/// count as occupied.
pub fn can_place(board: &Board, shape: &Shape, at: Dot) -> bool {
    shape
        .cells()
        .iter()
        .all(|&offset| !board.is_occupied(at.x + offset.x, at.y + offset.y))
}
