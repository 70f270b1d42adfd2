use crate::board::Board;
use crate::catalog::PieceKind;
use crate::collision::can_place;
use crate::common::{Dot, SPAWN};
use crate::log::trace;
use crate::shape::Shape;

/// What a gravity tick did to the piece.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Fall {
    /// Countdown still running.
    Waiting,
    Moved,
    /// Could not move down; the piece stays where it is.
    Landed,
}

/// The falling piece. Its board cells are written by `place` and removed by
/// `erase`; the controller erases before moving and places afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ActivePiece {
    kind: PieceKind,
    pos: Dot,
    shape: Shape,
    step: u8,
    countdown: u8,
}

impl ActivePiece {
    /// New piece at the spawn cell, or `None` when that spot is taken.
    pub fn spawn(kind: PieceKind, board: &Board, fall_speed: u8) -> Option<Self> {
        let piece = Self {
            kind,
            pos: SPAWN,
            shape: kind.def().shape,
            step: 0,
            countdown: fall_speed,
        };
        can_place(board, &piece.shape, piece.pos).then_some(piece)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn pos(&self) -> Dot {
        self.pos
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn color(&self) -> u8 {
        self.kind.color()
    }

    pub fn cells(&self) -> [Dot; 4] {
        self.shape.cells().map(|offset| self.pos.offset_by(offset))
    }

    /// Quarter turn clockwise, or back to the catalog orientation once the
    /// kind's limit is used up. Blocked turns leave the piece alone.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let def = self.kind.def();
        let (shape, step) = if self.step < def.rotations {
            (self.shape.rotate(), self.step + 1)
        } else {
            (def.shape, 0)
        };
        if !can_place(board, &shape, self.pos) {
            return false;
        }
        self.shape = shape;
        self.step = step;
        trace!("rotated to step {}", step);
        true
    }

    pub fn shift(&mut self, dx: i8, board: &Board) -> bool {
        self.try_move(Dot::new(dx, 0), board)
    }

    pub fn soft_drop(&mut self, board: &Board) -> bool {
        self.try_move(Dot::DOWN, board)
    }

    /// Counts down one tick and drops a row when the countdown runs out.
    pub fn gravity(&mut self, fall_speed: u8, board: &Board) -> Fall {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return Fall::Waiting;
        }
        self.countdown = fall_speed;
        if self.try_move(Dot::DOWN, board) {
            Fall::Moved
        } else {
            Fall::Landed
        }
    }

    /// True when the next step down would be blocked.
    pub fn is_grounded(&self, board: &Board) -> bool {
        !can_place(board, &self.shape, self.pos.move_by(Dot::DOWN))
    }

    fn try_move(&mut self, direction: Dot, board: &Board) -> bool {
        let target = self.pos.move_by(direction);
        if !can_place(board, &self.shape, target) {
            return false;
        }
        self.pos = target;
        true
    }

    pub fn place(&self, board: &mut Board) {
        for cell in self.cells() {
            board.set_cell(cell.x, cell.y, self.color());
        }
    }

    pub fn erase(&self, board: &mut Board) {
        for cell in self.cells() {
            board.clear_cell(cell.x, cell.y);
        }
    }
}
