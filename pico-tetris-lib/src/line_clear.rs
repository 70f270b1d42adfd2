use crate::board::Board;
use crate::common::FIELD_BOTTOM;
use crate::log::debug;
use crate::session::points_for;

/// Full rows found after a landing, bottom row first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct FullRows {
    rows: [i8; 4],
    len: usize,
}

impl FullRows {
    /// Scans the five rows around the landed pivot, from the bottom up.
    pub fn scan(board: &Board, pivot_row: i8) -> Self {
        let mut found = Self::default();
        let bottom = (pivot_row + 2).min(FIELD_BOTTOM);
        let mut row = bottom;
        while row >= pivot_row - 2 && found.len < found.rows.len() {
            if board.row_is_full(row) {
                found.rows[found.len] = row;
                found.len += 1;
            }
            row -= 1;
        }
        if found.len > 0 {
            debug!("{} full rows, lowest {}", found.len, found.rows[0]);
        }
        found
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.rows[..self.len].iter().copied()
    }

    /// Highest cleared row on screen; where the points are shown.
    pub fn top(&self) -> Option<i8> {
        self.iter().last()
    }

    pub fn points(&self) -> u32 {
        points_for(self.len)
    }

    /// First animation phase: turn the rows into clearing markers.
    pub fn mark(&self, board: &mut Board) {
        for row in self.iter() {
            board.mark_row_clearing(row);
        }
    }

    /// Second phase: blank them.
    pub fn blank(&self, board: &mut Board) {
        for row in self.iter() {
            board.blank_row(row);
        }
    }

    /// Removes the rows bottom-up. Each removal pulls the rows above it down by
    /// one, so every later (higher) row has moved down by the removals so far.
    pub fn compact(&self, board: &mut Board) {
        for (shifted, row) in self.iter().enumerate() {
            board.remove_row(row + shifted as i8);
        }
    }
}
