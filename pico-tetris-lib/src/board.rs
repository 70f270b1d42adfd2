use crate::common::{
    glyph, Screen, BOARD_HEIGHT, BOARD_WIDTH, FIELD_BOTTOM, FIELD_FIRST_VISIBLE, FIELD_LEFT,
    FIELD_RIGHT,
};
use crate::palette::{CLEARING_IDX, SPACE_IDX, WALL_IDX};

/// Screen column of board column 0.
pub const SCREEN_LEFT: u8 = 11;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Block(u8),
    /// A full row waiting to be removed.
    Clearing,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn color(self) -> u8 {
        match self {
            Cell::Empty => SPACE_IDX,
            Cell::Wall => WALL_IDX,
            Cell::Block(color) => color,
            Cell::Clearing => CLEARING_IDX,
        }
    }

    pub fn glyph(self) -> u8 {
        match self {
            Cell::Empty => glyph::SPACE,
            Cell::Wall => glyph::WALL,
            Cell::Block(_) => glyph::BLOCK,
            Cell::Clearing => glyph::CLEARING,
        }
    }
}

/// Settled geometry plus one dirty flag per cell.
///
/// Every write marks its cell dirty; only `repaint` clears the flag, after the
/// cell has been drawn.
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    dirty: [[bool; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
            dirty: [[false; BOARD_WIDTH]; BOARD_HEIGHT],
        };
        board.reset();
        board
    }

    /// Walls on the left, right and bottom; empty, dirty interior.
    pub fn reset(&mut self) {
        for (y, row) in self.cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let border = x == 0 || x == BOARD_WIDTH - 1 || y == BOARD_HEIGHT - 1;
                *cell = if border { Cell::Wall } else { Cell::Empty };
            }
        }
        self.mark_all_dirty();
    }

    fn index(col: i8, row: i8) -> Option<(usize, usize)> {
        if col < 0 || row < 0 {
            return None;
        }
        let (x, y) = (col as usize, row as usize);
        (x < BOARD_WIDTH && y < BOARD_HEIGHT).then_some((x, y))
    }

    fn in_field(col: i8, row: i8) -> bool {
        (FIELD_LEFT..=FIELD_RIGHT).contains(&col) && (0..=FIELD_BOTTOM).contains(&row)
    }

    /// Anything off the grid reads as wall.
    pub fn cell(&self, col: i8, row: i8) -> Cell {
        match Self::index(col, row) {
            Some((x, y)) => self.cells[y][x],
            None => Cell::Wall,
        }
    }

    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        !self.cell(col, row).is_empty()
    }

    pub fn is_dirty(&self, col: i8, row: i8) -> bool {
        Self::index(col, row).is_some_and(|(x, y)| self.dirty[y][x])
    }

    fn write(&mut self, col: i8, row: i8, cell: Cell) {
        debug_assert!(
            Self::in_field(col, row),
            "write outside the play field at ({}, {})",
            col,
            row
        );
        if !Self::in_field(col, row) {
            return;
        }
        let (x, y) = (col as usize, row as usize);
        self.cells[y][x] = cell;
        self.dirty[y][x] = true;
    }

    pub fn set_cell(&mut self, col: i8, row: i8, color: u8) {
        self.write(col, row, Cell::Block(color));
    }

    pub fn clear_cell(&mut self, col: i8, row: i8) {
        self.write(col, row, Cell::Empty);
    }

    pub fn mark_all_dirty(&mut self) {
        for row in self.dirty.iter_mut().take(BOARD_HEIGHT - 1) {
            row[FIELD_LEFT as usize..=FIELD_RIGHT as usize].fill(true);
        }
    }

    pub fn row_is_full(&self, row: i8) -> bool {
        (FIELD_LEFT..=FIELD_RIGHT).all(|col| self.is_occupied(col, row))
    }

    pub fn mark_row_clearing(&mut self, row: i8) {
        for col in FIELD_LEFT..=FIELD_RIGHT {
            self.write(col, row, Cell::Clearing);
        }
    }

    pub fn blank_row(&mut self, row: i8) {
        for col in FIELD_LEFT..=FIELD_RIGHT {
            self.clear_cell(col, row);
        }
    }

    /// Drops every row above `row` by one; the top row comes in empty.
    pub fn remove_row(&mut self, row: i8) {
        debug_assert!((0..=FIELD_BOTTOM).contains(&row));
        if !(0..=FIELD_BOTTOM).contains(&row) {
            return;
        }
        let interior = FIELD_LEFT as usize..=FIELD_RIGHT as usize;
        for y in (1..=row as usize).rev() {
            let above = self.cells[y - 1];
            self.cells[y][interior.clone()].copy_from_slice(&above[interior.clone()]);
            self.dirty[y][interior.clone()].fill(true);
        }
        self.cells[0][interior.clone()].fill(Cell::Empty);
        self.dirty[0][interior].fill(true);
    }

    /// Paints every dirty visible cell and clears its flag.
    pub fn repaint<S: Screen>(&mut self, screen: &mut S) {
        for row in FIELD_FIRST_VISIBLE..=FIELD_BOTTOM {
            for col in FIELD_LEFT..=FIELD_RIGHT {
                let (x, y) = (col as usize, row as usize);
                if !self.dirty[y][x] {
                    continue;
                }
                let cell = self.cells[y][x];
                screen.draw_cell(SCREEN_LEFT + col as u8, row as u8, cell.color(), cell.glyph());
                self.dirty[y][x] = false;
            }
        }
    }

    /// Builds a board whose bottom rows match `rows` (`#` = block, last line = row 23).
    #[cfg(test)]
    pub(crate) fn from_art(rows: &[&str]) -> Board {
        let mut board = Board::new();
        let top = FIELD_BOTTOM + 1 - rows.len() as i8;
        for (idx, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set_cell(FIELD_LEFT + x as i8, top + idx as i8, 1);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
