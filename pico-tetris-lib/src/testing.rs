//! In-memory stand-ins for the front-end traits.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use smart_leds::RGB8;

use crate::common::{ButtonPad, Clock, Screen, Speaker, SCREEN_COLUMNS, SCREEN_ROWS};
use crate::input::Buttons;

const COLS: usize = SCREEN_COLUMNS as usize;
const ROWS: usize = SCREEN_ROWS as usize;

pub struct FakeScreen {
    pub palette: [RGB8; 16],
    pub palette_writes: usize,
    pub draws: usize,
    pub clears: usize,
    pub flushes: usize,
    cells: [[(u8, u8); COLS]; ROWS],
}

impl FakeScreen {
    pub fn new() -> Self {
        Self {
            palette: [RGB8::default(); 16],
            palette_writes: 0,
            draws: 0,
            clears: 0,
            flushes: 0,
            cells: [[(0, b' '); COLS]; ROWS],
        }
    }

    /// (color, glyph) last drawn at a cell.
    pub fn cell(&self, col: u8, row: u8) -> (u8, u8) {
        self.cells[row as usize][col as usize]
    }

    /// `len` glyphs starting at (col, row) as a string.
    pub fn text(&self, col: u8, row: u8, len: usize) -> String {
        (0..len)
            .map(|i| self.cell(col + i as u8, row).1 as char)
            .collect()
    }
}

impl Screen for FakeScreen {
    fn draw_cell(&mut self, col: u8, row: u8, color: u8, glyph: u8) {
        self.cells[row as usize][col as usize] = (color, glyph);
        self.draws += 1;
    }

    fn set_palette_entry(&mut self, index: u8, color: RGB8) {
        self.palette[index as usize] = color;
        self.palette_writes += 1;
    }

    fn clear_screen(&mut self) {
        self.cells = [[(0, b' '); COLS]; ROWS];
        self.clears += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Replays scripted samples, then holds `idle` forever.
pub struct FakePad {
    script: VecDeque<Buttons>,
    pub idle: Buttons,
    pub reads: usize,
}

impl FakePad {
    pub fn idle(idle: Buttons) -> Self {
        Self {
            script: VecDeque::new(),
            idle,
            reads: 0,
        }
    }

    pub fn scripted(script: &[Buttons], idle: Buttons) -> Self {
        Self {
            script: script.iter().copied().collect(),
            idle,
            reads: 0,
        }
    }
}

impl ButtonPad for FakePad {
    fn read_buttons(&mut self) -> Buttons {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.idle)
    }
}

#[derive(Default)]
pub struct FakeSpeaker {
    pub tone: Option<u16>,
    pub tones: Vec<Option<u16>>,
}

impl Speaker for FakeSpeaker {
    fn set_tone(&mut self, period: u16) {
        self.tone = Some(period);
        self.tones.push(self.tone);
    }

    fn disable_tone(&mut self) {
        self.tone = None;
        self.tones.push(None);
    }
}

/// Time only moves when someone sleeps.
#[derive(Default)]
pub struct FakeClock {
    now: Cell<u64>,
    pub sleeps: RefCell<Vec<u64>>,
}

impl FakeClock {
    pub fn starting_at(micros: u64) -> Self {
        Self {
            now: Cell::new(micros),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    pub fn advance(&self, micros: u64) {
        self.now.set(self.now.get() + micros);
    }
}

impl Clock for FakeClock {
    fn now_micros(&self) -> u64 {
        self.now.get()
    }

    async fn sleep_micros(&self, micros: u64) {
        self.sleeps.borrow_mut().push(micros);
        self.advance(micros);
    }
}
