use smart_leds::RGB8;

use crate::input::Buttons;
use crate::shape::Offset;

// Board geometry: a 10x24 play field inside a wall on the left, right and bottom
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 25;
pub const FIELD_LEFT: i8 = 1;
pub const FIELD_RIGHT: i8 = 10;
pub const FIELD_BOTTOM: i8 = 23;
/// Row 0 sits behind the decorative top wall and is never painted.
pub const FIELD_FIRST_VISIBLE: i8 = 1;

pub const SPAWN: Dot = Dot::new(6, 3);

/// Character grid of the 240x320 display in 8x8 cells.
pub const SCREEN_COLUMNS: u8 = 30;
pub const SCREEN_ROWS: u8 = 40;

pub const TICK_MICROS: u64 = 16_667;
pub const TICKS_PER_SECOND: u16 = 60;

/// Character codes understood by every `Screen` implementation.
pub mod glyph {
    pub const BLOCK: u8 = 0x01;
    pub const WALL: u8 = 0x02;
    pub const BRICK: u8 = 0x03;
    pub const FRAME_TOP_LEFT: u8 = 0x04;
    pub const FRAME_VERTICAL: u8 = 0x05;
    pub const FRAME_BOTTOM_LEFT: u8 = 0x06;
    pub const FRAME_HORIZONTAL: u8 = 0x07;
    pub const FRAME_TOP_RIGHT: u8 = 0x08;
    pub const FRAME_BOTTOM_RIGHT: u8 = 0x09;
    pub const SPACE: u8 = b' ';
    pub const CLEARING: u8 = 0x61;
}

// Simple PRNG implementation
pub struct Prng {
    state: u32,
}

impl Prng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u8 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        (self.state >> 16) as u8
    }

    pub fn next_range(&mut self, max: u8) -> u8 {
        if max == 0 {
            return 0;
        }
        self.next() % max
    }
}

/// A board coordinate: `x` is the column, `y` the row (growing downwards).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Dot {
    pub x: i8,
    pub y: i8,
}

impl Dot {
    pub const LEFT: Dot = Dot::new(-1, 0);
    pub const RIGHT: Dot = Dot::new(1, 0);
    pub const DOWN: Dot = Dot::new(0, 1);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn move_by(&self, direction: Dot) -> Dot {
        Dot::new(self.x + direction.x, self.y + direction.y)
    }

    pub fn offset_by(&self, offset: Offset) -> Dot {
        Dot::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Character-cell display: 30 columns of 8x8 cells, colors by palette index.
pub trait Screen {
    fn draw_cell(&mut self, col: u8, row: u8, color: u8, glyph: u8);
    fn set_palette_entry(&mut self, index: u8, color: RGB8);
    fn clear_screen(&mut self);
    /// Called once per tick after the redraw; buffered screens push the frame here.
    fn flush(&mut self) {}
}

/// One read of every button at once.
pub trait ButtonPad {
    fn read_buttons(&mut self) -> Buttons;
}

/// Square-wave tone output. `period` is the PWM clock divider in 1/16 steps.
pub trait Speaker {
    fn set_tone(&mut self, period: u16);
    fn disable_tone(&mut self);
}

/// Monotonic time source the tick scheduler waits on.
pub trait Clock {
    fn now_micros(&self) -> u64;
    async fn sleep_micros(&self, micros: u64);
}

/// Game trait: `run` returns once the session is over.
pub trait Game {
    async fn run(&mut self);
}
