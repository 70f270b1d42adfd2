use std::fmt::Write as _;
use std::io::{self, Write};

use pico_tetris_lib::common::{glyph, Screen};
use smart_leds::RGB8;

/// Character screen drawn with ANSI escapes, two terminal columns per cell.
/// Cell updates pile up in a buffer that `flush` sends in one write.
pub struct ConsoleScreen {
    palette: [RGB8; 16],
    buffer: String,
}

impl ConsoleScreen {
    pub fn new() -> Self {
        Self {
            palette: [RGB8::default(); 16],
            buffer: String::with_capacity(16 * 1024),
        }
    }

    fn cell_text(code: u8) -> String {
        let text = match code {
            glyph::BLOCK => "██",
            glyph::WALL => "▓▓",
            glyph::BRICK => "▒▒",
            glyph::CLEARING => "░░",
            glyph::FRAME_TOP_LEFT => "┌─",
            glyph::FRAME_TOP_RIGHT => "┐ ",
            glyph::FRAME_BOTTOM_LEFT => "└─",
            glyph::FRAME_BOTTOM_RIGHT => "┘ ",
            glyph::FRAME_HORIZONTAL => "──",
            glyph::FRAME_VERTICAL => "│ ",
            b' '..=b'~' => return format!("{} ", code as char),
            _ => "??",
        };
        text.to_string()
    }
}

impl Screen for ConsoleScreen {
    fn draw_cell(&mut self, col: u8, row: u8, color: u8, glyph: u8) {
        let RGB8 { r, g, b } = self.palette[color as usize % self.palette.len()];
        let _ = write!(
            self.buffer,
            "\x1b[{};{}H\x1b[38;2;{};{};{}m{}",
            row as u16 + 1,
            col as u16 * 2 + 1,
            r,
            g,
            b,
            Self::cell_text(glyph)
        );
    }

    fn set_palette_entry(&mut self, index: u8, color: RGB8) {
        if let Some(entry) = self.palette.get_mut(index as usize) {
            *entry = color;
        }
    }

    fn clear_screen(&mut self) {
        self.buffer.clear();
        self.buffer.push_str("\x1b[0m\x1b[2J");
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.buffer.push_str("\x1b[0m");
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(self.buffer.as_bytes());
        let _ = stdout.flush();
        self.buffer.clear();
    }
}
