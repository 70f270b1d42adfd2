use smart_leds::RGB8;

use crate::common::Screen;

pub const BLACK: RGB8 = RGB8::new(0, 0, 0);
pub const BLUE: RGB8 = RGB8::new(0, 0, 255);
pub const RED: RGB8 = RGB8::new(255, 0, 0);
pub const MAGENTA: RGB8 = RGB8::new(255, 0, 255);
pub const GREEN: RGB8 = RGB8::new(0, 255, 0);
pub const CYAN: RGB8 = RGB8::new(0, 255, 255);
pub const YELLOW: RGB8 = RGB8::new(255, 255, 0);
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);
pub const MINT: RGB8 = RGB8::new(0, 255, 165);
pub const LIGHT_GREY: RGB8 = RGB8::new(200, 200, 200);
pub const FOREST: RGB8 = RGB8::new(0x22, 0xb2, 0x22);

// Palette indices
pub const SPACE_IDX: u8 = 0;
pub const J_BLOCK_IDX: u8 = 1;
pub const I_BLOCK_IDX: u8 = 2;
pub const S_BLOCK_IDX: u8 = 3;
pub const Z_BLOCK_IDX: u8 = 4;
pub const T_BLOCK_IDX: u8 = 5;
pub const O_BLOCK_IDX: u8 = 6;
pub const CLEARING_IDX: u8 = 7;
pub const L_BLOCK_IDX: u8 = 8;
pub const WALL_IDX: u8 = 9;
pub const BRICK_IDX: u8 = 10;

// Text and frames reuse block entries
pub const FRAME_IDX: u8 = Z_BLOCK_IDX;
pub const LABEL_IDX: u8 = T_BLOCK_IDX;
pub const PROMPT_IDX: u8 = O_BLOCK_IDX;
pub const TEXT_IDX: u8 = CLEARING_IDX;

pub type PaletteType = [RGB8; 11];
pub const PALETTE: PaletteType = [
    BLACK, BLUE, RED, MAGENTA, GREEN, CYAN, YELLOW, WHITE, MINT, LIGHT_GREY, FOREST,
];

/// Loads every palette entry the game draws with.
pub fn install<S: Screen>(screen: &mut S) {
    for (idx, color) in PALETTE.iter().enumerate() {
        screen.set_palette_entry(idx as u8, *color);
    }
}
