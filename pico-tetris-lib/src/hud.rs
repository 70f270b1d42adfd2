//! Everything on screen that is not the play field: frames, labels,
//! counters, the next-piece preview and the banners.

use crate::board::SCREEN_LEFT;
use crate::catalog::PieceKind;
use crate::common::{glyph, Screen, FIELD_BOTTOM, SCREEN_COLUMNS};
use crate::palette::{
    BRICK_IDX, FRAME_IDX, LABEL_IDX, PROMPT_IDX, SPACE_IDX, TEXT_IDX, WALL_IDX,
};

// Counters, right-aligned so the last digit sits at col + NUMBER_WIDTH - 1
const NUMBER_WIDTH: u8 = 7;
const SCORE_AT: (u8, u8) = (0, 16);
const HIGH_SCORE_AT: (u8, u8) = (0, 19);
const LINES_AT: (u8, u8) = (0, 22);
const LEVEL_AT: (u8, u8) = (0, 25);

const BRICK_ROWS: core::ops::RangeInclusive<u8> = 15..=26;
const NEXT_PIVOT: (u8, u8) = (27, 21);
const BANNER_ROW: u8 = 13;
const BANNER_COL: u8 = 13;
const PROMPT_AT: (u8, u8) = (6, 25);

pub fn print_str<S: Screen>(screen: &mut S, col: u8, row: u8, color: u8, text: &str) {
    for (i, byte) in text.bytes().enumerate() {
        screen.draw_cell(col + i as u8, row, color, byte);
    }
}

/// Digits only, last digit at `col + 6`; cells to the left are left alone.
pub fn print_number<S: Screen>(screen: &mut S, col: u8, row: u8, color: u8, value: u32) {
    let mut value = value;
    let mut x = col + NUMBER_WIDTH - 1;
    loop {
        screen.draw_cell(x, row, color, b'0' + (value % 10) as u8);
        value /= 10;
        if value == 0 || x == col {
            break;
        }
        x -= 1;
    }
}

fn draw_frame<S: Screen>(screen: &mut S, left: u8, top: u8, right: u8, bottom: u8) {
    screen.draw_cell(left, top, FRAME_IDX, glyph::FRAME_TOP_LEFT);
    screen.draw_cell(right, top, FRAME_IDX, glyph::FRAME_TOP_RIGHT);
    screen.draw_cell(left, bottom, FRAME_IDX, glyph::FRAME_BOTTOM_LEFT);
    screen.draw_cell(right, bottom, FRAME_IDX, glyph::FRAME_BOTTOM_RIGHT);
    for x in left + 1..right {
        screen.draw_cell(x, top, FRAME_IDX, glyph::FRAME_HORIZONTAL);
        screen.draw_cell(x, bottom, FRAME_IDX, glyph::FRAME_HORIZONTAL);
    }
    for y in top + 1..bottom {
        screen.draw_cell(left, y, FRAME_IDX, glyph::FRAME_VERTICAL);
        screen.draw_cell(right, y, FRAME_IDX, glyph::FRAME_VERTICAL);
        for x in left + 1..right {
            screen.draw_cell(x, y, SPACE_IDX, glyph::SPACE);
        }
    }
}

/// The static screen around the field, drawn once per game.
pub fn draw_layout<S: Screen>(screen: &mut S) {
    screen.clear_screen();
    for row in BRICK_ROWS {
        for col in 0..SCREEN_COLUMNS {
            screen.draw_cell(col, row, BRICK_IDX, glyph::BRICK);
        }
    }

    draw_frame(screen, 0, 14, 9, 26);
    print_str(screen, 2, 15, TEXT_IDX, "SCORE");
    print_str(screen, 1, 18, TEXT_IDX, "HI-SCORE");
    print_str(screen, 2, 21, TEXT_IDX, "LINES");
    print_str(screen, 2, 24, TEXT_IDX, "LEVEL");

    draw_frame(screen, 24, 16, 29, 23);
    print_str(screen, 25, 18, TEXT_IDX, "NEXT");

    // Walls around the field, including the top row the board leaves open
    let (left, right) = (SCREEN_LEFT, SCREEN_LEFT + 11);
    let floor = FIELD_BOTTOM as u8 + 1;
    for col in left..=right {
        screen.draw_cell(col, 0, WALL_IDX, glyph::WALL);
        screen.draw_cell(col, floor, WALL_IDX, glyph::WALL);
    }
    for row in 1..floor {
        screen.draw_cell(left, row, WALL_IDX, glyph::WALL);
        for col in left + 1..right {
            screen.draw_cell(col, row, SPACE_IDX, glyph::SPACE);
        }
        screen.draw_cell(right, row, WALL_IDX, glyph::WALL);
    }
}

pub fn draw_scores<S: Screen>(screen: &mut S, score: u32, high_score: u32) {
    print_number(screen, SCORE_AT.0, SCORE_AT.1, TEXT_IDX, score);
    print_number(screen, HIGH_SCORE_AT.0, HIGH_SCORE_AT.1, TEXT_IDX, high_score);
}

/// The line count restarts every level, so stale digits are wiped first.
pub fn draw_lines<S: Screen>(screen: &mut S, lines: u16) {
    print_str(screen, LINES_AT.0 + 1, LINES_AT.1, SPACE_IDX, "     ");
    print_number(screen, LINES_AT.0, LINES_AT.1, TEXT_IDX, lines as u32);
}

pub fn draw_level<S: Screen>(screen: &mut S, level: u16) {
    print_number(screen, LEVEL_AT.0, LEVEL_AT.1, TEXT_IDX, level as u32);
}

pub fn draw_next<S: Screen>(screen: &mut S, kind: PieceKind) {
    for row in 19..=22 {
        print_str(screen, 25, row, SPACE_IDX, "    ");
    }
    let (x, y) = NEXT_PIVOT;
    for cell in kind.def().shape.cells() {
        let col = (x as i8 + cell.x) as u8;
        let row = (y as i8 + cell.y) as u8;
        screen.draw_cell(col, row, kind.color(), glyph::BLOCK);
    }
}

pub fn show_level_banner<S: Screen>(screen: &mut S, level: u16) {
    print_str(screen, BANNER_COL, BANNER_ROW, TEXT_IDX, "LEVEL");
    print_number(screen, BANNER_COL + 1, BANNER_ROW, TEXT_IDX, level as u32);
}

pub fn hide_level_banner<S: Screen>(screen: &mut S) {
    print_str(screen, BANNER_COL, BANNER_ROW, SPACE_IDX, "        ");
}

pub fn show_game_over<S: Screen>(screen: &mut S) {
    print_str(screen, BANNER_COL, BANNER_ROW, TEXT_IDX, "GAME OVER");
}

/// Points popup over the topmost cleared row.
pub fn show_points<S: Screen>(screen: &mut S, row: i8, points: u32) {
    print_number(screen, SCREEN_LEFT + 1, row as u8, TEXT_IDX, points);
}

pub fn show_press_start<S: Screen>(screen: &mut S) {
    print_str(screen, PROMPT_AT.0, PROMPT_AT.1, PROMPT_IDX, "PUSH START BUTTON");
}

/// Between games: last score, high score and the start prompt.
pub fn draw_title<S: Screen>(screen: &mut S, score: u32, high_score: u32) {
    screen.clear_screen();
    print_str(screen, 5, 0, LABEL_IDX, "SCORE");
    print_str(screen, 18, 0, LABEL_IDX, "HI-SCORE");
    print_number(screen, 5, 1, TEXT_IDX, score);
    print_number(screen, 20, 1, TEXT_IDX, high_score);
    show_press_start(screen);
}
