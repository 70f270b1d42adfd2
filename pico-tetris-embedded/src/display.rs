//! Character cells on the 240x320 ILI9341 panel.

use defmt::error;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use pico_tetris_lib::common::{glyph, Screen, SCREEN_COLUMNS, SCREEN_ROWS};
use smart_leds::RGB8;

const CELL: u32 = 8;
const MID: i32 = CELL as i32 / 2;

type LcdSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>;
pub type Lcd = mipidsi::Display<SpiInterface<'static, LcdSpi, Output<'static>>, ILI9341Rgb565, Output<'static>>;

fn to_rgb565(color: RGB8) -> Rgb565 {
    Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3)
}

/// Draws one 8x8 glyph in `color` over a black cell at `origin`.
fn draw_glyph<T>(target: &mut T, origin: Point, color: Rgb565, code: u8) -> Result<(), T::Error>
where
    T: DrawTarget<Color = Rgb565>,
{
    let cell = Rectangle::new(origin, Size::new(CELL, CELL));
    target.fill_solid(&cell, Rgb565::BLACK)?;

    let line = |from: (i32, i32), to: (i32, i32)| {
        Line::new(origin + Point::new(from.0, from.1), origin + Point::new(to.0, to.1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
    };
    let last = CELL as i32 - 1;

    match code {
        glyph::SPACE => {}
        glyph::BLOCK => target.fill_solid(&Rectangle::new(origin, Size::new(CELL - 1, CELL - 1)), color)?,
        glyph::WALL => target.fill_solid(&cell, color)?,
        glyph::BRICK => {
            target.fill_solid(&cell, color)?;
            line((0, 3), (last, 3)).draw(target)?;
            line((0, last), (last, last)).draw(target)?;
            line((3, 0), (3, 3)).draw(target)?;
            line((last, 4), (last, last)).draw(target)?;
        }
        glyph::CLEARING => {
            Rectangle::new(origin, Size::new(CELL - 1, CELL - 1))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(target)?;
        }
        glyph::FRAME_HORIZONTAL => line((0, MID), (last, MID)).draw(target)?,
        glyph::FRAME_VERTICAL => line((MID, 0), (MID, last)).draw(target)?,
        glyph::FRAME_TOP_LEFT => {
            line((MID, MID), (last, MID)).draw(target)?;
            line((MID, MID), (MID, last)).draw(target)?;
        }
        glyph::FRAME_TOP_RIGHT => {
            line((0, MID), (MID, MID)).draw(target)?;
            line((MID, MID), (MID, last)).draw(target)?;
        }
        glyph::FRAME_BOTTOM_LEFT => {
            line((MID, 0), (MID, MID)).draw(target)?;
            line((MID, MID), (last, MID)).draw(target)?;
        }
        glyph::FRAME_BOTTOM_RIGHT => {
            line((MID, 0), (MID, MID)).draw(target)?;
            line((0, MID), (MID, MID)).draw(target)?;
        }
        _ => {
            let bytes = [code];
            if let Ok(text) = core::str::from_utf8(&bytes) {
                let style = MonoTextStyle::new(&FONT_5X8, color);
                Text::with_baseline(text, origin + Point::new(1, 0), style, Baseline::Top)
                    .draw(target)?;
            }
        }
    }
    Ok(())
}

pub struct LcdScreen {
    lcd: Lcd,
    palette: [Rgb565; 16],
}

impl LcdScreen {
    pub fn new(lcd: Lcd) -> Self {
        Self {
            lcd,
            palette: [Rgb565::BLACK; 16],
        }
    }
}

impl Screen for LcdScreen {
    fn draw_cell(&mut self, col: u8, row: u8, color: u8, glyph: u8) {
        if col >= SCREEN_COLUMNS || row >= SCREEN_ROWS {
            return;
        }
        let origin = Point::new(col as i32 * CELL as i32, row as i32 * CELL as i32);
        let color = self.palette[color as usize % self.palette.len()];
        if draw_glyph(&mut self.lcd, origin, color, glyph).is_err() {
            error!("lcd write failed at {},{}", col, row);
        }
    }

    fn set_palette_entry(&mut self, index: u8, color: RGB8) {
        if let Some(entry) = self.palette.get_mut(index as usize) {
            *entry = to_rgb565(color);
        }
    }

    fn clear_screen(&mut self) {
        if self.lcd.clear(Rgb565::BLACK).is_err() {
            error!("lcd clear failed");
        }
    }
}
