#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Instant, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation};
use mipidsi::Builder;
use pico_tetris_lib::common::Clock;
use pico_tetris_lib::games::run_forever;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::control::{ButtonBank, PwmSpeaker};
use crate::display::LcdScreen;

mod control;
mod display;

const LCD_SPI_HZ: u32 = 40_000_000;

pub struct EmbeddedClock;

impl Clock for EmbeddedClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }

    async fn sleep_micros(&self, micros: u64) {
        Timer::after_micros(micros).await;
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Starting tetris");
    let p = embassy_rp::init(Default::default());

    // Buttons on GPIO 0-5: up, left, right, down, start, fire
    let mut pad = ButtonBank::new([
        Input::new(p.PIN_0, Pull::Up),
        Input::new(p.PIN_1, Pull::Up),
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
    ]);

    let pwm = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, pwm::Config::default());
    let mut speaker = PwmSpeaker::new(pwm);

    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD_SPI_HZ;
    let spi_bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_11, Level::High);
    let dc = Output::new(p.PIN_12, Level::Low);
    let rst = Output::new(p.PIN_13, Level::High);
    let spi_device = ExclusiveDevice::new_no_delay(spi_bus, cs).unwrap();

    static LCD_BUF: StaticCell<[u8; 512]> = StaticCell::new();
    let buffer = LCD_BUF.init([0u8; 512]);
    let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);
    let lcd = Builder::new(ILI9341Rgb565, di)
        .reset_pin(rst)
        .display_size(240, 320)
        .color_order(ColorOrder::Bgr)
        .orientation(Orientation::new())
        .init(&mut Delay)
        .unwrap();
    let mut screen = LcdScreen::new(lcd);
    let clock = EmbeddedClock;

    info!("Hardware ready");
    run_forever(&mut screen, &mut pad, &mut speaker, &clock, || {
        Instant::now().as_ticks() as u32
    })
    .await;
}
