//! Host build: the game in a terminal.
//!
//! Arrows or WASD move and rotate, space or enter starts, q quits.
//! Logging goes to stderr (`RUST_LOG=debug 2>tetris.log`).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::info;
use pico_tetris_lib::{common::Clock, games::run_forever};

mod control;
mod display;

use control::{enable_raw_mode, restore_terminal, ConsolePad, ConsoleSpeaker};
use display::ConsoleScreen;

pub struct ConsoleClock {
    start: Instant,
}

impl Clock for ConsoleClock {
    fn now_micros(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    async fn sleep_micros(&self, micros: u64) {
        tokio::time::sleep(Duration::from_micros(micros)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    enable_raw_mode();

    ctrlc::set_handler(move || {
        restore_terminal();
        println!("Terminal restored. Goodbye!");
        std::process::exit(0);
    })?;

    let mut screen = ConsoleScreen::new();
    let mut pad = ConsolePad::new();
    let mut speaker = ConsoleSpeaker::default();
    let clock = ConsoleClock {
        start: Instant::now(),
    };
    info!("console front-end ready");

    run_forever(&mut screen, &mut pad, &mut speaker, &clock, || {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since| since.as_millis() as u32)
            .unwrap_or_default()
    })
    .await;

    restore_terminal();
    Ok(())
}
