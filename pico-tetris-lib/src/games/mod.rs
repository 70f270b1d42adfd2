pub mod tetris;

use crate::common::{ButtonPad, Clock, Game, Prng, Screen, Speaker};
use crate::hud;
use crate::input::Buttons;
use crate::log::info;
use crate::palette;
use crate::scheduler::Ticker;
use tetris::TetrisGame;

/// Polls the pad once per tick until start is held; returns the ticks waited.
pub async fn wait_for_start<P: ButtonPad, C: Clock>(pad: &mut P, clock: &C) -> u32 {
    let mut ticker = Ticker::new(clock);
    loop {
        if pad.read_buttons().contains(Buttons::START) {
            return ticker.ticks();
        }
        ticker.wait_tick().await;
    }
}

/// Title, start button, one game, and again. The high score lives as long as
/// this loop does.
pub async fn run_forever<D, P, S, C, F>(
    screen: &mut D,
    pad: &mut P,
    speaker: &mut S,
    clock: &C,
    seed_fn: F,
) where
    D: Screen,
    P: ButtonPad,
    S: Speaker,
    C: Clock,
    F: Fn() -> u32,
{
    let mut score = 0;
    let mut high_score = 0;

    loop {
        palette::install(screen);
        hud::draw_title(screen, score, high_score);
        screen.flush();

        // How long the player took to press start is the entropy
        let waited = wait_for_start(pad, clock).await;
        let prng = Prng::new(seed_fn().wrapping_add(waited));

        let mut game = TetrisGame::new(prng, high_score, screen, pad, speaker, clock);
        game.run().await;
        score = game.score();
        high_score = game.high_score();
        info!("game over: score {} high score {}", score, high_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TICK_MICROS;
    use crate::testing::{FakeClock, FakePad};
    use pollster::block_on;

    #[test]
    fn start_returns_after_the_press() {
        let clock = FakeClock::default();
        let mut pad = FakePad::scripted(
            &[Buttons::NONE, Buttons::UP, Buttons::NONE, Buttons::START | Buttons::LEFT],
            Buttons::NONE,
        );
        assert_eq!(block_on(wait_for_start(&mut pad, &clock)), 3);
        assert_eq!(pad.reads, 4);
        assert_eq!(clock.now_micros(), 3 * TICK_MICROS);
    }

    #[test]
    fn held_start_returns_at_once() {
        let clock = FakeClock::default();
        let mut pad = FakePad::idle(Buttons::START);
        assert_eq!(block_on(wait_for_start(&mut pad, &clock)), 0);
        assert!(clock.sleeps.borrow().is_empty());
    }
}
