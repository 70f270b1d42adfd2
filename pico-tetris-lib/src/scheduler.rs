use crate::audio::Sequencer;
use crate::common::{Clock, Speaker, TICK_MICROS};

/// Paces the game to fixed 1/60 s quanta of the monotonic clock.
///
/// Each wait sleeps until the next quantum boundary, so an overrun simply
/// shortens the following wait; lost ticks are not caught up.
pub struct Ticker<'a, C> {
    clock: &'a C,
    ticks: u32,
}

impl<'a, C: Clock> Ticker<'a, C> {
    pub fn new(clock: &'a C) -> Self {
        Self { clock, ticks: 0 }
    }

    /// Microseconds left in the current quantum, never zero.
    pub fn remainder(now: u64) -> u64 {
        TICK_MICROS - now % TICK_MICROS
    }

    pub async fn wait_tick(&mut self) {
        let wait = Self::remainder(self.clock.now_micros());
        self.clock.sleep_micros(wait).await;
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub async fn wait_ticks(&mut self, count: u16) {
        for _ in 0..count {
            self.wait_tick().await;
        }
    }

    /// Ticks waited so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// The ticker plus the audio it has to step on every tick, pauses included.
pub struct Scheduler<'a, C, S> {
    ticker: Ticker<'a, C>,
    speaker: &'a mut S,
    audio: Sequencer,
}

impl<'a, C: Clock, S: Speaker> Scheduler<'a, C, S> {
    pub fn new(clock: &'a C, speaker: &'a mut S) -> Self {
        Self {
            ticker: Ticker::new(clock),
            speaker,
            audio: Sequencer::new(),
        }
    }

    pub async fn next_tick(&mut self) {
        self.ticker.wait_tick().await;
        self.audio.tick(&mut *self.speaker);
    }

    /// Waits `ticks` ticks with the music still running.
    pub async fn pause(&mut self, ticks: u16) {
        for _ in 0..ticks {
            self.next_tick().await;
        }
    }

    pub fn audio(&mut self) -> &mut Sequencer {
        &mut self.audio
    }

    pub fn ticks(&self) -> u32 {
        self.ticker.ticks()
    }

    /// Stops the music and turns the speaker off right away.
    pub fn silence(&mut self) {
        self.audio.stop_music();
        self.audio.play_effect(&[]);
        self.speaker.disable_tone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Step, PITCH_PERIODS};
    use crate::testing::{FakeClock, FakeSpeaker};
    use pollster::block_on;

    #[test]
    fn remainder_reaches_the_next_boundary() {
        assert_eq!(Ticker::<FakeClock>::remainder(0), TICK_MICROS);
        assert_eq!(Ticker::<FakeClock>::remainder(100), TICK_MICROS - 100);
        assert_eq!(Ticker::<FakeClock>::remainder(TICK_MICROS * 3 + 1), TICK_MICROS - 1);
    }

    #[test]
    fn ticks_land_on_quantum_boundaries() {
        let clock = FakeClock::starting_at(5_000);
        let mut ticker = Ticker::new(&clock);
        block_on(ticker.wait_tick());
        assert_eq!(clock.now_micros(), TICK_MICROS);

        // Work eats part of the next quantum; the wait shrinks to match.
        clock.advance(10_000);
        block_on(ticker.wait_tick());
        assert_eq!(clock.now_micros(), 2 * TICK_MICROS);
        assert_eq!(*clock.sleeps.borrow(), [TICK_MICROS - 5_000, TICK_MICROS - 10_000]);
        assert_eq!(ticker.ticks(), 2);
    }

    #[test]
    fn overrun_is_not_caught_up() {
        let clock = FakeClock::default();
        let mut ticker = Ticker::new(&clock);
        clock.advance(TICK_MICROS * 2 + 500);
        block_on(ticker.wait_ticks(1));
        assert_eq!(clock.now_micros(), TICK_MICROS * 3);
        assert_eq!(ticker.ticks(), 1);
    }

    #[test]
    fn pause_keeps_the_music_going() {
        let clock = FakeClock::default();
        let mut speaker = FakeSpeaker::default();
        {
            let mut scheduler = Scheduler::new(&clock, &mut speaker);
            scheduler.audio().play_music(&[Step::Note(2, 2), Step::Rest(1), Step::Repeat]);
            block_on(scheduler.pause(4));
            assert_eq!(scheduler.ticks(), 4);
        }
        let e = Some(PITCH_PERIODS[2]);
        assert_eq!(speaker.tones, [e, e, None, e]);
        assert_eq!(clock.now_micros(), 4 * TICK_MICROS);
    }

    #[test]
    fn silence_turns_everything_off() {
        let clock = FakeClock::default();
        let mut speaker = FakeSpeaker::default();
        let mut scheduler = Scheduler::new(&clock, &mut speaker);
        scheduler.audio().play_music(&[Step::Note(0, 10), Step::Repeat]);
        scheduler.audio().play_effect(crate::audio::LANDING);
        block_on(scheduler.next_tick());
        scheduler.silence();
        assert!(!scheduler.audio().is_playing());
        block_on(scheduler.next_tick());
        drop(scheduler);
        assert_eq!(speaker.tone, None);
    }
}
