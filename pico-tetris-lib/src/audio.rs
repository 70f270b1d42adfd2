//! Tone sequencing: a looping background track plus short sound effects,
//! mixed onto the single speaker output once per tick.

use crate::common::Speaker;

/// PWM divider periods (1/16 steps) for C4 up to C6.
pub const PITCH_PERIODS: [u16; 25] = [
    1911, 1804, 1703, 1607, 1517, 1432, 1351, 1276, 1204, 1136, 1073, 1012, 956, 902, 851, 804,
    758, 716, 676, 638, 602, 568, 536, 506, 478,
];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    /// Pitch index into `PITCH_PERIODS`, length in ticks.
    Note(u8, u8),
    Rest(u8),
    /// Jump back to the first step.
    Repeat,
    /// Stop playing.
    End,
}

// Effect entries are periods played one per tick; 0 lets the music through.
pub const LANDING: &[u16] = &[2857, 2857, 2857, 2857, 2857, 0];
pub const ONE_LINE: &[u16] = &[2857, 2857, 2142, 2142, 2142, 0];
pub const TWO_LINES: &[u16] = &[2142, 2142, 2142, 1428, 1428, 1428];
pub const THREE_LINES: &[u16] = &[2142, 2142, 2142, 714, 714, 714];
pub const FOUR_LINES: &[u16] = &[1142, 1000, 892, 785, 678, 571];

/// The jingle for `rows` cleared rows; landing sound for anything out of range.
pub fn line_clear_effect(rows: usize) -> &'static [u16] {
    match rows {
        1 => ONE_LINE,
        2 => TWO_LINES,
        3 => THREE_LINES,
        4 => FOUR_LINES,
        _ => LANDING,
    }
}

pub struct MusicPlayer {
    track: &'static [Step],
    pos: usize,
    remaining: u8,
    period: Option<u16>,
    stopped: bool,
}

impl MusicPlayer {
    pub const fn new() -> Self {
        Self {
            track: &[],
            pos: 0,
            remaining: 0,
            period: None,
            stopped: true,
        }
    }

    pub fn start(&mut self, track: &'static [Step]) {
        self.track = track;
        self.pos = 0;
        self.remaining = 1;
        self.period = None;
        self.stopped = false;
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.period = None;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advances one tick and returns the period that should sound now.
    pub fn step(&mut self) -> Option<u16> {
        if self.stopped {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return self.period;
        }

        let mut next = self.track.get(self.pos).copied().unwrap_or(Step::End);
        if next == Step::Repeat {
            self.pos = 0;
            // A track made of nothing but Repeat would spin forever
            next = match self.track.first() {
                Some(Step::Repeat) | None => Step::End,
                Some(step) => *step,
            };
        }
        match next {
            Step::Note(pitch, ticks) => {
                self.period = PITCH_PERIODS.get(pitch as usize).copied();
                self.remaining = ticks;
            }
            Step::Rest(ticks) => {
                self.period = None;
                self.remaining = ticks;
            }
            Step::Repeat | Step::End => {
                self.stop();
                return None;
            }
        }
        self.pos += 1;
        self.period
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Music plus the current effect; the effect wins while it has a tone.
pub struct Sequencer {
    music: MusicPlayer,
    effect: &'static [u16],
}

impl Sequencer {
    pub const fn new() -> Self {
        Self {
            music: MusicPlayer::new(),
            effect: &[],
        }
    }

    pub fn play_music(&mut self, track: &'static [Step]) {
        self.music.start(track);
    }

    pub fn stop_music(&mut self) {
        self.music.stop();
    }

    pub fn is_playing(&self) -> bool {
        !self.music.is_stopped()
    }

    /// Replaces whatever effect is still running.
    pub fn play_effect(&mut self, effect: &'static [u16]) {
        self.effect = effect;
    }

    pub fn step(&mut self) -> Option<u16> {
        let music = self.music.step();
        if let Some((&period, rest)) = self.effect.split_first() {
            self.effect = rest;
            if period != 0 {
                return Some(period);
            }
        }
        music
    }

    pub fn tick<S: Speaker>(&mut self, speaker: &mut S) {
        match self.step() {
            Some(period) => speaker.set_tone(period),
            None => speaker.disable_tone(),
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSpeaker;

    const TUNE: &[Step] = &[Step::Note(0, 2), Step::Rest(1), Step::Note(12, 1), Step::Repeat];

    fn run(player: &mut MusicPlayer, ticks: usize) -> Vec<Option<u16>> {
        (0..ticks).map(|_| player.step()).collect()
    }

    #[test]
    fn notes_last_their_length_and_loop() {
        let mut player = MusicPlayer::new();
        player.start(TUNE);
        let c4 = Some(PITCH_PERIODS[0]);
        let c5 = Some(PITCH_PERIODS[12]);
        assert_eq!(run(&mut player, 8), [c4, c4, None, c5, c4, c4, None, c5]);
        assert!(!player.is_stopped());
    }

    #[test]
    fn end_stops_the_track() {
        let mut player = MusicPlayer::new();
        player.start(&[Step::Note(3, 1), Step::End]);
        assert_eq!(player.step(), Some(PITCH_PERIODS[3]));
        assert_eq!(player.step(), None);
        assert!(player.is_stopped());
        assert_eq!(player.step(), None);
    }

    #[test]
    fn repeat_only_track_stops() {
        let mut player = MusicPlayer::new();
        player.start(&[Step::Repeat]);
        assert_eq!(player.step(), None);
        assert!(player.is_stopped());
    }

    #[test]
    fn effect_overrides_music_then_hands_back() {
        let mut seq = Sequencer::new();
        seq.play_music(&[Step::Note(0, 100), Step::Repeat]);
        seq.play_effect(&[500, 0, 600]);
        let c4 = Some(PITCH_PERIODS[0]);
        assert_eq!(seq.step(), Some(500));
        assert_eq!(seq.step(), c4);
        assert_eq!(seq.step(), Some(600));
        assert_eq!(seq.step(), c4);
    }

    #[test]
    fn new_effect_replaces_the_old_one() {
        let mut seq = Sequencer::new();
        seq.play_effect(LANDING);
        assert_eq!(seq.step(), Some(2857));
        seq.play_effect(FOUR_LINES);
        let rest: Vec<_> = (0..7).map(|_| seq.step()).collect();
        assert_eq!(
            rest,
            [Some(1142), Some(1000), Some(892), Some(785), Some(678), Some(571), None]
        );
    }

    #[test]
    fn tick_drives_the_speaker() {
        let mut seq = Sequencer::new();
        let mut speaker = FakeSpeaker::default();
        seq.play_effect(&[700]);
        seq.tick(&mut speaker);
        assert_eq!(speaker.tone, Some(700));
        seq.tick(&mut speaker);
        assert_eq!(speaker.tone, None);
    }

    #[test]
    fn effects_by_row_count() {
        assert_eq!(line_clear_effect(0), LANDING);
        assert_eq!(line_clear_effect(1), ONE_LINE);
        assert_eq!(line_clear_effect(4), FOUR_LINES);
    }
}
