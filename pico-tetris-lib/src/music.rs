//! Background tracks, one per level.
//!
//! Pitches index `audio::PITCH_PERIODS` (0 = C4 .. 24 = C6); lengths are in
//! ticks (1/60 s).

use crate::audio::Step::{self, Note as N, Repeat, Rest as R};

pub const KOROBEINIKI: &[Step] = &[
    N(9, 20), N(4, 10), N(5, 10), N(7, 20), N(5, 10), N(4, 10), N(2, 30), N(5, 10), N(9, 20),
    N(7, 10), N(5, 10), N(4, 30), N(5, 10), N(7, 20), N(9, 20), N(5, 20), N(2, 18), R(2),
    N(2, 30), R(10), N(10, 30), N(12, 10), N(14, 20), N(12, 10), N(10, 10), N(9, 30), N(5, 10),
    N(9, 20), N(7, 10), N(5, 10), N(4, 30), N(5, 10), N(7, 20), N(9, 20), N(5, 20), N(2, 18),
    R(2), N(2, 30), R(10), N(9, 30), N(8, 10), N(9, 30), N(8, 10), N(9, 20), N(14, 20),
    N(9, 20), N(7, 10), N(5, 10), N(4, 30), N(5, 10), N(7, 20), N(9, 20), N(5, 20), N(2, 18),
    R(2), N(2, 30), R(10), Repeat,
];

pub const KATYUSHA: &[Step] = &[
    N(9, 30), N(11, 10), N(12, 30), N(9, 10), N(12, 9), R(1), N(12, 10), N(11, 10), N(9, 10),
    N(11, 20), N(4, 20), N(11, 30), N(12, 10), N(14, 30), N(11, 10), N(14, 9), R(1), N(14, 10),
    N(12, 10), N(11, 10), N(9, 30), R(10), N(16, 20), N(21, 20), N(19, 20), N(21, 10),
    N(19, 10), N(17, 20), N(16, 10), N(14, 10), N(16, 20), N(9, 20), R(10), N(17, 20),
    N(14, 10), N(16, 30), N(12, 10), N(11, 10), N(4, 10), N(12, 10), N(11, 10), N(9, 30), R(10),
    Repeat,
];

pub const TROIKA: &[Step] = &[
    N(9, 10), N(14, 29), R(1), N(14, 9), R(1), N(14, 9), R(1), N(14, 10), N(13, 10), N(14, 10),
    N(16, 30), N(13, 10), N(9, 20), R(10), N(9, 10), N(17, 20), N(14, 20), N(5, 20), N(7, 9),
    R(1), N(7, 10), N(9, 60), R(10), N(9, 10), N(14, 30), N(16, 10), N(17, 10), N(16, 10),
    N(14, 10), N(9, 10), N(7, 30), N(10, 10), N(14, 20), N(16, 10), N(14, 10), N(9, 30),
    N(10, 10), N(9, 10), N(7, 10), N(4, 10), N(5, 10), N(2, 60), R(10), Repeat,
];

pub const ONE_WEEK: &[Step] = &[
    N(9, 10), N(12, 10), N(16, 9), R(1), N(16, 9), R(1), N(16, 10), N(14, 10), N(16, 9), R(1),
    N(16, 9), R(1), N(16, 10), N(14, 10), N(16, 10), N(14, 10), N(12, 30), R(10), N(16, 10),
    N(14, 10), N(16, 20), N(14, 10), N(12, 10), N(14, 20), N(12, 10), N(11, 10), N(12, 10),
    N(11, 10), N(9, 30), R(10), N(9, 10), N(12, 10), N(16, 9), R(1), N(16, 9), R(1), N(16, 10),
    N(14, 10), N(16, 9), R(1), N(16, 9), R(1), N(16, 10), N(14, 10), N(16, 10), N(14, 10),
    N(12, 30), R(10), N(16, 10), N(14, 10), N(16, 9), R(1), N(16, 10), N(14, 10), N(12, 10),
    N(14, 20), N(16, 20), N(21, 50), R(10), Repeat,
];

pub const KALINKA: &[Step] = &[
    N(9, 20), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(5, 10),
    N(4, 10), N(2, 20), N(9, 9), R(1), N(9, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20),
    N(4, 10), N(5, 10), N(7, 20), N(5, 10), N(4, 10), N(2, 20), N(9, 9), R(1), N(9, 10),
    N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(5, 10), N(4, 10),
    N(2, 20), N(9, 9), R(1), N(9, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(4, 10),
    N(5, 10), N(7, 20), N(5, 10), N(4, 10), N(2, 20), N(9, 9), R(1), N(9, 10), N(7, 20),
    N(4, 10), N(5, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(5, 10), N(4, 10), N(2, 20),
    N(9, 9), R(1), N(9, 10), N(7, 20), N(4, 10), N(5, 10), N(7, 20), N(4, 10), N(5, 10),
    N(7, 20), N(5, 10), N(4, 10), N(2, 20), N(14, 60), R(20), N(12, 60), R(20), N(9, 20),
    N(12, 20), N(10, 20), N(9, 10), N(7, 10), N(5, 40), N(0, 40), N(9, 20), N(12, 20),
    N(10, 20), N(9, 10), N(7, 10), N(5, 40), N(0, 40), N(2, 19), R(1), N(2, 19), R(1), N(2, 20),
    N(4, 20), N(7, 20), N(5, 20), N(4, 20), N(2, 20), N(0, 39), R(1), N(0, 39), R(1), N(0, 40),
    R(40), N(9, 20), N(12, 20), N(10, 20), N(9, 10), N(7, 10), N(5, 40), N(0, 40), N(9, 20),
    N(12, 20), N(7, 20), N(9, 20), N(5, 40), N(0, 40), N(2, 19), R(1), N(2, 19), R(1), N(2, 20),
    N(4, 20), N(7, 20), N(5, 20), N(4, 20), N(2, 20), N(12, 40), N(10, 40), N(9, 40), R(20),
    Repeat,
];

pub const PARNAS: &[Step] = &[
    N(7, 29), R(1), N(7, 14), R(1), N(7, 14), R(1), N(7, 14), R(1), N(7, 14), R(1), N(7, 14),
    R(1), N(7, 15), N(5, 15), N(8, 30), R(55), N(12, 15), N(7, 14), R(1), N(7, 15), N(8, 14),
    R(1), N(8, 14), R(1), N(8, 14), R(1), N(8, 15), N(7, 15), N(5, 15), N(7, 14), R(1),
    N(7, 14), R(1), N(7, 30), R(30), N(0, 14), R(1), N(0, 14), R(1), N(0, 14), R(1), N(0, 15),
    N(3, 15), N(2, 15), N(0, 15), N(2, 14), R(1), N(2, 14), R(1), N(2, 14), R(1), N(2, 15),
    N(0, 15), N(7, 30), R(30), N(12, 30), N(7, 30), R(30), N(0, 15), R(15), N(3, 15), R(15),
    N(3, 15), R(15), N(0, 15), R(15), N(3, 15), R(15), N(3, 15), R(15), N(0, 15), N(2, 15),
    N(3, 45), N(0, 15), N(5, 15), N(3, 15), N(2, 45), R(15), N(2, 15), N(3, 15), N(5, 45),
    N(2, 15), N(7, 15), N(5, 15), N(3, 45), R(15), N(8, 14), R(1), N(8, 14), R(1), N(8, 29),
    R(1), N(8, 30), N(7, 14), R(1), N(7, 14), R(1), N(7, 29), R(1), N(7, 30), N(12, 45),
    N(10, 15), N(8, 30), N(7, 60), R(30), N(10, 14), R(1), N(10, 14), R(1), N(10, 29), R(1),
    N(10, 30), N(9, 14), R(1), N(9, 14), R(1), N(9, 29), R(1), N(9, 30), N(8, 14), R(1),
    N(8, 14), R(1), N(8, 14), R(1), N(8, 14), R(1), N(8, 14), R(1), N(8, 15), N(7, 60), R(30),
    N(12, 30), N(7, 30), R(30), N(10, 15), N(8, 15), N(7, 30), R(30), N(5, 30), N(3, 30), R(30),
    N(2, 15), N(0, 15), N(2, 30), R(30), N(7, 29), R(1), N(7, 30), R(30), N(8, 29), R(1),
    N(8, 30), R(30), N(12, 29), R(1), N(12, 40), N(5, 6), N(6, 6), N(7, 6), N(8, 6), N(9, 6),
    N(10, 6), N(11, 6), N(12, 18), R(60), Repeat,
];

pub const TRACKS: [&[Step]; 6] = [KOROBEINIKI, KATYUSHA, TROIKA, ONE_WEEK, KALINKA, PARNAS];

/// Level 1 plays the first track; past the last one the list starts over.
pub fn track_for_level(level: u16) -> &'static [Step] {
    TRACKS[level.saturating_sub(1) as usize % TRACKS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::PITCH_PERIODS;

    #[test]
    fn every_track_loops() {
        for track in TRACKS {
            assert_eq!(track.last(), Some(&Repeat));
            assert_eq!(track.iter().filter(|s| **s == Repeat).count(), 1);
        }
    }

    #[test]
    fn pitches_and_lengths_are_valid() {
        for track in TRACKS {
            for step in track.iter() {
                match *step {
                    N(pitch, ticks) => {
                        assert!((pitch as usize) < PITCH_PERIODS.len());
                        assert!(ticks > 0);
                    }
                    R(ticks) => assert!(ticks > 0),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn levels_cycle_through_tracks() {
        assert_eq!(track_for_level(1), KOROBEINIKI);
        assert_eq!(track_for_level(6), PARNAS);
        assert_eq!(track_for_level(7), KOROBEINIKI);
        assert_eq!(track_for_level(0), KOROBEINIKI);
    }
}
