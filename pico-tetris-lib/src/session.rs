use crate::catalog::PieceKind;
use crate::common::Prng;

/// Cleared lines that finish a level.
pub const LEVEL_LINES: u16 = 20;
/// Points for 1, 2, 3 and 4 rows cleared by one landing.
pub const SCORE_TABLE: [u32; 4] = [40, 100, 300, 1200];

pub const INITIAL_FALL_SPEED: u8 = 60;
const FALL_SPEED_STEP: u8 = 5;
const FALL_SPEED_FLOOR: u8 = 3;
// At or below this the next level jumps straight to the floor
const FALL_SPEED_KNEE: u8 = 8;

pub fn points_for(rows: usize) -> u32 {
    match rows {
        1..=4 => SCORE_TABLE[rows - 1],
        _ => 0,
    }
}

/// Counters for one game, from the start button to game over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    score: u32,
    high_score: u32,
    lines: u16,
    level: u16,
    fall_speed: u8,
    next: PieceKind,
}

impl Session {
    pub fn new(high_score: u32, next: PieceKind) -> Self {
        Self {
            score: 0,
            high_score,
            lines: 0,
            level: 0,
            fall_speed: INITIAL_FALL_SPEED,
            next,
        }
    }

    /// Per-level setup: counter reset, level bump and a faster fall.
    pub fn begin_level(&mut self) {
        self.lines = 0;
        self.level = self.level.saturating_add(1);
        self.fall_speed = if self.fall_speed <= FALL_SPEED_KNEE {
            FALL_SPEED_FLOOR
        } else {
            self.fall_speed - FALL_SPEED_STEP
        };
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Scores a landing that cleared `rows` rows and returns the points.
    pub fn award_lines(&mut self, rows: usize) -> u32 {
        let points = points_for(rows);
        if points == 0 {
            return 0;
        }
        self.add_points(points);
        self.lines = self.lines.saturating_add(rows as u16);
        points
    }

    pub fn level_complete(&self) -> bool {
        self.lines >= LEVEL_LINES
    }

    /// Hands out the previewed kind and picks the one after it.
    pub fn take_next(&mut self, prng: &mut Prng) -> PieceKind {
        let kind = self.next;
        self.next = PieceKind::wrapping_at(prng.next_range(PieceKind::ALL.len() as u8));
        kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u16 {
        self.lines
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn fall_speed(&self) -> u8 {
        self.fall_speed
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session() {
        let session = Session::new(500, PieceKind::T);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 500);
        assert_eq!(session.level(), 0);
        assert_eq!(session.fall_speed(), INITIAL_FALL_SPEED);
        assert_eq!(session.next(), PieceKind::T);
    }

    #[test]
    fn fall_speed_curve() {
        let mut session = Session::new(0, PieceKind::I);
        let mut speeds = Vec::new();
        for _ in 0..14 {
            session.begin_level();
            speeds.push(session.fall_speed());
        }
        assert_eq!(speeds, [55, 50, 45, 40, 35, 30, 25, 20, 15, 10, 5, 3, 3, 3]);
        assert_eq!(session.level(), 14);
    }

    #[test]
    fn begin_level_resets_lines() {
        let mut session = Session::new(0, PieceKind::I);
        session.begin_level();
        session.award_lines(4);
        assert_eq!(session.lines(), 4);
        session.begin_level();
        assert_eq!(session.lines(), 0);
        assert_eq!(session.score(), 1200);
    }

    #[test]
    fn score_table() {
        for (rows, points) in [(1, 40), (2, 100), (3, 300), (4, 1200)] {
            let mut session = Session::new(0, PieceKind::I);
            assert_eq!(session.award_lines(rows), points);
            assert_eq!(session.score(), points);
            assert_eq!(session.lines(), rows as u16);
        }
    }

    #[test]
    fn zero_rows_change_nothing() {
        let mut session = Session::new(10, PieceKind::I);
        assert_eq!(session.award_lines(0), 0);
        assert_eq!(session, Session::new(10, PieceKind::I));
    }

    #[test]
    fn high_score_tracks_the_best_score() {
        let mut session = Session::new(100, PieceKind::I);
        let mut last_high = session.high_score();
        for points in [30, 40, 1, 300] {
            session.add_points(points);
            assert!(session.high_score() >= last_high);
            assert_eq!(session.high_score(), session.score().max(100));
            last_high = session.high_score();
        }
        assert_eq!(session.high_score(), 371);
    }

    #[test]
    fn level_completes_at_twenty_lines() {
        let mut session = Session::new(0, PieceKind::I);
        for _ in 0..4 {
            session.award_lines(4);
            assert!(!session.level_complete());
        }
        session.award_lines(3);
        assert_eq!(session.lines(), 19);
        assert!(!session.level_complete());
        session.award_lines(2);
        assert!(session.level_complete());
    }

    #[test]
    fn take_next_rolls_the_preview() {
        let mut session = Session::new(0, PieceKind::Z);
        let mut prng = Prng::new(1);
        assert_eq!(session.take_next(&mut prng), PieceKind::Z);
        let previewed = session.next();
        assert_eq!(session.take_next(&mut prng), previewed);
    }
}
