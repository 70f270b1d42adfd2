use crate::audio;
use crate::board::Board;
use crate::catalog::PieceKind;
use crate::common::{ButtonPad, Clock, Game, Prng, Screen, Speaker, TICKS_PER_SECOND};
use crate::hud;
use crate::input::{Buttons, Command, InputState};
use crate::line_clear::FullRows;
use crate::log::{debug, info};
use crate::music;
use crate::palette;
use crate::piece::{ActivePiece, Fall};
use crate::scheduler::Scheduler;
use crate::session::Session;
use crate::status::{Event, Status};

const LEVEL_BANNER_TICKS: u16 = 3 * TICKS_PER_SECOND;
const CLEAR_PAUSE_TICKS: u16 = 15;
const GAME_OVER_TICKS: u16 = 5 * TICKS_PER_SECOND;

/// One game from the first level to game over. Owns every piece of mutable
/// game state; the front-end only lends it the peripherals.
pub struct TetrisGame<'a, D, P, S, C> {
    board: Board,
    session: Session,
    status: Status,
    piece: Option<ActivePiece>,
    input: InputState,
    scheduler: Scheduler<'a, C, S>,
    screen: &'a mut D,
    pad: &'a mut P,
    prng: Prng,
}

impl<'a, D: Screen, P: ButtonPad, S: Speaker, C: Clock> TetrisGame<'a, D, P, S, C> {
    pub fn new(
        mut prng: Prng,
        high_score: u32,
        screen: &'a mut D,
        pad: &'a mut P,
        speaker: &'a mut S,
        clock: &'a C,
    ) -> Self {
        let next = PieceKind::wrapping_at(prng.next_range(PieceKind::ALL.len() as u8));
        let input = InputState::new(pad.read_buttons());
        Self {
            board: Board::new(),
            session: Session::new(high_score, next),
            status: Status::Starting,
            piece: None,
            input,
            scheduler: Scheduler::new(clock, speaker),
            screen,
            pad,
            prng,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score()
    }

    fn setup(&mut self) {
        palette::install(self.screen);
        hud::draw_layout(self.screen);
        hud::draw_scores(self.screen, self.session.score(), self.session.high_score());
        hud::draw_next(self.screen, self.session.next());
        self.board.reset();
    }

    async fn begin_level(&mut self) -> Event {
        self.session.begin_level();
        self.board.mark_all_dirty();
        let level = self.session.level();
        info!("level {} (fall speed {})", level, self.session.fall_speed());

        self.scheduler.audio().play_music(music::track_for_level(level));
        hud::show_level_banner(self.screen, level);
        self.screen.flush();
        self.scheduler.pause(LEVEL_BANNER_TICKS).await;
        hud::hide_level_banner(self.screen);
        hud::draw_lines(self.screen, self.session.lines());
        hud::draw_level(self.screen, level);

        self.input.resync(self.pad.read_buttons());
        Event::LevelReady
    }

    fn spawn(&mut self) -> Event {
        let kind = self.session.take_next(&mut self.prng);
        let Some(piece) = ActivePiece::spawn(kind, &self.board, self.session.fall_speed()) else {
            info!("spawn blocked, final score {}", self.session.score());
            return Event::SpawnBlocked;
        };
        hud::draw_next(self.screen, self.session.next());
        piece.place(&mut self.board);
        self.piece = Some(piece);
        self.input.lock_down_repeat();
        Event::Spawned
    }

    /// Applies one sample of input plus gravity to the active piece.
    fn step(&mut self, buttons: Buttons) -> Fall {
        let Some(mut piece) = self.piece else {
            return Fall::Landed;
        };
        piece.erase(&mut self.board);

        let moved = match self.input.sample(buttons) {
            Some(Command::Rotate) => piece.rotate(&self.board),
            Some(Command::Right) => piece.shift(1, &self.board),
            Some(Command::Left) => piece.shift(-1, &self.board),
            Some(Command::Down) => {
                let dropped = piece.soft_drop(&self.board);
                if dropped {
                    self.session.add_points(1);
                }
                dropped
            }
            None => false,
        };
        let fall = piece.gravity(self.session.fall_speed(), &self.board);

        // Warn a tick early when the piece has just come to rest on something
        if (moved || fall == Fall::Moved) && piece.is_grounded(&self.board) {
            self.scheduler.audio().play_effect(audio::LANDING);
        }

        piece.place(&mut self.board);
        self.piece = Some(piece);
        fall
    }

    async fn tick(&mut self) -> Event {
        self.scheduler.next_tick().await;
        let buttons = self.pad.read_buttons();

        let mut event = Event::Moved;
        if self.step(buttons) == Fall::Landed {
            if let Some(piece) = self.piece.take() {
                self.clear_lines(piece.pos().y).await;
            }
            event = if self.session.level_complete() {
                Event::LevelComplete
            } else {
                Event::Landed
            };
        }

        hud::draw_scores(self.screen, self.session.score(), self.session.high_score());
        self.board.repaint(self.screen);
        self.screen.flush();
        event
    }

    async fn clear_lines(&mut self, pivot_row: i8) {
        let rows = FullRows::scan(&self.board, pivot_row);
        let Some(top) = rows.top() else {
            return;
        };

        rows.mark(&mut self.board);
        self.board.repaint(self.screen);
        self.screen.flush();
        self.scheduler.pause(CLEAR_PAUSE_TICKS).await;

        rows.blank(&mut self.board);
        self.board.repaint(self.screen);
        hud::show_points(self.screen, top, rows.points());
        self.screen.flush();
        self.scheduler.pause(CLEAR_PAUSE_TICKS).await;

        rows.compact(&mut self.board);
        self.session.award_lines(rows.len());
        self.scheduler
            .audio()
            .play_effect(audio::line_clear_effect(rows.len()));
        hud::draw_lines(self.screen, self.session.lines());
        debug!(
            "cleared {} rows for {} points, {} lines this level",
            rows.len(),
            rows.points(),
            self.session.lines()
        );
    }

    async fn game_over(&mut self) {
        hud::show_game_over(self.screen);
        self.screen.flush();
        self.scheduler.pause(GAME_OVER_TICKS).await;
        self.scheduler.silence();
    }
}

impl<'a, D: Screen, P: ButtonPad, S: Speaker, C: Clock> Game for TetrisGame<'a, D, P, S, C> {
    async fn run(&mut self) {
        self.setup();
        while !self.status.is_over() {
            let event = match self.status {
                Status::Starting => self.begin_level().await,
                Status::Spawning => self.spawn(),
                Status::Falling => self.tick().await,
                Status::LevelCleared => Event::NextLevel,
                Status::GameOver => break,
            };
            self.status = self.status.next(event);
        }
        self.game_over().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Dot, SPAWN};
    use crate::testing::{FakeClock, FakePad, FakeScreen, FakeSpeaker};
    use pollster::block_on;

    struct Rig {
        screen: FakeScreen,
        pad: FakePad,
        speaker: FakeSpeaker,
        clock: FakeClock,
    }

    impl Rig {
        fn new(idle: Buttons) -> Self {
            Self {
                screen: FakeScreen::new(),
                pad: FakePad::idle(idle),
                speaker: FakeSpeaker::default(),
                clock: FakeClock::default(),
            }
        }

        fn game(&mut self) -> TetrisGame<'_, FakeScreen, FakePad, FakeSpeaker, FakeClock> {
            TetrisGame::new(
                Prng::new(7),
                0,
                &mut self.screen,
                &mut self.pad,
                &mut self.speaker,
                &self.clock,
            )
        }
    }

    #[test]
    fn idle_game_tops_out() {
        let mut rig = Rig::new(Buttons::NONE);
        {
            let mut game = rig.game();
            block_on(game.run());
            assert_eq!(game.status(), Status::GameOver);
            assert_eq!(game.score(), 0);
        }
        assert_eq!(rig.screen.text(13, 13, 9), "GAME OVER");
        assert_eq!(rig.speaker.tone, None);
        assert!(rig.screen.flushes > 0);
    }

    #[test]
    fn level_start_shows_counters() {
        let mut rig = Rig::new(Buttons::NONE);
        {
            let mut game = rig.game();
            game.setup();
            assert_eq!(block_on(game.begin_level()), Event::LevelReady);
            assert_eq!(game.session.level(), 1);
            assert_eq!(game.scheduler.ticks(), LEVEL_BANNER_TICKS as u32);
        }
        assert_eq!(rig.screen.text(1, 25, 6), "     1");
        assert_eq!(rig.screen.text(1, 22, 6), "     0");
        assert_eq!(rig.screen.text(13, 13, 8), "        ");
        // Music played all through the banner
        assert!(rig.speaker.tones.iter().any(|tone| tone.is_some()));
    }

    #[test]
    fn soft_drop_waits_for_release_after_spawn() {
        let mut rig = Rig::new(Buttons::NONE);
        let mut game = rig.game();
        game.setup();
        block_on(game.begin_level());
        assert_eq!(game.spawn(), Event::Spawned);

        // Down held straight through the spawn does nothing
        for _ in 0..5 {
            assert_eq!(game.step(Buttons::DOWN), Fall::Waiting);
        }
        assert_eq!(game.piece.map(|p| p.pos()), Some(SPAWN));
        assert_eq!(game.score(), 0);

        game.step(Buttons::NONE);
        game.step(Buttons::DOWN);
        game.step(Buttons::DOWN);
        assert_eq!(game.piece.map(|p| p.pos()), Some(Dot::new(SPAWN.x, SPAWN.y + 2)));
        assert_eq!(game.score(), 2);
        assert_eq!(game.high_score(), 2);
    }

    #[test]
    fn grounding_move_plays_the_landing_sound() {
        let mut rig = Rig::new(Buttons::NONE);
        {
            let mut game = rig.game();
            game.setup();
            let mut piece = ActivePiece::spawn(PieceKind::O, &game.board, 50).unwrap();
            for _ in 0..19 {
                assert!(piece.soft_drop(&game.board));
            }
            assert!(!piece.is_grounded(&game.board));
            game.piece = Some(piece);

            game.step(Buttons::NONE);
            assert_eq!(game.step(Buttons::DOWN), Fall::Waiting);
            assert!(game.piece.is_some_and(|p| p.is_grounded(&game.board)));
            block_on(game.scheduler.next_tick());
        }
        assert_eq!(rig.speaker.tone, Some(audio::LANDING[0]));
    }

    #[test]
    fn clearing_the_twentieth_line_ends_the_level_once() {
        let mut rig = Rig::new(Buttons::NONE);
        let mut game = rig.game();
        game.setup();
        block_on(game.begin_level());
        for rows in [4, 4, 4, 4, 3] {
            game.session.award_lines(rows);
        }
        assert_eq!(game.session.lines(), 19);
        let before = game.score();

        game.board = Board::from_art(&["####    ##"]);
        let mut piece = ActivePiece::spawn(PieceKind::I, &game.board, 1).unwrap();
        assert!(piece.shift(1, &game.board));
        while piece.soft_drop(&game.board) {}
        assert_eq!(piece.pos(), Dot::new(7, 23));
        piece.place(&mut game.board);
        game.piece = Some(piece);
        game.status = Status::Falling;

        let event = block_on(game.tick());
        assert_eq!(event, Event::LevelComplete);
        assert_eq!(game.score(), before + 40);
        assert_eq!(game.session.lines(), 20);
        assert!(!game.board.row_is_full(23));
        assert!(game.piece.is_none());

        game.status = game.status.next(event);
        assert_eq!(game.status, Status::LevelCleared);
        game.status = game.status.next(Event::NextLevel);
        assert_eq!(game.status, Status::Starting);
        assert_eq!(block_on(game.begin_level()), Event::LevelReady);
        assert_eq!(game.session.level(), 2);
        assert!(!game.session.level_complete());
    }

    #[test]
    fn landing_without_full_rows_keeps_falling() {
        let mut rig = Rig::new(Buttons::NONE);
        let mut game = rig.game();
        game.setup();
        let mut piece = ActivePiece::spawn(PieceKind::T, &game.board, 1).unwrap();
        while piece.soft_drop(&game.board) {}
        piece.place(&mut game.board);
        game.piece = Some(piece);

        assert_eq!(block_on(game.tick()), Event::Landed);
        assert_eq!(game.score(), 0);
        assert!(game.board.is_occupied(SPAWN.x, 23));
    }
}
