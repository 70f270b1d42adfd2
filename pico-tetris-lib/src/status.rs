/// Where a session is in its level / piece loop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    Starting,
    Spawning,
    Falling,
    LevelCleared,
    GameOver,
}

/// What just happened, as reported by the game loop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// Level setup and banner are done.
    LevelReady,
    Spawned,
    SpawnBlocked,
    /// A tick passed without the piece landing.
    Moved,
    Landed,
    /// A landing pushed the line count over the level threshold.
    LevelComplete,
    NextLevel,
}

impl Status {
    /// Pairs that make no sense here leave the status unchanged.
    pub fn next(self, event: Event) -> Status {
        match (self, event) {
            (Status::GameOver, _) => Status::GameOver,
            (Status::Starting, Event::LevelReady) => Status::Spawning,
            (Status::Spawning, Event::Spawned) => Status::Falling,
            (Status::Spawning, Event::SpawnBlocked) => Status::GameOver,
            (Status::Falling, Event::Moved) => Status::Falling,
            (Status::Falling, Event::Landed) => Status::Spawning,
            (Status::Falling, Event::LevelComplete) => Status::LevelCleared,
            (Status::LevelCleared, Event::NextLevel) => Status::Starting,
            (status, _) => status,
        }
    }

    pub fn is_over(self) -> bool {
        self == Status::GameOver
    }
}
