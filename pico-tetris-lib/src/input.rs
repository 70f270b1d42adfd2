use core::ops::BitOr;

/// Snapshot of all six buttons, one bit each, set while held.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const UP: Buttons = Buttons(1 << 0);
    pub const LEFT: Buttons = Buttons(1 << 1);
    pub const RIGHT: Buttons = Buttons(1 << 2);
    pub const DOWN: Buttons = Buttons(1 << 3);
    pub const START: Buttons = Buttons(1 << 4);
    pub const FIRE: Buttons = Buttons(1 << 5);
    const MASK: u8 = 0x3f;

    pub const fn from_bits(bits: u8) -> Self {
        Buttons(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// At most one of these is applied per tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Rotate,
    Right,
    Left,
    Down,
}

/// Turns raw samples into commands.
///
/// Rotate, right and left fire on the tick a button becomes the only one held.
/// Down repeats every tick while held, but is locked at each spawn until the
/// button has been let go.
pub struct InputState {
    previous: Buttons,
    down_repeat: bool,
}

impl InputState {
    pub fn new(current: Buttons) -> Self {
        Self {
            previous: current,
            down_repeat: false,
        }
    }

    /// Forget edges from before a pause, so a button held through it does not fire.
    pub fn resync(&mut self, current: Buttons) {
        self.previous = current;
    }

    pub fn lock_down_repeat(&mut self) {
        self.down_repeat = false;
    }

    pub fn sample(&mut self, now: Buttons) -> Option<Command> {
        let pressed = |button: Buttons| now == button && self.previous != button;
        let command = if pressed(Buttons::UP) {
            Some(Command::Rotate)
        } else if pressed(Buttons::RIGHT) {
            Some(Command::Right)
        } else if pressed(Buttons::LEFT) {
            Some(Command::Left)
        } else if self.down_repeat && now == Buttons::DOWN {
            Some(Command::Down)
        } else {
            None
        };
        if !now.contains(Buttons::DOWN) {
            self.down_repeat = true;
        }
        self.previous = now;
        command
    }
}
