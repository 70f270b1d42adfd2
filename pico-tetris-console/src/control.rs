use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use log::{debug, trace};
use pico_tetris_lib::common::{ButtonPad, Speaker};
use pico_tetris_lib::input::Buttons;

// Terminals only report key presses, never releases: a key counts as held
// for this long after its last press or auto-repeat.
const HOLD: Duration = Duration::from_millis(150);

static ORIGINAL_TERMIOS: OnceLock<libc::termios> = OnceLock::new();

#[cfg(unix)]
pub fn enable_raw_mode() {
    use std::os::unix::io::AsRawFd;
    unsafe {
        let fd = io::stdin().as_raw_fd();
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        let _ = ORIGINAL_TERMIOS.set(termios);

        termios.c_lflag &= !(libc::ICANON | libc::ECHO);
        termios.c_cc[libc::VMIN] = 0;
        termios.c_cc[libc::VTIME] = 0;
        libc::tcsetattr(fd, libc::TCSANOW, &termios);

        let flags = libc::fcntl(fd, libc::F_GETFL);
        libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK);
    }
    // Hide the cursor while the game owns the terminal
    let _ = io::stdout().write_all(b"\x1b[?25l");
    let _ = io::stdout().flush();
}

#[cfg(unix)]
pub fn restore_terminal() {
    use std::os::unix::io::AsRawFd;
    if let Some(original) = ORIGINAL_TERMIOS.get() {
        unsafe {
            let fd = io::stdin().as_raw_fd();
            libc::tcsetattr(fd, libc::TCSANOW, original);
            let flags = libc::fcntl(fd, libc::F_GETFL);
            libc::fcntl(fd, libc::F_SETFL, flags & !libc::O_NONBLOCK);
        }
    }
    let _ = io::stdout().write_all(b"\x1b[0m\x1b[?25h\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

#[cfg(not(unix))]
pub fn enable_raw_mode() {}

#[cfg(not(unix))]
pub fn restore_terminal() {}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Key {
    Button(Buttons),
    Quit,
}

fn decode(stdin: &mut io::Stdin, byte: u8) -> Option<Key> {
    let key = match byte {
        27 => {
            let mut seq = [0; 2];
            if stdin.read(&mut seq).unwrap_or(0) != 2 {
                return None;
            }
            match seq {
                [91, 65] => Buttons::UP,
                [91, 66] => Buttons::DOWN,
                [91, 67] => Buttons::RIGHT,
                [91, 68] => Buttons::LEFT,
                _ => return None,
            }
        }
        b' ' | b'\n' | b'\r' => Buttons::START,
        b'a' | b'A' => Buttons::LEFT,
        b'd' | b'D' => Buttons::RIGHT,
        b'w' | b'W' => Buttons::UP,
        b's' | b'S' => Buttons::DOWN,
        b'f' | b'F' => Buttons::FIRE,
        b'q' | b'Q' => return Some(Key::Quit),
        _ => return None,
    };
    Some(Key::Button(key))
}

/// Keyboard as a six-button pad. A reader thread stamps the time of every key
/// press; `read_buttons` reports the keys pressed within the hold window.
pub struct ConsolePad {
    pressed: Arc<Mutex<[Option<Instant>; 6]>>,
    _input_thread: std::thread::JoinHandle<()>,
}

impl ConsolePad {
    pub fn new() -> Self {
        let pressed = Arc::new(Mutex::new([None; 6]));
        let stamps = pressed.clone();

        let input_thread = std::thread::spawn(move || {
            let mut stdin = io::stdin();
            loop {
                let mut buffer = [0; 1];
                if let Ok(1) = stdin.read(&mut buffer) {
                    match decode(&mut stdin, buffer[0]) {
                        Some(Key::Quit) => {
                            restore_terminal();
                            println!("Terminal restored. Goodbye!");
                            std::process::exit(0);
                        }
                        Some(Key::Button(button)) => {
                            let bit = button.bits().trailing_zeros() as usize;
                            if let Ok(mut stamps) = stamps.lock() {
                                stamps[bit] = Some(Instant::now());
                            }
                        }
                        None => {}
                    }
                    continue;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
        });

        Self {
            pressed,
            _input_thread: input_thread,
        }
    }
}

impl ButtonPad for ConsolePad {
    fn read_buttons(&mut self) -> Buttons {
        let Ok(stamps) = self.pressed.lock() else {
            return Buttons::NONE;
        };
        let now = Instant::now();
        let bits = stamps
            .iter()
            .enumerate()
            .filter(|(_, stamp)| stamp.is_some_and(|at| now.duration_since(at) < HOLD))
            .fold(0u8, |bits, (bit, _)| bits | 1 << bit);
        Buttons::from_bits(bits)
    }
}

/// No sound on the terminal; tone changes go to the log instead.
#[derive(Default)]
pub struct ConsoleSpeaker {
    tone: Option<u16>,
}

impl Speaker for ConsoleSpeaker {
    fn set_tone(&mut self, period: u16) {
        if self.tone != Some(period) {
            trace!("tone period {}", period);
            self.tone = Some(period);
        }
    }

    fn disable_tone(&mut self) {
        if self.tone.take().is_some() {
            debug!("tone off");
        }
    }
}
