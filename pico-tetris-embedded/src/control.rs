use embassy_rp::gpio::Input;
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::extra::U4;
use fixed::FixedU16;
use pico_tetris_lib::common::{ButtonPad, Speaker};
use pico_tetris_lib::input::Buttons;

/// Counter wrap: 125 MHz / 4000 leaves 31.25 kHz before the divider.
const PWM_TOP: u16 = 3999;

/// The six push buttons, bit `n` of `Buttons` on `pins[n]`. Buttons pull the
/// line low when pressed.
pub struct ButtonBank<'a> {
    pins: [Input<'a>; 6],
}

impl<'a> ButtonBank<'a> {
    pub fn new(pins: [Input<'a>; 6]) -> Self {
        Self { pins }
    }
}

impl ButtonPad for ButtonBank<'_> {
    fn read_buttons(&mut self) -> Buttons {
        let bits = self
            .pins
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_low())
            .fold(0u8, |bits, (bit, _)| bits | 1 << bit);
        Buttons::from_bits(bits)
    }
}

/// Square wave on channel A of the speaker pin's slice, 50% duty.
pub struct PwmSpeaker<'a> {
    pwm: Pwm<'a>,
    config: Config,
}

impl<'a> PwmSpeaker<'a> {
    pub fn new(pwm: Pwm<'a>) -> Self {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.compare_a = (PWM_TOP + 1) / 2;
        config.enable = false;
        let mut speaker = Self { pwm, config };
        speaker.apply();
        speaker
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl Speaker for PwmSpeaker<'_> {
    fn set_tone(&mut self, period: u16) {
        // `period` is the clock divider in sixteenths, as the PWM block takes it
        self.config.divider = FixedU16::<U4>::from_bits(period);
        self.config.enable = true;
        self.apply();
    }

    fn disable_tone(&mut self) {
        if self.config.enable {
            self.config.enable = false;
            self.apply();
        }
    }
}
