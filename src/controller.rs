use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputSink;
use crate::color::{DutyCycle, PRESETS};
use crate::command::Command;
use crate::fade::{DEFAULT_FADE_DURATION, fade};
use crate::math::scale_to_brightness;
use crate::store::ColorStore;

/// Step applied by the brightness and color-shift buttons
const ADJUST_INCREMENT: u8 = 4;

/// Peak brightness of the night light
const NIGHT_BRIGHTNESS: u8 = 5;

/// Dark time of the store-acknowledge blink
const STORE_ACK_MS: u32 = 200;

/// Mutable state of the fixture
#[derive(Debug, Clone)]
pub struct LightState {
    /// Active color as a duty-cycle pair
    pub color: DutyCycle,
    /// Brightness the relative adjustments work from
    pub brightness: u8,
    /// Index of the last selected entry in [`PRESETS`]
    pub preset_index: u8,
    /// Whether the fixture is lit
    pub is_on: bool,
    /// Whether the night light is active
    pub is_night: bool,
}

/// Startup configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Color assumed when the store holds nothing usable
    pub color: DutyCycle,
    /// Brightness before the stored color overrides it
    pub brightness: u8,
    /// Duration of every fade transition
    pub fade_duration: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            color: DutyCycle::new(128, 128),
            brightness: 128,
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }
}

/// Command interpreter driving one two-channel fixture
///
/// Owns the output, delay and persistence capabilities together with all
/// light state; exactly one of these exists per fixture. Fades run
/// synchronously inside [`handle`](Self::handle), so commands arriving
/// mid-fade must be dropped by the embedder, never queued.
pub struct LightController<S, D, P> {
    sink: S,
    delay: D,
    store: P,
    state: LightState,
    fade_duration: Duration,
}

impl<S, D, P> LightController<S, D, P>
where
    S: OutputSink,
    D: DelayNs,
    P: ColorStore,
{
    /// Create a controller in the powered-on default state
    pub fn new(sink: S, delay: D, store: P, config: &ControllerConfig) -> Self {
        Self {
            sink,
            delay,
            store,
            state: LightState {
                color: config.color,
                brightness: config.brightness,
                preset_index: 0,
                is_on: true,
                is_night: false,
            },
            fade_duration: config.fade_duration,
        }
    }

    /// Current light state
    pub const fn state(&self) -> &LightState {
        &self.state
    }

    /// Run the power-on sequence
    ///
    /// Loads the stored color, keeping the configured default when the
    /// store has nothing usable, derives brightness from its peak and
    /// fades up from dark.
    pub fn power_up(&mut self) {
        match self.store.load() {
            Ok(color) => self.state.color = color,
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightController.power_up] load failed: {:?}", _err);
            }
        }
        self.state.brightness = self.state.color.peak();

        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController.power_up] fading up to {:?}",
            self.state.color
        );
        self.run_fade(DutyCycle::OFF, self.state.color);
    }

    /// Apply one remote command to the light
    ///
    /// Blocks for the full duration of any fade it starts.
    pub fn handle(&mut self, command: Command) {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.handle] {:?}", command);

        match command {
            Command::TogglePower => self.toggle_power(),
            Command::CyclePreset => self.cycle_preset(),
            Command::IncreaseBrightness => {
                self.set_brightness(self.state.brightness.saturating_add(ADJUST_INCREMENT));
            }
            Command::DecreaseBrightness => {
                self.set_brightness(self.state.brightness.saturating_sub(ADJUST_INCREMENT));
            }
            Command::ShiftColder => self.shift_balance(true),
            Command::ShiftWarmer => self.shift_balance(false),
            Command::ToggleNight => self.toggle_night(),
            Command::SetTenPercent => self.set_level(25),
            Command::SetHalfPower => self.set_level(128),
            Command::SetFullPower => self.set_level(255),
            Command::StoreColor => self.store_color(),
        }
    }

    /// Fade between dark and the active color
    fn toggle_power(&mut self) {
        self.state.is_on = !self.state.is_on;
        if self.state.is_on {
            self.run_fade(DutyCycle::OFF, self.state.color);
        } else {
            self.run_fade(self.state.color, DutyCycle::OFF);
        }
    }

    /// Advance to the next preset, scaled to the current brightness
    #[allow(clippy::cast_possible_truncation)]
    fn cycle_preset(&mut self) {
        self.state.preset_index = (self.state.preset_index + 1) % PRESETS.len() as u8;
        let next = scale_to_brightness(
            self.state.brightness,
            PRESETS[self.state.preset_index as usize],
        );
        self.run_fade(self.state.color, next);
        self.state.color = next;
    }

    /// Rescale the color to a new brightness and write it out, no fade
    fn set_brightness(&mut self, brightness: u8) {
        self.state.brightness = brightness;
        self.state.color = scale_to_brightness(brightness, self.state.color);
        self.sink.write(self.state.color);
    }

    /// Move the cold/warm balance one increment, no fade
    ///
    /// Channels saturate at the range ends and are floored back to the
    /// minimum-on level; brightness follows the new peak.
    fn shift_balance(&mut self, toward_cold: bool) {
        let DutyCycle { cold, warm } = self.state.color;
        let (cold, warm) = if toward_cold {
            (
                cold.saturating_add(ADJUST_INCREMENT),
                warm.saturating_sub(ADJUST_INCREMENT),
            )
        } else {
            (
                cold.saturating_sub(ADJUST_INCREMENT),
                warm.saturating_add(ADJUST_INCREMENT),
            )
        };
        self.state.color = DutyCycle::new(cold, warm);
        self.state.brightness = self.state.color.peak();
        self.sink.write(self.state.color);
    }

    /// Toggle the warm minimum-brightness night light
    ///
    /// The day color survives night mode untouched; leaving reloads the
    /// stored color, so unsaved tweaks from before entering are dropped.
    fn toggle_night(&mut self) {
        self.state.is_night = !self.state.is_night;
        let night = scale_to_brightness(NIGHT_BRIGHTNESS, PRESETS[4]);
        if self.state.is_night {
            self.run_fade(self.state.color, night);
        } else {
            if let Ok(color) = self.store.load() {
                self.state.color = color;
            }
            self.state.brightness = self.state.color.peak();
            self.run_fade(night, self.state.color);
        }
    }

    /// Fade to a fixed output level, keeping the color balance
    ///
    /// The brightness setting is left untouched; the next relative
    /// adjustment starts from the previous value.
    fn set_level(&mut self, target: u8) {
        let next = scale_to_brightness(target, self.state.color);
        self.run_fade(self.state.color, next);
        self.state.color = next;
    }

    /// Persist the color and blink once to acknowledge
    fn store_color(&mut self) {
        if self.store.store(self.state.color).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[LightController.store_color] store failed");
        }
        self.sink.write(DutyCycle::OFF);
        self.delay.delay_ms(STORE_ACK_MS);
        self.sink.write(self.state.color);
    }

    fn run_fade(&mut self, start: DutyCycle, stop: DutyCycle) {
        fade(&mut self.sink, &mut self.delay, start, stop, self.fade_duration);
    }
}
