#![no_std]

pub mod color;
pub mod command;
pub mod controller;
pub mod fade;
pub mod math;
pub mod mock;
pub mod remote;
pub mod store;

pub use color::{DutyCycle, PRESETS};
pub use command::Command;
pub use controller::{ControllerConfig, LightController, LightState};
pub use fade::{DEFAULT_FADE_DURATION, FADE_STEPS, fade};
pub use math::scale_to_brightness;
pub use remote::{CctRemote, action_to_command, command_from_nec};
pub use store::{ColorStore, StoreError};

pub use embassy_time::Duration;

/// Abstract PWM output trait
///
/// Implement this trait to drive the two channels on a concrete
/// platform. The engine is generic over it and never touches hardware.
///
/// Duty contract per channel: `0` is fully dark, `1` is the minimum-on
/// sentinel that drivers also render dark, `2..=255` scale the duty
/// proportionally.
pub trait OutputSink {
    /// Write one duty-cycle pair to the hardware
    fn write(&mut self, color: DutyCycle);
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write(&mut self, color: DutyCycle) {
        T::write(self, color);
    }
}
