//! Blocking linear fade between two duty-cycle pairs
//!
//! The fade owns its caller for the whole duration: it writes an
//! interpolated value, sleeps one step, and repeats. Anything arriving
//! while it runs is the embedder's problem to drop.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::OutputSink;
use crate::color::DutyCycle;
use crate::math::clamp_duty;

/// Number of interpolation steps per fade
pub const FADE_STEPS: i16 = 50;

/// Fade duration used when none is configured
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(500);

/// Fade the output linearly from `start` to `stop`
///
/// Emits 51 interpolated pairs, each channel clamped to `1..=255` and
/// each followed by a blocking sleep of `duration / 50`, then writes
/// `stop` exactly to absorb the truncation drift of the integer steps.
/// Equal endpoints still run the full duration.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fade<S, D>(
    sink: &mut S,
    delay: &mut D,
    start: DutyCycle,
    stop: DutyCycle,
    duration: Duration,
) where
    S: OutputSink,
    D: DelayNs,
{
    let step_delay_ms = (duration.as_millis() / FADE_STEPS as u64) as u32;

    // Per-channel increments truncate toward zero; small deltas plateau
    // until the final endpoint write.
    let step_cold = (i16::from(stop.cold) - i16::from(start.cold)) / FADE_STEPS;
    let step_warm = (i16::from(stop.warm) - i16::from(start.warm)) / FADE_STEPS;

    let mut cold = i16::from(start.cold);
    let mut warm = i16::from(start.warm);

    for _ in 0..=FADE_STEPS {
        sink.write(DutyCycle {
            cold: clamp_duty(cold),
            warm: clamp_duty(warm),
        });
        cold += step_cold;
        warm += step_warm;

        delay.delay_ms(step_delay_ms);
    }

    sink.write(stop);
}
