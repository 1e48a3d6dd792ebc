use crate::color::DutyCycle;

/// Fixed-point scale applied to the channel ratio
const RATIO_SCALE: u32 = 100;

/// Divide with rounding compensation
///
/// Adds 9/10 of the divisor to the dividend before the truncating
/// division, biasing the result upward to offset truncation loss.
#[inline]
pub const fn div_compensated(dividend: u32, divisor: u32) -> u32 {
    (dividend + (divisor * 9) / 10) / divisor
}

/// Clamp a fade intermediate into the working range `1..=255`
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn clamp_duty(value: i16) -> u8 {
    if value < 1 {
        1
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Scale a channel pair to a target brightness, preserving its ratio
///
/// The dominant channel (the larger one, ties favoring cold) becomes
/// `brightness`; the other is derived from the cold/warm ratio using
/// integer math scaled by [`RATIO_SCALE`], with rounding compensation
/// applied both when building the ratio and when applying it. Both
/// outputs are clamped to `1..=255`, so a target of 0 yields `{1, 1}`.
///
/// A dark channel still defines a ratio and is treated as minimum-on,
/// which makes a fully-off input scale on a 1:1 basis.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_to_brightness(brightness: u8, color: DutyCycle) -> DutyCycle {
    let color = DutyCycle::new(color.cold, color.warm);

    let (dominant, recessive) = if color.cold >= color.warm {
        (color.cold as u32, color.warm as u32)
    } else {
        (color.warm as u32, color.cold as u32)
    };

    let ratio = div_compensated(dominant * RATIO_SCALE, recessive);
    let scaled = div_compensated(brightness as u32 * RATIO_SCALE, ratio);

    let peak = clamp_duty(brightness as i16);
    let derived = clamp_duty(scaled as i16);

    if color.cold >= color.warm {
        DutyCycle {
            cold: peak,
            warm: derived,
        }
    } else {
        DutyCycle {
            cold: derived,
            warm: peak,
        }
    }
}
