/// Duty-cycle pair for a cold-white / warm-white LED fixture
///
/// Each channel is an 8-bit PWM duty value. `0` means fully dark and is
/// only ever produced by [`DutyCycle::OFF`]; computed values stay in
/// `1..=255`, with `1` acting as the minimum-on sentinel that drivers
/// render dark as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCycle {
    /// Cold white channel
    pub cold: u8,
    /// Warm white channel
    pub warm: u8,
}

impl DutyCycle {
    /// Both channels fully dark
    pub const OFF: Self = Self { cold: 0, warm: 0 };

    /// Create a duty-cycle pair, flooring each channel at 1
    #[inline]
    pub const fn new(cold: u8, warm: u8) -> Self {
        Self {
            cold: floor_min(cold),
            warm: floor_min(warm),
        }
    }

    /// The brighter of the two channels
    #[inline]
    pub const fn peak(self) -> u8 {
        if self.cold > self.warm {
            self.cold
        } else {
            self.warm
        }
    }

    /// Whether both channels are dark
    #[inline]
    pub const fn is_off(self) -> bool {
        self.cold == 0 && self.warm == 0
    }
}

/// Floor a channel value at the minimum-on level
#[inline]
const fn floor_min(value: u8) -> u8 {
    if value == 0 { 1 } else { value }
}

/// Color temperature presets, coldest to warmest
///
/// Cycled through by the preset button and scaled to the active
/// brightness on selection.
pub const PRESETS: [DutyCycle; 5] = [
    DutyCycle { cold: 255, warm: 1 },
    DutyCycle { cold: 255, warm: 128 },
    DutyCycle { cold: 255, warm: 255 },
    DutyCycle { cold: 128, warm: 255 },
    DutyCycle { cold: 1, warm: 255 },
];
