/// Discrete functions of the remote control
///
/// One variant per button with an assigned function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the fixture on or off
    TogglePower,
    /// Advance to the next color temperature preset
    CyclePreset,
    /// Raise brightness by one increment
    IncreaseBrightness,
    /// Lower brightness by one increment
    DecreaseBrightness,
    /// Shift the color balance toward cold white
    ShiftColder,
    /// Shift the color balance toward warm white
    ShiftWarmer,
    /// Toggle the dim warm night light
    ToggleNight,
    /// Jump to 10% power
    SetTenPercent,
    /// Jump to 50% power
    SetHalfPower,
    /// Jump to full power
    SetFullPower,
    /// Persist the current color as the power-on default
    StoreColor,
}

impl Command {
    /// Whether held-button repeat frames re-trigger this command
    ///
    /// Only the gradual adjustments respond to a held button; everything
    /// else fires once per press.
    pub const fn accepts_repeats(self) -> bool {
        matches!(
            self,
            Self::IncreaseBrightness
                | Self::DecreaseBrightness
                | Self::ShiftColder
                | Self::ShiftWarmer
        )
    }
}
