use crate::color::DutyCycle;

/// Error type for color store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Backend is temporarily unavailable or holds nothing usable
    Busy,
    /// Backend driver failed
    Driver,
}

/// Power-loss-safe storage for one duty-cycle pair
///
/// Read once at power-up and written on demand. The engine treats every
/// failure as "keep going without persistence".
pub trait ColorStore {
    /// Load the stored color
    fn load(&mut self) -> Result<DutyCycle, StoreError>;

    /// Persist a color, replacing the previous one
    fn store(&mut self, color: DutyCycle) -> Result<(), StoreError>;
}

impl<T: ColorStore + ?Sized> ColorStore for &mut T {
    fn load(&mut self) -> Result<DutyCycle, StoreError> {
        T::load(self)
    }

    fn store(&mut self, color: DutyCycle) -> Result<(), StoreError> {
        T::store(self, color)
    }
}
