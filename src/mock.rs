//! In-memory doubles for the capability traits
//!
//! Everything here runs on the host; none of it touches hardware. The
//! doubles record what the engine did so tests can assert on it.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::OutputSink;
use crate::color::DutyCycle;
use crate::store::{ColorStore, StoreError};

/// Output sink recording every written duty-cycle pair
///
/// `N` bounds the recording; a full fade writes 52 pairs.
#[derive(Debug, Default)]
pub struct RecordingSink<const N: usize> {
    writes: Vec<DutyCycle, N>,
}

impl<const N: usize> RecordingSink<N> {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// Every pair written so far, oldest first
    pub fn writes(&self) -> &[DutyCycle] {
        &self.writes
    }

    /// The most recent write
    pub fn last(&self) -> Option<DutyCycle> {
        self.writes.last().copied()
    }
}

impl<const N: usize> OutputSink for RecordingSink<N> {
    fn write(&mut self, color: DutyCycle) {
        self.writes.push(color).expect("recording capacity exceeded");
    }
}

/// Delay provider that counts requested time instead of sleeping
#[derive(Debug, Default)]
pub struct ManualDelay {
    elapsed_ns: u64,
}

impl ManualDelay {
    /// Create a delay counter at zero
    pub const fn new() -> Self {
        Self { elapsed_ns: 0 }
    }

    /// Total delay requested so far, in milliseconds
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for ManualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

/// Color store over a plain in-memory cell
///
/// An empty store fails its loads with [`StoreError::Busy`]; a broken
/// one fails everything with [`StoreError::Driver`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    color: Option<DutyCycle>,
    broken: bool,
    store_count: usize,
}

impl MemoryStore {
    /// Store with nothing in it
    pub const fn new() -> Self {
        Self {
            color: None,
            broken: false,
            store_count: 0,
        }
    }

    /// Store preloaded with a color
    pub const fn with_color(color: DutyCycle) -> Self {
        Self {
            color: Some(color),
            broken: false,
            store_count: 0,
        }
    }

    /// Store whose every operation fails
    pub const fn broken() -> Self {
        Self {
            color: None,
            broken: true,
            store_count: 0,
        }
    }

    /// Color currently held
    pub const fn stored(&self) -> Option<DutyCycle> {
        self.color
    }

    /// Number of successful store calls
    pub const fn store_count(&self) -> usize {
        self.store_count
    }
}

impl ColorStore for MemoryStore {
    fn load(&mut self) -> Result<DutyCycle, StoreError> {
        if self.broken {
            return Err(StoreError::Driver);
        }
        self.color.ok_or(StoreError::Busy)
    }

    fn store(&mut self, color: DutyCycle) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Driver);
        }
        self.color = Some(color);
        self.store_count += 1;
        Ok(())
    }
}
