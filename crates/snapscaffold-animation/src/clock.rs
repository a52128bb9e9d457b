//! Frame time sources.

use std::cell::Cell;
use web_time::Instant;

/// Nominal interval of a 60Hz frame.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Supplies the timestamp of the frame being produced.
pub trait FrameClock {
    fn frame_time_nanos(&self) -> u64;
}

/// Wall-clock frame time measured from clock creation.
#[derive(Clone, Copy, Debug)]
pub struct SystemFrameClock {
    origin: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn frame_time_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Deterministic clock advanced explicitly by tests and headless hosts.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    now: Cell<u64>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_nanos(&self, nanos: u64) -> u64 {
        let next = self.now.get().saturating_add(nanos);
        self.now.set(next);
        next
    }

    pub fn advance_millis(&self, millis: u64) -> u64 {
        self.advance_nanos(millis.saturating_mul(1_000_000))
    }

    pub fn advance_frame(&self) -> u64 {
        self.advance_nanos(FRAME_INTERVAL_NANOS)
    }
}

impl FrameClock for ManualFrameClock {
    fn frame_time_nanos(&self) -> u64 {
        self.now.get()
    }
}
