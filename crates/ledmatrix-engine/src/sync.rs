//! Tick/phase synchronizer
//!
//! The only state shared with the refresh driver. The driver is the single
//! writer; everything else only reads. Updates are plain atomic stores, so
//! a reader never sees a torn value and no lock is needed.

use core::sync::atomic::{AtomicU8, AtomicU16, Ordering};

use embassy_futures::yield_now;

/// Number of multiplex phases per refresh cycle
pub const PHASE_COUNT: u8 = 4;

/// Last phase of a refresh cycle
pub const LAST_PHASE: u8 = PHASE_COUNT - 1;

/// Refresh counters
pub struct Synchronizer {
    /// Completed refresh cycles
    tick: AtomicU16,
    /// Current multiplex phase (0..PHASE_COUNT)
    phase: AtomicU8,
}

impl Synchronizer {
    pub const fn new() -> Self {
        Self {
            tick: AtomicU16::new(0),
            phase: AtomicU8::new(0),
        }
    }

    // === Read side ===

    /// Free-running refresh cycle counter
    pub fn tick_count(&self) -> u16 {
        self.tick.load(Ordering::Acquire)
    }

    /// Current multiplex phase
    pub fn phase_count(&self) -> u8 {
        self.phase.load(Ordering::Acquire)
    }

    // === Write side (refresh driver only) ===

    /// Move to the next phase
    ///
    /// Wrapping back to phase 0 completes a refresh cycle and bumps the
    /// tick. Returns the new phase.
    pub fn advance_phase(&self) -> u8 {
        let next = self.phase.load(Ordering::Relaxed) + 1;
        if next >= PHASE_COUNT {
            let tick = self.tick.load(Ordering::Relaxed).wrapping_add(1);
            self.tick.store(tick, Ordering::Release);
            self.phase.store(0, Ordering::Release);
            0
        } else {
            self.phase.store(next, Ordering::Release);
            next
        }
    }

    // === Waiting ===

    /// Wait for the tick counter to change, yielding to other tasks
    pub async fn wait_tick(&self) -> u16 {
        let start = self.tick_count();
        loop {
            let tick = self.tick_count();
            if tick != start {
                return tick;
            }
            yield_now().await;
        }
    }

    /// Wait until the phase enters `target`
    ///
    /// If the phase already equals `target` this first waits for it to
    /// leave, so the caller always lands at the start of the phase.
    pub async fn wait_phase(&self, target: u8) {
        while self.phase_count() == target {
            yield_now().await;
        }
        while self.phase_count() != target {
            yield_now().await;
        }
    }

    /// Busy-wait for the tick counter to change
    pub fn spin_tick(&self) -> u16 {
        let start = self.tick_count();
        loop {
            let tick = self.tick_count();
            if tick != start {
                return tick;
            }
            core::hint::spin_loop();
        }
    }

    /// Busy-wait until the phase enters `target`
    pub fn spin_phase(&self, target: u8) {
        while self.phase_count() == target {
            core::hint::spin_loop();
        }
        while self.phase_count() != target {
            core::hint::spin_loop();
        }
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}
