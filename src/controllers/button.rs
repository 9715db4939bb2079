//! Push button handling
//!
//! The button is sampled once per refresh tick. A press is acted on when it
//! is released: a short press selects the next animation sequence, holding
//! the button longer than the long-press threshold powers the device down.

use ledmatrix_engine::Command;

/// Per-tick button sampler
pub struct PressTracker {
    /// Ticks after which a press counts as long
    long_press: u8,
    /// Ticks the button has been held, `None` while released
    held: Option<u8>,
    /// Cleared until the button has been seen released once, so a button
    /// held during boot does not trigger anything
    armed: bool,
}

impl PressTracker {
    pub const fn new(long_press: u8) -> Self {
        Self {
            long_press,
            held: None,
            armed: false,
        }
    }

    /// Check whether the button is currently held down
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Feed one sample, returns the command to issue on release
    pub fn update(&mut self, pressed: bool) -> Option<Command> {
        if !self.armed {
            self.armed = !pressed;
            return None;
        }

        match (self.held, pressed) {
            (None, true) => {
                self.held = Some(0);
                None
            }
            (Some(ticks), true) => {
                self.held = Some(ticks.saturating_add(1));
                None
            }
            (Some(ticks), false) => {
                self.held = None;
                if ticks > self.long_press {
                    Some(Command::PowerDown)
                } else {
                    Some(Command::NextSequence)
                }
            }
            (None, false) => None,
        }
    }
}
