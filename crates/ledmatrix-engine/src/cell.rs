//! Packed autonomous cell state
//!
//! A grid cell flagged with `0x10` evolves on its own. The high nibble
//! carries the animation flags, the low nibble the current level.

use crate::grid::{LEVEL_MASK, MAX_LEVEL};

const CELL_AUTO: u8 = 0x10;
const CELL_RISING: u8 = 0x20;
const CELL_BOUNCE: u8 = 0x40;
const CELL_SPARE: u8 = 0x80;

/// Unpacked view of one cell byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoCell {
    /// Automatic animation enabled
    pub enabled: bool,
    /// Reverse direction at the boundary instead of stopping
    pub bounce: bool,
    /// Current direction, set when the level is increasing
    pub rising: bool,
    /// Unused flag bit, carried through untouched
    pub spare: bool,
    /// Current level (0-15)
    pub level: u8,
}

impl AutoCell {
    pub const fn unpack(value: u8) -> Self {
        Self {
            enabled: value & CELL_AUTO != 0,
            bounce: value & CELL_BOUNCE != 0,
            rising: value & CELL_RISING != 0,
            spare: value & CELL_SPARE != 0,
            level: value & LEVEL_MASK,
        }
    }

    pub const fn pack(self) -> u8 {
        let mut value = self.level & LEVEL_MASK;
        if self.enabled {
            value |= CELL_AUTO;
        }
        if self.rising {
            value |= CELL_RISING;
        }
        if self.bounce {
            value |= CELL_BOUNCE;
        }
        if self.spare {
            value |= CELL_SPARE;
        }
        value
    }

    /// Ramp that runs from the given level
    pub const fn ramp(level: u8, rising: bool) -> Self {
        Self {
            enabled: true,
            bounce: false,
            rising,
            spare: false,
            level,
        }
    }

    /// Continuous breathing cell
    pub const fn breathing(level: u8, rising: bool) -> Self {
        Self {
            enabled: true,
            bounce: true,
            rising,
            spare: false,
            level,
        }
    }

    /// Advance the cell by one fade step
    ///
    /// On hitting a boundary the level clamps; a bouncing cell flips its
    /// direction, any other cell drops out of automatic animation.
    #[must_use]
    pub const fn step(self) -> Self {
        if !self.enabled {
            return self;
        }

        let mut next = self;
        let at_boundary = if self.rising {
            self.level >= MAX_LEVEL
        } else {
            self.level == 0
        };

        if at_boundary {
            if self.bounce {
                next.rising = !self.rising;
            } else {
                next.enabled = false;
            }
        } else if self.rising {
            next.level = self.level + 1;
        } else {
            next.level = self.level - 1;
        }

        next
    }
}

impl From<u8> for AutoCell {
    fn from(value: u8) -> Self {
        Self::unpack(value)
    }
}

impl From<AutoCell> for u8 {
    fn from(cell: AutoCell) -> Self {
        cell.pack()
    }
}
