//! Autonomous fade state machine
//!
//! Every cell with the automatic flag ramps its level by one per fade
//! cycle, either bouncing between 0 and 15 or stopping at the end.

use crate::cell::AutoCell;
use crate::grid::Grid;

/// Default throttle: fade on every fourth tick
pub const DEFAULT_FADE_MASK: u16 = 0x03;

/// Check whether a fade cycle runs on this tick
///
/// The cycle runs when all bits of `mask` are clear in `tick`.
#[inline]
pub const fn should_fade(tick: u16, mask: u16) -> bool {
    tick & mask == 0
}

/// Advance every automatic cell by one step
///
/// Returns the number of cells that were animated. Cells without the
/// automatic flag are never written.
pub fn fade_step(grid: &mut Grid) -> usize {
    let mut animated = 0;
    for value in grid.as_bytes_mut().iter_mut() {
        let cell = AutoCell::unpack(*value);
        if cell.enabled {
            *value = cell.step().pack();
            animated += 1;
        }
    }
    animated
}
