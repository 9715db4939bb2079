//! Bit-plane frame latch
//!
//! The multiplexer shows one bit of every level per phase and holds phase
//! `p` for `2^p` time units (binary code modulation), so four planes give
//! sixteen brightness levels.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::RenderDriver;
use crate::grid::{GRID_SIDE, Grid};
use crate::sync::PHASE_COUNT;

const PLANES: usize = PHASE_COUNT as usize;

/// Latched frame, one column mask per row and phase
///
/// Bit `c` of `plane(p)[r]` is bit `p` of the level at row `r`, column `c`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    planes: [[u16; GRID_SIDE]; PLANES],
}

impl Frame {
    pub const fn blank() -> Self {
        Self {
            planes: [[0; GRID_SIDE]; PLANES],
        }
    }

    /// Split the grid levels into bit planes
    pub fn latch(grid: &Grid) -> Self {
        let mut frame = Self::blank();
        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                let level = grid.level(Grid::index(row, col));
                for (bit, plane) in frame.planes.iter_mut().enumerate() {
                    if level & (1 << bit) != 0 {
                        plane[row] |= 1 << col;
                    }
                }
            }
        }
        frame
    }

    /// Column masks of one phase
    pub fn plane(&self, phase: u8) -> &[u16; GRID_SIDE] {
        &self.planes[usize::from(phase) % PLANES]
    }

    /// Rebuild the level of one cell from the planes
    pub fn level(&self, row: usize, col: usize) -> u8 {
        let mut level = 0;
        for (bit, plane) in self.planes.iter().enumerate() {
            if plane[row] & (1 << col) != 0 {
                level |= 1 << bit;
            }
        }
        level
    }
}

/// Frame handed from the engine to the refresh driver
///
/// The engine stores, the refresh driver loads once per refresh cycle.
pub struct SharedFrame {
    frame: Mutex<CriticalSectionRawMutex, Cell<Frame>>,
}

impl SharedFrame {
    pub const fn new() -> Self {
        Self {
            frame: Mutex::new(Cell::new(Frame::blank())),
        }
    }

    /// Latch a grid for display
    pub fn store(&self, grid: &Grid) {
        let frame = Frame::latch(grid);
        self.frame.lock(|cell| cell.set(frame));
    }

    /// Copy of the latest frame
    pub fn load(&self) -> Frame {
        self.frame.lock(Cell::get)
    }
}

impl Default for SharedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDriver for &SharedFrame {
    fn push(&mut self, grid: &Grid) {
        self.store(grid);
    }
}
