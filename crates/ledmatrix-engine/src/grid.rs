//! Brightness grid
//!
//! The grid is the state every other component reads or writes. Cells are
//! stored row-major; the low nibble of a cell is always its visible level.

use crate::pan::PanOperand;

/// Side length of the matrix
pub const GRID_SIDE: usize = 16;

/// Total number of cells
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Mask of the visible brightness level inside a cell byte
pub const LEVEL_MASK: u8 = 0x0F;

/// Highest brightness level
pub const MAX_LEVEL: u8 = 15;

/// 16x16 brightness buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; GRID_CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Grid [\n")?;
        for row in self.cells.chunks_exact(GRID_SIDE) {
            f.write_str("  ")?;
            for cell in row {
                write!(f, "{cell:02x} ")?;
            }
            f.write_str("\n")?;
        }
        f.write_str("]")
    }
}

impl Grid {
    /// Create an empty (all dark) grid
    pub const fn new() -> Self {
        Self {
            cells: [0; GRID_CELLS],
        }
    }

    /// Create a grid from raw cell bytes
    pub const fn from_bytes(cells: [u8; GRID_CELLS]) -> Self {
        Self { cells }
    }

    /// Cell index for a row and column
    #[inline]
    pub const fn index(row: usize, col: usize) -> usize {
        row * GRID_SIDE + col
    }

    /// Raw cell byte
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Write a raw cell byte
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }

    /// Visible brightness level of a cell (0-15)
    #[inline]
    pub fn level(&self, index: usize) -> u8 {
        self.cells[index] & LEVEL_MASK
    }

    /// Write the same byte into every cell
    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    /// Turn every cell off
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * GRID_SIDE;
        &self.cells[start..start + GRID_SIDE]
    }

    /// Check whether every cell is zero
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    pub fn as_bytes(&self) -> &[u8; GRID_CELLS] {
        &self.cells
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; GRID_CELLS] {
        &mut self.cells
    }

    /// Shift grid contents as described by a `p` operand
    ///
    /// Directions run in the order left, up, right, down. Each one is an
    /// in-place copy over the result of the previous one; cells that are
    /// vacated keep their old contents and nothing wraps around.
    pub fn pan(&mut self, pan: PanOperand) {
        let amount = usize::from(pan.amount);
        if amount == 0 {
            return;
        }

        if pan.left {
            for row in self.cells.chunks_exact_mut(GRID_SIDE) {
                row.copy_within(amount.., 0);
            }
        }

        let rows = amount * GRID_SIDE;
        if pan.up {
            self.cells.copy_within(rows.., 0);
        }

        if pan.right {
            for row in self.cells.chunks_exact_mut(GRID_SIDE) {
                // Backwards copy, so it reads cells before they are overwritten
                for col in (amount..GRID_SIDE).rev() {
                    row[col] = row[col - amount];
                }
            }
        }

        if pan.down {
            for index in (rows..GRID_CELLS).rev() {
                self.cells[index] = self.cells[index - rows];
            }
        }
    }
}
