//! Falling embers display mode
//!
//! A one-dimensional cellular automaton run top to bottom in place:
//! - the bottom row drains by one level per step
//! - every other lit cell drips its value into the cell below and fades
//! - random sparks appear in the top row

use rand::RngCore;

use crate::grid::{GRID_CELLS, GRID_SIDE, Grid};

/// A spark fires when the masked draw equals the mask (1 in 32)
const SPARK_MASK: u32 = 0x1F;

/// Draws thrown away between a spark hit and its level
const SPARK_DISCARD_DRAWS: usize = 8;

/// First cell of the bottom row
const BOTTOM_ROW: usize = GRID_CELLS - GRID_SIDE;

/// Embers automaton
pub struct Automaton<R> {
    rng: R,
    sparks: bool,
}

impl<R: RngCore> Automaton<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, sparks: true }
    }

    /// Enable or disable spark injection
    #[must_use]
    pub fn with_sparks(mut self, sparks: bool) -> Self {
        self.sparks = sparks;
        self
    }

    pub fn set_sparks(&mut self, sparks: bool) {
        self.sparks = sparks;
    }

    /// Advance the automaton by one step
    pub fn step(&mut self, grid: &mut Grid) {
        let cells = grid.as_bytes_mut();

        for cell in &mut cells[BOTTOM_ROW..] {
            if *cell != 0 {
                *cell -= 1;
            }
        }

        for index in (0..BOTTOM_ROW).rev() {
            let value = cells[index];
            if value != 0 {
                let below = index + GRID_SIDE;
                if cells[below] < value {
                    cells[below] = value;
                }
                cells[index] = value - 1;
            }
        }

        if self.sparks {
            self.inject_sparks(grid);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inject_sparks(&mut self, grid: &mut Grid) {
        for col in 0..GRID_SIDE {
            if self.rng.next_u32() & SPARK_MASK != SPARK_MASK {
                continue;
            }
            for _ in 0..SPARK_DISCARD_DRAWS {
                self.rng.next_u32();
            }
            let level = (self.rng.next_u32() & 0x0F) as u8;
            grid.set(col, level);
        }
    }
}
