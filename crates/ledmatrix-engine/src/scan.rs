//! Row multiplexer
//!
//! Columns are fed through a 16-bit serial shift register (data, clock,
//! latch); rows are selected through a 4-to-16 address decoder whose
//! outputs are gated by an active-low enable. One call to
//! [`Scanner::show_next`] lights one row of the current phase.

use embedded_hal::digital::{OutputPin, PinState};

use crate::frame::{Frame, SharedFrame};
use crate::grid::GRID_SIDE;
use crate::sync::Synchronizer;

/// Pins of the matrix driver board
pub struct MatrixPins<P> {
    /// Shift register serial input
    pub data: P,
    /// Shift register clock, data is sampled on the rising edge
    pub clock: P,
    /// Storage register latch, copies the shifted bits to the outputs
    pub latch: P,
    /// Decoder enable, low turns the addressed row on
    pub enable: P,
    /// Decoder address, least significant bit first
    pub address: [P; 4],
}

/// Refresh driver state
pub struct Scanner<P> {
    pins: MatrixPins<P>,
    /// Frame shown during the current refresh cycle
    frame: Frame,
    /// Next row to show
    row: usize,
}

impl<P: OutputPin> Scanner<P> {
    pub fn new(pins: MatrixPins<P>) -> Self {
        Self {
            pins,
            frame: Frame::blank(),
            row: 0,
        }
    }

    /// Frame of the current refresh cycle
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Next row to be shown
    pub fn row(&self) -> usize {
        self.row
    }

    /// Show the next row of the current phase
    ///
    /// Reloads the shared frame at the start of each refresh cycle and
    /// advances the synchronizer after the last row of a phase. Returns how
    /// many time units the row has to stay lit.
    pub fn show_next(&mut self, shared: &SharedFrame, sync: &Synchronizer) -> Result<u32, P::Error> {
        let phase = sync.phase_count();
        if phase == 0 && self.row == 0 {
            self.frame = shared.load();
        }

        let columns = self.frame.plane(phase)[self.row];
        self.pins.enable.set_high()?;
        self.shift_columns(columns)?;
        self.select_row(self.row)?;
        self.pins.enable.set_low()?;

        self.row += 1;
        if self.row == GRID_SIDE {
            self.row = 0;
            sync.advance_phase();
        }

        Ok(1 << phase)
    }

    /// Turn every row off
    pub fn blank(&mut self) -> Result<(), P::Error> {
        self.pins.enable.set_high()?;
        self.shift_columns(0)
    }

    /// Column 15 is shifted first, so column 0 ends up on the first output
    fn shift_columns(&mut self, columns: u16) -> Result<(), P::Error> {
        for col in (0..GRID_SIDE).rev() {
            let bit = columns & (1 << col) != 0;
            self.pins.data.set_state(PinState::from(bit))?;
            self.pins.clock.set_high()?;
            self.pins.clock.set_low()?;
        }
        self.pins.latch.set_high()?;
        self.pins.latch.set_low()
    }

    fn select_row(&mut self, row: usize) -> Result<(), P::Error> {
        for (bit, pin) in self.pins.address.iter_mut().enumerate() {
            pin.set_state(PinState::from(row & (1 << bit) != 0))?;
        }
        Ok(())
    }
}
