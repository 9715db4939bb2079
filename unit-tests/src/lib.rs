//! Shared helpers for the host tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use ledmatrix_engine::{Grid, RenderDriver};
use rand::RngCore;

/// Render driver that keeps every pushed grid
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<Grid>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&Grid> {
        self.frames.last()
    }
}

impl RenderDriver for RecordingDriver {
    fn push(&mut self, grid: &Grid) {
        self.frames.push(grid.clone());
    }
}

/// Pin event seen by a [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub pin: &'static str,
    pub high: bool,
}

/// Log shared by all pins of a board
pub type PinLog = Rc<RefCell<Vec<PinEvent>>>;

/// Output pin recording its level changes into a shared log
pub struct MockPin {
    name: &'static str,
    log: PinLog,
}

impl MockPin {
    pub fn new(name: &'static str, log: &PinLog) -> Self {
        Self {
            name,
            log: Rc::clone(log),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(PinEvent {
            pin: self.name,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(PinEvent {
            pin: self.name,
            high: true,
        });
        Ok(())
    }
}

/// Random source replaying a fixed script, then returning zeros
pub struct ScriptedRng {
    values: VecDeque<u32>,
    pub draws: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            draws: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.values.pop_front().unwrap_or(0)
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Grid with a single cell set
pub fn grid_with(index: usize, value: u8) -> Grid {
    let mut grid = Grid::new();
    grid.set(index, value);
    grid
}
