//! Engine - per-tick scheduler
//!
//! The engine owns the grid and both display strategies. It is stepped
//! once per refresh tick:
//! - `Animation` runs the bytecode interpreter every tick and the fade
//!   state machine on throttled ticks, except when the sequence restarted
//! - `Automaton` runs the embers automaton every few ticks
//!
//! Input handlers talk to it through the command channel; commands are
//! applied only between steps.

use log::{debug, info};
use rand::RngCore;

use crate::RenderDriver;
use crate::automaton::Automaton;
use crate::command::{Command, CommandReceiver};
use crate::fade::{DEFAULT_FADE_MASK, fade_step, should_fade};
use crate::grid::Grid;
use crate::interpreter::{Advance, Interpreter};
use crate::program::Program;
use crate::sync::{LAST_PHASE, Synchronizer};

/// Default number of ticks between automaton steps
pub const DEFAULT_AUTOMATON_INTERVAL: u8 = 8;

/// Display strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Bytecode interpreter plus autonomous fades
    #[default]
    Animation,
    /// Falling embers automaton
    Automaton,
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    /// Display blanked, ticks are ignored
    PoweredDown,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Active display strategy
    pub mode: DisplayMode,
    /// Fade runs on ticks where `tick & fade_mask == 0`
    pub fade_mask: u16,
    /// Ticks between automaton steps
    pub automaton_interval: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Animation,
            fade_mask: DEFAULT_FADE_MASK,
            automaton_interval: DEFAULT_AUTOMATON_INTERVAL,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_fade_mask(mut self, mask: u16) -> Self {
        self.fade_mask = mask;
        self
    }

    #[must_use]
    pub const fn with_automaton_interval(mut self, ticks: u8) -> Self {
        self.automaton_interval = ticks;
        self
    }
}

/// LED matrix engine
///
/// Generic over the render driver and the random source of the automaton.
pub struct Engine<'a, D: RenderDriver, R: RngCore> {
    grid: Grid,
    interpreter: Interpreter<'a>,
    automaton: Automaton<R>,
    driver: D,
    commands: Option<CommandReceiver>,
    config: EngineConfig,
    state: EngineState,
    /// Ticks left until the next automaton step
    countdown: u8,
}

impl<'a, D: RenderDriver, R: RngCore> Engine<'a, D, R> {
    pub fn new(program: Program<'a>, driver: D, rng: R, config: EngineConfig) -> Self {
        Self {
            grid: Grid::new(),
            interpreter: Interpreter::new(program),
            automaton: Automaton::new(rng),
            driver,
            commands: None,
            config,
            state: EngineState::Running,
            countdown: 0,
        }
    }

    /// Attach the command receiver
    #[must_use]
    pub fn with_commands(mut self, commands: CommandReceiver) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn interpreter(&self) -> &Interpreter<'a> {
        &self.interpreter
    }

    pub fn automaton_mut(&mut self) -> &mut Automaton<R> {
        &mut self.automaton
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn mode(&self) -> DisplayMode {
        self.config.mode
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_powered_down(&self) -> bool {
        self.state == EngineState::PoweredDown
    }

    /// Active animation sequence
    pub fn sequence(&self) -> u8 {
        self.interpreter.sequence()
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) {
        if self.is_powered_down() {
            return;
        }
        debug!("engine: {:?}", command);
        match command {
            Command::NextSequence => {
                self.blank();
                self.interpreter.next_sequence();
            }
            Command::SelectSequence(selector) => {
                self.blank();
                self.interpreter.select_sequence(selector);
            }
            Command::PowerDown => {
                self.blank();
                self.state = EngineState::PoweredDown;
                info!("engine: powered down");
            }
        }
    }

    /// Wait for the next slot in which the grid may be stepped
    ///
    /// The automaton mutates the grid at the start of the last phase of a
    /// refresh cycle, the animation mode once per tick.
    pub async fn wait_slot(&self, sync: &Synchronizer) -> u16 {
        match self.config.mode {
            DisplayMode::Animation => sync.wait_tick().await,
            DisplayMode::Automaton => {
                sync.wait_phase(LAST_PHASE).await;
                sync.tick_count()
            }
        }
    }

    /// Run one scheduler step
    pub fn on_tick(&mut self, tick: u16) {
        self.process_commands();
        if self.is_powered_down() {
            return;
        }

        match self.config.mode {
            DisplayMode::Animation => self.animation_step(tick),
            DisplayMode::Automaton => self.automaton_step(),
        }
    }

    /// Step until a power-down command arrives
    pub async fn run(&mut self, sync: &Synchronizer) {
        while !self.is_powered_down() {
            let tick = self.wait_slot(sync).await;
            self.on_tick(tick);
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self
            .commands
            .as_ref()
            .and_then(|commands| commands.try_receive().ok())
        {
            self.handle(command);
        }
    }

    fn animation_step(&mut self, tick: u16) {
        if let Advance::Restarted = self.interpreter.advance(&mut self.grid) {
            // A restart tick skips the fade pass
            debug!(
                "engine: sequence {} restarted at tick {}",
                self.interpreter.sequence(),
                tick
            );
            return;
        }

        if should_fade(tick, self.config.fade_mask) {
            fade_step(&mut self.grid);
            self.driver.push(&self.grid);
        }
    }

    fn automaton_step(&mut self) {
        if self.countdown > 0 {
            self.countdown -= 1;
            return;
        }
        self.automaton.step(&mut self.grid);
        self.driver.push(&self.grid);
        self.countdown = self.config.automaton_interval.saturating_sub(1);
    }

    fn blank(&mut self) {
        self.grid.clear();
        self.driver.push(&self.grid);
    }
}
