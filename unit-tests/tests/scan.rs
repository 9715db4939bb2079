//! Bit-plane latch and row multiplexer.

use std::cell::RefCell;
use std::rc::Rc;

use ledmatrix_engine::{Frame, Grid, MatrixPins, RenderDriver, Scanner, SharedFrame, Synchronizer};
use tests::{MockPin, PinEvent, PinLog, grid_with};

fn board(log: &PinLog) -> MatrixPins<MockPin> {
    MatrixPins {
        data: MockPin::new("data", log),
        clock: MockPin::new("clock", log),
        latch: MockPin::new("latch", log),
        enable: MockPin::new("enable", log),
        address: [
            MockPin::new("a0", log),
            MockPin::new("a1", log),
            MockPin::new("a2", log),
            MockPin::new("a3", log),
        ],
    }
}

fn events_of(log: &PinLog, pin: &str) -> Vec<bool> {
    log.borrow()
        .iter()
        .filter(|event| event.pin == pin)
        .map(|event| event.high)
        .collect()
}

fn new_log() -> PinLog {
    Rc::new(RefCell::new(Vec::new()))
}

// -----------------------------------------------------------------------------
// Frame latch
// -----------------------------------------------------------------------------

#[test]
fn latch_splits_levels_into_planes() {
    let frame = Frame::latch(&grid_with(Grid::index(2, 5), 0x7A));

    assert_eq!(frame.plane(0)[2], 0);
    assert_eq!(frame.plane(1)[2], 1 << 5);
    assert_eq!(frame.plane(2)[2], 0);
    assert_eq!(frame.plane(3)[2], 1 << 5);
    // Flag bits never reach the display
    assert_eq!(frame.level(2, 5), 0x0A);
    assert_eq!(frame.level(2, 4), 0);
}

#[test]
fn latch_keeps_every_level() {
    let mut grid = Grid::new();
    for index in 0..256 {
        grid.set(index, (index % 16) as u8);
    }
    let frame = Frame::latch(&grid);

    for row in 0..16 {
        for col in 0..16 {
            assert_eq!(frame.level(row, col), grid.level(Grid::index(row, col)));
        }
    }
}

#[test]
fn shared_frame_is_a_render_driver() {
    let shared = SharedFrame::new();
    assert_eq!(shared.load(), Frame::blank());

    let mut driver = &shared;
    driver.push(&grid_with(0, 0x0F));
    assert_eq!(shared.load().level(0, 0), 15);
}

// -----------------------------------------------------------------------------
// Scanner
// -----------------------------------------------------------------------------

#[test]
fn row_is_shifted_msb_first_then_enabled() {
    let log = new_log();
    let shared = SharedFrame::new();
    shared.store(&grid_with(Grid::index(0, 0), 0x01));
    let sync = Synchronizer::new();
    let mut scanner = Scanner::new(board(&log));

    assert_eq!(scanner.show_next(&shared, &sync).unwrap(), 1);

    let events = log.borrow().clone();
    assert_eq!(events.first(), Some(&PinEvent { pin: "enable", high: true }));
    assert_eq!(events.last(), Some(&PinEvent { pin: "enable", high: false }));

    let data = events_of(&log, "data");
    assert_eq!(data.len(), 16);
    assert!(data[..15].iter().all(|&high| !high));
    assert!(data[15]);

    assert_eq!(events_of(&log, "clock").len(), 32);
    assert_eq!(events_of(&log, "latch"), vec![true, false]);
    for pin in ["a0", "a1", "a2", "a3"] {
        assert_eq!(events_of(&log, pin), vec![false]);
    }
    assert_eq!(scanner.row(), 1);
}

#[test]
fn address_follows_row() {
    let log = new_log();
    let shared = SharedFrame::new();
    let sync = Synchronizer::new();
    let mut scanner = Scanner::new(board(&log));

    for _ in 0..=5 {
        scanner.show_next(&shared, &sync).unwrap();
    }

    // Row 5 is 0b0101
    let last = |pin| *events_of(&log, pin).last().unwrap();
    assert!(last("a0"));
    assert!(!last("a1"));
    assert!(last("a2"));
    assert!(!last("a3"));
}

#[test]
fn phases_advance_after_sixteen_rows() {
    let log = new_log();
    let shared = SharedFrame::new();
    let sync = Synchronizer::new();
    let mut scanner = Scanner::new(board(&log));

    let mut units = Vec::new();
    for _ in 0..64 {
        units.push(scanner.show_next(&shared, &sync).unwrap());
    }

    assert_eq!(units[0], 1);
    assert_eq!(units[16], 2);
    assert_eq!(units[32], 4);
    assert_eq!(units[63], 8);
    // Fifteen units per row over a full cycle
    assert_eq!(units.iter().sum::<u32>(), 16 * 15);
    assert_eq!((sync.tick_count(), sync.phase_count()), (1, 0));
}

#[test]
fn phase_selects_bit_plane() {
    let log = new_log();
    let shared = SharedFrame::new();
    shared.store(&grid_with(Grid::index(0, 0), 0x02));
    let sync = Synchronizer::new();
    let mut scanner = Scanner::new(board(&log));

    scanner.show_next(&shared, &sync).unwrap();
    assert!(!*events_of(&log, "data").last().unwrap());

    for _ in 1..16 {
        scanner.show_next(&shared, &sync).unwrap();
    }
    log.borrow_mut().clear();

    // Row 0 of phase 1 carries bit 1
    scanner.show_next(&shared, &sync).unwrap();
    assert!(*events_of(&log, "data").last().unwrap());
}

#[test]
fn frame_reloads_only_at_cycle_start() {
    let log = new_log();
    let shared = SharedFrame::new();
    let sync = Synchronizer::new();
    let mut scanner = Scanner::new(board(&log));

    scanner.show_next(&shared, &sync).unwrap();
    shared.store(&grid_with(0, 0x0F));

    for _ in 1..64 {
        scanner.show_next(&shared, &sync).unwrap();
        assert_eq!(scanner.frame().level(0, 0), 0);
    }

    scanner.show_next(&shared, &sync).unwrap();
    assert_eq!(scanner.frame().level(0, 0), 15);
}

#[test]
fn blank_turns_rows_off() {
    let log = new_log();
    let mut scanner = Scanner::new(board(&log));

    scanner.blank().unwrap();

    assert_eq!(events_of(&log, "enable"), vec![true]);
    let data = events_of(&log, "data");
    assert_eq!(data.len(), 16);
    assert!(data.iter().all(|&high| !high));
}
