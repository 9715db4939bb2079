//! Falling embers automaton.

use ledmatrix_engine::{Automaton, GRID_SIDE, Grid};
use rand::rngs::mock::StepRng;
use tests::{ScriptedRng, grid_with};

fn quiet() -> Automaton<StepRng> {
    Automaton::new(StepRng::new(0, 0))
}

fn column(grid: &Grid, col: usize) -> Vec<u8> {
    (0..GRID_SIDE).map(|row| grid.get(Grid::index(row, col))).collect()
}

#[test]
fn head_moves_one_row_per_step() {
    let mut automaton = quiet();
    let mut grid = grid_with(Grid::index(0, 3), 5);

    for step in 1..=7 {
        automaton.step(&mut grid);
        assert_eq!(grid.get(Grid::index(step, 3)), 5, "head after step {step}");
        for row in step + 1..GRID_SIDE {
            assert_eq!(grid.get(Grid::index(row, 3)), 0, "below head after step {step}");
        }
    }
}

#[test]
fn trail_fades_behind_the_head() {
    let mut automaton = quiet();
    let mut grid = grid_with(Grid::index(0, 3), 5);

    automaton.step(&mut grid);
    automaton.step(&mut grid);
    assert_eq!(column(&grid, 3)[..4], [3, 4, 5, 0]);
}

#[test]
fn top_cell_drains_in_level_steps() {
    let mut automaton = quiet();
    let mut grid = grid_with(Grid::index(0, 8), 5);

    for _ in 0..4 {
        automaton.step(&mut grid);
    }
    assert_eq!(grid.get(8), 1);

    automaton.step(&mut grid);
    assert_eq!(grid.get(8), 0);
}

#[test]
fn other_columns_stay_dark() {
    let mut automaton = quiet();
    let mut grid = grid_with(Grid::index(0, 3), 9);

    for _ in 0..20 {
        automaton.step(&mut grid);
        for index in 0..256 {
            if index % GRID_SIDE != 3 {
                assert_eq!(grid.get(index), 0);
            }
        }
    }
}

#[test]
fn bottom_row_decays() {
    let mut automaton = quiet();
    let mut grid = grid_with(Grid::index(15, 0), 3);
    grid.set(Grid::index(14, 1), 5);

    automaton.step(&mut grid);

    assert_eq!(grid.get(Grid::index(15, 0)), 2);
    // The drip lands after the bottom row drained
    assert_eq!(grid.get(Grid::index(15, 1)), 5);
    assert_eq!(grid.get(Grid::index(14, 1)), 4);
}

#[test]
fn lit_grid_drains_to_dark() {
    let mut automaton = quiet();
    let mut grid = Grid::new();
    grid.fill(0x0F);

    for _ in 0..64 {
        automaton.step(&mut grid);
    }
    assert!(grid.is_blank());
}

#[test]
fn spark_draws_a_level_after_discards() {
    let mut script = vec![0x1F];
    script.extend([0x1F; 8]);
    script.push(0x3A);
    let mut automaton = Automaton::new(ScriptedRng::new(&script));
    let mut grid = Grid::new();

    automaton.step(&mut grid);

    assert_eq!(grid.get(0), 0x0A);
    assert!((1..GRID_SIDE).all(|col| grid.get(col) == 0));
}

#[test]
fn spark_gate_needs_all_mask_bits() {
    let script: Vec<u32> = (0..GRID_SIDE as u32).map(|col| 0x0F | (col << 8)).collect();
    let mut automaton = Automaton::new(ScriptedRng::new(&script));
    let mut grid = Grid::new();

    automaton.step(&mut grid);
    assert!(grid.is_blank());
}

#[test]
fn disabled_sparks_draw_nothing() {
    let mut automaton = Automaton::new(ScriptedRng::new(&[0x1F; 32])).with_sparks(false);
    let mut grid = Grid::new();

    automaton.step(&mut grid);
    assert!(grid.is_blank());

    automaton.set_sparks(true);
    automaton.step(&mut grid);
    assert!(!grid.is_blank());
}
