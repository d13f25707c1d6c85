//! Integration tests: classic pattern behaviour under the Conway rule.
//!
//! Each test drives the public `StepEngine`/`Simulation` API with the
//! named fixtures from `gol-test-utils`.

use gol_core::{Generation, Pos};
use gol_engine::{Simulation, StepEngine, Topology, WorldConfig};
use gol_grid::{Grid, SparseGrid};
use gol_test_utils::patterns::{
    oscillators, BEACON, BLINKER, BLOCK, GLIDER, GOSPER_GLIDER_GUN, TOAD,
};
use gol_test_utils::{normalised, sparse, translated};

// ── Movement ───────────────────────────────────────────────────────

#[test]
fn glider_translates_by_one_one_every_four_steps() {
    let engine = StepEngine::default();
    let start = GLIDER.sparse();
    let after = engine.step_n(&start, 4);
    assert_eq!(after.live_cells(), GLIDER.at(1, 1));
    assert_eq!(normalised(&after), normalised(&start));
}

#[test]
fn glider_shape_changes_between_phases() {
    let engine = StepEngine::default();
    let start = GLIDER.sparse();
    for n in 1..4 {
        let g = engine.step_n(&start, n);
        assert_eq!(g.population(), 5, "glider keeps 5 cells at phase {n}");
        assert_ne!(normalised(&g), normalised(&start), "phase {n}");
    }
}

#[test]
fn glider_far_from_origin() {
    let engine = StepEngine::default();
    let start = SparseGrid::from_cells(GLIDER.at(-1_000_000, 500_000));
    let after = engine.step_n(&start, 40);
    assert_eq!(after.live_cells(), GLIDER.at(-1_000_000 + 10, 500_000 + 10));
}

// ── Death and birth ────────────────────────────────────────────────

#[test]
fn isolated_cell_dies_after_one_step() {
    let next = StepEngine::default().step(&sparse(&[(17, -3)]));
    assert!(next.is_empty());
}

#[test]
fn dead_cell_birth_depends_on_exact_count() {
    let engine = StepEngine::default();
    let centre = Pos::new(0, 0);
    let ring: Vec<Pos> = centre.moore().collect();
    for k in 0..=8 {
        let g = SparseGrid::from_cells(ring[..k].iter().copied());
        assert_eq!(g.live_neighbours(centre), k as u8);
        assert_eq!(
            engine.step(&g).is_alive(centre),
            k == 3,
            "dead centre with {k} live neighbours"
        );
    }
}

#[test]
fn live_cell_survival_depends_on_count() {
    let engine = StepEngine::default();
    let centre = Pos::new(0, 0);
    let ring: Vec<Pos> = centre.moore().collect();
    for k in 0..=8 {
        let mut cells = ring[..k].to_vec();
        cells.push(centre);
        let g = SparseGrid::from_cells(cells);
        assert_eq!(
            engine.step(&g).is_alive(centre),
            k == 2 || k == 3,
            "live centre with {k} live neighbours"
        );
    }
}

#[test]
fn empty_grid_steps_to_empty_grid() {
    let engine = StepEngine::default();
    assert!(engine.step(&SparseGrid::new()).is_empty());
    let config = WorldConfig {
        topology: Topology::Bounded {
            width: 8,
            height: 8,
            edge: gol_grid::EdgeBehavior::Wrap,
        },
        ..Default::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    let r = sim.step();
    assert!(r.grid.is_empty());
    assert_eq!(r.cycle.map(|c| c.period), Some(1));
}

// ── Still lifes and oscillators ────────────────────────────────────

#[test]
fn block_is_stable_for_many_steps() {
    let engine = StepEngine::default();
    let mut g = BLOCK.sparse();
    for n in 0..100 {
        g = engine.step(&g);
        assert_eq!(g.live_cells(), BLOCK.positions(), "generation {}", n + 1);
    }
}

#[test]
fn oscillators_return_after_their_period() {
    let engine = StepEngine::default();
    for pattern in oscillators() {
        let period = pattern.period.unwrap() as u64;
        let start = pattern.sparse();
        assert_eq!(
            engine.step_n(&start, period).live_cells(),
            pattern.positions(),
            "{}",
            pattern.name
        );
        if period > 1 {
            assert_ne!(
                engine.step(&start).live_cells(),
                pattern.positions(),
                "{} should change in between",
                pattern.name
            );
        }
    }
}

#[test]
fn cycle_detection_reports_oscillator_periods() {
    for pattern in [BLINKER, TOAD, BEACON, BLOCK] {
        let config = WorldConfig {
            initial: pattern.positions(),
            ..Default::default()
        };
        let mut sim = Simulation::new(config).unwrap();
        let summary = sim.run_until_cycle(50);
        let cycle = summary.cycle.expect("oscillator must repeat");
        assert_eq!(Some(cycle.period as u32), pattern.period, "{}", pattern.name);
        assert_eq!(cycle.first_seen, Generation(0), "{}", pattern.name);
    }
}

#[test]
fn glider_is_not_a_cycle_on_the_plane() {
    let config = WorldConfig {
        initial: GLIDER.positions(),
        ..Default::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    assert_eq!(sim.run(40).cycle, None);
}

// ── Growth ─────────────────────────────────────────────────────────

#[test]
fn gosper_gun_emits_one_glider_per_period() {
    let engine = StepEngine::default();
    let g60 = engine.step_n(&GOSPER_GLIDER_GUN.sparse(), 60);
    let g90 = engine.step(&engine.step_n(&g60, 29));
    let g120 = engine.step_n(&g90, 30);
    assert_eq!(g90.population(), g60.population() + 5);
    assert_eq!(g120.population(), g90.population() + 5);
}

#[test]
fn translation_commutes_with_step() {
    let engine = StepEngine::default();
    let base = GOSPER_GLIDER_GUN.sparse();
    let shifted = SparseGrid::from_cells(GOSPER_GLIDER_GUN.at(-40, 13));
    let a = engine.step_n(&base, 15).live_cells();
    let b = engine.step_n(&shifted, 15).live_cells();
    assert_eq!(translated(&a, -40, 13), b);
}
