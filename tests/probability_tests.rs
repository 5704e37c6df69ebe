use battleship_ai::{calc_weights, AttackState, Coord, Grid, TileState, BOARD_SIZE, HIT_WEIGHT};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A knowledge grid with a random scatter of resolved tiles.
fn random_knowledge(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    for c in Grid::coords() {
        let state = match rng.random_range(0..10) {
            0 => TileState::Miss,
            1 => TileState::Hit,
            2 => TileState::Sunk,
            _ => TileState::Empty,
        };
        grid.set(c, state).unwrap();
    }
    grid
}

#[test]
fn empty_board_single_length_three() {
    // Scenario: empty knowledge, hunt mode, one ship of length 3.
    let knowledge = Grid::new();
    let (weights, best) = calc_weights(&knowledge, AttackState::Hunt, &[3]);

    // Corner (0,0) is covered by exactly one run per orientation.
    assert_eq!(weights[0][0], 2);
    // A central cell is covered by three runs per orientation.
    assert_eq!(weights[5][5], 6);
    // Every cell has enough margin for at least one run somewhere.
    for c in Grid::coords() {
        assert!(weights[c.y][c.x] >= 1, "cell {} has no weight", c);
    }
    let best = best.unwrap();
    assert!(weights[best.y][best.x] >= weights[5][5]);
}

#[test]
fn target_mode_concentrates_weight_around_hit() {
    // Scenario: single hit at (5,5), target mode, ship of length 4.
    let mut knowledge = Grid::new();
    knowledge.set(Coord::new(5, 5), TileState::Hit).unwrap();
    let (weights, best) = calc_weights(&knowledge, AttackState::Target, &[4]);

    // The hit itself is resolved and can never be the next shot.
    assert_eq!(weights[5][5], 0);

    // Every feasible run through the hit carries the heavy weight, so its
    // axis neighbors outscore any cell off the hit's row and column.
    assert!(weights[5][4] > HIT_WEIGHT);
    assert!(weights[4][5] > HIT_WEIGHT);

    // The arg-max lies on one of the runs through (5,5): same row within
    // length - 1 columns, or same column within length - 1 rows.
    let best = best.unwrap();
    assert!(best != Coord::new(5, 5));
    let on_row = best.y == 5 && best.x.abs_diff(5) <= 3;
    let on_col = best.x == 5 && best.y.abs_diff(5) <= 3;
    assert!(on_row || on_col, "best cell {} is not anchored to the hit", best);
}

#[test]
fn sunk_run_is_infeasible_in_target_mode() {
    // A sunk tile splits the board for the remaining ships.
    let mut knowledge = Grid::new();
    for x in 0..BOARD_SIZE {
        knowledge.set(Coord::new(x, 4), TileState::Sunk).unwrap();
    }
    let (weights, _) = calc_weights(&knowledge, AttackState::Target, &[5, 4, 3]);
    for x in 0..BOARD_SIZE {
        assert_eq!(weights[4][x], 0);
    }
    // Vertical runs crossing the sunk row are gone; rows 0..4 only admit
    // horizontal runs plus vertical runs of length <= 4 above the wall.
    assert!(weights[0][0] > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hit_cells_never_carry_weight(seed in any::<u64>()) {
        let knowledge = random_knowledge(seed);
        for state in [AttackState::Hunt, AttackState::Target] {
            let (weights, _) = calc_weights(&knowledge, state, &[5, 4, 3, 3, 2]);
            for c in Grid::coords() {
                if knowledge.get(c).unwrap() == TileState::Hit {
                    prop_assert_eq!(weights[c.y][c.x], 0);
                }
            }
        }
    }

    #[test]
    fn resolved_cells_never_carry_weight_in_target_mode(seed in any::<u64>()) {
        let knowledge = random_knowledge(seed);
        let (weights, _) = calc_weights(&knowledge, AttackState::Target, &[5, 4, 3, 3, 2]);
        for c in Grid::coords() {
            let state = knowledge.get(c).unwrap();
            if state == TileState::Miss || state == TileState::Sunk {
                prop_assert_eq!(weights[c.y][c.x], 0);
            }
        }
    }

    #[test]
    fn only_unknown_cells_carry_weight_in_hunt_mode(seed in any::<u64>()) {
        let knowledge = random_knowledge(seed);
        let (weights, _) = calc_weights(&knowledge, AttackState::Hunt, &[5, 4, 3, 3, 2]);
        for c in Grid::coords() {
            if knowledge.get(c).unwrap() != TileState::Empty {
                prop_assert_eq!(weights[c.y][c.x], 0);
            }
        }
    }

    #[test]
    fn computation_is_idempotent(seed in any::<u64>()) {
        let knowledge = random_knowledge(seed);
        for state in [AttackState::Hunt, AttackState::Target] {
            let (w1, best1) = calc_weights(&knowledge, state, &[5, 4, 3, 3, 2]);
            let (w2, best2) = calc_weights(&knowledge, state, &[5, 4, 3, 3, 2]);
            prop_assert_eq!(w1, w2);
            prop_assert_eq!(best1, best2);
        }
    }

    #[test]
    fn best_cell_has_positive_weight(seed in any::<u64>()) {
        let knowledge = random_knowledge(seed);
        for state in [AttackState::Hunt, AttackState::Target] {
            let (weights, best) = calc_weights(&knowledge, state, &[5, 4, 3, 3, 2]);
            if let Some(c) = best {
                prop_assert!(weights[c.y][c.x] >= 1);
            }
        }
    }
}
