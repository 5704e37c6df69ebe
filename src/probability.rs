//! Probability-density targeting over all legal ship placements.
//!
//! For every remaining ship length and every origin, the horizontal run
//! (increasing x) and the vertical run (increasing y) are walked against the
//! knowledge grid. Feasible runs add their weight to each covered cell;
//! infeasible runs zero the cell that blocked them. The best next shot is
//! the first cell in scan order to reach the highest accumulated weight.
//! Only the arg-max matters, so no normalization is performed.

use crate::config::BOARD_SIZE;
use crate::grid::{Coord, Grid, TileState};
use crate::ship::Orientation;
use crate::strategy::AttackState;

/// Extra weight a run gains for each confirmed hit it crosses in target
/// mode, concentrating mass where shots have already connected.
pub const HIT_WEIGHT: u32 = 100;

/// Accumulated placement weight per cell, indexed `[y][x]`.
pub type WeightGrid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Compute the weight grid for `knowledge` and return it together with the
/// best cell to attack, `None` when no legal placement of any remaining ship
/// exists.
///
/// Scan order is fixed: `lengths` outer, then y, then x, horizontal before
/// vertical at the same origin. Ties on the maximum keep the first cell that
/// reached it. Both orientations are scanned symmetrically at every origin;
/// an orientation is skipped only when its run leaves the board.
pub fn calc_weights(
    knowledge: &Grid,
    state: AttackState,
    lengths: &[usize],
) -> (WeightGrid, Option<Coord>) {
    let mut weights: WeightGrid = [[0; BOARD_SIZE]; BOARD_SIZE];
    let mut best: Option<(Coord, u32)> = None;

    for &length in lengths {
        if length == 0 {
            continue;
        }
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let origin = Coord::new(x, y);
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    score_run(
                        knowledge,
                        state,
                        origin,
                        orientation,
                        length,
                        &mut weights,
                        &mut best,
                    );
                }
            }
        }
    }

    (weights, best.map(|(coord, _)| coord))
}

/// Walk one candidate run and fold its contribution into `weights`.
fn score_run(
    knowledge: &Grid,
    state: AttackState,
    origin: Coord,
    orientation: Orientation,
    length: usize,
    weights: &mut WeightGrid,
    best: &mut Option<(Coord, u32)>,
) {
    let fits = match orientation {
        Orientation::Horizontal => origin.x + length <= BOARD_SIZE,
        Orientation::Vertical => origin.y + length <= BOARD_SIZE,
    };
    if !fits {
        return;
    }
    let cell_at = |i: usize| match orientation {
        Orientation::Horizontal => Coord::new(origin.x + i, origin.y),
        Orientation::Vertical => Coord::new(origin.x, origin.y + i),
    };

    // Feasibility pass. A blocked cell is actively zeroed rather than
    // skipped: an earlier ship's feasible run may already have added weight
    // there.
    let mut weight: u32 = 1;
    for i in 0..length {
        let c = cell_at(i);
        match state {
            AttackState::Hunt => {
                if knowledge[c] != TileState::Empty {
                    weights[c.y][c.x] = 0;
                    return;
                }
            }
            AttackState::Target => match knowledge[c] {
                TileState::Miss | TileState::Sunk => {
                    weights[c.y][c.x] = 0;
                    return;
                }
                TileState::Hit => weight += HIT_WEIGHT,
                TileState::Empty | TileState::Ship => {}
            },
        }
    }

    // Accumulation pass. Hit cells are already resolved and can never be the
    // next shot, so they are forced to zero instead of accumulating.
    for i in 0..length {
        let c = cell_at(i);
        if knowledge[c] == TileState::Hit {
            weights[c.y][c.x] = 0;
        } else {
            weights[c.y][c.x] += weight;
            let value = weights[c.y][c.x];
            if best.map_or(true, |(_, top)| value > top) {
                *best = Some((c, value));
            }
        }
    }
}
