//! Random fleet placement.
//!
//! Ships are processed in fleet order. For each ship a random orientation is
//! drawn, every cell that cannot legally start the ship is blocked on a
//! scratch copy of the board, and a start cell is sampled uniformly from
//! what remains. The sampled cell is the ship's head; the body extends
//! toward decreasing coordinates on the active axis.

use log::debug;
use rand::Rng;

use crate::common::PlacementError;
use crate::grid::{Coord, Grid, TileState};
use crate::ship::{Fleet, Orientation};

/// Place every ship of `fleet` onto a fresh board without overlap.
///
/// Mutates each ship's occupied-cell list and returns the resulting ground
/// truth grid. Fails with [`PlacementError::NoLegalCell`] when a ship has no
/// legal start cell left, which indicates a fleet/board-size mismatch.
pub fn place_fleet<R: Rng + ?Sized>(fleet: &mut Fleet, rng: &mut R) -> Result<Grid, PlacementError> {
    let mut board = Grid::new();

    for index in 0..fleet.len() {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let length = fleet.ships()[index].length();

        // Scratch copy carrying forward everything placed so far.
        let mut scratch = board.clone();
        block_invalid_starts(&mut scratch, orientation, length);

        let candidates = scratch.cells_in(TileState::Empty);
        if candidates.is_empty() {
            return Err(PlacementError::NoLegalCell {
                class: fleet.ships()[index].class().name(),
            });
        }
        let head = candidates[rng.random_range(0..candidates.len())];
        debug!(
            "placing {} {:?} with head at {}",
            fleet.ships()[index].class().name(),
            orientation,
            head
        );

        let cells = write_ship(&mut board, head, orientation, length);
        fleet.ships_mut()[index].assign(orientation, cells);
    }

    Ok(board)
}

/// Block every cell of `scratch` that cannot start a ship of `length` along
/// `orientation`. Blocked cells are marked `Miss`; ship cells are left
/// untouched so they still propagate their own exclusion.
///
/// The ship sweep must run before the margin pass: a sweep stops at the
/// first non-empty cell, and a margin mark sitting just past a placed ship
/// would suppress the sweep and leave overlapping start cells legal.
fn block_invalid_starts(scratch: &mut Grid, orientation: Orientation, length: usize) {
    let margin = length - 1;

    // A start cell ahead of a placed ship would walk its body back into that
    // ship. From each ship cell, block up to `length - 1` empty cells in the
    // increasing direction, stopping at the edge or the first non-empty cell.
    for c in Grid::coords() {
        if scratch[c] != TileState::Ship {
            continue;
        }
        let Some(next) = step(c, orientation) else {
            continue;
        };
        if scratch[next] != TileState::Empty {
            // A ship cell there runs its own sweep; a cell blocked by an
            // earlier sweep needs nothing.
            continue;
        }
        let mut cur = next;
        for _ in 0..length.saturating_sub(1) {
            if scratch[cur] != TileState::Empty {
                break;
            }
            scratch[cur] = TileState::Miss;
            match step(cur, orientation) {
                Some(n) => cur = n,
                None => break,
            }
        }
    }

    // Cells closer to the low boundary than `length - 1` on the active axis
    // cannot head a ship whose body extends toward zero.
    for c in Grid::coords() {
        let in_margin = match orientation {
            Orientation::Horizontal => c.x < margin,
            Orientation::Vertical => c.y < margin,
        };
        if in_margin && scratch[c] == TileState::Empty {
            scratch[c] = TileState::Miss;
        }
    }
}

/// Write a ship into `board` from `head` toward decreasing coordinates on
/// the active axis, returning the occupied cells head first.
fn write_ship(board: &mut Grid, head: Coord, orientation: Orientation, length: usize) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(length);
    let mut cur = head;
    for i in 0..length {
        board[cur] = TileState::Ship;
        cells.push(cur);
        if i + 1 < length {
            cur = match orientation {
                Orientation::Horizontal => Coord::new(cur.x - 1, cur.y),
                Orientation::Vertical => Coord::new(cur.x, cur.y - 1),
            };
        }
    }
    cells
}

/// One step in the increasing direction of `orientation`, if still on the
/// board.
fn step(c: Coord, orientation: Orientation) -> Option<Coord> {
    let next = match orientation {
        Orientation::Horizontal => Coord::new(c.x + 1, c.y),
        Orientation::Vertical => Coord::new(c.x, c.y + 1),
    };
    next.in_bounds().then_some(next)
}
