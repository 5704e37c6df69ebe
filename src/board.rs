//! Ground truth for one side: the fleet layout grid plus incoming shot
//! resolution. This is the single source of truth a strategist's knowledge
//! grid is fed from; the strategist never reads it directly.

use rand::Rng;

use crate::common::{BoardError, PlacementError, ShotResult};
use crate::grid::{Coord, Grid, TileState};
use crate::placement::place_fleet;
use crate::ship::Fleet;

/// One side's fleet and the grid its ships occupy.
pub struct FleetBoard {
    grid: Grid,
    fleet: Fleet,
}

impl FleetBoard {
    /// Build a board by placing `fleet` at random.
    pub fn place<R: Rng + ?Sized>(mut fleet: Fleet, rng: &mut R) -> Result<Self, PlacementError> {
        let grid = place_fleet(&mut fleet, rng)?;
        Ok(FleetBoard { grid, fleet })
    }

    /// Build a board with the standard fleet placed at random.
    pub fn place_standard<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        Self::place(Fleet::standard(), rng)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Resolve an incoming shot and report the outcome.
    ///
    /// An empty tile becomes a miss, a ship tile becomes a hit, and the hit
    /// that removes a ship's last segment sinks it, rewriting all of its
    /// cells to `Sunk` and reporting the ship's fleet index. Shooting an
    /// already resolved tile is an error.
    pub fn try_attack(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        match self.grid.get(coord)? {
            TileState::Empty => {
                self.grid[coord] = TileState::Miss;
                Ok(ShotResult::Miss)
            }
            TileState::Ship => {
                self.grid[coord] = TileState::Hit;
                let index = self
                    .fleet
                    .ship_at(coord)
                    .ok_or(BoardError::InvalidShipIndex { index: usize::MAX })?;
                let destroyed = self.fleet.get_mut(index)?.take_damage();
                if destroyed {
                    let cells = self.fleet.get(index)?.cells().to_vec();
                    for &c in &cells {
                        self.grid[c] = TileState::Sunk;
                    }
                    Ok(ShotResult::Sunk(index))
                } else {
                    Ok(ShotResult::Hit)
                }
            }
            TileState::Miss | TileState::Hit | TileState::Sunk => Err(BoardError::AlreadyResolved {
                x: coord.x,
                y: coord.y,
            }),
        }
    }
}
