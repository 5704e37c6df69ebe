//! Tile grids. Three grid roles exist at runtime and must stay distinct
//! values: a side's own fleet layout (ground truth), the scratch copy used
//! during placement, and a side's knowledge of the opponent board.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// A board coordinate: column `x`, row `y`, both in `[0, BOARD_SIZE)` when
/// the coordinate is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// Whether the coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The axis-adjacent neighbors that stay on the board, in the order
    /// right, left, down, up.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let (x, y) = (self.x as isize, self.y as isize);
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|&(nx, ny)| {
                nx >= 0 && ny >= 0 && (nx as usize) < BOARD_SIZE && (ny as usize) < BOARD_SIZE
            })
            .map(|(nx, ny)| Coord::new(nx as usize, ny as usize))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Knowledge recorded for one tile.
///
/// Transitions are monotone per cell: `Empty -> Ship` only during placement,
/// `Empty -> Miss` and `Ship -> Hit` during play, and `Hit -> Sunk` once the
/// owning ship loses its last segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Unknown on a knowledge grid, open water on a fleet grid.
    Empty,
    /// Occupied by an unhit ship segment. Never appears on a knowledge grid.
    Ship,
    Miss,
    Hit,
    Sunk,
}

/// A fixed `BOARD_SIZE` x `BOARD_SIZE` grid of tile states. Every coordinate
/// on the board always has a defined state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: [[TileState; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create a grid with every tile `Empty`.
    pub fn new() -> Self {
        Grid {
            tiles: [[TileState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, coord: Coord) -> Result<TileState, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(self.tiles[coord.y][coord.x])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, coord: Coord, state: TileState) -> Result<(), BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        self.tiles[coord.y][coord.x] = state;
        Ok(())
    }

    /// Every coordinate on the board in scan order: row by row, `y` outer,
    /// `x` inner.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }

    /// Coordinates currently holding `state`, in scan order.
    pub fn cells_in(&self, state: TileState) -> Vec<Coord> {
        Self::coords().filter(|&c| self[c] == state).collect()
    }

    /// Number of tiles currently holding `state`.
    pub fn count(&self, state: TileState) -> usize {
        Self::coords().filter(|&c| self[c] == state).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

/// Direct read access. Panics when `coord` is off the board; use [`Grid::get`]
/// for untrusted coordinates.
impl Index<Coord> for Grid {
    type Output = TileState;

    fn index(&self, coord: Coord) -> &TileState {
        &self.tiles[coord.y][coord.x]
    }
}

/// Direct write access. Panics when `coord` is off the board; use
/// [`Grid::set`] for untrusted coordinates.
impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut TileState {
        &mut self.tiles[coord.y][coord.x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let ch = match self.tiles[y][x] {
                    TileState::Empty => '.',
                    TileState::Ship => 'S',
                    TileState::Miss => 'o',
                    TileState::Hit => 'X',
                    TileState::Sunk => 'Q',
                };
                write!(f, "{}", ch)?;
                if x + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
