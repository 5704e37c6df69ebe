//! Ship classes, placed ships, and the per-side fleet registry.

use core::fmt;

use crate::common::BoardError;
use crate::config::SHIPS;
use crate::grid::Coord;

/// Parity sentinel used when no ship is left alive; the game should already
/// be over before this matters.
pub const NO_SHIPS_PARITY: usize = 999;

/// Axis a ship extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single ship: its class, health, and once placed, the ordered cells it
/// occupies and the axis it extends along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Option<Orientation>,
    cells: Vec<Coord>,
    health: usize,
}

impl Ship {
    /// A new, unplaced ship at full health.
    pub fn new(class: ShipClass) -> Self {
        Ship {
            class,
            orientation: None,
            cells: Vec::new(),
            health: class.length(),
        }
    }

    /// Assign the ship its occupied cells. The cell list must be in-bounds
    /// and exactly as long as the class demands.
    pub fn place(&mut self, orientation: Orientation, cells: Vec<Coord>) -> Result<(), BoardError> {
        if cells.len() != self.class.length() {
            return Err(BoardError::ShipLengthMismatch {
                expected: self.class.length(),
                actual: cells.len(),
            });
        }
        for &c in &cells {
            if !c.in_bounds() {
                return Err(BoardError::OutOfBounds { x: c.x, y: c.y });
            }
        }
        self.orientation = Some(orientation);
        self.cells = cells;
        self.health = self.class.length();
        Ok(())
    }

    /// Placement-internal assignment; cells are built by the placer and
    /// already satisfy the class length and bounds.
    pub(crate) fn assign(&mut self, orientation: Orientation, cells: Vec<Coord>) {
        debug_assert_eq!(cells.len(), self.class.length());
        self.orientation = Some(orientation);
        self.cells = cells;
        self.health = self.class.length();
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Ordered occupied cells, head first. Empty until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        self.cells.len() == self.class.length()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn health(&self) -> usize {
        self.health
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Remove one segment of health. Returns `true` when this hit destroys
    /// the ship.
    pub fn take_damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (length {}, health {})",
            self.class.name(),
            self.class.length(),
            self.health
        )
    }
}

/// The fixed set of ships belonging to one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// The standard five-ship fleet from the configuration table.
    pub fn standard() -> Self {
        Fleet::new(&SHIPS)
    }

    /// A fleet built from an arbitrary set of classes, processed in order
    /// during placement.
    pub fn new(classes: &[ShipClass]) -> Self {
        Fleet {
            ships: classes.iter().copied().map(Ship::new).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn get(&self, index: usize) -> Result<&Ship, BoardError> {
        self.ships
            .get(index)
            .ok_or(BoardError::InvalidShipIndex { index })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Ship, BoardError> {
        self.ships
            .get_mut(index)
            .ok_or(BoardError::InvalidShipIndex { index })
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| !s.is_alive())
    }

    /// Index of the ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(coord))
    }

    /// Lengths of the ships still alive, in fleet order.
    pub fn alive_lengths(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| s.is_alive())
            .map(|s| s.length())
            .collect()
    }

    /// Length of the shortest living ship, or [`NO_SHIPS_PARITY`] when the
    /// whole fleet is sunk.
    pub fn shortest_alive_length(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| s.is_alive())
            .map(|s| s.length())
            .min()
            .unwrap_or(NO_SHIPS_PARITY)
    }
}
