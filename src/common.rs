//! Common types shared across the core: shot results and error enums.

use core::fmt;

/// Outcome of resolving one shot against a fleet board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed every ship.
    Miss,
    /// Shot hit an undestroyed ship segment.
    Hit,
    /// Shot destroyed the last segment of a ship, carrying its fleet index.
    Sunk(usize),
}

/// Errors returned by grid and board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Shot aimed at a tile whose outcome is already known.
    AlreadyResolved { x: usize, y: usize },
    /// Ship cell list does not match the declared class length.
    ShipLengthMismatch { expected: usize, actual: usize },
    /// Specified ship index is out of range for the fleet.
    InvalidShipIndex { index: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is out of bounds", x, y)
            }
            BoardError::AlreadyResolved { x, y } => {
                write!(f, "tile ({}, {}) was already resolved by an earlier shot", x, y)
            }
            BoardError::ShipLengthMismatch { expected, actual } => {
                write!(f, "ship occupies {} cells but its class requires {}", actual, expected)
            }
            BoardError::InvalidShipIndex { index } => {
                write!(f, "ship index {} is out of range", index)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors surfaced by fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No legal start cell remains for a ship; the fleet cannot fit.
    NoLegalCell { class: &'static str },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoLegalCell { class } => {
                write!(f, "no legal start cell remains for the {}", class)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors surfaced by attack selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// The candidate set is empty; the game should already be over.
    NoLegalTarget,
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::NoLegalTarget => write!(f, "no legal target tile remains"),
        }
    }
}

impl std::error::Error for AttackError {}

/// Errors produced while driving a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Placement(PlacementError),
    Attack(AttackError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<AttackError> for GameError {
    fn from(err: AttackError) -> Self {
        GameError::Attack(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "board error: {}", e),
            GameError::Placement(e) => write!(f, "placement error: {}", e),
            GameError::Attack(e) => write!(f, "attack error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
