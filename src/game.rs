//! Synchronous two-sided turn loop for AI-vs-AI matches.
//!
//! The loop owns both fleet boards and both strategists and alternates
//! strictly: pick a coordinate, apply it to the defender's board, feed the
//! outcome back to the attacker, and deliver ship-destroyed notifications
//! before the next turn begins.

use log::{debug, info};
use rand::Rng;

use crate::board::FleetBoard;
use crate::common::{GameError, ShotResult};
use crate::grid::TileState;
use crate::strategy::{Difficulty, Strategist};

/// Current status of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One of the two seats in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Array slot for this seat: 0 for the first player, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A full AI-vs-AI match between two difficulty tiers.
pub struct Duel {
    boards: [FleetBoard; 2],
    strategists: [Strategist; 2],
    shots: [usize; 2],
}

impl Duel {
    /// Set up both fleets at random and both strategists.
    pub fn new<R: Rng + ?Sized>(
        first: Difficulty,
        second: Difficulty,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let boards = [
            FleetBoard::place_standard(rng)?,
            FleetBoard::place_standard(rng)?,
        ];
        debug!("side 0 fleet:\n{}", boards[0].grid());
        debug!("side 1 fleet:\n{}", boards[1].grid());
        Ok(Duel {
            boards,
            strategists: [Strategist::new(first), Strategist::new(second)],
            shots: [0; 2],
        })
    }

    /// Shots fired so far by each side.
    pub fn shots(&self) -> [usize; 2] {
        self.shots
    }

    pub fn board(&self, side: Side) -> &FleetBoard {
        &self.boards[side.index()]
    }

    pub fn strategist(&self, side: Side) -> &Strategist {
        &self.strategists[side.index()]
    }

    pub fn status(&self, side: Side) -> GameStatus {
        if self.boards[side.index()].all_sunk() {
            GameStatus::Lost
        } else if self.boards[side.opponent().index()].all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// One attack by `side` against the other board. Returns `true` when the
    /// defending fleet is wiped out by this shot.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        rng: &mut R,
    ) -> Result<bool, GameError> {
        let me = side.index();
        let other = side.opponent().index();
        let coord = self.strategists[me].select_target(rng)?;
        let shot = self.boards[other].try_attack(coord)?;
        self.shots[me] += 1;
        debug!("side {} fires at {}: {:?}", me, coord, shot);

        match shot {
            ShotResult::Miss => self.strategists[me].record_result(coord, TileState::Miss)?,
            ShotResult::Hit => self.strategists[me].record_result(coord, TileState::Hit)?,
            ShotResult::Sunk(index) => {
                // The sinking shot is observed as a hit; the destroyed
                // notification follows and rewrites knowledge where needed.
                self.strategists[me].record_result(coord, TileState::Hit)?;
                let ship = self.boards[other].fleet().get(index)?.clone();
                info!("side {} sank the {}", me, ship.class().name());
                self.strategists[me].on_ship_destroyed(&ship);
            }
        }
        Ok(self.boards[other].all_sunk())
    }

    /// Play until one fleet is destroyed and return the winning side.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Side, GameError> {
        loop {
            if self.play_turn(Side::First, rng)? {
                return Ok(Side::First);
            }
            if self.play_turn(Side::Second, rng)? {
                return Ok(Side::Second);
            }
        }
    }
}
