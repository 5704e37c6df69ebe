//! Difficulty-tiered attack strategies.
//!
//! Easy fires uniformly at unknown tiles. Medium runs a hunt/target state
//! machine with a parity-restricted search and a LIFO follow-up stack. Hard
//! recomputes a probability-density grid every turn and fires at its
//! arg-max.

use log::debug;
use rand::Rng;

use crate::common::{AttackError, BoardError};
use crate::config::SHIPS;
use crate::grid::{Coord, Grid, TileState};
use crate::probability::calc_weights;
use crate::ship::{Ship, NO_SHIPS_PARITY};

/// Selectable difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Attack phase: searching blindly, or exploiting a known hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackState {
    Hunt,
    Target,
}

/// LIFO stack of coordinates awaiting investigation after a hit.
///
/// Never holds a duplicate, an off-board coordinate, or a coordinate whose
/// knowledge entry is already resolved.
#[derive(Debug, Clone, Default)]
pub struct TargetStack {
    stack: Vec<Coord>,
}

impl TargetStack {
    pub fn new() -> Self {
        TargetStack { stack: Vec::new() }
    }

    /// Push `coord` if it is on the board, unknown in `knowledge`, and not
    /// already queued. Anything else is silently filtered.
    pub fn try_push(&mut self, coord: Coord, knowledge: &Grid) {
        let unknown = knowledge
            .get(coord)
            .map_or(false, |t| t == TileState::Empty);
        if unknown && !self.stack.contains(&coord) {
            self.stack.push(coord);
        }
    }

    /// Most recently pushed coordinate first.
    pub fn pop(&mut self) -> Option<Coord> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.stack
    }
}

/// One side's attack policy: owns the knowledge grid of the opponent board
/// and every piece of per-difficulty state.
///
/// The knowledge grid only ever records what the strategist observed from
/// its own shots (`Miss`/`Hit`/`Sunk`); it never contains `Ship`.
pub struct Strategist {
    difficulty: Difficulty,
    knowledge: Grid,
    state: AttackState,
    stack: TargetStack,
    parity: usize,
    remaining_lengths: Vec<usize>,
}

impl Strategist {
    /// A strategist for the standard fleet at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_fleet_lengths(difficulty, SHIPS.iter().map(|c| c.length()).collect())
    }

    /// A strategist expecting an opponent fleet with the given lengths.
    pub fn with_fleet_lengths(difficulty: Difficulty, lengths: Vec<usize>) -> Self {
        let parity = lengths.iter().copied().min().unwrap_or(NO_SHIPS_PARITY);
        Strategist {
            difficulty,
            knowledge: Grid::new(),
            state: AttackState::Hunt,
            stack: TargetStack::new(),
            parity,
            remaining_lengths: lengths,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> AttackState {
        self.state
    }

    pub fn parity(&self) -> usize {
        self.parity
    }

    pub fn knowledge(&self) -> &Grid {
        &self.knowledge
    }

    pub fn target_stack(&self) -> &TargetStack {
        &self.stack
    }

    /// Lengths of the opponent ships believed still alive, in fleet order.
    pub fn remaining_lengths(&self) -> &[usize] {
        &self.remaining_lengths
    }

    /// Pick the next coordinate to attack.
    ///
    /// Fails with [`AttackError::NoLegalTarget`] only when the candidate set
    /// is empty, which the caller should have ruled out by detecting game
    /// over first.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, AttackError> {
        match self.difficulty {
            Difficulty::Easy => self.random_target(rng),
            Difficulty::Medium => match self.state {
                AttackState::Hunt => self.hunt_target(rng),
                AttackState::Target => {
                    if let Some(coord) = self.stack.pop() {
                        debug!("targeting {}", coord);
                        return Ok(coord);
                    }
                    // Drained without a result callback; resume hunting.
                    self.state = AttackState::Hunt;
                    self.hunt_target(rng)
                }
            },
            Difficulty::Hard => {
                let (_, best) = calc_weights(&self.knowledge, self.state, &self.remaining_lengths);
                let best = match (best, self.state) {
                    (None, AttackState::Hunt) => {
                        // Stray hits left behind by an overlapping chase can
                        // starve the hunt pass even though live anchors
                        // remain; re-weight around them before giving up.
                        calc_weights(&self.knowledge, AttackState::Target, &self.remaining_lengths)
                            .1
                    }
                    (found, _) => found,
                };
                let coord = best.ok_or(AttackError::NoLegalTarget)?;
                debug!("highest weight at {}", coord);
                Ok(coord)
            }
        }
    }

    /// Record the observed outcome of the last shot and advance the
    /// per-difficulty state machine.
    pub fn record_result(&mut self, coord: Coord, outcome: TileState) -> Result<(), BoardError> {
        // Only observable shot outcomes belong on a knowledge grid.
        debug_assert!(matches!(
            outcome,
            TileState::Miss | TileState::Hit | TileState::Sunk
        ));
        // A sunk tile is final; a late Hit report must not downgrade it.
        if self.knowledge.get(coord)? != TileState::Sunk {
            self.knowledge[coord] = outcome;
        }

        match self.difficulty {
            Difficulty::Easy => {}
            Difficulty::Medium => self.advance_medium(coord, outcome),
            Difficulty::Hard => {
                if self.state == AttackState::Hunt
                    && matches!(outcome, TileState::Hit | TileState::Sunk)
                {
                    self.state = AttackState::Target;
                }
            }
        }
        Ok(())
    }

    /// React to the destruction of an opponent ship.
    ///
    /// Medium recomputes parity from the ships left alive. Hard rewrites the
    /// dead ship's hits to `Sunk` so future probability passes stop treating
    /// them as live anchors, and falls back to hunting unconditionally.
    pub fn on_ship_destroyed(&mut self, ship: &Ship) {
        if let Some(pos) = self
            .remaining_lengths
            .iter()
            .position(|&len| len == ship.length())
        {
            // Keep fleet order: the probability scan iterates these lengths
            // and its running arg-max is order-sensitive on ties.
            self.remaining_lengths.remove(pos);
        }

        match self.difficulty {
            Difficulty::Easy => {}
            Difficulty::Medium => {
                self.parity = self
                    .remaining_lengths
                    .iter()
                    .copied()
                    .min()
                    .unwrap_or(NO_SHIPS_PARITY);
                debug!("{} destroyed, parity now {}", ship.class().name(), self.parity);
            }
            Difficulty::Hard => {
                for &c in ship.cells() {
                    let _ = self.knowledge.set(c, TileState::Sunk);
                }
                self.state = AttackState::Hunt;
                debug!("{} destroyed, back to hunting", ship.class().name());
            }
        }
    }

    fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, AttackError> {
        let candidates = self.knowledge.cells_in(TileState::Empty);
        if candidates.is_empty() {
            return Err(AttackError::NoLegalTarget);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Parity-restricted hunt: only tiles that could hold the shortest
    /// living ship are worth probing.
    fn hunt_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, AttackError> {
        let candidates: Vec<Coord> = self
            .knowledge
            .cells_in(TileState::Empty)
            .into_iter()
            .filter(|c| (c.x + c.y) % self.parity == 0)
            .collect();
        if candidates.is_empty() {
            return Err(AttackError::NoLegalTarget);
        }
        let coord = candidates[rng.random_range(0..candidates.len())];
        debug!("hunting {}", coord);
        Ok(coord)
    }

    fn advance_medium(&mut self, coord: Coord, outcome: TileState) {
        match self.state {
            AttackState::Hunt => {
                if matches!(outcome, TileState::Hit | TileState::Sunk) {
                    self.stack = TargetStack::new();
                    self.push_neighbors(coord);
                    if !self.stack.is_empty() {
                        self.state = AttackState::Target;
                    }
                }
            }
            AttackState::Target => {
                if matches!(outcome, TileState::Hit | TileState::Sunk) {
                    self.push_neighbors(coord);
                }
                if self.stack.is_empty() {
                    self.state = AttackState::Hunt;
                }
            }
        }
    }

    fn push_neighbors(&mut self, coord: Coord) {
        for n in coord.neighbors() {
            self.stack.try_push(n, &self.knowledge);
        }
    }
}
