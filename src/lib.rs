//! Decision-making core for a turn-based 10x10 Battleship variant.
//!
//! The crate places a fleet without overlap and selects attack coordinates
//! against a hidden opponent board using three escalating strategies:
//! uniform random, parity hunt/target, and probability-density targeting.
//! Rendering, input handling, and scene flow belong to the surrounding game
//! shell and are not part of this crate.

mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod placement;
mod probability;
mod ship;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use placement::*;
pub use probability::*;
pub use ship::*;
pub use strategy::*;
