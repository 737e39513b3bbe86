//! Core game engine: fleet state, played coordinates, guess resolution.

use std::collections::HashSet;

use rand::Rng;

use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::placement::{place_fleet, PlacementError};
use crate::ship::{PlacedShip, ShipKind};

/// Result of resolving one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess landed on open water.
    Miss,
    /// Guess hit a ship that still has intact cells.
    Hit,
    /// Guess sank a ship, carrying its name.
    Sink(&'static str),
    /// Coordinate was already guessed this game; nothing changed.
    AlreadyPlayed,
    /// Coordinate lies outside the grid; nothing changed.
    OutOfBounds,
}

/// One self-contained game: a hidden fleet on a grid and the set of
/// coordinates guessed so far. Multiple games can coexist; there is no
/// shared state between instances.
pub struct Game {
    grid: Grid,
    fleet: Vec<PlacedShip>,
    played: HashSet<Coordinate>,
}

impl Game {
    /// Start a new game by randomly placing one ship per kind on `grid`.
    /// Fails only on impossible configurations (ship longer than the grid,
    /// or no room within the placement retry cap).
    pub fn new<R: Rng>(rng: &mut R, grid: Grid, kinds: &[ShipKind]) -> Result<Self, PlacementError> {
        let fleet = place_fleet(rng, grid, kinds)?;
        Ok(Self::with_fleet(grid, fleet))
    }

    /// Build a game from an already-placed fleet. The caller is responsible
    /// for the fleet fitting the grid without overlaps.
    pub fn with_fleet(grid: Grid, fleet: Vec<PlacedShip>) -> Self {
        Self {
            grid,
            fleet,
            played: HashSet::new(),
        }
    }

    /// Grid the game is played on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The fleet, in placement order.
    pub fn fleet(&self) -> &[PlacedShip] {
        &self.fleet
    }

    /// Coordinates guessed so far.
    pub fn played(&self) -> &HashSet<Coordinate> {
        &self.played
    }

    /// Resolve one guess.
    ///
    /// Out-of-bounds and duplicate guesses are rejected without mutating any
    /// state. A fresh in-bounds guess is recorded, then matched against the
    /// fleet in placement order; the first ship containing the cell takes
    /// the hit.
    pub fn resolve_guess(&mut self, coord: Coordinate) -> Outcome {
        if !self.grid.contains(coord) {
            return Outcome::OutOfBounds;
        }
        if self.played.contains(&coord) {
            return Outcome::AlreadyPlayed;
        }
        self.played.insert(coord);
        match self.fleet.iter_mut().find(|ship| ship.contains(coord)) {
            None => {
                log::debug!("guess {} missed", coord);
                Outcome::Miss
            }
            Some(ship) => {
                ship.register_hit(coord);
                if ship.is_sunk() {
                    log::debug!("{} sunk at {}", ship.kind().name(), coord);
                    Outcome::Sink(ship.kind().name())
                } else {
                    log::debug!("guess {} hit {}", coord, ship.kind().name());
                    Outcome::Hit
                }
            }
        }
    }

    /// Returns `true` once every ship in the fleet is sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.fleet.iter().all(|ship| ship.is_sunk())
    }
}
