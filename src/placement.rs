//! Randomized non-overlapping fleet placement.

use core::fmt;

use rand::Rng;

use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::ship::{Direction, PlacedShip, ShipKind};

/// Cap on rejection-sampling retries per ship before placement is declared
/// impossible.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Errors raised while placing the fleet. Both are configuration errors and
/// fatal at startup; placement never fails mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship is longer than the grid dimension it would run along.
    ShipTooLong {
        ship: &'static str,
        length: usize,
        rows: usize,
        cols: usize,
    },
    /// No non-overlapping position found within the retry cap.
    TooCrowded { ship: &'static str },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ShipTooLong {
                ship,
                length,
                rows,
                cols,
            } => write!(
                f,
                "{} (length {}) does not fit on a {}x{} grid",
                ship, length, rows, cols
            ),
            PlacementError::TooCrowded { ship } => write!(
                f,
                "no room left to place {} after {} attempts",
                ship, MAX_PLACEMENT_ATTEMPTS
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Find a random position for `kind` that fits the grid and does not
/// intersect any ship in `placed`.
///
/// Direction is sampled uniformly, then a head coordinate uniformly from
/// `[0, rows) x [0, cols - len)` for Horizontal and `[0, rows - len) x
/// [0, cols)` for Vertical, so a ship never runs into the last column or
/// row of its axis. Collisions with existing ships are rejection-sampled
/// up to [`MAX_PLACEMENT_ATTEMPTS`].
pub fn random_placement<R: Rng>(
    rng: &mut R,
    grid: Grid,
    kind: ShipKind,
    placed: &[PlacedShip],
) -> Result<PlacedShip, PlacementError> {
    let len = kind.length();
    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = if rng.random() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        // the head range along the ship's axis is half-open; an empty range
        // means no valid head exists for this direction
        let (row_end, col_end) = match direction {
            Direction::Horizontal if len < grid.cols() => (grid.rows(), grid.cols() - len),
            Direction::Vertical if len < grid.rows() => (grid.rows() - len, grid.cols()),
            _ => {
                return Err(PlacementError::ShipTooLong {
                    ship: kind.name(),
                    length: len,
                    rows: grid.rows(),
                    cols: grid.cols(),
                })
            }
        };
        let head = Coordinate::new(
            rng.random_range(0..row_end),
            rng.random_range(0..col_end),
        );
        let ship = PlacedShip::new(kind, head, direction);
        if placed.iter().all(|other| !ship.overlaps(other)) {
            log::debug!(
                "placed {} at {} ({:?}) after {} attempt(s)",
                kind.name(),
                head,
                direction,
                attempt + 1
            );
            return Ok(ship);
        }
    }
    Err(PlacementError::TooCrowded { ship: kind.name() })
}

/// Place one ship per kind, in fleet order, each placement avoiding all
/// ships placed before it.
pub fn place_fleet<R: Rng>(
    rng: &mut R,
    grid: Grid,
    kinds: &[ShipKind],
) -> Result<Vec<PlacedShip>, PlacementError> {
    let mut fleet = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let ship = random_placement(rng, grid, kind, &fleet)?;
        fleet.push(ship);
    }
    Ok(fleet)
}
