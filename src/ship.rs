//! Ship definitions and placed-ship hit tracking.

use std::collections::HashSet;

use crate::coord::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Kind of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKind {
    name: &'static str,
    length: usize,
}

impl ShipKind {
    /// Create a new ship kind.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship bound to a grid position, tracking which of its cells were hit.
///
/// The occupied-cell set is fixed at construction; only the hit set mutates
/// during play. A sunk ship is never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    kind: ShipKind,
    head: Coordinate,
    direction: Direction,
    hits: HashSet<Coordinate>,
}

impl PlacedShip {
    /// Place a ship of `kind` with its head (topmost/leftmost cell) at
    /// `head`, running in `direction`.
    pub fn new(kind: ShipKind, head: Coordinate, direction: Direction) -> Self {
        Self {
            kind,
            head,
            direction,
            hits: HashSet::new(),
        }
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Head cell of the ship.
    pub fn head(&self) -> Coordinate {
        self.head
    }

    /// Orientation of the ship.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate the cells this ship occupies, head first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let Coordinate { row, col } = self.head;
        let direction = self.direction;
        (0..self.kind.length()).map(move |i| match direction {
            Direction::Horizontal => Coordinate::new(row, col + i),
            Direction::Vertical => Coordinate::new(row + i, col),
        })
    }

    /// Returns `true` if `coord` is one of the ship's occupied cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Returns `true` if `coord` is the ship's head cell.
    pub fn is_head(&self, coord: Coordinate) -> bool {
        self.head == coord
    }

    /// Returns `true` if any occupied cell is shared with `other`.
    pub fn overlaps(&self, other: &PlacedShip) -> bool {
        self.cells().any(|c| other.contains(c))
    }

    /// Record a hit at `coord`. Returns `true` if the cell belongs to this
    /// ship; hits outside the ship are ignored.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// Returns `true` if `coord` has already been hit on this ship.
    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord)
    }

    /// Check if the ship is sunk (every occupied cell hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.kind.length()
    }
}
