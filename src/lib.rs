//! Single-player fleet-guessing game engine.
//!
//! The player fires at a hidden, randomly placed fleet on a grid and wins by
//! sinking every ship. The engine is fully self-contained: I/O is injected
//! into [`Session`], so games run against real console streams or in-memory
//! buffers alike.

mod config;
mod coord;
mod game;
mod grid;
mod logging;
mod placement;
mod render;
mod session;
mod ship;

pub use config::*;
pub use coord::{Coordinate, CoordinateParseError};
pub use game::{Game, Outcome};
pub use grid::Grid;
pub use logging::init_logging;
pub use placement::{place_fleet, random_placement, PlacementError, MAX_PLACEMENT_ATTEMPTS};
pub use render::render_board;
pub use session::{Session, SessionEnd};
pub use ship::{Direction, PlacedShip, ShipKind};
