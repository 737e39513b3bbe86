use crate::ship::ShipKind;

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;
pub const NUM_SHIPS: usize = 4;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::new("Patrol", 2),
    ShipKind::new("Submarine", 3),
    ShipKind::new("Battleship", 4),
    ShipKind::new("Carrier", 5),
];

/// Exact input line that ends the game as a surrender instead of a guess.
pub const SURRENDER_COMMAND: &str = "I LOSE";
