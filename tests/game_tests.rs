use flotilla::{Coordinate, Direction, Game, Grid, Outcome, PlacedShip, ShipKind, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn patrol_game() -> Game {
    // single Patrol at A1-A2
    let grid = Grid::new(10, 10);
    let patrol = PlacedShip::new(
        ShipKind::new("Patrol", 2),
        Coordinate::new(0, 0),
        Direction::Horizontal,
    );
    Game::with_fleet(grid, vec![patrol])
}

#[test]
fn test_hit_then_sink_destroys_fleet() {
    let mut game = patrol_game();
    assert_eq!(
        game.resolve_guess("A1".parse().unwrap()),
        Outcome::Hit
    );
    assert!(!game.is_fleet_destroyed());
    assert_eq!(
        game.resolve_guess("A2".parse().unwrap()),
        Outcome::Sink("Patrol")
    );
    assert!(game.is_fleet_destroyed());
}

#[test]
fn test_out_of_bounds_does_not_mutate() {
    let mut game = patrol_game();
    // row 25 on a 10x10 grid
    assert_eq!(
        game.resolve_guess("Z1".parse().unwrap()),
        Outcome::OutOfBounds
    );
    assert!(game.played().is_empty());
    // the same coordinate is still rejected, never AlreadyPlayed
    assert_eq!(
        game.resolve_guess("Z1".parse().unwrap()),
        Outcome::OutOfBounds
    );
}

#[test]
fn test_duplicate_guess_rejected_without_state_change() {
    let mut game = patrol_game();
    let miss: Coordinate = "E5".parse().unwrap();
    assert_eq!(game.resolve_guess(miss), Outcome::Miss);
    assert_eq!(game.resolve_guess(miss), Outcome::AlreadyPlayed);
    assert_eq!(game.played().len(), 1);

    let hit: Coordinate = "A1".parse().unwrap();
    assert_eq!(game.resolve_guess(hit), Outcome::Hit);
    let hits_before: Vec<bool> = game.fleet().iter().map(|s| s.is_sunk()).collect();
    assert_eq!(game.resolve_guess(hit), Outcome::AlreadyPlayed);
    let hits_after: Vec<bool> = game.fleet().iter().map(|s| s.is_sunk()).collect();
    assert_eq!(hits_before, hits_after);
    assert!(!game.fleet()[0].is_sunk());
}

#[test]
fn test_sink_exactly_on_final_cell() {
    let grid = Grid::new(10, 10);
    let sub = PlacedShip::new(
        ShipKind::new("Submarine", 3),
        Coordinate::new(4, 2),
        Direction::Vertical,
    );
    let mut game = Game::with_fleet(grid, vec![sub]);
    assert_eq!(game.resolve_guess(Coordinate::new(4, 2)), Outcome::Hit);
    assert_eq!(game.resolve_guess(Coordinate::new(5, 2)), Outcome::Hit);
    assert!(!game.is_fleet_destroyed());
    assert_eq!(
        game.resolve_guess(Coordinate::new(6, 2)),
        Outcome::Sink("Submarine")
    );
    assert!(game.is_fleet_destroyed());
}

#[test]
fn test_win_requires_every_ship() {
    let grid = Grid::new(10, 10);
    let first = PlacedShip::new(
        ShipKind::new("First", 2),
        Coordinate::new(0, 0),
        Direction::Horizontal,
    );
    let second = PlacedShip::new(
        ShipKind::new("Second", 2),
        Coordinate::new(2, 0),
        Direction::Horizontal,
    );
    let mut game = Game::with_fleet(grid, vec![first, second]);

    game.resolve_guess(Coordinate::new(0, 0));
    assert_eq!(
        game.resolve_guess(Coordinate::new(0, 1)),
        Outcome::Sink("First")
    );
    assert!(!game.is_fleet_destroyed());

    game.resolve_guess(Coordinate::new(2, 0));
    assert_eq!(
        game.resolve_guess(Coordinate::new(2, 1)),
        Outcome::Sink("Second")
    );
    assert!(game.is_fleet_destroyed());

    // destruction is permanent
    assert_eq!(game.resolve_guess(Coordinate::new(5, 5)), Outcome::Miss);
    assert!(game.is_fleet_destroyed());
}

#[test]
fn test_full_random_game_ends_in_win() {
    let grid = Grid::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::new(&mut rng, grid, &FLEET).unwrap();

    let mut sinks = 0;
    for row in 0..10 {
        for col in 0..10 {
            match game.resolve_guess(Coordinate::new(row, col)) {
                Outcome::Sink(_) => sinks += 1,
                Outcome::AlreadyPlayed | Outcome::OutOfBounds => {
                    panic!("fresh in-bounds guess rejected")
                }
                _ => {}
            }
        }
    }
    assert_eq!(sinks, FLEET.len());
    assert!(game.is_fleet_destroyed());
}
