use broadside::{AttackResult, Board, BoardError, Direction, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_single_ship_is_won_immediately() {
    let mut board = Board::new("defender", 2);
    board.place_ship(&[0], 1).unwrap();
    assert_eq!(board.attack(0).unwrap(), AttackResult::Won);
    assert_eq!(board.ships_remaining(), 0);
    assert!(board.all_sunk());
}

#[test]
fn test_miss_then_won() {
    let mut board = Board::new("defender", 2);
    board.place_ship(&[0], 1).unwrap();
    assert_eq!(board.attack(1).unwrap(), AttackResult::Miss);
    assert_eq!(board.ships_remaining(), 1);
    assert_eq!(board.attack(0).unwrap(), AttackResult::Won);
}

#[test]
fn test_hit_hit_sunk_with_ships_left() {
    let mut board = Board::new("defender", 10);
    board.place_ship(&[0, 1, 2], 3).unwrap();
    board.place_ship(&[50, 60], 2).unwrap();

    assert_eq!(board.attack(0).unwrap(), AttackResult::Hit);
    assert_eq!(board.attack(1).unwrap(), AttackResult::Hit);
    assert_eq!(board.attack(2).unwrap(), AttackResult::Sunk);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_hit_hit_won_when_last_ship() {
    let mut board = Board::new("defender", 10);
    board.place_ship(&[0, 1, 2], 3).unwrap();

    assert_eq!(board.attack(0).unwrap(), AttackResult::Hit);
    assert_eq!(board.attack(1).unwrap(), AttackResult::Hit);
    assert_eq!(board.attack(2).unwrap(), AttackResult::Won);
}

#[test]
fn test_repeated_attack_fails_and_leaves_board_unchanged() {
    let mut board = Board::new("defender", 10);
    board.place_ship(&[5, 6], 2).unwrap();
    assert_eq!(board.attack(5).unwrap(), AttackResult::Hit);

    let before = board.clone();
    assert_eq!(
        board.attack(5).unwrap_err(),
        BoardError::AlreadyAttacked { index: 5 }
    );
    assert_eq!(board, before);
    assert_eq!(board.ships()[0].hit_points(), 1);
}

#[test]
fn test_repeated_miss_fails() {
    let mut board = Board::new("defender", 10);
    board.place_ship(&[0], 1).unwrap();
    assert_eq!(board.attack(5).unwrap(), AttackResult::Miss);
    assert!(matches!(
        board.attack(5),
        Err(BoardError::AlreadyAttacked { index: 5 })
    ));
}

#[test]
fn test_attack_out_of_range() {
    let mut board = Board::new("defender", 3);
    assert_eq!(
        board.attack(9).unwrap_err(),
        BoardError::IndexOutOfRange { index: 9, len: 9 }
    );
}

#[test]
fn test_place_ship_rejects_overlap_without_changes() {
    let mut board = Board::new("defender", 10);
    board.place_ship(&[0, 1, 2], 3).unwrap();

    let before = board.clone();
    assert_eq!(
        board.place_ship(&[3, 2], 2).unwrap_err(),
        BoardError::PlacementConflict { index: 2 }
    );
    assert_eq!(board, before);
    assert!(!board.position(3).unwrap().has_ship());
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_place_ship_rejects_duplicate_indices() {
    let mut board = Board::new("defender", 10);
    assert_eq!(
        board.place_ship(&[4, 4], 2).unwrap_err(),
        BoardError::PlacementConflict { index: 4 }
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_place_ship_rejects_bad_sizes_and_ranges() {
    let mut board = Board::new("defender", 3);
    assert_eq!(
        board.place_ship(&[0, 1], 3).unwrap_err(),
        BoardError::ShipSizeMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(
        board.place_ship(&[], 0).unwrap_err(),
        BoardError::ShipSizeMismatch {
            expected: 0,
            actual: 0
        }
    );
    assert_eq!(
        board.place_ship(&[8, 9], 2).unwrap_err(),
        BoardError::IndexOutOfRange { index: 9, len: 9 }
    );
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_positions_share_one_ship() {
    let mut board = Board::new("defender", 10);
    let id = board.place_ship(&[10, 20, 30], 3).unwrap();
    for index in [10, 20, 30] {
        assert_eq!(board.position(index).unwrap().ship(), Some(id));
    }
    board.attack(20).unwrap();
    assert_eq!(board.ship(id).unwrap().hit_points(), 2);
}

#[test]
fn test_ship_indices_all_directions() {
    let board = Board::new("defender", 10);
    // origin (4, 4) = index 44
    assert_eq!(
        board.ship_indices(4, 4, Direction::Up, 3).unwrap(),
        vec![44, 34, 24]
    );
    assert_eq!(
        board.ship_indices(4, 4, Direction::Down, 3).unwrap(),
        vec![44, 54, 64]
    );
    assert_eq!(
        board.ship_indices(4, 4, Direction::Left, 3).unwrap(),
        vec![44, 43, 42]
    );
    assert_eq!(
        board.ship_indices(4, 4, Direction::Right, 3).unwrap(),
        vec![44, 45, 46]
    );
}

#[test]
fn test_ship_indices_out_of_bounds_and_conflict() {
    let mut board = Board::new("defender", 10);
    assert_eq!(
        board.ship_indices(1, 0, Direction::Up, 2).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.ship_indices(8, 0, Direction::Right, 3).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.ship_indices(0, 9, Direction::Down, 2).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    // exactly touching the edge is fine
    assert!(board.ship_indices(9, 9, Direction::Left, 10).is_ok());

    board.place_ship(&[45], 1).unwrap();
    assert_eq!(
        board.ship_indices(4, 4, Direction::Right, 3).unwrap_err(),
        BoardError::PlacementConflict { index: 45 }
    );
}

#[test]
fn test_random_placement_full_fleet_no_overlap() {
    let mut board = Board::new("defender", 10);
    let mut rng = SmallRng::seed_from_u64(42);
    for &size in FLEET.iter() {
        let indices = board.random_placement(&mut rng, size).unwrap();
        board.place_ship(&indices, size).unwrap();
    }
    let occupied = board.positions().iter().filter(|p| p.has_ship()).count();
    assert_eq!(occupied, FLEET.iter().sum::<usize>());
    assert_eq!(board.ships_remaining(), FLEET.len());
}

#[test]
fn test_random_placement_gives_up_on_full_board() {
    let mut board = Board::new("defender", 2);
    board.place_ship(&[0, 1], 2).unwrap();
    board.place_ship(&[2, 3], 2).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        board.random_placement(&mut rng, 1).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
}

#[test]
fn test_coordinates_round_trip_through_index() {
    let board = Board::new("defender", 10);
    assert_eq!(board.index_of(3, 7), Some(73));
    assert_eq!(board.coords(73), Some((3, 7)));
    assert_eq!(board.index_of(10, 0), None);
    assert_eq!(board.coords(100), None);
}

#[test]
fn test_hidden_render_clears_recent_flag() {
    let mut board = Board::new("defender", 3);
    board.place_ship(&[0], 1).unwrap();
    board.place_ship(&[4, 5], 2).unwrap();
    board.attack(0).unwrap();
    board.attack(8).unwrap();

    let first = board.render(false);
    assert!(first[0].attacked && first[0].hit && first[0].recent);
    assert!(!first[0].ship, "ships stay hidden");
    assert!(first[8].attacked && !first[8].hit && first[8].recent);
    assert!(!first[4].ship && !first[4].attacked);

    let second = board.render(false);
    assert!(second[0].attacked && !second[0].recent);
    assert!(!second[8].recent);
    assert!(board.position(0).unwrap().is_attacked());
}

#[test]
fn test_revealed_render_keeps_recent_flag() {
    let mut board = Board::new("owner", 3);
    board.place_ship(&[0], 1).unwrap();
    board.place_ship(&[4, 5], 2).unwrap();
    board.attack(4).unwrap();

    let first = board.render(true);
    assert!(first[4].ship && first[4].hit && first[4].recent);
    assert!(first[0].ship && !first[0].attacked);

    let second = board.render(true);
    assert!(second[4].recent, "owner's view keeps the highlight");

    board.render(false);
    assert!(!board.position(4).unwrap().is_recent());
}

#[test]
fn test_cell_views_do_not_clear_recent_flag() {
    let mut board = Board::new("owner", 2);
    board.place_ship(&[0], 1).unwrap();
    board.attack(3).unwrap();
    assert!(board.cell_views(false)[3].recent);
    assert!(board.cell_views(false)[3].recent);
}
