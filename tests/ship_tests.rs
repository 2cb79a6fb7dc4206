use broadside::{AttackResult, BoardError, Direction, Ship};

#[test]
fn test_new_ship_is_undamaged() {
    let ship = Ship::new(3);
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.hit_points(), 3);
    assert!(!ship.is_sunk());
}

#[test]
fn test_apply_hit_and_sunk() -> Result<(), BoardError> {
    let mut ship = Ship::new(2);
    assert_eq!(ship.apply_hit()?, AttackResult::Hit);
    assert_eq!(ship.hit_points(), 1);
    assert!(!ship.is_sunk());
    assert_eq!(ship.apply_hit()?, AttackResult::Sunk);
    assert_eq!(ship.hit_points(), 0);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_hit_on_sunk_ship_is_invalid() {
    let mut ship = Ship::new(1);
    assert_eq!(ship.apply_hit(), Ok(AttackResult::Sunk));
    assert_eq!(ship.apply_hit(), Err(BoardError::InvalidState));
    // failed hit does not underflow
    assert_eq!(ship.hit_points(), 0);
}

#[test]
fn test_direction_prompt_numbers() {
    assert_eq!(Direction::from_index(0), Some(Direction::Up));
    assert_eq!(Direction::from_index(1), Some(Direction::Down));
    assert_eq!(Direction::from_index(2), Some(Direction::Left));
    assert_eq!(Direction::from_index(3), Some(Direction::Right));
    assert_eq!(Direction::from_index(4), None);
}
