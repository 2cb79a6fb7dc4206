use broadside::{AttackResult, Board, BoardError, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new("defender", BOARD_SIZE);
    for &size in FLEET.iter() {
        let indices = board.random_placement(&mut rng, size).unwrap();
        board.place_ship(&indices, size).unwrap();
    }
    board
}

fn live_ships(board: &Board) -> usize {
    board.ships().iter().filter(|s| s.hit_points() > 0).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_remaining_tracks_live_ships(seed in any::<u64>(), attacks in 0..(BOARD_SIZE * BOARD_SIZE)) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..attacks {
            let index = rng.random_range(0..board.len());
            let before = board.ships_remaining();
            let hp_before: Vec<usize> = board.ships().iter().map(|s| s.hit_points()).collect();
            match board.attack(index) {
                Ok(result) => {
                    if result.is_sinking() {
                        prop_assert_eq!(board.ships_remaining(), before - 1);
                    } else {
                        prop_assert_eq!(board.ships_remaining(), before);
                    }
                    prop_assert_eq!(result == AttackResult::Won, board.ships_remaining() == 0);
                }
                Err(err) => {
                    prop_assert_eq!(err, BoardError::AlreadyAttacked { index });
                    prop_assert_eq!(board.ships_remaining(), before);
                }
            }
            prop_assert_eq!(board.ships_remaining(), live_ships(&board));
            for (ship, hp) in board.ships().iter().zip(hp_before) {
                prop_assert!(ship.hit_points() <= hp);
                prop_assert!(ship.hit_points() <= ship.size());
                prop_assert_eq!(ship.is_sunk(), ship.hit_points() == 0);
            }
        }
    }

    #[test]
    fn second_attack_always_fails(seed in any::<u64>(), index in 0..(BOARD_SIZE * BOARD_SIZE)) {
        let mut board = random_board(seed);
        board.attack(index).unwrap();
        let after_first = board.clone();
        let err = board.attack(index).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyAttacked { index });
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn clearing_the_board_ends_in_exactly_one_won(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut order: Vec<usize> = (0..board.len()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        for i in (1..order.len()).rev() {
            order.swap(i, rng.random_range(0..=i));
        }

        let mut sunk = 0;
        let mut won = 0;
        for index in order {
            if board.all_sunk() {
                break;
            }
            match board.attack(index).unwrap() {
                AttackResult::Sunk => sunk += 1,
                AttackResult::Won => won += 1,
                _ => {}
            }
        }
        prop_assert_eq!(won, 1);
        prop_assert_eq!(sunk, FLEET.len() - 1);
        prop_assert_eq!(board.ships_remaining(), 0);
    }

    #[test]
    fn recent_implies_attacked(seed in any::<u64>(), attacks in 0..40usize, show in any::<bool>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..attacks {
            let _ = board.attack(rng.random_range(0..board.len()));
        }
        board.render(show);
        for p in board.positions() {
            prop_assert!(!p.is_recent() || p.is_attacked());
        }
    }
}
