use seabattle::{random_board, Board, BoardError, Coordinate, GameConfig, Orientation, Ship};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

fn played_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = random_board(&mut rng, &GameConfig::default()).unwrap();
    let shots = rng.random_range(0..20);
    for _ in 0..shots {
        let r = rng.random_range(0..6);
        let c = rng.random_range(0..6);
        let _ = board.receive_shot(Coordinate::new(r, c));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_are_colinear_and_distinct(
        row in 0..6i32,
        col in 0..6i32,
        length in 1..=6usize,
        vertical in any::<bool>(),
    ) {
        let ship = Ship::new(Coordinate::new(row, col), length, orientation(vertical)).unwrap();
        let board = Board::new(6).unwrap();
        prop_assume!(ship.cells().all(|c| !board.is_out_of_bounds(c)));

        let cells: Vec<_> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length);
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if vertical {
                prop_assert_eq!(b.row() - a.row(), 1);
                prop_assert_eq!(b.col(), a.col());
            } else {
                prop_assert_eq!(b.col() - a.col(), 1);
                prop_assert_eq!(b.row(), a.row());
            }
        }
    }

    #[test]
    fn rejected_install_is_atomic(
        seed in any::<u64>(),
        row in -1..7i32,
        col in -1..7i32,
        length in 1..=3usize,
        vertical in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, &GameConfig::default()).unwrap();
        let before = board.clone();
        let ship = Ship::new(Coordinate::new(row, col), length, orientation(vertical)).unwrap();
        match board.install_ship(ship) {
            Ok(()) => {
                // only legal when every cell was free and in bounds
                prop_assert!(ship.cells().all(|c| !before.is_out_of_bounds(c)
                    && !before.is_placement_blocked(c)));
            }
            Err(BoardError::PositionConflict { .. }) => prop_assert_eq!(&board, &before),
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn repeat_shot_never_mutates(seed in any::<u64>(), row in 0..6i32, col in 0..6i32) {
        let mut board = played_board(seed);
        let coord = Coordinate::new(row, col);
        if !board.is_targeted(coord) {
            board.receive_shot(coord).unwrap();
        }
        let after_first = board.clone();
        prop_assert_eq!(board.receive_shot(coord).unwrap_err(), BoardError::RepeatShot { coord });
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn placed_ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, &GameConfig::default()).unwrap();
        let ships = board.ships();
        prop_assert_eq!(ships.len(), 7);
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        let dr = (ca.row() - cb.row()).abs();
                        let dc = (ca.col() - cb.col()).abs();
                        prop_assert!(dr > 1 || dc > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }
}
