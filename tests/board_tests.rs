use seabattle::{Board, BoardError, Cell, Coordinate, Orientation, Ship, ShotOutcome};

fn ship(row: i32, col: i32, length: usize, orientation: Orientation) -> Ship {
    Ship::new(Coordinate::new(row, col), length, orientation).unwrap()
}

#[test]
fn test_single_ship_scenario() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(
        board.receive_shot(Coordinate::new(2, 2)).unwrap(),
        ShotOutcome::Sunk
    );
    assert_eq!(board.sunk_count(), 1);
    assert!(board.all_sunk());

    assert_eq!(
        board.receive_shot(Coordinate::new(2, 2)).unwrap_err(),
        BoardError::RepeatShot {
            coord: Coordinate::new(2, 2)
        }
    );
    assert_eq!(
        board.receive_shot(Coordinate::new(7, 0)).unwrap_err(),
        BoardError::OutOfBounds {
            coord: Coordinate::new(7, 0)
        }
    );
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn test_hits_then_sink() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert_eq!(board.receive_shot(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.receive_shot(Coordinate::new(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.receive_shot(Coordinate::new(0, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(board.cell(Coordinate::new(0, 2)), Some(Cell::Hit));
}

#[test]
fn test_miss_marks_grid() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(0, 0, 2, Orientation::Vertical))
        .unwrap();
    board.reset_targeting();

    assert_eq!(board.receive_shot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(Coordinate::new(5, 5)), Some(Cell::Miss));
    assert!(board.is_targeted(Coordinate::new(5, 5)));
}

#[test]
fn test_sinking_reveals_contour() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(0, 0, 2, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    board.receive_shot(Coordinate::new(1, 2)).unwrap();
    board.receive_shot(Coordinate::new(0, 0)).unwrap();
    board.receive_shot(Coordinate::new(0, 1)).unwrap();

    for coord in [(0, 2), (1, 0), (1, 1)] {
        let coord = Coordinate::new(coord.0, coord.1);
        assert_eq!(board.cell(coord), Some(Cell::Contour));
        assert_eq!(
            board.receive_shot(coord).unwrap_err(),
            BoardError::RepeatShot { coord }
        );
    }
    // earlier miss and ship cells keep their markers
    assert_eq!(board.cell(Coordinate::new(1, 2)), Some(Cell::Miss));
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(Cell::Hit));
    assert_eq!(board.cell(Coordinate::new(2, 0)), Some(Cell::Empty));
}

#[test]
fn test_failed_install_leaves_board_unchanged() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(2, 2, 2, Orientation::Horizontal))
        .unwrap();
    let before = board.clone();

    // partly off the grid
    assert!(matches!(
        board.install_ship(ship(5, 4, 3, Orientation::Horizontal)),
        Err(BoardError::PositionConflict { .. })
    ));
    // overlapping
    assert!(matches!(
        board.install_ship(ship(0, 3, 3, Orientation::Vertical)),
        Err(BoardError::PositionConflict { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_contour_blocks_adjacent_placement() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(2, 2, 2, Orientation::Horizontal))
        .unwrap();

    for r in 1..=3 {
        for c in 1..=4 {
            assert!(board.is_placement_blocked(Coordinate::new(r, c)));
        }
    }
    assert!(!board.is_placement_blocked(Coordinate::new(0, 0)));

    // diagonal neighbour
    assert!(board
        .install_ship(ship(1, 1, 1, Orientation::Horizontal))
        .is_err());
    // one cell further away is fine
    board
        .install_ship(ship(0, 0, 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_reset_targeting_keeps_placement_buffer() {
    let mut board = Board::new(6).unwrap();
    board
        .install_ship(ship(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting();

    assert!(board.is_placement_blocked(Coordinate::new(2, 3)));
    assert!(!board.is_targeted(Coordinate::new(2, 3)));
    assert_eq!(board.receive_shot(Coordinate::new(2, 3)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_negative_shot_out_of_bounds() {
    let mut board = Board::new(6).unwrap();
    assert_eq!(
        board.receive_shot(Coordinate::new(-1, 0)).unwrap_err(),
        BoardError::OutOfBounds {
            coord: Coordinate::new(-1, 0)
        }
    );
    assert!(board.is_out_of_bounds(Coordinate::new(0, 6)));
    assert!(!board.is_out_of_bounds(Coordinate::new(5, 5)));
}

#[test]
fn test_board_too_large() {
    assert!(matches!(
        Board::new(12),
        Err(BoardError::BitBoardError(_))
    ));
    assert!(Board::new(11).is_ok());
}

#[test]
fn test_view_rows() {
    let mut board = Board::new(4).unwrap();
    board
        .install_ship(ship(1, 0, 2, Orientation::Vertical))
        .unwrap();
    let view = board.view();
    let rows: Vec<_> = view.rows().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][0], Cell::Ship);
    assert_eq!(rows[2][0], Cell::Ship);
    assert_eq!(rows[0][0], Cell::Empty);
    assert_eq!(view.size(), 4);
}
