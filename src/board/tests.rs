use super::*;
use crate::error::GameError;

#[test]
fn test_side_other() {
    assert_eq!(Side::Black.other(), Side::White);
    assert_eq!(Side::White.other(), Side::Black);
}

#[test]
fn test_cell_from_side() {
    assert_eq!(Cell::from(Side::Black), Cell::Black);
    assert_eq!(Cell::from(Side::White), Cell::White);
}

#[test]
fn test_move_conversion() {
    let mv = Move::new(2, 3);
    assert_eq!(mv.to_index(), 19);
    assert_eq!(Move::from_index(19), mv);
    assert_eq!(Move::from_index(63), Move::new(7, 7));
    assert_eq!(mv.bit(), 1 << 19);
}

#[test]
fn test_corners() {
    for corner in Move::CORNERS {
        assert!(corner.is_corner());
    }
    assert!(!Move::new(0, 1).is_corner());
    assert!(!Move::new(1, 1).is_corner());
    assert_eq!((0..TOTAL_CELLS).map(Move::from_index).filter(|m| m.is_corner()).count(), 4);
}

#[test]
fn test_move_display() {
    assert_eq!(Move::new(2, 3).to_string(), "d3");
    assert_eq!(Move::new(0, 0).to_string(), "a1");
    assert_eq!(Move::new(7, 7).to_string(), "h8");
}

#[test]
fn test_move_order_is_row_major() {
    assert!(Move::new(0, 7) < Move::new(1, 0));
    assert!(Move::new(3, 2) < Move::new(3, 5));
}

#[test]
fn test_start_position() {
    let board = Board::new();
    assert_eq!(board.get(Move::new(3, 3)), Cell::White);
    assert_eq!(board.get(Move::new(4, 4)), Cell::White);
    assert_eq!(board.get(Move::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Move::new(4, 3)), Cell::Black);
    assert_eq!(board.count(Side::Black), 2);
    assert_eq!(board.count(Side::White), 2);
    assert_eq!(board.empty_count(), 60);
}

#[test]
fn test_set_replaces_disc() {
    let mut board = Board::empty();
    let mv = Move::new(5, 5);
    board.set(mv, Side::Black);
    board.set(mv, Side::White);
    assert_eq!(board.get(mv), Cell::White);
    assert_eq!(board.count(Side::Black), 0);

    board.remove(mv);
    assert!(board.is_empty(mv));
}

#[test]
fn test_display_parse_agree() {
    let board = Board::new();
    let text = board.to_string();
    assert_eq!(text.lines().count(), 8);
    assert_eq!(text.lines().nth(3), Some("...WB..."));
    assert_eq!(text.parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_alternate_characters() {
    let board: Board = "x-o-----".repeat(8).parse().unwrap();
    assert_eq!(board.get(Move::new(0, 0)), Cell::Black);
    assert_eq!(board.get(Move::new(7, 2)), Cell::White);
    assert_eq!(board.count(Side::Black), 8);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "B.W".parse::<Board>(),
        Err(GameError::ParseLength {
            expected: 64,
            got: 3
        })
    );

    let mut text = ".".repeat(64);
    text.replace_range(10..11, "?");
    assert_eq!(
        text.parse::<Board>(),
        Err(GameError::ParseCell {
            character: '?',
            row: 1,
            col: 2
        })
    );
}

#[test]
fn test_bitboard_set_clear() {
    let mut bb = Bitboard::new();
    bb.set(Move::new(7, 0));
    bb.set(Move::new(0, 1));
    assert_eq!(bb.count(), 2);
    assert_eq!(bb.bits(), Move::new(7, 0).bit() | Move::new(0, 1).bit());

    bb.clear(Move::new(0, 1));
    assert!(!bb.get(Move::new(0, 1)));
    assert!(bb.get(Move::new(7, 0)));
}
