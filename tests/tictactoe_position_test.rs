//! Tests for tic-tac-toe positions.

use tictactoe_session::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_try_from_and_parse() {
    assert_eq!(Position::try_from(4), Ok(Position::Center));
    assert!(Position::try_from(9).is_err());
    assert_eq!("8".parse::<Position>(), Ok(Position::BottomRight));

    let err = "12".parse::<Position>().unwrap_err();
    assert_eq!(err.input, "12");
    assert!(err.to_string().contains("expected 0-8"));
}
