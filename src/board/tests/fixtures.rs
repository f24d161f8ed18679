//! Named positions with known answers.

use crate::board::{BoardBuilder, Color, GameState, Move, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn back_rank() -> GameState {
    BoardBuilder::new()
        .piece(sq("h8"), Piece::King(Color::Black))
        .piece(sq("f7"), Piece::Pawn(Color::Black))
        .piece(sq("g7"), Piece::Pawn(Color::Black))
        .piece(sq("h7"), Piece::Pawn(Color::Black))
        .piece(sq("e1"), Piece::Rook(Color::White))
        .piece(sq("g1"), Piece::King(Color::White))
        .build()
}

#[test]
fn test_back_rank_mate() {
    let mut state = back_rank();
    assert!(!state.is_game_over());

    let record = state.apply_move(Move::new(sq("e1"), sq("e8"))).unwrap();

    assert!(record.checkmate);
    assert!(state.is_in_check(Color::Black));
    assert!(!state.is_in_check(Color::White));
    assert_eq!(state.checker(), Some(sq("e8")));
    assert!(state.is_checkmate());
    assert_eq!(state.winner(), Some(Color::White));
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_back_rank_escape_with_luft() {
    // same idea, but h7 has been pushed so the king breathes
    let mut state = BoardBuilder::new()
        .piece(sq("h8"), Piece::King(Color::Black))
        .piece(sq("f7"), Piece::Pawn(Color::Black))
        .piece(sq("g7"), Piece::Pawn(Color::Black))
        .piece(sq("h6"), Piece::Pawn(Color::Black))
        .piece(sq("e1"), Piece::Rook(Color::White))
        .piece(sq("g1"), Piece::King(Color::White))
        .build();

    let record = state.apply_move(Move::new(sq("e1"), sq("e8"))).unwrap();
    assert!(record.gives_check);
    assert!(!record.checkmate);
    assert_eq!(state.legal_destinations(sq("h8")).quiets, vec![sq("h7")]);
}

#[test]
fn test_pinned_bishop_cannot_move() {
    let state = BoardBuilder::new()
        .piece(sq("e1"), Piece::King(Color::White))
        .piece(sq("e2"), Piece::Bishop(Color::White))
        .piece(sq("e8"), Piece::Rook(Color::Black))
        .piece(sq("a8"), Piece::King(Color::Black))
        .build();

    assert!(!state.side_in_check());
    assert!(!state.board().pseudo_legal(sq("e2")).is_empty());
    assert!(state.legal_destinations(sq("e2")).is_empty());
    assert!(state.legal_moves().iter().all(|m| m.from != sq("e2")));
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let state = BoardBuilder::new()
        .piece(sq("e1"), Piece::King(Color::White))
        .piece(sq("e2"), Piece::Rook(Color::White))
        .piece(sq("e8"), Piece::Rook(Color::Black))
        .piece(sq("a8"), Piece::King(Color::Black))
        .build();

    let reach = state.legal_destinations(sq("e2"));
    assert_eq!(reach.captures, vec![sq("e8")]);
    assert!(reach.quiets.iter().all(|s| s.file() == 5));
    assert_eq!(reach.quiets.len(), 5);
}

#[test]
fn test_promotion_to_queen() {
    let mut state = BoardBuilder::new()
        .piece(sq("a7"), Piece::Pawn(Color::White))
        .piece(sq("h1"), Piece::King(Color::White))
        .piece(sq("h3"), Piece::King(Color::Black))
        .build();

    let record = state.apply_uci("a7a8").unwrap().unwrap();

    assert!(record.promoted);
    assert_eq!(state.piece_at(sq("a8")), Piece::Queen(Color::White));
    assert!(state.board().is_empty(sq("a7")));
}

#[test]
fn test_black_promotion() {
    let mut state = BoardBuilder::new()
        .piece(sq("c2"), Piece::Pawn(Color::Black))
        .piece(sq("b1"), Piece::Knight(Color::White))
        .piece(sq("h1"), Piece::King(Color::White))
        .piece(sq("h8"), Piece::King(Color::Black))
        .side_to_move(Color::Black)
        .build();

    let record = state.apply_uci("c2b1r").unwrap().unwrap();

    assert!(record.promoted);
    assert_eq!(record.captured, Piece::Knight(Color::White));
    assert_eq!(state.piece_at(sq("b1")), Piece::Queen(Color::Black));
    assert!(record.gives_check);
}

#[test]
fn test_blocked_rook_ray() {
    let state = BoardBuilder::new()
        .piece(sq("a1"), Piece::Rook(Color::White))
        .piece(sq("a4"), Piece::Pawn(Color::White))
        .piece(sq("h1"), Piece::King(Color::White))
        .piece(sq("h8"), Piece::King(Color::Black))
        .build();

    let mut file_a: Vec<Square> = state
        .legal_destinations(sq("a1"))
        .quiets
        .into_iter()
        .filter(|s| s.file() == 1)
        .collect();
    file_a.sort_by_key(|s| s.rank());

    assert_eq!(file_a, vec![sq("a2"), sq("a3")]);
}
