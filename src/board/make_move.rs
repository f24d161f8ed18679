use log::debug;

use super::check::promoted;
use super::{Color, GameState, Move, MoveRecord, Piece};

impl GameState {
    /// Apply a move for the side to move.
    ///
    /// Returns `None`, leaving the state untouched, when the game is over,
    /// the piece on `from` does not belong to the side to move, or `to`
    /// is not one of its legal destinations. The promotion piece of `mv`
    /// is ignored: pawns reaching the last rank always become Queens.
    pub fn apply_move(&mut self, mv: Move) -> Option<MoveRecord> {
        if self.is_game_over() {
            debug!("rejected {mv}: game is over");
            return None;
        }

        let mover = self.side_to_move;
        let moved = self.board.piece_at(mv.from);
        if !moved.is_color(mover) {
            debug!("rejected {mv}: no {mover} piece on {}", mv.from);
            return None;
        }
        if !self.board.legal_destinations(mv.from).contains(mv.to) {
            debug!("rejected {mv}: not a legal destination");
            return None;
        }

        let arriving = promoted(moved, mv.to);
        self.board.clear(mv.from);
        let captured = self.board.set_piece(mv.to, arriving);

        if !captured.is_empty() {
            self.captured.push(captured);
        }
        if matches!(moved, Piece::Pawn(_)) || !captured.is_empty() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = mover.opponent();
        self.refresh_check_state();
        debug_assert!(
            !self.is_in_check(mover),
            "{mover} left in check after {mv}"
        );

        let record = MoveRecord {
            mv,
            moved,
            captured,
            promoted: arriving != moved,
            gives_check: self.is_in_check(mover.opponent()),
            checkmate: self.is_checkmate(),
        };
        debug!("applied {mv} ({moved}), fen {}", self.to_fen());
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_quiet_move_flips_side() {
        let mut state = GameState::new();
        let record = state.apply_move(mv("e2e4")).unwrap();
        assert_eq!(record.moved, Piece::Pawn(Color::White));
        assert!(!record.is_capture());
        assert!(!record.promoted);
        assert_eq!(state.side_to_move(), Color::Black);
        assert!(state.board().is_empty(sq("e2")));
        assert_eq!(state.piece_at(sq("e4")), Piece::Pawn(Color::White));
    }

    #[test]
    fn test_wrong_side_rejected() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(mv("e7e5")), None);
        assert_eq!(state.apply_move(mv("e4e5")), None);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_capture_recorded() {
        let mut state = GameState::new();
        for m in ["e2e4", "d7d5"] {
            state.apply_move(mv(m)).unwrap();
        }
        let record = state.apply_move(mv("e4d5")).unwrap();
        assert_eq!(record.captured, Piece::Pawn(Color::Black));
        assert_eq!(state.captured(), &[Piece::Pawn(Color::Black)]);
    }

    #[test]
    fn test_counters() {
        let mut state = GameState::new();
        state.apply_move(mv("g1f3")).unwrap();
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 1);
        state.apply_move(mv("g8f6")).unwrap();
        assert_eq!(state.halfmove_clock(), 2);
        assert_eq!(state.fullmove_number(), 2);
        state.apply_move(mv("e2e4")).unwrap();
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let mut state: GameState = "4k3/8/8/8/8/8/8/4K1N1_w_-_-_4294967295_1".parse().unwrap();
        assert!(state.apply_uci("g1f3").unwrap().is_some());
        assert_eq!(state.halfmove_clock(), u32::MAX);

        let mut state: GameState = "4k3/8/8/8/8/8/8/4K1N1_b_-_-_0_4294967295".parse().unwrap();
        assert!(state.apply_uci("e8d8").unwrap().is_some());
        assert_eq!(state.fullmove_number(), u32::MAX);
        assert_eq!(state.halfmove_clock(), 1);
    }

    #[test]
    fn test_promotion_is_always_queen() {
        let mut state = BoardBuilder::new()
            .piece(sq("a7"), Piece::Pawn(Color::White))
            .piece(sq("e1"), Piece::King(Color::White))
            .piece(sq("e8"), Piece::King(Color::Black))
            .build();
        let record = state
            .apply_move(Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Knight))
            .unwrap();
        assert!(record.promoted);
        assert_eq!(state.piece_at(sq("a8")), Piece::Queen(Color::White));
        assert!(record.gives_check);
        assert_eq!(state.checker(), Some(sq("a8")));
    }

    #[test]
    fn test_mating_move_ends_game() {
        let mut state = BoardBuilder::new()
            .piece(sq("h8"), Piece::King(Color::Black))
            .piece(sq("f7"), Piece::Pawn(Color::Black))
            .piece(sq("g7"), Piece::Pawn(Color::Black))
            .piece(sq("h7"), Piece::Pawn(Color::Black))
            .piece(sq("e1"), Piece::Rook(Color::White))
            .piece(sq("g1"), Piece::King(Color::White))
            .build();
        let record = state.apply_move(mv("e1e8")).unwrap();
        assert!(record.gives_check);
        assert!(record.checkmate);
        assert_eq!(state.winner(), Some(Color::White));
        assert_eq!(state.apply_move(mv("h8g8")), None);
        assert_eq!(state.apply_move(mv("g1f1")), None);
    }
}
