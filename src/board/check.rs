//! Check detection, king-safety filtering and checkmate.
//!
//! Legality is decided by simulation: a candidate move is played on a
//! copy of the board and rejected if it leaves the mover's king
//! attacked. This one rule covers pins, moving into check and the
//! king's own destinations.

use log::info;

use super::movegen::Reach;
use super::state::Outcome;
use super::{Board, Color, GameState, Move, Piece, PieceKind, Square};

impl Board {
    /// Square of an enemy piece attacking the king of `color`.
    ///
    /// `None` if the king is safe or there is no king of that color.
    #[must_use]
    pub fn king_attacker(&self, color: Color) -> Option<Square> {
        let king = self.king_square(color)?;
        self.attacker_of(king, color)
    }

    /// Square of the first piece of `defender`'s opponent whose
    /// pseudo-legal reach includes `target`.
    #[must_use]
    pub fn attacker_of(&self, target: Square, defender: Color) -> Option<Square> {
        self.pieces_of(defender.opponent())
            .map(|(sq, _)| sq)
            .find(|&sq| self.pseudo_legal(sq).contains(target))
    }

    /// The board after moving whatever stands on `from` to `to`.
    ///
    /// No legality checks. A pawn arriving on its last rank becomes a
    /// Queen, so the result matches what the executor would produce.
    #[must_use]
    pub fn after_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let piece = next.clear(from);
        next.set_piece(to, promoted(piece, to));
        next
    }

    /// Whether moving the piece on `from` to `to` keeps its own king safe.
    #[must_use]
    pub fn is_safe_move(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from).color() {
            Some(mover) => self.after_move(from, to).king_attacker(mover).is_none(),
            None => false,
        }
    }

    /// Pseudo-legal destinations of the piece on `from` that do not leave
    /// its own king in check.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Reach {
        self.pseudo_legal(from)
            .filtered(|to| self.is_safe_move(from, to))
    }

    /// Whether any piece of `color` has a legal destination.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(sq, _)| !self.legal_destinations(sq).is_empty())
    }

    /// Whether `color`, currently checked from `checker`, has no way out.
    ///
    /// The king cannot step anywhere safe, nobody can take the checking
    /// piece, and no quiet move of any other piece lifts the check.
    fn is_mated(&self, color: Color, checker: Square) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };

        if !self.legal_destinations(king).is_empty() {
            return false;
        }

        let defenders: Vec<Square> = self
            .pieces_of(color)
            .map(|(sq, _)| sq)
            .filter(|&sq| sq != king)
            .collect();

        let can_take_checker = defenders
            .iter()
            .any(|&sq| self.legal_destinations(sq).captures.contains(&checker));
        if can_take_checker {
            return false;
        }

        // every quiet move that survives the safety filter blocks the check
        !defenders
            .iter()
            .any(|&sq| !self.legal_destinations(sq).quiets.is_empty())
    }
}

pub(crate) fn promoted(piece: Piece, to: Square) -> Piece {
    match piece {
        Piece::Pawn(color) if to.rank() == color.pawn_promotion_rank() => Piece::Queen(color),
        other => other,
    }
}

impl GameState {
    /// Legal destinations of the piece on `from`.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Reach {
        if self.is_game_over() {
            return Reach::default();
        }
        self.board.legal_destinations(from)
    }

    /// Every legal move of the side to move. Pawn moves onto the last
    /// rank carry a Queen promotion.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for (from, piece) in self.board.pieces_of(self.side_to_move) {
            for to in self.board.legal_destinations(from).iter() {
                let mv = if promoted(piece, to) != piece {
                    Move::with_promotion(from, to, PieceKind::Queen)
                } else {
                    Move::new(from, to)
                };
                moves.push(mv);
            }
        }
        moves
    }

    /// Whether `color` has at least one legal move.
    ///
    /// "No legal move while not in check" is not turned into a result.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.has_legal_move(color)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Checkmate { .. }))
    }

    /// Recompute both players' check flags, the checking square and the
    /// checkmate outcome from the current board.
    pub(crate) fn refresh_check_state(&mut self) {
        let mut checker = None;
        for color in Color::BOTH {
            let attacker = self.board.king_attacker(color);
            self.players[color.index()].in_check = attacker.is_some();
            // the side to move wins the slot if both kings are attacked
            if attacker.is_some() && (checker.is_none() || color == self.side_to_move) {
                checker = attacker;
            }
        }
        self.checker = checker;

        if self.outcome.is_some() || !self.side_in_check() {
            return;
        }
        let loser = self.side_to_move;
        if let Some(from) = self.checker {
            if self.board.is_mated(loser, from) {
                let winner = loser.opponent();
                info!("checkmate: {winner} wins");
                self.outcome = Some(Outcome::Checkmate { winner });
            }
        }
    }
}
