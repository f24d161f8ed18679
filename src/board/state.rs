use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of piece slots.
///
/// Indexed `[rank - 1][file - 1]`. The grid is a small `Copy` value, so
/// legality simulation works on a copy and never touches the live board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[Piece::Empty; 8]; 8],
        }
    }

    /// The standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (idx, kind) in BACK_RANK.iter().enumerate() {
            let file = idx as u8 + 1;
            board.put(file, 1, kind.with_color(Color::White));
            board.put(file, 2, Piece::Pawn(Color::White));
            board.put(file, 7, Piece::Pawn(Color::Black));
            board.put(file, 8, kind.with_color(Color::Black));
        }
        board
    }

    fn put(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Some(sq) = Square::new(file, rank) {
            self.set_piece(sq, piece);
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.rank() as usize - 1][sq.file() as usize - 1]
    }

    /// Place `piece` on `sq`, returning whatever stood there before.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Piece {
        std::mem::replace(
            &mut self.squares[sq.rank() as usize - 1][sq.file() as usize - 1],
            piece,
        )
    }

    /// Empty `sq`, returning whatever stood there before.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Piece {
        self.set_piece(sq, Piece::Empty)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_empty()
    }

    /// Every occupied square with its piece, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .map(|&sq| (sq, self.piece_at(sq)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// Every square holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.is_color(color))
    }

    /// Square of the king of `color`, if there is one on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| *piece == Piece::King(color))
            .map(|(sq, _)| sq)
    }

    /// The first color with more than one king on the board.
    #[must_use]
    pub fn duplicate_king(&self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&color| {
            self.occupied()
                .filter(|(_, piece)| *piece == Piece::King(color))
                .count()
                > 1
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

/// Check status of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub(crate) color: Color,
    pub(crate) in_check: bool,
}

impl Player {
    const fn new(color: Color) -> Self {
        Player {
            color,
            in_check: false,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn in_check(&self) -> bool {
        self.in_check
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Color {
        match self {
            Outcome::Checkmate { winner } => winner,
        }
    }
}

/// Everything a FEN string describes, plus the derived check state.
///
/// One `GameState` belongs to one game; the executor mutates it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) players: [Player; 2],
    pub(crate) checker: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) captured: Vec<Piece>,
    pub(crate) outcome: Option<Outcome>,
}

impl GameState {
    /// A new game from the standard opening layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::starting_position(), Color::White)
    }

    /// A game starting from an arbitrary layout. Check and checkmate are
    /// evaluated immediately.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut state = GameState {
            board,
            side_to_move,
            players: [Player::new(Color::White), Player::new(Color::Black)],
            checker: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            captured: Vec::new(),
            outcome: None,
        };
        state.refresh_check_state();
        state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Whether the king of `color` is currently in check.
    #[inline]
    #[must_use]
    pub const fn is_in_check(&self, color: Color) -> bool {
        self.player(color).in_check()
    }

    /// Whether the side to move is in check.
    #[inline]
    #[must_use]
    pub const fn side_in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Square of the piece giving check, if any king is in check.
    #[inline]
    #[must_use]
    pub const fn checker(&self) -> Option<Square> {
        self.checker
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.outcome.map(Outcome::winner)
    }

    /// Pieces removed from the board, in capture order.
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
