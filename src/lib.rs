pub mod board;
pub mod console;
pub mod endgames;
pub mod oracle;
pub mod session;

pub use board::{Color, GameState, Move, Piece, Square};
pub use endgames::{Ability, Endgame};
pub use oracle::{MoveOracle, RandomOracle};
pub use session::{GameSession, SessionConfig};
