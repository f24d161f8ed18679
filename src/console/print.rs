use std::io::{self, Write};

use crate::board::{Color, GameState, Reach, Square};
use crate::endgames::Endgame;
use crate::session::GameSession;

/// Text diagram, rank 8 at the top. Empty squares are dots.
pub fn write_board(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    for rank in (1..=8u8).rev() {
        write!(out, "{rank} ")?;
        for file in 1..=8u8 {
            if let Some(sq) = Square::new(file, rank) {
                write!(out, " {}", state.piece_at(sq))?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "   a b c d e f g h")
}

/// Destinations of one piece, each list in a1..h8 order.
pub fn write_reach(out: &mut impl Write, from: Square, reach: &Reach) -> io::Result<()> {
    let list = |squares: &[Square]| {
        let mut sorted = squares.to_vec();
        sorted.sort_by_key(|sq| sq.index());
        sorted
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    writeln!(
        out,
        "{from}: quiet [{}] capture [{}]",
        list(&reach.quiets),
        list(&reach.captures)
    )
}

pub fn write_status(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let state = session.state();
    writeln!(out, "to move: {}", state.side_to_move())?;
    writeln!(out, "human: {}", session.human())?;
    let mut checked = Color::BOTH
        .into_iter()
        .map(|color| state.player(color))
        .filter(|player| player.in_check())
        .peekable();
    if checked.peek().is_none() {
        writeln!(out, "no check")?;
    }
    for player in checked {
        match state.checker() {
            Some(sq) if player.color() == state.side_to_move() => {
                writeln!(out, "{} in check from {sq}", player.color())?;
            }
            _ => writeln!(out, "{} in check", player.color())?,
        }
    }
    if let Some(moves) = session.moves_to_mate() {
        let unit = if moves == 1 { "move" } else { "moves" };
        writeln!(out, "{moves} {unit} until mate")?;
    }
    if let Some(result) = session.result() {
        writeln!(out, "result: {result}")?;
    }
    Ok(())
}

pub fn write_endgames(out: &mut impl Write, endgames: &[&Endgame]) -> io::Result<()> {
    if endgames.is_empty() {
        return writeln!(out, "no endgames");
    }
    for endgame in endgames {
        writeln!(out, "{endgame}")?;
    }
    Ok(())
}

pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  new [fen]      restart, optionally from a position")?;
    writeln!(out, "  fen            print the current position")?;
    writeln!(out, "  show           draw the board")?;
    writeln!(out, "  moves <sq>     legal destinations of a piece")?;
    writeln!(out, "  move <uci>     play a move, e.g. move e2e4 (or just e2e4)")?;
    writeln!(out, "  oracle         let the oracle play its side")?;
    writeln!(out, "  hint           ask the oracle for a move for you")?;
    writeln!(out, "  solve          let the oracle play both sides to the end")?;
    writeln!(out, "  endgames [lvl] list practice endgames (beginner, intermediate, advanced)")?;
    writeln!(out, "  play <name>    load an endgame by name, id or 'random'")?;
    writeln!(out, "  status         side to move, check, result")?;
    writeln!(out, "  quit")
}
