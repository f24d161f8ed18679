use crate::board::{Move, MoveParseError, Square};
use crate::endgames::Ability;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Restart, optionally from a FEN
    New(Option<String>),
    Fen,
    Show,
    /// List legal destinations of the piece on a square
    Moves(Square),
    Move(Move),
    Oracle,
    Hint,
    /// Let the oracle play both sides to the end
    Solve,
    /// List catalogue endgames, all levels when empty
    Endgames(Vec<Ability>),
    /// Load a catalogue endgame by name, id or `random`
    Play(String),
    Status,
    Help,
    Quit,
    /// A recognised command with a bad argument
    Invalid(String),
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0] {
        "new" => {
            let fen = parts[1..].join(" ");
            ConsoleCommand::New((!fen.is_empty()).then_some(fen))
        }
        "fen" => ConsoleCommand::Fen,
        "show" | "board" => ConsoleCommand::Show,
        "moves" => match parts.get(1).map(|s| s.parse::<Square>()) {
            Some(Ok(sq)) => ConsoleCommand::Moves(sq),
            Some(Err(e)) => ConsoleCommand::Invalid(e.to_string()),
            None => ConsoleCommand::Invalid("usage: moves <square>".to_string()),
        },
        "move" => match parts.get(1).map(|s| s.parse::<Move>()) {
            Some(Ok(mv)) => ConsoleCommand::Move(mv),
            Some(Err(e)) => ConsoleCommand::Invalid(e.to_string()),
            None => ConsoleCommand::Invalid("usage: move <from><to>[promotion]".to_string()),
        },
        "oracle" | "go" => ConsoleCommand::Oracle,
        "hint" => ConsoleCommand::Hint,
        "solve" => ConsoleCommand::Solve,
        "endgames" => match parts[1..]
            .iter()
            .map(|s| s.parse::<Ability>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(abilities) => ConsoleCommand::Endgames(abilities),
            Err(e) => ConsoleCommand::Invalid(e.to_string()),
        },
        "play" if parts.len() > 1 => ConsoleCommand::Play(parts[1..].join(" ")),
        "play" => ConsoleCommand::Invalid("usage: play <name|id|random>".to_string()),
        "status" => ConsoleCommand::Status,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        // bare coordinate moves are accepted too
        word => match word.parse::<Move>() {
            Ok(mv) if parts.len() == 1 => ConsoleCommand::Move(mv),
            Err(MoveParseError::InvalidPromotion { char }) if parts.len() == 1 => {
                ConsoleCommand::Invalid(MoveParseError::InvalidPromotion { char }.to_string())
            }
            _ => ConsoleCommand::Unknown(trimmed.to_string()),
        },
    };

    Some(cmd)
}
