//! Line-oriented console front end.
//!
//! Reads commands from any `BufRead`, writes replies to any `Write`. The
//! human's moves go through the session; after each accepted move the
//! oracle answers at once.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::warn;

use crate::board::Move;
use crate::endgames;
use crate::oracle::{MoveOracle, OracleVerdict, RandomOracle};
use crate::session::{GameSession, SessionConfig, SessionError};

pub mod command;
pub mod print;

use command::{parse_console_command, ConsoleCommand};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A session plus the oracle that plays against the human.
pub struct Console {
    config: SessionConfig,
    session: GameSession,
    oracle: Arc<dyn MoveOracle>,
}

impl Console {
    pub fn new(config: SessionConfig, oracle: Arc<dyn MoveOracle>) -> Result<Self, SessionError> {
        let session = GameSession::new(config.clone())?;
        Ok(Console {
            config,
            session,
            oracle,
        })
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Feed every line of `input` to [`execute`](Self::execute) until
    /// `quit` or end of input. If it is not the human's turn, the oracle
    /// moves first.
    ///
    /// Stops at the first read or write failure and returns it.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        if !self.session.is_human_turn() && !self.session.is_over() {
            self.oracle_turn(out)?;
            out.flush()?;
        }

        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        out.flush()
    }

    /// Handle one input line.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let Some(cmd) = parse_console_command(line) else {
            return Ok(Flow::Continue);
        };

        match cmd {
            ConsoleCommand::New(fen) => self.restart(fen.as_deref(), out)?,
            ConsoleCommand::Fen => writeln!(out, "{}", self.session.fen())?,
            ConsoleCommand::Show => print::write_board(out, self.session.state())?,
            ConsoleCommand::Moves(sq) => {
                let reach = self.session.state().legal_destinations(sq);
                print::write_reach(out, sq, &reach)?;
            }
            ConsoleCommand::Move(mv) => self.human_move(mv, out)?,
            ConsoleCommand::Oracle => self.oracle_turn(out)?,
            ConsoleCommand::Hint => match self.session.hint(self.oracle.as_ref()) {
                Ok(Some(mv)) => writeln!(out, "hint: {mv}")?,
                Ok(None) => writeln!(out, "hint: no move to suggest")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ConsoleCommand::Solve => self.solve(out)?,
            ConsoleCommand::Endgames(abilities) => {
                let listed = if abilities.is_empty() {
                    endgames::catalogue().iter().collect()
                } else {
                    endgames::by_ability(&abilities)
                };
                print::write_endgames(out, &listed)?;
            }
            ConsoleCommand::Play(name) => self.play_endgame(&name, out)?,
            ConsoleCommand::Status => print::write_status(out, &self.session)?,
            ConsoleCommand::Help => print::write_help(out)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Invalid(msg) => writeln!(out, "error: {msg}")?,
            ConsoleCommand::Unknown(text) => {
                writeln!(out, "unknown command '{text}', try 'help'")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn restart(&mut self, fen: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let fen = fen.unwrap_or(&self.config.start_fen).to_string();
        match GameSession::new(self.config.clone().start_fen(fen)) {
            Ok(session) => {
                self.session = session;
                writeln!(out, "ok {}", self.session.fen())?;
                if !self.session.is_human_turn() && !self.session.is_over() {
                    self.oracle_turn(out)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "error: {e}"),
        }
    }

    fn play_endgame(&mut self, name: &str, out: &mut impl Write) -> io::Result<()> {
        let endgame = if name.eq_ignore_ascii_case("random") {
            endgames::random(&mut rand::thread_rng(), &[])
        } else {
            name.parse()
                .ok()
                .and_then(endgames::by_id)
                .or_else(|| endgames::find(name))
        };
        let Some(endgame) = endgame else {
            return writeln!(out, "error: no endgame '{name}', try 'endgames'");
        };
        writeln!(out, "playing {} ({})", endgame.name, endgame.ability)?;
        self.restart(Some(endgame.fen), out)
    }

    fn solve(&mut self, out: &mut impl Write) -> io::Result<()> {
        let result = self.session.solve(self.oracle.as_ref());
        let verdicts = match result {
            Ok(verdicts) => verdicts,
            Err(e) => return writeln!(out, "error: {e}"),
        };
        for verdict in verdicts {
            match verdict {
                OracleVerdict::Play(mv) | OracleVerdict::PlayThenDraw(mv) => {
                    writeln!(out, "oracle plays {mv}")?;
                }
                OracleVerdict::Checkmate | OracleVerdict::Drawn => {
                    writeln!(out, "oracle: {verdict}")?;
                }
            }
        }
        print::write_status(out, &self.session)
    }

    fn human_move(&mut self, mv: Move, out: &mut impl Write) -> io::Result<()> {
        let Some(record) = self.session.human_move(mv) else {
            return writeln!(out, "illegal move {mv}");
        };

        write!(out, "played {}", record.mv)?;
        if record.promoted {
            write!(out, " (promoted)")?;
        }
        if record.checkmate {
            write!(out, " checkmate")?;
        } else if record.gives_check {
            write!(out, " check")?;
        }
        writeln!(out)?;

        if self.session.is_over() {
            return print::write_status(out, &self.session);
        }
        self.oracle_turn(out)
    }

    fn oracle_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.play_oracle_turn(Arc::clone(&self.oracle)) {
            Ok(verdict) => {
                match verdict {
                    OracleVerdict::Play(mv) | OracleVerdict::PlayThenDraw(mv) => {
                        writeln!(out, "oracle plays {mv}")?;
                    }
                    OracleVerdict::Checkmate | OracleVerdict::Drawn => {
                        writeln!(out, "oracle: {verdict}")?;
                    }
                }
                if let Some(moves) = self.session.moves_to_mate() {
                    writeln!(out, "{moves} moves until mate")?;
                }
                if let Some(result) = self.session.result() {
                    writeln!(out, "result: {result}")?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "error: {e}"),
        }
    }
}

/// Run the console over stdin/stdout with a random oracle until `quit`
/// or end of input.
pub fn run_console_loop(config: SessionConfig) -> Result<(), SessionError> {
    let mut console = Console::new(config, Arc::new(RandomOracle::new()))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = console.run(stdin.lock(), &mut stdout.lock()) {
        warn!("console stopped: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, STARTING_FEN};
    use crate::oracle::{OracleError, OracleReply, OracleRequest};

    fn console() -> Console {
        Console::new(SessionConfig::default(), Arc::new(RandomOracle::with_seed(11))).unwrap()
    }

    fn run(console: &mut Console, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = console.execute(line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_move_triggers_oracle_reply() {
        let mut c = console();
        let (flow, text) = run(&mut c, "e2e4");
        assert_eq!(flow, Flow::Continue);
        assert!(text.starts_with("played e2e4"));
        assert!(text.contains("oracle plays"));
        assert_eq!(c.session().state().side_to_move(), Color::White);
    }

    #[test]
    fn test_illegal_move_reported() {
        let mut c = console();
        let (_, text) = run(&mut c, "move e2e5");
        assert_eq!(text, "illegal move e2e5\n");
        assert_eq!(c.session().fen(), STARTING_FEN);
    }

    #[test]
    fn test_fen_and_new() {
        let mut c = console();
        let (_, text) = run(&mut c, "fen");
        assert_eq!(text.trim(), STARTING_FEN);

        let (_, text) = run(&mut c, "new 8/8/8/8/8/8/8/K1k5 w - - 0 1");
        assert!(text.starts_with("ok 8/8/8/8/8/8/8/K1k5_w_-_-_0_1"));

        let (_, text) = run(&mut c, "new garbage");
        assert!(text.starts_with("error:"));
    }

    #[test]
    fn test_new_with_oracle_to_move() {
        let mut c = console();
        let (_, text) = run(&mut c, "new rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR_b_-_-_0_1");
        assert!(text.contains("oracle plays"));
        assert!(c.session().is_human_turn());
    }

    #[test]
    fn test_mate_ends_session() {
        let mut c = console();
        run(&mut c, "new 7k/5ppp/8/8/8/8/8/4R1K1_w_-_-_0_1");
        let (_, text) = run(&mut c, "e1e8");
        assert!(text.contains("checkmate"));
        assert!(text.contains("White wins"));
        assert!(c.session().is_over());
        let (_, text) = run(&mut c, "hint");
        assert!(text.starts_with("error:"));
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut c = console();
        assert_eq!(run(&mut c, "quit").0, Flow::Quit);
        let (_, text) = run(&mut c, "dance");
        assert!(text.contains("unknown command"));
        assert_eq!(run(&mut c, "").1, "");
    }

    #[test]
    fn test_moves_hint_and_status() {
        let mut c = console();
        let (_, text) = run(&mut c, "moves b1");
        assert!(text.contains("a3") && text.contains("c3"));
        let (_, text) = run(&mut c, "hint");
        assert!(text.starts_with("hint: "));
        let (_, text) = run(&mut c, "status");
        assert!(text.contains("to move: White"));
        assert!(text.contains("no check"));
    }

    struct ClosedPipe {
        writes: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut c = console();
        let mut out = Vec::new();
        c.run("fen\nquit\nfen\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(STARTING_FEN).count(), 1);
    }

    #[test]
    fn test_run_opens_for_oracle() {
        let config = SessionConfig::new().human(Color::Black);
        let mut c = Console::new(config, Arc::new(RandomOracle::with_seed(3))).unwrap();
        let mut out = Vec::new();
        c.run(io::empty(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("oracle plays"));
        assert!(c.session().is_human_turn());
    }

    #[test]
    fn test_run_stops_on_write_error() {
        let config = SessionConfig::new().human(Color::Black);
        let mut c = Console::new(config, Arc::new(RandomOracle::with_seed(3))).unwrap();
        let mut out = ClosedPipe { writes: 0 };
        let err = c.run("status\nstatus\n".as_bytes(), &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(out.writes, 1);

        let mut c = console();
        let mut out = ClosedPipe { writes: 0 };
        assert!(c.run("fen\nfen\n".as_bytes(), &mut out).is_err());
        assert_eq!(out.writes, 1);
    }

    #[test]
    fn test_endgames_listing() {
        let mut c = console();
        let (_, text) = run(&mut c, "endgames");
        assert_eq!(text.lines().count(), endgames::catalogue().len());
        assert!(text.contains("Queen mate (Beginner)"));

        let (_, text) = run(&mut c, "endgames advanced");
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|l| l.ends_with("(Advanced)")));

        let (_, text) = run(&mut c, "endgames expert");
        assert!(text.starts_with("error:"));
    }

    #[test]
    fn test_play_endgame_by_name_id_and_random() {
        let mut c = console();
        let (_, text) = run(&mut c, "play rook mate");
        assert!(text.starts_with("playing Rook mate (Beginner)"));
        assert_eq!(c.session().fen(), "8/8/8/4k3/8/8/8/4K2R_w_-_-_0_1");

        run(&mut c, "play 9");
        assert_eq!(c.session().fen(), endgames::by_id(9).unwrap().fen);

        let (_, text) = run(&mut c, "play random");
        assert!(text.starts_with("playing "));
        let fen = c.session().fen();
        assert!(endgames::catalogue().iter().any(|e| e.fen == fen));

        let (_, text) = run(&mut c, "play nothing");
        assert!(text.starts_with("error: no endgame 'nothing'"));
        assert_eq!(c.session().fen(), fen);
    }

    /// Plays the given moves in order, reporting mate in one each time.
    struct Script(parking_lot::Mutex<Vec<&'static str>>);

    impl MoveOracle for Script {
        fn next_move(&self, _request: &OracleRequest) -> Result<OracleReply, OracleError> {
            let mut moves = self.0.lock();
            if moves.is_empty() {
                return Err(OracleError::Unavailable {
                    reason: "script exhausted".to_string(),
                });
            }
            Ok(OracleReply::new(moves.remove(0), 1))
        }

        fn name(&self) -> &'static str {
            "script"
        }
    }

    #[test]
    fn test_solve_command() {
        let oracle = Arc::new(Script(parking_lot::Mutex::new(vec!["g1f1", "f7f6", "e1e8"])));
        let config = SessionConfig::new().start_fen("7k/5ppp/8/8/8/8/8/4R1K1_w_-_-_0_1");
        let mut c = Console::new(config, oracle).unwrap();

        let (_, text) = run(&mut c, "solve");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            &lines[..3],
            &["oracle plays g1f1", "oracle plays f7f6", "oracle plays e1e8"]
        );
        assert!(text.contains("0 moves until mate"));
        assert!(text.contains("result: checkmate, White wins"));

        let (_, text) = run(&mut c, "solve");
        assert!(text.starts_with("error:"));
    }
}
